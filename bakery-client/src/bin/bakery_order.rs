//! bakery-order: place a donut-box order from the terminal
//!
//! Fills the order form from command-line flags, submits it against the
//! configured storefront, and prints where to pay.

use bakery_client::{
    BoxSize, Checkout, CheckoutStatus, Flavor, OrderForm, StorefrontConfig, SubmitResult,
    TerminalEffects,
};
use clap::Parser;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "bakery-order", version, about = "Order a box of donuts")]
struct Args {
    /// Box size (2, 4 or 6)
    #[arg(long, default_value = "4")]
    box_size: BoxSize,

    /// Chocolate dipped donuts
    #[arg(long, default_value = "0")]
    chocolate: String,

    /// Glazed donuts
    #[arg(long, default_value = "0")]
    glazed: String,

    /// Plain donuts
    #[arg(long, default_value = "0")]
    plain: String,

    #[arg(long, env = "ORDER_NAME", default_value = "")]
    name: String,

    #[arg(long, env = "ORDER_PHONE", default_value = "")]
    phone: String,

    #[arg(long, env = "ORDER_EMAIL", default_value = "")]
    email: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bakery_client=info,bakery_order=info".into()),
        )
        .init();

    let args = Args::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    let client = match config.client.build_http_client() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(base_url = client.base_url(), "Using storefront");

    let checkout = Checkout::new(client, TerminalEffects, config.fallback_links.clone());

    let mut form = OrderForm::new();
    form.select_box_size(args.box_size);
    form.set_count_raw(Flavor::Chocolate, &args.chocolate);
    form.set_count_raw(Flavor::Glazed, &args.glazed);
    form.set_count_raw(Flavor::Plain, &args.plain);
    *form.customer_mut() = bakery_client::Customer::new(args.name, args.phone, args.email);

    println!("{}", args.box_size.label());
    println!("{}", form.mix().selection_summary(form.box_size()));
    println!("Order note: {}", form.note());

    match form.submit(&checkout).await {
        SubmitResult::Busy => {
            eprintln!("A checkout is already in progress");
            return ExitCode::FAILURE;
        }
        SubmitResult::Rejected(_) => {
            if let Some(msg) = form.mix_error() {
                eprintln!("{msg}");
            }
            if let Some(hint) = form.contact_hint() {
                eprintln!("{hint}");
                for (field, msg) in form.contact_errors().messages() {
                    eprintln!("  {field}: {msg}");
                }
            }
            return ExitCode::FAILURE;
        }
        SubmitResult::Completed(_) => {}
    }

    match form.status() {
        CheckoutStatus::Error(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
        CheckoutStatus::Info(msg) => {
            println!("{msg}");
            ExitCode::SUCCESS
        }
        CheckoutStatus::Idle | CheckoutStatus::Loading => ExitCode::SUCCESS,
    }
}
