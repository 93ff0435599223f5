//! Client configuration
//!
//! Values come from the environment (a `.env` file is loaded by the binary):
//!
//! | Variable | Default |
//! |---|---|
//! | `CHECKOUT_BASE_URL` | `http://localhost:3000` |
//! | `CHECKOUT_TIMEOUT_SECS` | `30` |
//! | `SQUARE_PAYMENT_LINK_BOX2` / `_BOX4` / `_BOX6` | unset |
//! | `STORE_ADDRESS`, `STORE_PHONE`, `MAP_EMBED_URL` | empty |

use crate::{ClientError, ClientResult, HttpClient};
use reqwest::Url;
use shared::BoxSize;

/// Connection settings for the checkout endpoint
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Storefront base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<HttpClient> {
        HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}

/// Static payment links used when the checkout endpoint is unavailable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackLinks {
    box2: Option<String>,
    box4: Option<String>,
    box6: Option<String>,
}

impl FallbackLinks {
    /// Set the link for a box size; blank links count as unset
    pub fn with_link(mut self, box_size: BoxSize, url: impl Into<String>) -> Self {
        *self.slot_mut(box_size) = non_blank(url.into());
        self
    }

    pub fn get(&self, box_size: BoxSize) -> Option<&str> {
        match box_size {
            BoxSize::Two => self.box2.as_deref(),
            BoxSize::Four => self.box4.as_deref(),
            BoxSize::Six => self.box6.as_deref(),
        }
    }

    fn slot_mut(&mut self, box_size: BoxSize) -> &mut Option<String> {
        match box_size {
            BoxSize::Two => &mut self.box2,
            BoxSize::Four => &mut self.box4,
            BoxSize::Six => &mut self.box6,
        }
    }

    /// Environment variable holding the link for a box size
    pub fn env_key(box_size: BoxSize) -> &'static str {
        match box_size {
            BoxSize::Two => "SQUARE_PAYMENT_LINK_BOX2",
            BoxSize::Four => "SQUARE_PAYMENT_LINK_BOX4",
            BoxSize::Six => "SQUARE_PAYMENT_LINK_BOX6",
        }
    }
}

/// Store contact details shown on the site
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreContact {
    pub address: String,
    pub phone: String,
    /// Explicit map embed URL; wins over the address
    pub map_embed_url: Option<String>,
}

impl StoreContact {
    /// Map embed URL: the explicit one if configured, else one built from the
    /// address, else empty.
    pub fn map_embed_url(&self) -> String {
        if let Some(url) = &self.map_embed_url {
            return url.clone();
        }
        if self.address.is_empty() {
            return String::new();
        }
        let Ok(url) = Url::parse_with_params(MAPS_URL, &[("q", self.address.as_str())]) else {
            return String::new();
        };
        let query = uri_component_query(url.query().unwrap_or_default());
        format!("{MAPS_URL}?{query}&z=16&output=embed")
    }

    /// `tel:` link for the store phone, if one is configured
    pub fn tel_link(&self) -> Option<String> {
        (!self.phone.is_empty()).then(|| phone_to_tel(&self.phone))
    }
}

const MAPS_URL: &str = "https://maps.google.com/maps";

/// Re-encode a form-urlencoded query the way `encodeURIComponent` would.
///
/// Form encoding escapes `+` itself as `%2B`, so a bare `+` is always a space.
/// Only `!'()~` and spaces differ between the two encodings.
fn uri_component_query(form_encoded: &str) -> String {
    form_encoded
        .replace('+', "%20")
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%7E", "~")
}

/// Keep digits and `+` and prefix `tel:`
pub fn phone_to_tel(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

/// Everything the order flow needs from deployment configuration
#[derive(Debug, Clone, Default)]
pub struct StorefrontConfig {
    pub client: ClientConfig,
    pub fallback_links: FallbackLinks,
    pub contact: StoreContact,
}

impl StorefrontConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let base_url = lookup("CHECKOUT_BASE_URL")
            .and_then(non_blank)
            .unwrap_or_else(|| ClientConfig::default().base_url);
        Url::parse(&base_url)
            .map_err(|e| ClientError::Config(format!("CHECKOUT_BASE_URL '{base_url}': {e}")))?;

        let timeout = match lookup("CHECKOUT_TIMEOUT_SECS").and_then(non_blank) {
            Some(raw) => parse_timeout(&raw)?,
            None => 30,
        };

        let fallback_links = BoxSize::ALL
            .into_iter()
            .fold(FallbackLinks::default(), |links, size| {
                match lookup(FallbackLinks::env_key(size)) {
                    Some(url) => links.with_link(size, url),
                    None => links,
                }
            });

        let contact = StoreContact {
            address: lookup("STORE_ADDRESS").unwrap_or_default(),
            phone: lookup("STORE_PHONE").unwrap_or_default(),
            map_embed_url: lookup("MAP_EMBED_URL").and_then(non_blank),
        };

        Ok(Self {
            client: ClientConfig::new(base_url).with_timeout(timeout),
            fallback_links,
            contact,
        })
    }
}

/// Whole seconds, at least 1
fn parse_timeout(raw: &str) -> ClientResult<u64> {
    match raw.parse::<u64>() {
        Ok(seconds) if seconds > 0 => Ok(seconds),
        _ => Err(ClientError::Config(format!(
            "CHECKOUT_TIMEOUT_SECS '{raw}': expected a positive number of seconds"
        ))),
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
