//! Side effects of starting a checkout
//!
//! Navigation, opening a new browsing context, and writing the clipboard are
//! owned by the host (browser shell, desktop app, terminal). The order flow
//! only calls them through [`CheckoutEffects`].

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write denied: {0}")]
    Denied(String),
}

#[async_trait]
pub trait CheckoutEffects: Send + Sync {
    /// Replace the current page with `url`
    fn navigate(&self, url: &str);

    /// Open `url` in a new browsing context
    fn open_new_tab(&self, url: &str);

    /// Best-effort clipboard write
    async fn write_clipboard(&self, text: &str) -> Result<(), ClipboardError>;
}

#[async_trait]
impl<T: CheckoutEffects + ?Sized> CheckoutEffects for std::sync::Arc<T> {
    fn navigate(&self, url: &str) {
        (**self).navigate(url)
    }

    fn open_new_tab(&self, url: &str) {
        (**self).open_new_tab(url)
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_clipboard(text).await
    }
}

/// Effects for a terminal session: links are printed for the user to open,
/// and there is no clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalEffects;

#[async_trait]
impl CheckoutEffects for TerminalEffects {
    fn navigate(&self, url: &str) {
        println!("Continue to checkout: {url}");
    }

    fn open_new_tab(&self, url: &str) {
        println!("Open the payment link: {url}");
    }

    async fn write_clipboard(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}
