//! Primary checkout endpoint

use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use shared::{CheckoutRequest, CheckoutResponse};

/// Path of the checkout route, relative to the storefront base URL
pub const CHECKOUT_PATH: &str = "/api/checkout";

/// Creates a hosted checkout for an order
#[async_trait]
pub trait CheckoutApi: Send + Sync {
    async fn create_checkout(&self, request: &CheckoutRequest) -> ClientResult<CheckoutResponse>;
}

#[async_trait]
impl CheckoutApi for HttpClient {
    async fn create_checkout(&self, request: &CheckoutRequest) -> ClientResult<CheckoutResponse> {
        self.post(CHECKOUT_PATH, request).await
    }
}

#[async_trait]
impl<T: CheckoutApi + ?Sized> CheckoutApi for std::sync::Arc<T> {
    async fn create_checkout(&self, request: &CheckoutRequest) -> ClientResult<CheckoutResponse> {
        (**self).create_checkout(request).await
    }
}
