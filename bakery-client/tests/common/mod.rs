// Test doubles shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use bakery_client::{
    CheckoutApi, CheckoutEffects, CheckoutRequest, CheckoutResponse, ClientError, ClientResult,
    ClipboardError,
};
use std::sync::Mutex;

/// What the fake checkout endpoint does
#[derive(Debug, Clone)]
pub enum ApiBehavior {
    Redirect(String),
    MissingUrl,
    Unreachable,
}

pub struct FakeApi {
    behavior: ApiBehavior,
    pub requests: Mutex<Vec<CheckoutRequest>>,
}

impl FakeApi {
    pub fn new(behavior: ApiBehavior) -> Self {
        Self {
            behavior,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CheckoutApi for FakeApi {
    async fn create_checkout(&self, request: &CheckoutRequest) -> ClientResult<CheckoutResponse> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.behavior {
            ApiBehavior::Redirect(url) => Ok(CheckoutResponse {
                url: Some(url.clone()),
                ..Default::default()
            }),
            ApiBehavior::MissingUrl => Ok(CheckoutResponse::default()),
            ApiBehavior::Unreachable => Err(ClientError::Upstream {
                status: 502,
                message: "Failed to reach Square API.".into(),
            }),
        }
    }
}

/// Records every side effect; the clipboard succeeds or fails on demand
pub struct RecordingEffects {
    clipboard_works: bool,
    pub navigated: Mutex<Vec<String>>,
    pub opened: Mutex<Vec<String>>,
    pub copied: Mutex<Vec<String>>,
}

impl RecordingEffects {
    pub fn new(clipboard_works: bool) -> Self {
        Self {
            clipboard_works,
            navigated: Mutex::new(Vec::new()),
            opened: Mutex::new(Vec::new()),
            copied: Mutex::new(Vec::new()),
        }
    }

    pub fn navigated(&self) -> Vec<String> {
        self.navigated.lock().unwrap().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }
}

#[async_trait]
impl CheckoutEffects for RecordingEffects {
    fn navigate(&self, url: &str) {
        self.navigated.lock().unwrap().push(url.to_string());
    }

    fn open_new_tab(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), ClipboardError> {
        // The attempt is recorded either way
        self.copied.lock().unwrap().push(text.to_string());
        if self.clipboard_works {
            Ok(())
        } else {
            Err(ClipboardError::Denied("permission prompt dismissed".into()))
        }
    }
}
