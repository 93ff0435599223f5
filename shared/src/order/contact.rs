//! Customer contact fields and their validation

use crate::error::{AppError, AppResult, ErrorCode};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Section-level hint shown when any contact field fails
pub const CONTACT_HINT: &str = "Please fill in all required contact fields.";

/// Contact details entered on the order form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Validate all three fields. Every field is checked; nothing short-circuits.
    pub fn validate(&self) -> ContactErrors {
        let name = self
            .name
            .trim()
            .is_empty()
            .then_some(ErrorCode::NameRequired);
        let phone = self
            .phone
            .trim()
            .is_empty()
            .then_some(ErrorCode::PhoneRequired);
        let email = if self.email.trim().is_empty() {
            Some(ErrorCode::EmailRequired)
        } else if !is_valid_email(&self.email) {
            Some(ErrorCode::EmailInvalid)
        } else {
            None
        };

        ContactErrors { name, phone, email }
    }
}

/// Basic `local@domain.tld` shape check, applied to the value as entered.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Per-field validation result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: Option<ErrorCode>,
    pub phone: Option<ErrorCode>,
    pub email: Option<ErrorCode>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }

    /// `(field, message)` pairs for the failing fields, in form order
    pub fn messages(&self) -> Vec<(&'static str, &'static str)> {
        [
            ("name", self.name),
            ("phone", self.phone),
            ("email", self.email),
        ]
        .into_iter()
        .filter_map(|(field, code)| code.map(|c| (field, c.message())))
        .collect()
    }

    /// `Ok(())` when valid, otherwise a validation error carrying one detail
    /// per failing field.
    pub fn into_result(self) -> AppResult<()> {
        if self.is_empty() {
            return Ok(());
        }
        let err = self
            .messages()
            .into_iter()
            .fold(AppError::validation(CONTACT_HINT), |err, (field, msg)| {
                err.with_detail(field, msg)
            });
        Err(err)
    }
}
