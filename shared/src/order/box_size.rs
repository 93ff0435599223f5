//! Donut box sizes

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Box size offered by the shop
///
/// Serialized as a bare integer (`2`, `4`, `6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum BoxSize {
    Two = 2,
    #[default]
    Four = 4,
    Six = 6,
}

/// Rejected box size value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("boxSize must be 2, 4, or 6 (got {0})")]
pub struct InvalidBoxSize(pub u8);

impl BoxSize {
    /// All sizes, in display order
    pub const ALL: [BoxSize; 3] = [BoxSize::Two, BoxSize::Four, BoxSize::Six];

    /// Number of donuts that fill the box
    #[inline]
    pub const fn capacity(&self) -> u32 {
        *self as u32
    }

    /// Price label shown next to the size
    pub const fn price_label(&self) -> &'static str {
        match self {
            BoxSize::Two => "$7",
            BoxSize::Four => "$12",
            BoxSize::Six => "$18",
        }
    }

    /// Option label, e.g. `Box of 4 ($12)`
    pub fn label(&self) -> String {
        format!("Box of {} ({})", self.capacity(), self.price_label())
    }
}

impl From<BoxSize> for u8 {
    #[inline]
    fn from(size: BoxSize) -> Self {
        size as u8
    }
}

impl TryFrom<u8> for BoxSize {
    type Error = InvalidBoxSize;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(BoxSize::Two),
            4 => Ok(BoxSize::Four),
            6 => Ok(BoxSize::Six),
            _ => Err(InvalidBoxSize(value)),
        }
    }
}

impl From<InvalidBoxSize> for AppError {
    fn from(err: InvalidBoxSize) -> Self {
        AppError::new(ErrorCode::InvalidBoxSize).with_detail("boxSize", err.0)
    }
}

/// Parse a size typed by the user (`"2"`, `" 6 "`).
impl FromStr for BoxSize {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: u8 = trimmed.parse().map_err(|_| {
            AppError::new(ErrorCode::InvalidBoxSize).with_detail("boxSize", trimmed)
        })?;
        Ok(BoxSize::try_from(value)?)
    }
}

impl fmt::Display for BoxSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.capacity())
    }
}
