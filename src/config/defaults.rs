//! Default values and configuration structs with default implementations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_max_price, Decimal, Decimal::from(100));
default_fn!(default_max_pieces, u32, 20);
default_fn!(default_sentinel, String, "fertig".to_string());

/// Exclusive upper bounds for the bill totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Limits {
    /// Total price must be strictly below this (default: 100)
    #[serde(default = "default_max_price")]
    pub max_price: Decimal,
    /// Total pieces must be strictly below this (default: 20)
    #[serde(default = "default_max_pieces")]
    pub max_pieces: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_price: default_max_price(),
            max_pieces: default_max_pieces(),
        }
    }
}
