//! Catalog price representation.
//!
//! Used where a price is known to be numeric, such as seed catalogs. The
//! wrapper is a transparent `f64` matching the store's `REAL` column rather
//! than a fixed-point decimal. No rounding or currency handling happens here.

use serde::{Deserialize, Serialize};

/// A medication's unit price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Get the underlying amount.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

impl From<Price> for crate::SqlValue {
    fn from(price: Price) -> Self {
        Self::Real(price.0)
    }
}
