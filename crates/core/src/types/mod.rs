//! Core types for the pharmacy backend.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod sql_value;
pub mod timestamp;

pub use id::*;
pub use price::Price;
pub use sql_value::SqlValue;
pub use timestamp::{Timestamp, TimestampError};
