//! Pharmacy Core - Shared types library.
//!
//! This crate provides common types used across all pharmacy backend components:
//! - `api` - The HTTP service (signup, catalog, cart, orders, payments)
//! - `cli` - Command-line tools for schema setup and catalog seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, timestamps, and
//!   dynamically typed column values

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
