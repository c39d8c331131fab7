//! Domain models for the pharmacy API.
//!
//! Each entity has a row type (what `SELECT *` returns and what the API
//! serializes) and a `New*` input type (what a request body carries).
//!
//! Input fields are [`pharmacy_core::SqlValue`]s: the API performs no
//! validation of its own. Whatever JSON value a field holds is bound with its
//! own storage class, an absent field binds SQL `NULL`, and only the table's
//! column affinity and `NOT NULL` constraints decide what is kept.

pub mod cart;
pub mod medication;
pub mod order;
pub mod payment;
pub mod user;

pub use cart::{CartItem, CartQuery, NewCartItem};
pub use medication::{Medication, NewMedication};
pub use order::{NewOrder, Order};
pub use payment::{NewPayment, Payment};
pub use user::{Credentials, User};
