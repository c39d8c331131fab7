//! Account types.

use serde::{Deserialize, Serialize};

use pharmacy_core::{SqlValue, UserId};

/// A stored account row.
///
/// The password is kept and returned in plain text; login responses echo the
/// full row back to the caller. Both columns have `TEXT` affinity, so any
/// scalar the client sent is read back as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password: String,
}

/// Email and password as submitted to signup or login.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub email: SqlValue,
    pub password: SqlValue,
}
