//! Row timestamps as written by SQLite's `CURRENT_TIMESTAMP`.
//!
//! SQLite stores these as UTC text in `YYYY-MM-DD HH:MM:SS` form. The wrapper
//! keeps that exact text form on the wire so API clients see the stored value.

use core::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when parsing a [`Timestamp`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum TimestampError {
    /// The input is not in `YYYY-MM-DD HH:MM:SS` form.
    #[error("invalid timestamp '{0}', expected YYYY-MM-DD HH:MM:SS")]
    Format(String),
}

/// A UTC timestamp with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// The textual layout SQLite uses for `CURRENT_TIMESTAMP`.
    pub const FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    /// Parse a timestamp from SQLite's text layout.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampError::Format`] if the input does not match
    /// [`Timestamp::FORMAT`].
    pub fn parse(s: &str) -> Result<Self, TimestampError> {
        NaiveDateTime::parse_from_str(s, Self::FORMAT)
            .map(Self)
            .map_err(|_| TimestampError::Format(s.to_owned()))
    }

    /// The wrapped naive (UTC) date-time.
    #[must_use]
    pub const fn naive_utc(&self) -> NaiveDateTime {
        self.0
    }

    /// The timestamp as a timezone-aware UTC value.
    #[must_use]
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.and_utc()
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl std::str::FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "sqlite")]
impl sqlx::Type<sqlx::Sqlite> for Timestamp {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <NaiveDateTime as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <NaiveDateTime as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for Timestamp {
    fn decode(
        value: <sqlx::Sqlite as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let naive = <NaiveDateTime as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        Ok(Self(naive))
    }
}
