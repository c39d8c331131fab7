//! Dynamically typed column values.
//!
//! SQLite columns have an affinity, not a fixed type: an `INTEGER` column
//! happily stores `"abc"`, and a `TEXT` column turns `1234` into `"1234"`.
//! Request fields are taken as [`SqlValue`] so whatever JSON the client sent
//! is bound with its own storage class and the store decides what to keep.
//! Rows read back into [`SqlValue`] accept whatever the store holds.
//!
//! | JSON            | Bound as             |
//! |-----------------|----------------------|
//! | `null` / absent | `NULL`               |
//! | integer         | `INTEGER`            |
//! | other number    | `REAL`               |
//! | `true`/`false`  | `INTEGER` 1/0        |
//! | string          | `TEXT`               |
//! | array / object  | `TEXT` (its JSON)    |

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// One value in one of SQLite's storage classes.
///
/// Blobs are never written by the API; if one is read back it is decoded as
/// lossy UTF-8 text.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SqlValue {
    #[default]
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    /// Whether this is SQL `NULL`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The integer value, if this is an `INTEGER`.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// The numeric value of an `INTEGER` or `REAL`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Real(value) => Some(*value),
            _ => None,
        }
    }

    /// The text value, if this is `TEXT`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Value> for SqlValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Integer(i64::from(flag)),
            Value::Number(number) => number
                .as_i64()
                .map(Self::Integer)
                .or_else(|| number.as_f64().map(Self::Real))
                .unwrap_or(Self::Null),
            Value::String(text) => Self::Text(text),
            other @ (Value::Array(_) | Value::Object(_)) => Self::Text(other.to_string()),
        }
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl Serialize for SqlValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Real(value) => serializer.serialize_f64(*value),
            Self::Text(value) => serializer.serialize_str(value),
        }
    }
}

impl<'de> Deserialize<'de> for SqlValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(feature = "sqlite")]
impl sqlx::Type<sqlx::Sqlite> for SqlValue {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <String as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(_ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        true
    }
}

#[cfg(feature = "sqlite")]
impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for SqlValue {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Sqlite as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        match self {
            Self::Null => Ok(sqlx::encode::IsNull::Yes),
            Self::Integer(value) => <i64 as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(value, buf),
            Self::Real(value) => <f64 as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(value, buf),
            Self::Text(value) => {
                <String as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(value, buf)
            }
        }
    }

    fn produces(&self) -> Option<sqlx::sqlite::SqliteTypeInfo> {
        match self {
            Self::Null => None,
            Self::Integer(_) => Some(<i64 as sqlx::Type<sqlx::Sqlite>>::type_info()),
            Self::Real(_) => Some(<f64 as sqlx::Type<sqlx::Sqlite>>::type_info()),
            Self::Text(_) => Some(<String as sqlx::Type<sqlx::Sqlite>>::type_info()),
        }
    }
}

#[cfg(feature = "sqlite")]
impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for SqlValue {
    fn decode(
        value: <sqlx::Sqlite as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        use sqlx::{TypeInfo, ValueRef};

        if value.is_null() {
            return Ok(Self::Null);
        }

        // Storage class of this value, not the declared column type.
        let storage = value.type_info().name().to_ascii_uppercase();
        match storage.as_str() {
            "INTEGER" | "BOOLEAN" => Ok(Self::Integer(
                <i64 as sqlx::Decode<sqlx::Sqlite>>::decode(value)?,
            )),
            "REAL" | "NUMERIC" => Ok(Self::Real(<f64 as sqlx::Decode<sqlx::Sqlite>>::decode(
                value,
            )?)),
            "BLOB" => {
                let bytes = <Vec<u8> as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
                Ok(Self::Text(String::from_utf8_lossy(&bytes).into_owned()))
            }
            _ => Ok(Self::Text(<String as sqlx::Decode<sqlx::Sqlite>>::decode(
                value,
            )?)),
        }
    }
}
