//! Schema initializer.
//!
//! Creates the five tables with `CREATE TABLE IF NOT EXISTS`, so running it
//! against an existing store is a no-op. Foreign keys are declared here but
//! SQLite only checks them when the connection enables `PRAGMA foreign_keys`.

use sqlx::SqlitePool;

use super::RepositoryError;

/// The tables owned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Users,
    Medications,
    Orders,
    Payments,
    Cart,
}

impl Table {
    /// Every table, parents before children.
    pub const ALL: [Self; 5] = [
        Self::Users,
        Self::Medications,
        Self::Orders,
        Self::Payments,
        Self::Cart,
    ];

    /// The SQL table name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Medications => "medications",
            Self::Orders => "orders",
            Self::Payments => "payments",
            Self::Cart => "cart",
        }
    }

    const fn create_statement(self) -> &'static str {
        match self {
            Self::Users => CREATE_USERS,
            Self::Medications => CREATE_MEDICATIONS,
            Self::Orders => CREATE_ORDERS,
            Self::Payments => CREATE_PAYMENTS,
            Self::Cart => CREATE_CART,
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const CREATE_USERS: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT UNIQUE NOT NULL,
        password TEXT NOT NULL
    )";

const CREATE_MEDICATIONS: &str = r"
    CREATE TABLE IF NOT EXISTS medications (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        form TEXT NOT NULL,
        dose TEXT NOT NULL,
        price REAL NOT NULL
    )";

const CREATE_ORDERS: &str = r"
    CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        medication_id INTEGER NOT NULL,
        quantity INTEGER NOT NULL,
        timestamp TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (user_id) REFERENCES users(id),
        FOREIGN KEY (medication_id) REFERENCES medications(id)
    )";

const CREATE_PAYMENTS: &str = r"
    CREATE TABLE IF NOT EXISTS payments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        order_id INTEGER NOT NULL,
        phone_number TEXT NOT NULL,
        timestamp TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (order_id) REFERENCES orders(id)
    )";

const CREATE_CART: &str = r"
    CREATE TABLE IF NOT EXISTS cart (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        medication_id INTEGER NOT NULL,
        quantity INTEGER NOT NULL,
        FOREIGN KEY (user_id) REFERENCES users(id),
        FOREIGN KEY (medication_id) REFERENCES medications(id)
    )";

/// Ensure every table exists.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if any statement fails.
pub async fn initialize(pool: &SqlitePool) -> Result<(), RepositoryError> {
    for table in Table::ALL {
        sqlx::query(table.create_statement()).execute(pool).await?;
    }
    tracing::debug!("Schema initialized");
    Ok(())
}

/// Count the rows in a table.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn count_rows(pool: &SqlitePool, table: Table) -> Result<i64, RepositoryError> {
    let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await?;
    Ok(count)
}
