//! Payment repository.

use sqlx::SqlitePool;

use pharmacy_core::PaymentId;

use super::RepositoryError;
use crate::models::NewPayment;

/// Repository for payment records.
pub struct PaymentRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PaymentRepository<'a> {
    /// Create a new payment repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a payment. Repeating the call records the payment again.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Constraint` if a field is missing (or the
    /// order is unknown while foreign keys are enforced).
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, payment: &NewPayment) -> Result<PaymentId, RepositoryError> {
        let result = sqlx::query("INSERT INTO payments (order_id, phone_number) VALUES (?, ?)")
            .bind(&payment.order_id)
            .bind(&payment.phone_number)
            .execute(self.pool)
            .await?;

        Ok(PaymentId::new(result.last_insert_rowid()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pharmacy_core::SqlValue;

    use super::*;
    use crate::db::in_memory;
    use crate::models::Payment;

    async fn payments_for(pool: &SqlitePool, order_id: i64) -> Vec<Payment> {
        sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE order_id = ?")
            .bind(order_id)
            .fetch_all(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_payments_are_not_deduplicated() {
        let pool = in_memory().await.unwrap();
        let repo = PaymentRepository::new(&pool);
        let payment = NewPayment {
            order_id: SqlValue::Integer(12),
            phone_number: "+254700000000".into(),
        };

        let first = repo.create(&payment).await.unwrap();
        let second = repo.create(&payment).await.unwrap();
        assert_ne!(first, second);

        let payments = payments_for(&pool, 12).await;
        assert_eq!(payments.len(), 2);
        assert!(payments.iter().all(|p| p.phone_number == "+254700000000"));
    }

    #[tokio::test]
    async fn test_missing_phone_number_is_rejected() {
        let pool = in_memory().await.unwrap();
        let err = PaymentRepository::new(&pool)
            .create(&NewPayment {
                order_id: SqlValue::Integer(1),
                phone_number: SqlValue::Null,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Constraint(_)));
    }

    #[tokio::test]
    async fn test_numeric_phone_number_is_stored_as_text() {
        let pool = in_memory().await.unwrap();
        PaymentRepository::new(&pool)
            .create(&NewPayment {
                order_id: "7".into(),
                phone_number: SqlValue::Integer(254_700_000_000),
            })
            .await
            .unwrap();

        let payments = payments_for(&pool, 7).await;
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].order_id, SqlValue::Integer(7));
        assert_eq!(payments[0].phone_number, "254700000000");
    }
}
