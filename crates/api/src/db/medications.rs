//! Medication catalog repository.

use sqlx::SqlitePool;

use pharmacy_core::MedicationId;

use super::RepositoryError;
use crate::models::{Medication, NewMedication};

/// Repository for the medication catalog.
pub struct MedicationRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MedicationRepository<'a> {
    /// Create a new medication repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List the whole catalog in the store's natural order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Medication>, RepositoryError> {
        let medications = sqlx::query_as::<_, Medication>("SELECT * FROM medications")
            .fetch_all(self.pool)
            .await?;
        Ok(medications)
    }

    /// Add a catalog entry. Values are bound as given; the columns'
    /// affinity decides how they are stored.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Constraint` if a field is missing.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, medication: &NewMedication) -> Result<MedicationId, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO medications (name, form, dose, price) VALUES (?, ?, ?, ?)",
        )
        .bind(&medication.name)
        .bind(&medication.form)
        .bind(&medication.dose)
        .bind(&medication.price)
        .execute(self.pool)
        .await?;

        Ok(MedicationId::new(result.last_insert_rowid()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pharmacy_core::SqlValue;

    use super::*;
    use crate::db::in_memory;

    fn ibuprofen() -> NewMedication {
        NewMedication {
            name: "Ibuprofen".into(),
            form: "tablet".into(),
            dose: "200mg".into(),
            price: SqlValue::Real(5.99),
        }
    }

    #[tokio::test]
    async fn test_empty_catalog() {
        let pool = in_memory().await.unwrap();
        let medications = MedicationRepository::new(&pool).list().await.unwrap();
        assert!(medications.is_empty());
    }

    #[tokio::test]
    async fn test_create_preserves_fields() {
        let pool = in_memory().await.unwrap();
        let repo = MedicationRepository::new(&pool);

        let id = repo.create(&ibuprofen()).await.unwrap();
        let medications = repo.list().await.unwrap();

        assert_eq!(
            medications,
            vec![Medication {
                id,
                name: "Ibuprofen".to_string(),
                form: "tablet".to_string(),
                dose: "200mg".to_string(),
                price: SqlValue::Real(5.99),
            }]
        );
    }

    #[tokio::test]
    async fn test_negative_price_is_accepted() {
        let pool = in_memory().await.unwrap();
        let repo = MedicationRepository::new(&pool);

        let mut medication = ibuprofen();
        medication.price = SqlValue::Real(-1.5);
        repo.create(&medication).await.unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_price_is_rejected() {
        let pool = in_memory().await.unwrap();
        let repo = MedicationRepository::new(&pool);

        let mut medication = ibuprofen();
        medication.price = SqlValue::Null;
        let err = repo.create(&medication).await.unwrap_err();

        assert!(matches!(err, RepositoryError::Constraint(_)));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_price_follows_real_affinity() {
        let pool = in_memory().await.unwrap();
        let repo = MedicationRepository::new(&pool);

        for price in ["5.99", "call us"] {
            let mut medication = ibuprofen();
            medication.price = price.into();
            repo.create(&medication).await.unwrap();
        }
        let mut medication = ibuprofen();
        medication.price = SqlValue::Integer(7);
        repo.create(&medication).await.unwrap();

        let prices: Vec<SqlValue> = repo.list().await.unwrap().into_iter().map(|m| m.price).collect();
        assert_eq!(
            prices,
            vec![
                SqlValue::Real(5.99),
                SqlValue::Text("call us".to_string()),
                SqlValue::Real(7.0),
            ]
        );
    }
}
