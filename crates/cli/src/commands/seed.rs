//! Seed the medication catalog from a YAML file.
//!
//! # File Format
//!
//! ```yaml
//! - name: Ibuprofen
//!   form: tablet
//!   dose: 200mg
//!   price: 5.99
//! - name: Amoxicillin
//!   form: capsule
//!   dose: 500mg
//!   price: 12.5
//! ```

use std::path::Path;

use secrecy::SecretString;
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::{error, info};

use pharmacy_api::db::{MedicationRepository, RepositoryError};
use pharmacy_api::models::NewMedication;
use pharmacy_core::Price;

use super::CliError;

/// One catalog entry in the seed file. Every field is required here even
/// though the HTTP endpoint accepts partial bodies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogEntry {
    pub name: String,
    pub form: String,
    pub dose: String,
    pub price: Price,
}

impl From<&CatalogEntry> for NewMedication {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            name: entry.name.as_str().into(),
            form: entry.form.as_str().into(),
            dose: entry.dose.as_str().into(),
            price: entry.price.into(),
        }
    }
}

/// Outcome of a seeding run.
#[derive(Debug, Default)]
pub struct SeedResult {
    pub inserted: usize,
    pub errors: Vec<(String, RepositoryError)>,
}

/// Parse a catalog document.
///
/// # Errors
///
/// Returns `CliError::Yaml` if the document is not a list of entries.
pub fn parse_catalog(content: &str) -> Result<Vec<CatalogEntry>, CliError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Check entries for values the store would accept but nobody means.
#[must_use]
pub fn validate_catalog(entries: &[CatalogEntry]) -> Vec<String> {
    let mut errors = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        if entry.name.trim().is_empty() {
            errors.push(format!("entry {index}: empty name"));
        }
        if !entry.price.amount().is_finite() {
            errors.push(format!("entry {index} ({}): price is not a number", entry.name));
        }
    }
    errors
}

/// Insert every entry, continuing past individual failures.
pub async fn seed_catalog(pool: &SqlitePool, entries: &[CatalogEntry]) -> SeedResult {
    let repo = MedicationRepository::new(pool);
    let mut result = SeedResult::default();

    for entry in entries {
        match repo.create(&NewMedication::from(entry)).await {
            Ok(id) => {
                tracing::debug!(medication_id = %id, name = %entry.name, "Inserted medication");
                result.inserted += 1;
            }
            Err(e) => result.errors.push((entry.name.clone(), e)),
        }
    }

    result
}

/// Seed medications from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, validation fails,
/// the database cannot be opened, or any entry fails to insert.
pub async fn medications(database_url: &SecretString, file_path: &str) -> Result<(), CliError> {
    let path = Path::new(file_path);
    info!(path = %file_path, "Loading catalog from file");

    // Read and validate YAML before connecting to database
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::Io {
            path: file_path.to_string(),
            source,
        })?;
    let entries = parse_catalog(&content)?;
    info!(entries = entries.len(), "Parsed catalog");

    let errors = validate_catalog(&entries);
    if !errors.is_empty() {
        error!("Catalog validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(CliError::Validation(errors.len()));
    }

    let pool = super::connect(database_url).await?;
    let result = seed_catalog(&pool, &entries).await;
    pool.close().await;

    info!("Seeding complete!");
    info!("  Medications inserted: {}", result.inserted);

    if !result.errors.is_empty() {
        error!("  Errors: {}", result.errors.len());
        for (name, err) in &result.errors {
            error!("    - {name}: {err}");
        }
        return Err(CliError::PartialSeed(result.errors.len()));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pharmacy_api::db::in_memory;
    use pharmacy_core::SqlValue;

    use super::*;

    const CATALOG: &str = r"
- name: Ibuprofen
  form: tablet
  dose: 200mg
  price: 5.99
- name: Cough Syrup
  form: syrup
  dose: 10ml
  price: 7
";

    #[test]
    fn test_parse_catalog() {
        let entries = parse_catalog(CATALOG).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0],
            CatalogEntry {
                name: "Ibuprofen".to_string(),
                form: "tablet".to_string(),
                dose: "200mg".to_string(),
                price: Price::new(5.99),
            }
        );
        assert!((entries[1].price.amount() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let err = parse_catalog("- name: Ibuprofen\n  form: tablet\n  price: 1.0\n").unwrap_err();
        assert!(matches!(err, CliError::Yaml(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let yaml = "- name: A\n  form: tablet\n  dose: 1mg\n  price: 1.0\n  stock: 3\n";
        assert!(parse_catalog(yaml).is_err());
    }

    #[test]
    fn test_validate_catalog() {
        let mut entries = parse_catalog(CATALOG).unwrap();
        assert!(validate_catalog(&entries).is_empty());

        entries[0].name = "  ".to_string();
        entries[1].price = Price::new(f64::NAN);
        assert_eq!(validate_catalog(&entries).len(), 2);
    }

    #[tokio::test]
    async fn test_seed_catalog_inserts_all_entries() {
        let pool = in_memory().await.unwrap();
        let entries = parse_catalog(CATALOG).unwrap();

        let result = seed_catalog(&pool, &entries).await;
        assert_eq!(result.inserted, 2);
        assert!(result.errors.is_empty());

        let medications = MedicationRepository::new(&pool).list().await.unwrap();
        let names: Vec<&str> = medications.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Ibuprofen", "Cough Syrup"]);
        assert_eq!(medications[0].price, SqlValue::Real(5.99));
        assert_eq!(medications[1].price, SqlValue::Real(7.0));
    }
}
