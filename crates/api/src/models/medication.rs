//! Catalog types.

use serde::{Deserialize, Serialize};

use pharmacy_core::{MedicationId, SqlValue};

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Medication {
    pub id: MedicationId,
    pub name: String,
    /// Dosage form, e.g. "tablet" or "syrup".
    pub form: String,
    /// Strength as free text, e.g. "200mg".
    pub dose: String,
    /// `REAL` affinity: numeric input is a number, anything else stays text.
    pub price: SqlValue,
}

/// A catalog entry to add.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewMedication {
    pub name: SqlValue,
    pub form: SqlValue,
    pub dose: SqlValue,
    pub price: SqlValue,
}
