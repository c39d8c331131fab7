//! Catalog route handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::db::MedicationRepository;
use crate::error::{Result, StoreResultExt};
use crate::extract::JsonBody;
use crate::models::{Medication, NewMedication};
use crate::routes::{MessageResponse, created};
use crate::state::AppState;

/// List the whole catalog.
///
/// # Errors
///
/// Returns `AppError::Store` if the query fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Medication>>> {
    let medications = MedicationRepository::new(state.pool())
        .list()
        .await
        .or_fail("Failed to retrieve medications")?;
    Ok(Json(medications))
}

/// Add a catalog entry.
///
/// # Errors
///
/// Returns `AppError::Store` if the insert fails (e.g. a missing field).
pub async fn create(
    State(state): State<AppState>,
    JsonBody(medication): JsonBody<NewMedication>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let id = MedicationRepository::new(state.pool())
        .create(&medication)
        .await
        .or_fail("Failed to add medication")?;

    tracing::debug!(medication_id = %id, "Medication added");
    Ok(created("Medication added successfully"))
}
