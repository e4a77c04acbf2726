//! Case-result API endpoints.
//!
//! The public listing needs no session; all mutations are behind the auth
//! middleware. Every successful mutation re-reads and returns the full
//! ordered list, sequenced strictly after the write, so callers always see
//! the authoritative collection without patching local state.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CaseRecord, CreateCaseRequest, UpdateCaseRequest};
use crate::AppState;

/// GET /api/cases - List all case records, newest first.
pub async fn list_cases(State(state): State<AppState>) -> ApiResult<Vec<CaseRecord>> {
    let cases = state.repo.list_cases().await?;
    success(cases)
}

/// GET /api/cases/:id - Get a single case record.
pub async fn get_case(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<CaseRecord> {
    match state.repo.get_case(&id).await? {
        Some(case) => success(case),
        None => Err(AppError::NotFound(format!("Case {} not found", id))),
    }
}

/// POST /api/cases - Create a new case record.
pub async fn create_case(
    State(state): State<AppState>,
    Json(request): Json<CreateCaseRequest>,
) -> ApiResult<Vec<CaseRecord>> {
    // Validate before any database work
    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::Validation {
            message: format!("Required fields missing or empty: {}", missing.join(", ")),
            fields: missing,
        });
    }

    let case = state.repo.create_case(&request).await?;
    tracing::info!(case_id = %case.id, "Created case record");

    success(state.repo.list_cases().await?)
}

/// PUT /api/cases/:id - Partially update a case record.
pub async fn update_case(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateCaseRequest>,
) -> ApiResult<Vec<CaseRecord>> {
    let blank = request.blank_fields();
    if !blank.is_empty() {
        return Err(AppError::Validation {
            message: format!("Required fields cannot be blanked: {}", blank.join(", ")),
            fields: blank,
        });
    }

    let case = state.repo.update_case(&id, &request).await?;
    tracing::info!(case_id = %case.id, "Updated case record");

    success(state.repo.list_cases().await?)
}

/// DELETE /api/cases/:id - Delete a case record.
pub async fn delete_case(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<CaseRecord>> {
    state.repo.delete_case(&id).await?;
    tracing::info!(case_id = %id, "Deleted case record");

    success(state.repo.list_cases().await?)
}
