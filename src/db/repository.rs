//! Database repository for case-record CRUD operations.
//!
//! Uses prepared statements throughout. Updates are read-merge-write with
//! last-write-wins semantics: two admins editing concurrently race and the
//! later write prevails, with no conflict detection.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{CaseRecord, CreateCaseRequest, UpdateCaseRequest};

const CASE_COLUMNS: &str = "id, title, court, outcome, outcome_type, date, practice_area, description, created_at, updated_at";

/// Database repository for all case-record operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all case records, most recently created first.
    ///
    /// `id` is a secondary sort key so records sharing a timestamp keep a
    /// stable order.
    pub async fn list_cases(&self) -> Result<Vec<CaseRecord>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {CASE_COLUMNS} FROM cases ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| case_from_row(&row)).collect())
    }

    /// Get a case record by ID.
    pub async fn get_case(&self, id: &str) -> Result<Option<CaseRecord>, AppError> {
        let row = sqlx::query(&format!("SELECT {CASE_COLUMNS} FROM cases WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(case_from_row))
    }

    /// Create a new case record with a fresh id and server timestamps.
    pub async fn create_case(&self, request: &CreateCaseRequest) -> Result<CaseRecord, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO cases (id, title, court, outcome, outcome_type, date, practice_area, description, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(&request.title)
        .bind(&request.court)
        .bind(&request.outcome)
        .bind(&request.outcome_type)
        .bind(&request.date)
        .bind(&request.practice_area)
        .bind(&request.description)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(CaseRecord {
            id,
            title: request.title.clone(),
            court: request.court.clone(),
            outcome: request.outcome.clone(),
            outcome_type: request.outcome_type.clone(),
            date: request.date.clone(),
            practice_area: request.practice_area.clone(),
            description: request.description.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Partially update a case record. Absent fields keep their stored value;
    /// `created_at` is never touched.
    pub async fn update_case(
        &self,
        id: &str,
        request: &UpdateCaseRequest,
    ) -> Result<CaseRecord, AppError> {
        let existing = self
            .get_case(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Case {} not found", id)))?;

        let now = Utc::now().to_rfc3339();

        let title = request.title.as_ref().unwrap_or(&existing.title);
        let court = request.court.as_ref().unwrap_or(&existing.court);
        let outcome = request.outcome.as_ref().unwrap_or(&existing.outcome);
        let outcome_type = request
            .outcome_type
            .as_ref()
            .unwrap_or(&existing.outcome_type);
        let date = request.date.as_ref().unwrap_or(&existing.date);
        let practice_area = request
            .practice_area
            .as_ref()
            .unwrap_or(&existing.practice_area);
        let description = request.description.clone().or(existing.description.clone());

        sqlx::query(
            "UPDATE cases SET title = ?, court = ?, outcome = ?, outcome_type = ?, date = ?, practice_area = ?, description = ?, updated_at = ? WHERE id = ?"
        )
        .bind(title)
        .bind(court)
        .bind(outcome)
        .bind(outcome_type)
        .bind(date)
        .bind(practice_area)
        .bind(&description)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(CaseRecord {
            id: existing.id,
            title: title.clone(),
            court: court.clone(),
            outcome: outcome.clone(),
            outcome_type: outcome_type.clone(),
            date: date.clone(),
            practice_area: practice_area.clone(),
            description,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete a case record by ID.
    pub async fn delete_case(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM cases WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Case {} not found", id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_surfaces_error_when_store_unreachable() {
        let dir = TempDir::new().unwrap();
        let pool = init_database(&dir.path().join("test.sqlite"))
            .await
            .unwrap();
        let repo = Repository::new(pool.clone());
        pool.close().await;

        let err = repo.list_cases().await.unwrap_err();
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }
}

fn case_from_row(row: &sqlx::sqlite::SqliteRow) -> CaseRecord {
    CaseRecord {
        id: row.get("id"),
        title: row.get("title"),
        court: row.get("court"),
        outcome: row.get("outcome"),
        outcome_type: row.get("outcome_type"),
        date: row.get("date"),
        practice_area: row.get("practice_area"),
        description: row.get("description"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
