//! Case-result model and request DTOs.

use serde::{Deserialize, Serialize};

/// A litigation outcome shown on the public site and managed in the admin panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Server-generated, immutable once created.
    pub id: String,
    pub title: String,
    pub court: String,
    pub outcome: String,
    pub outcome_type: String,
    pub date: String,
    pub practice_area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Server-managed, never client-settable.
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating a new case record.
///
/// `id` and the timestamps are deliberately absent: the server owns them.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCaseRequest {
    pub title: String,
    pub court: String,
    pub outcome: String,
    pub outcome_type: String,
    pub date: String,
    pub practice_area: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateCaseRequest {
    /// Names of required fields that are empty after trimming.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        for (name, value) in [
            ("title", &self.title),
            ("court", &self.court),
            ("outcome", &self.outcome),
            ("outcome_type", &self.outcome_type),
            ("date", &self.date),
            ("practice_area", &self.practice_area),
        ] {
            if value.trim().is_empty() {
                missing.push(name.to_string());
            }
        }
        missing
    }
}

/// Request body for a partial update of an existing case record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCaseRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub court: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub outcome_type: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub practice_area: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl UpdateCaseRequest {
    /// Names of required fields that are present but empty after trimming.
    ///
    /// Absent fields keep their stored value; blanking a required field is
    /// rejected before any database work.
    pub fn blank_fields(&self) -> Vec<String> {
        let mut blank = Vec::new();
        for (name, value) in [
            ("title", &self.title),
            ("court", &self.court),
            ("outcome", &self.outcome),
            ("outcome_type", &self.outcome_type),
            ("date", &self.date),
            ("practice_area", &self.practice_area),
        ] {
            if let Some(v) = value {
                if v.trim().is_empty() {
                    blank.push(name.to_string());
                }
            }
        }
        blank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateCaseRequest {
        CreateCaseRequest {
            title: "$2.3M Defamation Verdict".to_string(),
            court: "Fulton County Superior Court".to_string(),
            outcome: "$2,300,000".to_string(),
            outcome_type: "Jury Verdict".to_string(),
            date: "2023".to_string(),
            practice_area: "Defamation".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_create_request_complete() {
        assert!(full_request().missing_fields().is_empty());
    }

    #[test]
    fn test_create_request_blank_fields_reported() {
        let mut request = full_request();
        request.court = "  ".to_string();
        request.date = String::new();
        assert_eq!(request.missing_fields(), vec!["court", "date"]);
    }

    #[test]
    fn test_update_request_absent_fields_ok() {
        let request = UpdateCaseRequest {
            outcome: Some("Settled".to_string()),
            ..Default::default()
        };
        assert!(request.blank_fields().is_empty());
    }

    #[test]
    fn test_update_request_rejects_blanked_required_field() {
        let request = UpdateCaseRequest {
            title: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(request.blank_fields(), vec!["title"]);
    }
}
