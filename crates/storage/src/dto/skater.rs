use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::common::{validate_birth_date, validate_cpf, validate_filename};
use crate::entity::Stored;
use crate::models::Skater;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSkaterRequest {
    #[validate(length(min = 1, max = 255, message = "Full name is required"))]
    pub full_name: String,

    #[validate(custom(function = "validate_cpf"))]
    pub national_id: String,

    #[validate(custom(function = "validate_birth_date"))]
    pub birth_date: NaiveDate,

    #[validate(length(min = 1, message = "Team is required"))]
    pub team_id: String,

    #[validate(url)]
    pub medical_exam_url: Option<String>,

    #[validate(url)]
    pub id_document_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSkaterRequest {
    #[validate(length(min = 1, max = 255))]
    pub full_name: Option<String>,

    #[validate(custom(function = "validate_cpf"))]
    pub national_id: Option<String>,

    #[validate(custom(function = "validate_birth_date"))]
    pub birth_date: Option<NaiveDate>,

    #[validate(length(min = 1))]
    pub team_id: Option<String>,
}

/// Base64-encoded document payload for the upload endpoint.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UploadDocumentRequest {
    pub kind: crate::services::skaters::DocumentKind,

    #[validate(length(min = 1, max = 255))]
    #[validate(custom(function = "validate_filename"))]
    pub filename: String,

    #[validate(length(min = 1))]
    pub content_base64: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UploadDocumentResponse {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SkaterResponse {
    pub id: String,
    pub full_name: String,
    pub national_id: String,
    pub birth_date: NaiveDate,
    /// Age as computed at the last write, not at read time.
    pub age: i32,
    pub team_id: String,
    pub medical_exam_url: Option<String>,
    pub id_document_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

impl From<Stored<Skater>> for SkaterResponse {
    fn from(stored: Stored<Skater>) -> Self {
        let skater = stored.record;
        Self {
            id: stored.id,
            full_name: skater.full_name,
            national_id: skater.national_id,
            birth_date: skater.birth_date,
            age: skater.age,
            team_id: skater.team_id,
            medical_exam_url: skater.medical_exam_url,
            id_document_url: skater.id_document_url,
            created_at: skater.created_at,
            created_by: skater.created_by,
            updated_at: skater.updated_at,
            updated_by: skater.updated_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::skaters::DocumentKind;
    use chrono::{Days, Utc};

    fn create_request(birth_date: NaiveDate) -> CreateSkaterRequest {
        CreateSkaterRequest {
            full_name: "Jane".to_string(),
            national_id: "111.222.333-44".to_string(),
            birth_date,
            team_id: "alpha".to_string(),
            medical_exam_url: None,
            id_document_url: None,
        }
    }

    #[test]
    fn future_birth_date_fails_validation() {
        let today = Utc::now().date_naive();
        assert!(create_request(today).validate().is_ok());
        assert!(
            create_request(today + Days::new(30))
                .validate()
                .is_err()
        );

        let update = UpdateSkaterRequest {
            birth_date: Some(today + Days::new(30)),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn upload_filename_with_traversal_components_fails_validation() {
        let request = UploadDocumentRequest {
            kind: DocumentKind::MedicalExam,
            filename: "../../../../escaped.txt".to_string(),
            content_base64: "JVBERi0xLjQ=".to_string(),
        };
        assert!(request.validate().is_err());

        let request = UploadDocumentRequest {
            kind: DocumentKind::MedicalExam,
            filename: "exam.pdf".to_string(),
            content_base64: "JVBERi0xLjQ=".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
