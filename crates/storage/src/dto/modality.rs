use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::common::{validate_duration, validate_upper_alnum};
use crate::entity::Stored;
use crate::models::Modality;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateModalityRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 10))]
    #[validate(custom(function = "validate_upper_alnum"))]
    pub style_code: String,

    #[validate(length(min = 1, max = 10))]
    #[validate(custom(function = "validate_upper_alnum"))]
    pub sub_style_code: String,

    /// Full code; uniqueness is checked among active modalities.
    #[validate(length(min = 1, max = 20))]
    pub code: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category_id: String,

    #[validate(range(min = 1, max = 99))]
    pub min_age: i32,

    #[validate(range(min = 1, max = 99))]
    pub max_age: i32,

    #[validate(custom(function = "validate_duration"))]
    pub min_duration: String,

    #[validate(custom(function = "validate_duration"))]
    pub max_duration: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateModalityRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 10))]
    #[validate(custom(function = "validate_upper_alnum"))]
    pub style_code: Option<String>,

    #[validate(length(min = 1, max = 10))]
    #[validate(custom(function = "validate_upper_alnum"))]
    pub sub_style_code: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub code: Option<String>,

    #[validate(length(min = 1))]
    pub category_id: Option<String>,

    #[validate(range(min = 1, max = 99))]
    pub min_age: Option<i32>,

    #[validate(range(min = 1, max = 99))]
    pub max_age: Option<i32>,

    #[validate(custom(function = "validate_duration"))]
    pub min_duration: Option<String>,

    #[validate(custom(function = "validate_duration"))]
    pub max_duration: Option<String>,

    pub active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModalityResponse {
    pub id: String,
    pub name: String,
    pub style_code: String,
    pub sub_style_code: String,
    pub code: String,
    pub category_id: String,
    pub category_name: String,
    pub min_age: i32,
    pub max_age: i32,
    pub min_duration: String,
    pub max_duration: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

impl From<Stored<Modality>> for ModalityResponse {
    fn from(stored: Stored<Modality>) -> Self {
        let modality = stored.record;
        Self {
            id: stored.id,
            name: modality.name,
            style_code: modality.style_code,
            sub_style_code: modality.sub_style_code,
            code: modality.code,
            category_id: modality.category_id,
            category_name: modality.category_name,
            min_age: modality.min_age,
            max_age: modality.max_age,
            min_duration: modality.min_duration,
            max_duration: modality.max_duration,
            active: modality.active,
            created_at: modality.created_at,
            created_by: modality.created_by,
            updated_at: modality.updated_at,
            updated_by: modality.updated_by,
        }
    }
}
