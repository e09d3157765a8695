use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::common::{validate_age_range_label, validate_upper_alnum};
use crate::entity::Stored;
use crate::models::AgeBracket;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAgeBracketRequest {
    #[validate(length(equal = 3, message = "Code must be exactly 3 characters"))]
    #[validate(custom(function = "validate_upper_alnum"))]
    pub code: String,

    #[validate(custom(function = "validate_age_range_label"))]
    pub label: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category_id: String,
}

impl CreateAgeBracketRequest {
    pub fn into_model(self, actor: &str) -> AgeBracket {
        AgeBracket {
            code: self.code,
            label: self.label,
            category_id: self.category_id,
            created_at: Utc::now(),
            created_by: actor.to_string(),
            updated_at: None,
            updated_by: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAgeBracketRequest {
    #[validate(length(equal = 3))]
    #[validate(custom(function = "validate_upper_alnum"))]
    pub code: Option<String>,

    #[validate(custom(function = "validate_age_range_label"))]
    pub label: Option<String>,

    #[validate(length(min = 1))]
    pub category_id: Option<String>,
}

impl UpdateAgeBracketRequest {
    pub fn apply(self, mut bracket: AgeBracket, actor: &str) -> AgeBracket {
        if let Some(code) = self.code {
            bracket.code = code;
        }
        if let Some(label) = self.label {
            bracket.label = label;
        }
        if let Some(category_id) = self.category_id {
            bracket.category_id = category_id;
        }
        bracket.updated_at = Some(Utc::now());
        bracket.updated_by = Some(actor.to_string());
        bracket
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AgeBracketResponse {
    pub id: String,
    pub code: String,
    pub label: String,
    pub category_id: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

impl From<Stored<AgeBracket>> for AgeBracketResponse {
    fn from(stored: Stored<AgeBracket>) -> Self {
        let bracket = stored.record;
        Self {
            id: stored.id,
            code: bracket.code,
            label: bracket.label,
            category_id: bracket.category_id,
            created_at: bracket.created_at,
            created_by: bracket.created_by,
            updated_at: bracket.updated_at,
            updated_by: bracket.updated_by,
        }
    }
}
