use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::common::validate_upper_alnum;
use crate::entity::Stored;
use crate::models::Category;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 4, message = "Code must be at most 4 characters"))]
    #[validate(custom(function = "validate_upper_alnum"))]
    pub code: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub ordering: i32,
}

impl CreateCategoryRequest {
    pub fn into_model(self, actor: &str) -> Category {
        Category {
            name: self.name,
            code: self.code,
            description: self.description,
            ordering: self.ordering,
            active: true,
            created_at: Utc::now(),
            created_by: actor.to_string(),
            updated_at: None,
            updated_by: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 4))]
    #[validate(custom(function = "validate_upper_alnum"))]
    pub code: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub ordering: Option<i32>,

    pub active: Option<bool>,
}

impl UpdateCategoryRequest {
    pub fn apply(self, mut category: Category, actor: &str) -> Category {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(code) = self.code {
            category.code = code;
        }
        if self.description.is_some() {
            category.description = self.description;
        }
        if let Some(ordering) = self.ordering {
            category.ordering = ordering;
        }
        if let Some(active) = self.active {
            category.active = active;
        }
        category.updated_at = Some(Utc::now());
        category.updated_by = Some(actor.to_string());
        category
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub ordering: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

impl From<Stored<Category>> for CategoryResponse {
    fn from(stored: Stored<Category>) -> Self {
        let category = stored.record;
        Self {
            id: stored.id,
            name: category.name,
            code: category.code,
            description: category.description,
            ordering: category.ordering,
            active: category.active,
            created_at: category.created_at,
            created_by: category.created_by,
            updated_at: category.updated_at,
            updated_by: category.updated_by,
        }
    }
}
