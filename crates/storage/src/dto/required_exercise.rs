use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::common::validate_upper_alnum;
use crate::entity::Stored;
use crate::models::RequiredExercise;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRequiredExerciseRequest {
    #[validate(length(min = 1, max = 5, message = "Abbreviation must be at most 5 characters"))]
    #[validate(custom(function = "validate_upper_alnum"))]
    pub abbreviation: String,

    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

impl CreateRequiredExerciseRequest {
    pub fn into_model(self, actor: &str) -> RequiredExercise {
        RequiredExercise {
            abbreviation: self.abbreviation,
            name: self.name,
            description: self.description,
            created_at: Utc::now(),
            created_by: actor.to_string(),
            updated_at: None,
            updated_by: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRequiredExerciseRequest {
    #[validate(length(min = 1, max = 5))]
    #[validate(custom(function = "validate_upper_alnum"))]
    pub abbreviation: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

impl UpdateRequiredExerciseRequest {
    pub fn apply(self, mut exercise: RequiredExercise, actor: &str) -> RequiredExercise {
        if let Some(abbreviation) = self.abbreviation {
            exercise.abbreviation = abbreviation;
        }
        if let Some(name) = self.name {
            exercise.name = name;
        }
        if self.description.is_some() {
            exercise.description = self.description;
        }
        exercise.updated_at = Some(Utc::now());
        exercise.updated_by = Some(actor.to_string());
        exercise
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RequiredExerciseResponse {
    pub id: String,
    pub abbreviation: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

impl From<Stored<RequiredExercise>> for RequiredExerciseResponse {
    fn from(stored: Stored<RequiredExercise>) -> Self {
        let exercise = stored.record;
        Self {
            id: stored.id,
            abbreviation: exercise.abbreviation,
            name: exercise.name,
            description: exercise.description,
            created_at: exercise.created_at,
            created_by: exercise.created_by,
            updated_at: exercise.updated_at,
            updated_by: exercise.updated_by,
        }
    }
}
