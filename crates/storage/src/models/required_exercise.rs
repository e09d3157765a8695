use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{DeleteStrategy, Entity, EntityConfig, UniqueField};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RequiredExercise {
    /// Unique abbreviation, at most 5 uppercase alphanumeric characters.
    pub abbreviation: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

static CONFIG: EntityConfig = EntityConfig {
    collection: "required_exercises",
    display_name: "required exercise",
    unique_field: Some(UniqueField {
        field: "abbreviation",
        label: "abbreviation",
    }),
    active_flag: None,
    delete: DeleteStrategy::Remove,
    order_by: Some("abbreviation"),
};

impl Entity for RequiredExercise {
    fn config() -> &'static EntityConfig {
        &CONFIG
    }
}
