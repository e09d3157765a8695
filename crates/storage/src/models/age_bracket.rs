use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{DeleteStrategy, Entity, EntityConfig, UniqueField};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AgeBracket {
    /// Fixed-length unique short code.
    pub code: String,
    /// Human-readable range label, one of a closed list ("09 a 10 anos").
    pub label: String,
    pub category_id: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

static CONFIG: EntityConfig = EntityConfig {
    collection: "age_brackets",
    display_name: "age bracket",
    unique_field: Some(UniqueField {
        field: "code",
        label: "code",
    }),
    active_flag: None,
    delete: DeleteStrategy::Remove,
    order_by: Some("code"),
};

impl Entity for AgeBracket {
    fn config() -> &'static EntityConfig {
        &CONFIG
    }
}
