use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{ActiveFlag, DeleteStrategy, Entity, EntityConfig, UniqueField};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub name: String,
    /// Unique short code, at most 4 uppercase alphanumeric characters.
    pub code: String,
    pub description: Option<String>,
    pub ordering: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

// Categories carry an active flag for list filtering but are removed
// outright on delete.
static CONFIG: EntityConfig = EntityConfig {
    collection: "categories",
    display_name: "category",
    unique_field: Some(UniqueField {
        field: "code",
        label: "code",
    }),
    active_flag: Some(ActiveFlag::Bool { field: "active" }),
    delete: DeleteStrategy::Remove,
    order_by: Some("ordering"),
};

impl Entity for Category {
    fn config() -> &'static EntityConfig {
        &CONFIG
    }
}
