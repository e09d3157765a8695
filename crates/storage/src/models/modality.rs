use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{ActiveFlag, DeleteStrategy, Entity, EntityConfig, UniqueField};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Modality {
    pub name: String,
    pub style_code: String,
    pub sub_style_code: String,
    /// Full code, unique among active modalities.
    pub code: String,
    /// Authoritative category reference.
    pub category_id: String,
    /// Display copy of the category name captured at write time. Goes
    /// stale if the category is later renamed; not propagated.
    pub category_name: String,
    pub min_age: i32,
    pub max_age: i32,
    /// Durations are `mm:ss` strings, not numeric types.
    pub min_duration: String,
    pub max_duration: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

static CONFIG: EntityConfig = EntityConfig {
    collection: "modalities",
    display_name: "modality",
    unique_field: Some(UniqueField {
        field: "code",
        label: "code",
    }),
    active_flag: Some(ActiveFlag::Bool { field: "active" }),
    delete: DeleteStrategy::Deactivate,
    order_by: Some("name"),
};

impl Entity for Modality {
    fn config() -> &'static EntityConfig {
        &CONFIG
    }
}
