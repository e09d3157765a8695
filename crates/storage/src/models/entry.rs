use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{DeleteStrategy, Entity, EntityConfig};

/// A competition registration linking one skater, one team, one modality,
/// one category and one age bracket.
///
/// Each referenced entity's display name is copied onto the entry at
/// create/update time so listings never join. The copies reflect the
/// parents as of write time; later renames are not propagated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Entry {
    pub team_id: String,
    pub team_name: String,
    pub skater_id: String,
    pub skater_name: String,
    pub modality_id: String,
    pub modality_name: String,
    pub category_id: String,
    pub category_name: String,
    pub age_bracket_id: String,
    pub age_bracket_label: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

static CONFIG: EntityConfig = EntityConfig {
    collection: "entries",
    display_name: "entry",
    unique_field: None,
    active_flag: None,
    delete: DeleteStrategy::Remove,
    order_by: Some("created_at"),
};

impl Entity for Entry {
    fn config() -> &'static EntityConfig {
        &CONFIG
    }
}
