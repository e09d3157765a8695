use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{DeleteStrategy, Entity, EntityConfig};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Team {
    pub name: String,
    /// Fixed-length uppercase alphanumeric short code. Unique by
    /// convention only; not enforced.
    pub code: String,
    pub responsible: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

static CONFIG: EntityConfig = EntityConfig {
    collection: "teams",
    display_name: "team",
    unique_field: None,
    active_flag: None,
    delete: DeleteStrategy::Remove,
    order_by: Some("name"),
};

impl Entity for Team {
    fn config() -> &'static EntityConfig {
        &CONFIG
    }
}
