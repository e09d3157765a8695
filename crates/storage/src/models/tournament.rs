use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{DeleteStrategy, Entity, EntityConfig};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Tournament {
    pub name: String,
    pub event_date: NaiveDate,
    pub max_registration_date: NaiveDate,
    pub city: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

static CONFIG: EntityConfig = EntityConfig {
    collection: "tournaments",
    display_name: "tournament",
    unique_field: None,
    active_flag: None,
    delete: DeleteStrategy::Remove,
    order_by: Some("event_date"),
};

impl Entity for Tournament {
    fn config() -> &'static EntityConfig {
        &CONFIG
    }
}
