use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{DeleteStrategy, Entity, EntityConfig, UniqueField};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Skater {
    pub full_name: String,
    /// CPF, formatted `000.000.000-00`. Unique among active records.
    pub national_id: String,
    pub birth_date: NaiveDate,
    /// Derived from `birth_date` when the record is written. Never
    /// recomputed afterwards, so the displayed age drifts over time.
    pub age: i32,
    pub team_id: String,
    pub medical_exam_url: Option<String>,
    pub id_document_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

static CONFIG: EntityConfig = EntityConfig {
    collection: "skaters",
    display_name: "skater",
    unique_field: Some(UniqueField {
        field: "national_id",
        label: "national id",
    }),
    active_flag: None,
    delete: DeleteStrategy::Remove,
    order_by: Some("full_name"),
};

impl Entity for Skater {
    fn config() -> &'static EntityConfig {
        &CONFIG
    }
}
