use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{ActiveFlag, DeleteStrategy, Entity, EntityConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JudgeLevel {
    Regional,
    National,
    International,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum JudgeSpecialty {
    Figures,
    Dance,
    FreeSkating,
    Precision,
    Show,
}

/// The judge's status doubles as its soft-delete signal: deleting a judge
/// flips this to `inactive` instead of removing the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JudgeStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Judge {
    pub full_name: String,
    pub license_number: String,
    pub level: JudgeLevel,
    pub city: String,
    pub state: String,
    pub email: String,
    pub phone: String,
    pub specialties: Vec<JudgeSpecialty>,
    pub status: JudgeStatus,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

static CONFIG: EntityConfig = EntityConfig {
    collection: "judges",
    display_name: "judge",
    unique_field: None,
    active_flag: Some(ActiveFlag::Status {
        field: "status",
        active: "active",
        inactive: "inactive",
    }),
    delete: DeleteStrategy::Deactivate,
    order_by: Some("full_name"),
};

impl Entity for Judge {
    fn config() -> &'static EntityConfig {
        &CONFIG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_to_the_flag_values() {
        assert_eq!(
            serde_json::to_value(JudgeStatus::Active).unwrap(),
            serde_json::json!("active")
        );
        assert_eq!(
            serde_json::to_value(JudgeStatus::Inactive).unwrap(),
            serde_json::json!("inactive")
        );
    }

    #[test]
    fn specialty_tags_use_snake_case() {
        assert_eq!(
            serde_json::to_value(JudgeSpecialty::FreeSkating).unwrap(),
            serde_json::json!("free_skating")
        );
    }
}
