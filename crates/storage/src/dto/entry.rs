use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::entity::Stored;
use crate::models::Entry;
use crate::services::entries::EntrySelection;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEntryRequest {
    #[validate(length(min = 1, message = "Team is required"))]
    pub team_id: String,

    #[validate(length(min = 1, message = "Skater is required"))]
    pub skater_id: String,

    #[validate(length(min = 1, message = "Modality is required"))]
    pub modality_id: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category_id: String,

    #[validate(length(min = 1, message = "Age bracket is required"))]
    pub age_bracket_id: String,
}

impl From<CreateEntryRequest> for EntrySelection {
    fn from(req: CreateEntryRequest) -> Self {
        Self {
            team_id: req.team_id,
            skater_id: req.skater_id,
            modality_id: req.modality_id,
            category_id: req.category_id,
            age_bracket_id: req.age_bracket_id,
        }
    }
}

/// Editing an entry re-submits the full selection; the same resolution
/// and validation run again against the current parent collections.
pub type UpdateEntryRequest = CreateEntryRequest;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntryResponse {
    pub id: String,
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

impl From<Stored<Entry>> for EntryResponse {
    fn from(stored: Stored<Entry>) -> Self {
        let entry = stored.record;
        Self {
            id: stored.id,
            team_id: entry.team_id,
            team_name: entry.team_name,
            skater_id: entry.skater_id,
            skater_name: entry.skater_name,
            modality_id: entry.modality_id,
            modality_name: entry.modality_name,
            category_id: entry.category_id,
            category_name: entry.category_name,
            age_bracket_id: entry.age_bracket_id,
            age_bracket_label: entry.age_bracket_label,
            created_at: entry.created_at,
            created_by: entry.created_by,
            updated_at: entry.updated_at,
            updated_by: entry.updated_by,
        }
    }
}
