use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::common::validate_state;
use crate::entity::Stored;
use crate::models::{Judge, JudgeLevel, JudgeSpecialty, JudgeStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateJudgeRequest {
    #[validate(length(min = 1, max = 255, message = "Full name is required"))]
    pub full_name: String,

    #[validate(length(min = 1, max = 50))]
    pub license_number: String,

    pub level: JudgeLevel,

    #[validate(length(min = 1, max = 255))]
    pub city: String,

    #[validate(custom(function = "validate_state"))]
    pub state: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 20))]
    pub phone: String,

    pub specialties: Vec<JudgeSpecialty>,
}

impl CreateJudgeRequest {
    pub fn into_model(self, actor: &str) -> Judge {
        Judge {
            full_name: self.full_name,
            license_number: self.license_number,
            level: self.level,
            city: self.city,
            state: self.state,
            email: self.email,
            phone: self.phone,
            specialties: self.specialties,
            status: JudgeStatus::Active,
            created_at: Utc::now(),
            created_by: actor.to_string(),
            updated_at: None,
            updated_by: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateJudgeRequest {
    #[validate(length(min = 1, max = 255))]
    pub full_name: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub license_number: Option<String>,

    pub level: Option<JudgeLevel>,

    #[validate(length(min = 1, max = 255))]
    pub city: Option<String>,

    #[validate(custom(function = "validate_state"))]
    pub state: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 20))]
    pub phone: Option<String>,

    pub specialties: Option<Vec<JudgeSpecialty>>,

    /// Reactivating a soft-deleted judge goes through here.
    pub status: Option<JudgeStatus>,
}

impl UpdateJudgeRequest {
    pub fn apply(self, mut judge: Judge, actor: &str) -> Judge {
        if let Some(full_name) = self.full_name {
            judge.full_name = full_name;
        }
        if let Some(license_number) = self.license_number {
            judge.license_number = license_number;
        }
        if let Some(level) = self.level {
            judge.level = level;
        }
        if let Some(city) = self.city {
            judge.city = city;
        }
        if let Some(state) = self.state {
            judge.state = state;
        }
        if let Some(email) = self.email {
            judge.email = email;
        }
        if let Some(phone) = self.phone {
            judge.phone = phone;
        }
        if let Some(specialties) = self.specialties {
            judge.specialties = specialties;
        }
        if let Some(status) = self.status {
            judge.status = status;
        }
        judge.updated_at = Some(Utc::now());
        judge.updated_by = Some(actor.to_string());
        judge
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JudgeResponse {
    pub id: String,
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

impl From<Stored<Judge>> for JudgeResponse {
    fn from(stored: Stored<Judge>) -> Self {
        let judge = stored.record;
        Self {
            id: stored.id,
            full_name: judge.full_name,
            license_number: judge.license_number,
            level: judge.level,
            city: judge.city,
            state: judge.state,
            email: judge.email,
            phone: judge.phone,
            specialties: judge.specialties,
            status: judge.status,
            created_at: judge.created_at,
            created_by: judge.created_by,
            updated_at: judge.updated_at,
            updated_by: judge.updated_by,
        }
    }
}
