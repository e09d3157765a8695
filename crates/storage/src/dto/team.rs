use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::common::{validate_state, validate_upper_alnum};
use crate::entity::Stored;
use crate::models::Team;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(length(equal = 3, message = "Code must be exactly 3 characters"))]
    #[validate(custom(function = "validate_upper_alnum"))]
    pub code: String,

    #[validate(length(min = 1, max = 255, message = "Responsible is required"))]
    pub responsible: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 20))]
    pub phone: String,

    #[validate(length(min = 1, max = 255))]
    pub city: String,

    #[validate(custom(function = "validate_state"))]
    pub state: String,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl CreateTeamRequest {
    pub fn into_model(self, actor: &str) -> Team {
        Team {
            name: self.name,
            code: self.code,
            responsible: self.responsible,
            email: self.email,
            phone: self.phone,
            city: self.city,
            state: self.state,
            notes: self.notes,
            created_at: Utc::now(),
            created_by: actor.to_string(),
            updated_at: None,
            updated_by: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTeamRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(equal = 3))]
    #[validate(custom(function = "validate_upper_alnum"))]
    pub code: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub responsible: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 20))]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub city: Option<String>,

    #[validate(custom(function = "validate_state"))]
    pub state: Option<String>,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl UpdateTeamRequest {
    pub fn apply(self, mut team: Team, actor: &str) -> Team {
        if let Some(name) = self.name {
            team.name = name;
        }
        if let Some(code) = self.code {
            team.code = code;
        }
        if let Some(responsible) = self.responsible {
            team.responsible = responsible;
        }
        if let Some(email) = self.email {
            team.email = email;
        }
        if let Some(phone) = self.phone {
            team.phone = phone;
        }
        if let Some(city) = self.city {
            team.city = city;
        }
        if let Some(state) = self.state {
            team.state = state;
        }
        if self.notes.is_some() {
            team.notes = self.notes;
        }
        team.updated_at = Some(Utc::now());
        team.updated_by = Some(actor.to_string());
        team
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
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

impl From<Stored<Team>> for TeamResponse {
    fn from(stored: Stored<Team>) -> Self {
        let team = stored.record;
        Self {
            id: stored.id,
            name: team.name,
            code: team.code,
            responsible: team.responsible,
            email: team.email,
            phone: team.phone,
            city: team.city,
            state: team.state,
            notes: team.notes,
            created_at: team.created_at,
            created_by: team.created_by,
            updated_at: team.updated_at,
            updated_by: team.updated_by,
        }
    }
}
