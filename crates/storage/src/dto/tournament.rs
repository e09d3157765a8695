use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::dto::common::validate_state;
use crate::entity::Stored;
use crate::models::Tournament;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_registration_window"))]
pub struct CreateTournamentRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    pub event_date: NaiveDate,

    pub max_registration_date: NaiveDate,

    #[validate(length(min = 1, max = 255))]
    pub city: String,

    #[validate(custom(function = "validate_state"))]
    pub state: String,
}

fn validate_registration_window(req: &CreateTournamentRequest) -> Result<(), ValidationError> {
    if req.max_registration_date > req.event_date {
        return Err(ValidationError::new("registration_after_event"));
    }
    Ok(())
}

impl CreateTournamentRequest {
    pub fn into_model(self, actor: &str) -> Tournament {
        Tournament {
            name: self.name,
            event_date: self.event_date,
            max_registration_date: self.max_registration_date,
            city: self.city,
            state: self.state,
            created_at: Utc::now(),
            created_by: actor.to_string(),
            updated_at: None,
            updated_by: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTournamentRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub event_date: Option<NaiveDate>,

    pub max_registration_date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 255))]
    pub city: Option<String>,

    #[validate(custom(function = "validate_state"))]
    pub state: Option<String>,
}

impl UpdateTournamentRequest {
    pub fn apply(self, mut tournament: Tournament, actor: &str) -> Tournament {
        if let Some(name) = self.name {
            tournament.name = name;
        }
        if let Some(event_date) = self.event_date {
            tournament.event_date = event_date;
        }
        if let Some(max_registration_date) = self.max_registration_date {
            tournament.max_registration_date = max_registration_date;
        }
        if let Some(city) = self.city {
            tournament.city = city;
        }
        if let Some(state) = self.state {
            tournament.state = state;
        }
        tournament.updated_at = Some(Utc::now());
        tournament.updated_by = Some(actor.to_string());
        tournament
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TournamentResponse {
    pub id: String,
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

impl From<Stored<Tournament>> for TournamentResponse {
    fn from(stored: Stored<Tournament>) -> Self {
        let tournament = stored.record;
        Self {
            id: stored.id,
            name: tournament.name,
            event_date: tournament.event_date,
            max_registration_date: tournament.max_registration_date,
            city: tournament.city,
            state: tournament.state,
            created_at: tournament.created_at,
            created_by: tournament.created_by,
            updated_at: tournament.updated_at,
            updated_by: tournament.updated_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_deadline_cannot_pass_the_event() {
        let req = CreateTournamentRequest {
            name: "Copa Estadual".to_string(),
            event_date: NaiveDate::from_ymd_opt(2026, 10, 10).unwrap(),
            max_registration_date: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
            city: "Recife".to_string(),
            state: "PE".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
