use std::collections::HashSet;
use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::error::WebError;

/// Bearer API keys guarding the mutating routes.
#[derive(Clone)]
pub struct ApiKeys {
    keys: HashSet<String>,
}

impl ApiKeys {
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self { keys }
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

pub async fn require_auth(
    State(api_keys): State<ApiKeys>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let authorized = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| api_keys.is_valid(token));

    if authorized {
        Ok(next.run(req).await)
    } else {
        tracing::warn!("Invalid API key attempt");
        Err(WebError::Unauthorized)
    }
}

/// Identity of the current user, taken from the authentication
/// collaborator's header. Absent or unreadable values fall back to the
/// sentinel `"system"`, which is what gets stamped on
/// created_by/updated_by fields.
pub struct Actor(pub String);

const ACTOR_HEADER: &str = "x-actor-email";
const SYSTEM_ACTOR: &str = "system";

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Actor {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor = parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .unwrap_or(SYSTEM_ACTOR)
            .to_string();
        Ok(Actor(actor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_trimmed_and_empty_entries_dropped() {
        let keys = ApiKeys::from_comma_separated(" key-a , key-b ,, ");
        assert!(keys.is_valid("key-a"));
        assert!(keys.is_valid("key-b"));
        assert!(!keys.is_valid(""));
        assert!(!keys.is_valid("key-c"));
    }

    #[test]
    fn empty_configuration_rejects_everything() {
        let keys = ApiKeys::from_comma_separated("");
        assert!(!keys.is_valid("anything"));
    }
}
