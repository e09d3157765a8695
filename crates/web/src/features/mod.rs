pub mod age_brackets;
pub mod categories;
pub mod entries;
pub mod judges;
pub mod modalities;
pub mod required_exercises;
pub mod skaters;
pub mod teams;
pub mod tournaments;

use axum::Router;
use storage::Database;

use crate::middleware::auth::ApiKeys;

pub fn api_router(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .nest("/teams", teams::routes::routes(api_keys.clone()))
        .nest("/skaters", skaters::routes::routes(api_keys.clone()))
        .nest("/judges", judges::routes::routes(api_keys.clone()))
        .nest("/modalities", modalities::routes::routes(api_keys.clone()))
        .nest("/categories", categories::routes::routes(api_keys.clone()))
        .nest(
            "/age-brackets",
            age_brackets::routes::routes(api_keys.clone()),
        )
        .nest(
            "/required-exercises",
            required_exercises::routes::routes(api_keys.clone()),
        )
        .nest("/tournaments", tournaments::routes::routes(api_keys.clone()))
        .nest("/entries", entries::routes::routes(api_keys))
}
