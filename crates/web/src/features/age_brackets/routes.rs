use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_age_bracket, delete_age_bracket, get_age_bracket, list_age_brackets, update_age_bracket,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_age_bracket))
        .route("/:id", put(update_age_bracket))
        .route("/:id", delete(delete_age_bracket))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_age_brackets))
        .route("/:id", get(get_age_bracket))
        .merge(protected)
}
