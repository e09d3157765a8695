use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_required_exercise, delete_required_exercise, get_required_exercise,
    list_required_exercises, update_required_exercise,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_required_exercise))
        .route("/:id", put(update_required_exercise))
        .route("/:id", delete(delete_required_exercise))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_required_exercises))
        .route("/:id", get(get_required_exercise))
        .merge(protected)
}
