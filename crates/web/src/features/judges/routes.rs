use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{create_judge, delete_judge, get_judge, list_judges, update_judge};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_judge))
        .route("/:id", put(update_judge))
        .route("/:id", delete(delete_judge))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_judges))
        .route("/:id", get(get_judge))
        .merge(protected)
}
