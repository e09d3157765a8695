use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_skater, delete_skater, get_skater, list_skaters, update_skater, upload_skater_document,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_skater))
        .route("/:id", put(update_skater))
        .route("/:id", delete(delete_skater))
        .route("/:id/documents", post(upload_skater_document))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_skaters))
        .route("/:id", get(get_skater))
        .merge(protected)
}
