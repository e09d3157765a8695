use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_entry, delete_entry, entry_options, get_entry, list_entries, update_entry,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_entry))
        .route("/:id", put(update_entry))
        .route("/:id", delete(delete_entry))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    // "/options" before "/:id" so the literal segment wins.
    Router::new()
        .route("/", get(list_entries))
        .route("/options", get(entry_options))
        .route("/:id", get(get_entry))
        .merge(protected)
}
