use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_modality, delete_modality, get_modality, list_modalities, update_modality,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_modality))
        .route("/:id", put(update_modality))
        .route("/:id", delete(delete_modality))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_modalities))
        .route("/:id", get(get_modality))
        .merge(protected)
}
