use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::entry::{CreateEntryRequest, EntryResponse, UpdateEntryRequest},
    services::entries::{SelectionOptions, SelectionState},
};
use validator::Validate;

use crate::error::WebResult;
use crate::middleware::auth::Actor;

use super::services;

#[utoipa::path(
    get,
    path = "/api/entries",
    responses(
        (status = 200, description = "List all entries", body = Vec<EntryResponse>)
    ),
    tag = "entries"
)]
pub async fn list_entries(State(db): State<Database>) -> WebResult<Response> {
    let entries = services::list_entries(&db).await?;
    let response: Vec<EntryResponse> = entries.into_iter().map(EntryResponse::from).collect();
    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/entries/options",
    params(
        ("team" = Option<String>, Query, description = "Selected team id"),
        ("modality" = Option<String>, Query, description = "Selected modality id"),
        ("category" = Option<String>, Query, description = "Selected category id")
    ),
    responses(
        (status = 200, description = "Filtered candidate lists for the entry form", body = SelectionOptions)
    ),
    tag = "entries"
)]
pub async fn entry_options(
    State(db): State<Database>,
    Query(state): Query<SelectionState>,
) -> WebResult<Response> {
    let options = services::entry_options(&db, &state).await?;
    Ok(Json(options).into_response())
}

#[utoipa::path(
    get,
    path = "/api/entries/{id}",
    params(("id" = String, Path, description = "Entry id")),
    responses(
        (status = 200, description = "Entry found", body = EntryResponse),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn get_entry(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let entry = services::get_entry(&db, &id).await?;
    Ok(Json(EntryResponse::from(entry)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/entries",
    request_body = CreateEntryRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Entry created", body = EntryResponse),
        (status = 400, description = "Validation error or unresolvable reference"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "entries"
)]
pub async fn create_entry(
    State(db): State<Database>,
    Actor(actor): Actor,
    Json(req): Json<CreateEntryRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let entry = services::create_entry(&db, req.into(), &actor).await?;
    Ok((StatusCode::CREATED, Json(EntryResponse::from(entry))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/entries/{id}",
    params(("id" = String, Path, description = "Entry id")),
    request_body = UpdateEntryRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Entry updated", body = EntryResponse),
        (status = 400, description = "Validation error or unresolvable reference"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn update_entry(
    State(db): State<Database>,
    Path(id): Path<String>,
    Actor(actor): Actor,
    Json(req): Json<UpdateEntryRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let entry = services::update_entry(&db, &id, req.into(), &actor).await?;
    Ok(Json(EntryResponse::from(entry)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/entries/{id}",
    params(("id" = String, Path, description = "Entry id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn delete_entry(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    services::delete_entry(&db, &id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
