use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::ListParams,
    dto::modality::{CreateModalityRequest, ModalityResponse, UpdateModalityRequest},
};
use validator::Validate;

use crate::error::WebResult;
use crate::middleware::auth::Actor;

use super::services;

#[utoipa::path(
    get,
    path = "/api/modalities",
    params(ListParams),
    responses(
        (status = 200, description = "List all modalities", body = Vec<ModalityResponse>)
    ),
    tag = "modalities"
)]
pub async fn list_modalities(
    State(db): State<Database>,
    Query(params): Query<ListParams>,
) -> WebResult<Response> {
    let modalities = services::list_modalities(&db, params.active).await?;
    let response: Vec<ModalityResponse> =
        modalities.into_iter().map(ModalityResponse::from).collect();
    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/modalities/{id}",
    params(("id" = String, Path, description = "Modality id")),
    responses(
        (status = 200, description = "Modality found", body = ModalityResponse),
        (status = 404, description = "Modality not found")
    ),
    tag = "modalities"
)]
pub async fn get_modality(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let modality = services::get_modality(&db, &id).await?;
    Ok(Json(ModalityResponse::from(modality)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/modalities",
    request_body = CreateModalityRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Modality created", body = ModalityResponse),
        (status = 400, description = "Validation error or unknown category"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Code already in use")
    ),
    tag = "modalities"
)]
pub async fn create_modality(
    State(db): State<Database>,
    Actor(actor): Actor,
    Json(req): Json<CreateModalityRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let modality = services::create_modality(&db, req, &actor).await?;
    Ok((StatusCode::CREATED, Json(ModalityResponse::from(modality))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/modalities/{id}",
    params(("id" = String, Path, description = "Modality id")),
    request_body = UpdateModalityRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Modality updated", body = ModalityResponse),
        (status = 400, description = "Validation error or unknown category"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Modality not found"),
        (status = 409, description = "Code already in use")
    ),
    tag = "modalities"
)]
pub async fn update_modality(
    State(db): State<Database>,
    Path(id): Path<String>,
    Actor(actor): Actor,
    Json(req): Json<UpdateModalityRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let modality = services::update_modality(&db, &id, req, &actor).await?;
    Ok(Json(ModalityResponse::from(modality)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/modalities/{id}",
    params(("id" = String, Path, description = "Modality id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Modality deactivated"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Modality not found")
    ),
    tag = "modalities"
)]
pub async fn delete_modality(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    services::delete_modality(&db, &id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
