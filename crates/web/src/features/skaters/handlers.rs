use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use storage::{
    Database,
    dto::skater::{
        CreateSkaterRequest, SkaterResponse, UpdateSkaterRequest, UploadDocumentRequest,
        UploadDocumentResponse,
    },
    files::FileStorage,
};
use validator::Validate;

use crate::error::{WebError, WebResult};
use crate::middleware::auth::Actor;

use super::services;

#[utoipa::path(
    get,
    path = "/api/skaters",
    responses(
        (status = 200, description = "List all skaters", body = Vec<SkaterResponse>)
    ),
    tag = "skaters"
)]
pub async fn list_skaters(State(db): State<Database>) -> WebResult<Response> {
    let skaters = services::list_skaters(&db).await?;
    let response: Vec<SkaterResponse> = skaters.into_iter().map(SkaterResponse::from).collect();
    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/skaters/{id}",
    params(("id" = String, Path, description = "Skater id")),
    responses(
        (status = 200, description = "Skater found", body = SkaterResponse),
        (status = 404, description = "Skater not found")
    ),
    tag = "skaters"
)]
pub async fn get_skater(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let skater = services::get_skater(&db, &id).await?;
    Ok(Json(SkaterResponse::from(skater)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/skaters",
    request_body = CreateSkaterRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Skater created", body = SkaterResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "National id already registered")
    ),
    tag = "skaters"
)]
pub async fn create_skater(
    State(db): State<Database>,
    Actor(actor): Actor,
    Json(req): Json<CreateSkaterRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let skater = services::create_skater(&db, req, &actor).await?;
    Ok((StatusCode::CREATED, Json(SkaterResponse::from(skater))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/skaters/{id}",
    params(("id" = String, Path, description = "Skater id")),
    request_body = UpdateSkaterRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Skater updated", body = SkaterResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Skater not found"),
        (status = 409, description = "National id already registered")
    ),
    tag = "skaters"
)]
pub async fn update_skater(
    State(db): State<Database>,
    Path(id): Path<String>,
    Actor(actor): Actor,
    Json(req): Json<UpdateSkaterRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let skater = services::update_skater(&db, &id, req, &actor).await?;
    Ok(Json(SkaterResponse::from(skater)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/skaters/{id}",
    params(("id" = String, Path, description = "Skater id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Skater deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Skater not found")
    ),
    tag = "skaters"
)]
pub async fn delete_skater(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    services::delete_skater(&db, &id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/skaters/{id}/documents",
    params(("id" = String, Path, description = "Skater id")),
    request_body = UploadDocumentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Document stored", body = UploadDocumentResponse),
        (status = 400, description = "Validation error or undecodable payload"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Skater not found")
    ),
    tag = "skaters"
)]
pub async fn upload_skater_document(
    State(db): State<Database>,
    Path(id): Path<String>,
    Actor(actor): Actor,
    Extension(files): Extension<Arc<dyn FileStorage>>,
    Json(req): Json<UploadDocumentRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let bytes = BASE64
        .decode(&req.content_base64)
        .map_err(|_| WebError::BadRequest("Document content is not valid base64".to_string()))?;

    let url = services::upload_document(
        &db,
        files.as_ref(),
        &id,
        req.kind,
        &req.filename,
        &bytes,
        &actor,
    )
    .await?;
    Ok(Json(UploadDocumentResponse { url }).into_response())
}
