use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::ListParams,
    dto::judge::{CreateJudgeRequest, JudgeResponse, UpdateJudgeRequest},
};
use validator::Validate;

use crate::error::WebResult;
use crate::middleware::auth::Actor;

use super::services;

#[utoipa::path(
    get,
    path = "/api/judges",
    params(ListParams),
    responses(
        (status = 200, description = "List all judges", body = Vec<JudgeResponse>)
    ),
    tag = "judges"
)]
pub async fn list_judges(
    State(db): State<Database>,
    Query(params): Query<ListParams>,
) -> WebResult<Response> {
    let judges = services::list_judges(&db, params.active).await?;
    let response: Vec<JudgeResponse> = judges.into_iter().map(JudgeResponse::from).collect();
    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/judges/{id}",
    params(("id" = String, Path, description = "Judge id")),
    responses(
        (status = 200, description = "Judge found", body = JudgeResponse),
        (status = 404, description = "Judge not found")
    ),
    tag = "judges"
)]
pub async fn get_judge(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let judge = services::get_judge(&db, &id).await?;
    Ok(Json(JudgeResponse::from(judge)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/judges",
    request_body = CreateJudgeRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Judge created", body = JudgeResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "judges"
)]
pub async fn create_judge(
    State(db): State<Database>,
    Actor(actor): Actor,
    Json(req): Json<CreateJudgeRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let judge = services::create_judge(&db, req, &actor).await?;
    Ok((StatusCode::CREATED, Json(JudgeResponse::from(judge))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/judges/{id}",
    params(("id" = String, Path, description = "Judge id")),
    request_body = UpdateJudgeRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Judge updated", body = JudgeResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Judge not found")
    ),
    tag = "judges"
)]
pub async fn update_judge(
    State(db): State<Database>,
    Path(id): Path<String>,
    Actor(actor): Actor,
    Json(req): Json<UpdateJudgeRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let judge = services::update_judge(&db, &id, req, &actor).await?;
    Ok(Json(JudgeResponse::from(judge)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/judges/{id}",
    params(("id" = String, Path, description = "Judge id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Judge deactivated"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Judge not found")
    ),
    tag = "judges"
)]
pub async fn delete_judge(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    services::delete_judge(&db, &id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
