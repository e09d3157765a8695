use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::age_bracket::{AgeBracketResponse, CreateAgeBracketRequest, UpdateAgeBracketRequest},
};
use validator::Validate;

use crate::error::WebResult;
use crate::middleware::auth::Actor;

use super::services;

#[utoipa::path(
    get,
    path = "/api/age-brackets",
    responses(
        (status = 200, description = "List all age brackets", body = Vec<AgeBracketResponse>)
    ),
    tag = "age-brackets"
)]
pub async fn list_age_brackets(State(db): State<Database>) -> WebResult<Response> {
    let brackets = services::list_age_brackets(&db).await?;
    let response: Vec<AgeBracketResponse> =
        brackets.into_iter().map(AgeBracketResponse::from).collect();
    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/age-brackets/{id}",
    params(("id" = String, Path, description = "Age bracket id")),
    responses(
        (status = 200, description = "Age bracket found", body = AgeBracketResponse),
        (status = 404, description = "Age bracket not found")
    ),
    tag = "age-brackets"
)]
pub async fn get_age_bracket(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let bracket = services::get_age_bracket(&db, &id).await?;
    Ok(Json(AgeBracketResponse::from(bracket)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/age-brackets",
    request_body = CreateAgeBracketRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Age bracket created", body = AgeBracketResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Code already in use")
    ),
    tag = "age-brackets"
)]
pub async fn create_age_bracket(
    State(db): State<Database>,
    Actor(actor): Actor,
    Json(req): Json<CreateAgeBracketRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let bracket = services::create_age_bracket(&db, req, &actor).await?;
    Ok((StatusCode::CREATED, Json(AgeBracketResponse::from(bracket))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/age-brackets/{id}",
    params(("id" = String, Path, description = "Age bracket id")),
    request_body = UpdateAgeBracketRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Age bracket updated", body = AgeBracketResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Age bracket not found"),
        (status = 409, description = "Code already in use")
    ),
    tag = "age-brackets"
)]
pub async fn update_age_bracket(
    State(db): State<Database>,
    Path(id): Path<String>,
    Actor(actor): Actor,
    Json(req): Json<UpdateAgeBracketRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let bracket = services::update_age_bracket(&db, &id, req, &actor).await?;
    Ok(Json(AgeBracketResponse::from(bracket)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/age-brackets/{id}",
    params(("id" = String, Path, description = "Age bracket id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Age bracket deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Age bracket not found")
    ),
    tag = "age-brackets"
)]
pub async fn delete_age_bracket(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    services::delete_age_bracket(&db, &id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
