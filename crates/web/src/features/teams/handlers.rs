use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::team::{CreateTeamRequest, TeamResponse, UpdateTeamRequest},
};
use validator::Validate;

use crate::error::WebResult;
use crate::middleware::auth::Actor;

use super::services;

#[utoipa::path(
    get,
    path = "/api/teams",
    responses(
        (status = 200, description = "List all teams", body = Vec<TeamResponse>)
    ),
    tag = "teams"
)]
pub async fn list_teams(State(db): State<Database>) -> WebResult<Response> {
    let teams = services::list_teams(&db).await?;
    let response: Vec<TeamResponse> = teams.into_iter().map(TeamResponse::from).collect();
    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    params(("id" = String, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team found", body = TeamResponse),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn get_team(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let team = services::get_team(&db, &id).await?;
    Ok(Json(TeamResponse::from(team)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/teams",
    request_body = CreateTeamRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Team created", body = TeamResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "teams"
)]
pub async fn create_team(
    State(db): State<Database>,
    Actor(actor): Actor,
    Json(req): Json<CreateTeamRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let team = services::create_team(&db, req, &actor).await?;
    Ok((StatusCode::CREATED, Json(TeamResponse::from(team))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    params(("id" = String, Path, description = "Team id")),
    request_body = UpdateTeamRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Team updated", body = TeamResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn update_team(
    State(db): State<Database>,
    Path(id): Path<String>,
    Actor(actor): Actor,
    Json(req): Json<UpdateTeamRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let team = services::update_team(&db, &id, req, &actor).await?;
    Ok(Json(TeamResponse::from(team)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    params(("id" = String, Path, description = "Team id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn delete_team(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    services::delete_team(&db, &id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
