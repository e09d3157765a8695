use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::tournament::{CreateTournamentRequest, TournamentResponse, UpdateTournamentRequest},
};
use validator::Validate;

use crate::error::WebResult;
use crate::middleware::auth::Actor;

use super::services;

#[utoipa::path(
    get,
    path = "/api/tournaments",
    responses(
        (status = 200, description = "List all tournaments", body = Vec<TournamentResponse>)
    ),
    tag = "tournaments"
)]
pub async fn list_tournaments(State(db): State<Database>) -> WebResult<Response> {
    let tournaments = services::list_tournaments(&db).await?;
    let response: Vec<TournamentResponse> = tournaments
        .into_iter()
        .map(TournamentResponse::from)
        .collect();
    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{id}",
    params(("id" = String, Path, description = "Tournament id")),
    responses(
        (status = 200, description = "Tournament found", body = TournamentResponse),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn get_tournament(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let tournament = services::get_tournament(&db, &id).await?;
    Ok(Json(TournamentResponse::from(tournament)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/tournaments",
    request_body = CreateTournamentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Tournament created", body = TournamentResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "tournaments"
)]
pub async fn create_tournament(
    State(db): State<Database>,
    Actor(actor): Actor,
    Json(req): Json<CreateTournamentRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let tournament = services::create_tournament(&db, req, &actor).await?;
    Ok((StatusCode::CREATED, Json(TournamentResponse::from(tournament))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/tournaments/{id}",
    params(("id" = String, Path, description = "Tournament id")),
    request_body = UpdateTournamentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Tournament updated", body = TournamentResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn update_tournament(
    State(db): State<Database>,
    Path(id): Path<String>,
    Actor(actor): Actor,
    Json(req): Json<UpdateTournamentRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let tournament = services::update_tournament(&db, &id, req, &actor).await?;
    Ok(Json(TournamentResponse::from(tournament)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/tournaments/{id}",
    params(("id" = String, Path, description = "Tournament id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Tournament deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn delete_tournament(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    services::delete_tournament(&db, &id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
