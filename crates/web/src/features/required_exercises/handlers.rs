use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::required_exercise::{
        CreateRequiredExerciseRequest, RequiredExerciseResponse, UpdateRequiredExerciseRequest,
    },
};
use validator::Validate;

use crate::error::WebResult;
use crate::middleware::auth::Actor;

use super::services;

#[utoipa::path(
    get,
    path = "/api/required-exercises",
    responses(
        (status = 200, description = "List all required exercises", body = Vec<RequiredExerciseResponse>)
    ),
    tag = "required-exercises"
)]
pub async fn list_required_exercises(State(db): State<Database>) -> WebResult<Response> {
    let exercises = services::list_required_exercises(&db).await?;
    let response: Vec<RequiredExerciseResponse> = exercises
        .into_iter()
        .map(RequiredExerciseResponse::from)
        .collect();
    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/required-exercises/{id}",
    params(("id" = String, Path, description = "Required exercise id")),
    responses(
        (status = 200, description = "Required exercise found", body = RequiredExerciseResponse),
        (status = 404, description = "Required exercise not found")
    ),
    tag = "required-exercises"
)]
pub async fn get_required_exercise(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let exercise = services::get_required_exercise(&db, &id).await?;
    Ok(Json(RequiredExerciseResponse::from(exercise)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/required-exercises",
    request_body = CreateRequiredExerciseRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Required exercise created", body = RequiredExerciseResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Abbreviation already in use")
    ),
    tag = "required-exercises"
)]
pub async fn create_required_exercise(
    State(db): State<Database>,
    Actor(actor): Actor,
    Json(req): Json<CreateRequiredExerciseRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let exercise = services::create_required_exercise(&db, req, &actor).await?;
    Ok((
        StatusCode::CREATED,
        Json(RequiredExerciseResponse::from(exercise)),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/required-exercises/{id}",
    params(("id" = String, Path, description = "Required exercise id")),
    request_body = UpdateRequiredExerciseRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Required exercise updated", body = RequiredExerciseResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Required exercise not found"),
        (status = 409, description = "Abbreviation already in use")
    ),
    tag = "required-exercises"
)]
pub async fn update_required_exercise(
    State(db): State<Database>,
    Path(id): Path<String>,
    Actor(actor): Actor,
    Json(req): Json<UpdateRequiredExerciseRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let exercise = services::update_required_exercise(&db, &id, req, &actor).await?;
    Ok(Json(RequiredExerciseResponse::from(exercise)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/required-exercises/{id}",
    params(("id" = String, Path, description = "Required exercise id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Required exercise deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Required exercise not found")
    ),
    tag = "required-exercises"
)]
pub async fn delete_required_exercise(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    services::delete_required_exercise(&db, &id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
