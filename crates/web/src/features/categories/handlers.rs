use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::category::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest},
    dto::common::ListParams,
};
use validator::Validate;

use crate::error::WebResult;
use crate::middleware::auth::Actor;

use super::services;

#[utoipa::path(
    get,
    path = "/api/categories",
    params(ListParams),
    responses(
        (status = 200, description = "List all categories", body = Vec<CategoryResponse>)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(db): State<Database>,
    Query(params): Query<ListParams>,
) -> WebResult<Response> {
    let categories = services::list_categories(&db, params.active).await?;
    let response: Vec<CategoryResponse> =
        categories.into_iter().map(CategoryResponse::from).collect();
    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(("id" = String, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let category = services::get_category(&db, &id).await?;
    Ok(Json(CategoryResponse::from(category)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Code already in use")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(db): State<Database>,
    Actor(actor): Actor,
    Json(req): Json<CreateCategoryRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let category = services::create_category(&db, req, &actor).await?;
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(("id" = String, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Code already in use")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(db): State<Database>,
    Path(id): Path<String>,
    Actor(actor): Actor,
    Json(req): Json<UpdateCategoryRequest>,
) -> WebResult<Response> {
    req.validate()?;
    let category = services::update_category(&db, &id, req, &actor).await?;
    Ok(Json(CategoryResponse::from(category)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = String, Path, description = "Category id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    services::delete_category(&db, &id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
