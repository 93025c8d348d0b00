//! Category REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{CategoryRequest, CategoryResponse};
use crate::application::CategoryService;
use crate::config::PaginationConfig;
use crate::interfaces::http::common::{ErrorResponse, HttpError, PageQuery, ValidatedJson};
use crate::shared::PaginationResponse;

/// State for the category routes
#[derive(Clone)]
pub struct CategoryState {
    pub service: Arc<CategoryService>,
    pub pagination: PaginationConfig,
}

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of categories", body = PaginationResponse<CategoryResponse>),
        (status = 400, description = "Page size of zero", body = ErrorResponse)
    )
)]
pub async fn list_categories(
    State(state): State<CategoryState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PaginationResponse<CategoryResponse>>, HttpError> {
    let request = query.into_request(&state.pagination)?;
    let page = state.service.list_page(request).await?;
    Ok(Json(PaginationResponse::from(page).map(CategoryResponse::from)))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Created", body = CategoryResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<CategoryState>,
    ValidatedJson(req): ValidatedJson<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), HttpError> {
    let created = state.service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = CategoryResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_category(
    State(state): State<CategoryState>,
    Path(id): Path<i32>,
) -> Result<Json<CategoryResponse>, HttpError> {
    let category = state.service.get_by_id(id).await?;
    Ok(Json(category.into()))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Updated", body = CategoryResponse),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn update_category(
    State(state): State<CategoryState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<CategoryRequest>,
) -> Result<Json<CategoryResponse>, HttpError> {
    let updated = state.service.update(id, req.into()).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Deleted; products in it are detached"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_category(
    State(state): State<CategoryState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, HttpError> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
