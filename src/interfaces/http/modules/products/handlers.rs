//! Product REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{ProductRequest, ProductResponse};
use crate::application::ProductService;
use crate::config::PaginationConfig;
use crate::interfaces::http::common::{ErrorResponse, HttpError, PageQuery, ValidatedJson};
use crate::shared::PaginationResponse;

#[derive(Clone)]
pub struct ProductState {
    pub service: Arc<ProductService>,
    pub pagination: PaginationConfig,
}

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of products", body = PaginationResponse<ProductResponse>),
        (status = 400, description = "Page size of zero", body = ErrorResponse)
    )
)]
pub async fn list_products(
    State(state): State<ProductState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PaginationResponse<ProductResponse>>, HttpError> {
    let request = query.into_request(&state.pagination)?;
    let page = state.service.list_page(request).await?;
    Ok(Json(PaginationResponse::from(page).map(ProductResponse::from)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Created", body = ProductResponse),
        (status = 400, description = "Malformed body or unknown category", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<ProductState>,
    ValidatedJson(req): ValidatedJson<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), HttpError> {
    let created = state.service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_product(
    State(state): State<ProductState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductResponse>, HttpError> {
    let product = state.service.get_by_id(id).await?;
    Ok(Json(product.into()))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Updated", body = ProductResponse),
        (status = 400, description = "Unknown category", body = ErrorResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_product(
    State(state): State<ProductState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<ProductRequest>,
) -> Result<Json<ProductResponse>, HttpError> {
    let updated = state.service.update(id, req.into()).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_product(
    State(state): State<ProductState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, HttpError> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
