//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::FromRef, middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::ErrorResponse;
use super::modules::categories::{self, CategoryRequest, CategoryResponse, CategoryState};
use super::modules::health::{self, ComponentHealth, HealthResponse, HealthState};
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use super::modules::products::{self, ProductRequest, ProductResponse, ProductState};
use super::modules::request_id::request_id_middleware;
use crate::application::{CategoryService, ProductService};
use crate::config::PaginationConfig;
use crate::domain::RepositoryProvider;
use crate::shared::PaginationResponse;

/// State shared by every route. Handlers pull their own slice of it
/// through `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub categories: Arc<CategoryService>,
    pub products: Arc<ProductService>,
    pub pagination: PaginationConfig,
    pub db: DatabaseConnection,
    pub started_at: Arc<Instant>,
}

impl ApiState {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        db: DatabaseConnection,
        pagination: PaginationConfig,
    ) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(repos.clone())),
            products: Arc::new(ProductService::new(repos)),
            pagination,
            db,
            started_at: Arc::new(Instant::now()),
        }
    }
}

impl FromRef<ApiState> for CategoryState {
    fn from_ref(s: &ApiState) -> Self {
        CategoryState {
            service: Arc::clone(&s.categories),
            pagination: s.pagination,
        }
    }
}

impl FromRef<ApiState> for ProductState {
    fn from_ref(s: &ApiState) -> Self {
        ProductState {
            service: Arc::clone(&s.products),
            pagination: s.pagination,
        }
    }
}

impl FromRef<ApiState> for HealthState {
    fn from_ref(s: &ApiState) -> Self {
        HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        categories::list_categories,
        categories::create_category,
        categories::get_category,
        categories::update_category,
        categories::delete_category,
        products::list_products,
        products::create_product,
        products::get_product,
        products::update_product,
        products::delete_product,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            ComponentHealth,
            CategoryRequest,
            CategoryResponse,
            PaginationResponse<CategoryResponse>,
            ProductRequest,
            ProductResponse,
            PaginationResponse<ProductResponse>,
        )
    ),
    tags(
        (name = "Health", description = "Service and database health"),
        (name = "Categories", description = "Category CRUD and paged listing"),
        (name = "Products", description = "Product CRUD and paged listing"),
    ),
    info(
        title = "Catalog Service API",
        version = "1.0.0",
        description = "REST API for a product catalog of categories and products",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// `/metrics` is mounted only when a Prometheus recorder handle is given.
pub fn create_api_router(state: ApiState, metrics: Option<PrometheusHandle>) -> Router {
    let category_routes = Router::new()
        .route(
            "/",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        );

    let product_routes = Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes =
        SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());

    let mut router = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/categories", category_routes)
        .nest("/api/products", product_routes)
        .with_state(state)
        .merge(swagger_routes);

    if let Some(handle) = metrics {
        router = router.merge(
            Router::new()
                .route("/metrics", get(prometheus_metrics))
                .with_state(MetricsState { handle }),
        );
    }

    router
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, Response, StatusCode};
    use serde_json::{json, Value};
    use tower::Service;

    use crate::infrastructure::database::connect_in_memory;
    use crate::infrastructure::SeaOrmRepositoryProvider;

    async fn app() -> Router {
        let db = connect_in_memory().await;
        let repos = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        create_api_router(
            ApiState::new(repos, db, PaginationConfig::default()),
            None,
        )
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header("content-type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        app.clone()
            .into_service()
            .call(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(resp: Response<Body>) -> axum::body::Bytes {
        axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    async fn json_body(resp: Response<Body>) -> Value {
        serde_json::from_slice(&body_bytes(resp).await).unwrap()
    }

    async fn create_category(app: &Router, name: &str) -> Value {
        let resp = send(app, "POST", "/api/categories", Some(json!({ "name": name }))).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        json_body(resp).await
    }

    #[tokio::test]
    async fn list_uses_default_paging() {
        let app = app().await;

        let resp = send(&app, "GET", "/api/categories", None).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["pageNumber"], 0);
        assert_eq!(body["pageSize"], 10);
        assert_eq!(body["totalElements"], 0);
        assert_eq!(body["totalPages"], 0);
        assert_eq!(body["hasNextPage"], false);
        assert_eq!(body["hasPreviousPage"], false);
        assert_eq!(body["content"], json!([]));
    }

    #[tokio::test]
    async fn create_then_get_category() {
        let app = app().await;

        let created = create_category(&app, "Books").await;
        let id = created["id"].as_i64().unwrap();
        assert_eq!(created["name"], "Books");

        let resp = send(&app, "GET", &format!("/api/categories/{id}"), None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let fetched = json_body(resp).await;
        assert_eq!(fetched["id"], created["id"]);
        assert_eq!(fetched["name"], "Books");
    }

    #[tokio::test]
    async fn missing_category_is_404_with_empty_body() {
        let app = app().await;

        let resp = send(&app, "GET", "/api/categories/42", None).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(body_bytes(resp).await.is_empty());
    }

    #[tokio::test]
    async fn update_missing_category_is_404() {
        let app = app().await;

        let resp = send(
            &app,
            "PUT",
            "/api/categories/7",
            Some(json!({ "name": "Ghost" })),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let list = json_body(send(&app, "GET", "/api/categories", None).await).await;
        assert_eq!(list["totalElements"], 0);
    }

    #[tokio::test]
    async fn delete_returns_204_then_404() {
        let app = app().await;
        let id = create_category(&app, "Toys").await["id"].as_i64().unwrap();

        let resp = send(&app, "DELETE", &format!("/api/categories/{id}"), None).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = send(&app, "GET", &format!("/api/categories/{id}"), None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let resp = send(&app, "DELETE", &format!("/api/categories/{id}"), None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn zero_page_size_is_400() {
        let app = app().await;

        let resp = send(&app, "GET", "/api/products?page=0&size=0", None).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(resp).await["error"].is_string());
    }

    #[tokio::test]
    async fn oversized_size_is_capped_to_max() {
        let app = app().await;
        create_category(&app, "Books").await;

        let resp = send(&app, "GET", "/api/categories?size=101", None).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["pageSize"], 100);
        assert_eq!(body["totalElements"], 1);
        assert_eq!(body["totalPages"], 1);
    }

    #[tokio::test]
    async fn huge_page_number_is_empty_page() {
        let app = app().await;
        create_category(&app, "Books").await;

        let resp = send(
            &app,
            "GET",
            "/api/categories?page=1000000000000000000&size=10",
            None,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["content"], json!([]));
        assert_eq!(body["totalElements"], 1);
        assert_eq!(body["hasNextPage"], false);
        assert_eq!(body["hasPreviousPage"], true);
    }

    #[tokio::test]
    async fn blank_name_is_422() {
        let app = app().await;

        let resp = send(&app, "POST", "/api/categories", Some(json!({ "name": "" }))).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn paging_over_twenty_five_products() {
        let app = app().await;
        for i in 0..25 {
            let resp = send(
                &app,
                "POST",
                "/api/products",
                Some(json!({ "name": format!("Product {i}") })),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let first = json_body(send(&app, "GET", "/api/products?page=0&size=10", None).await).await;
        assert_eq!(first["totalPages"], 3);
        assert_eq!(first["totalElements"], 25);
        assert_eq!(first["hasPreviousPage"], false);
        assert_eq!(first["hasNextPage"], true);
        assert_eq!(first["content"].as_array().unwrap().len(), 10);

        let last = json_body(send(&app, "GET", "/api/products?page=2&size=10", None).await).await;
        assert_eq!(last["content"].as_array().unwrap().len(), 5);
        assert_eq!(last["hasPreviousPage"], true);
        assert_eq!(last["hasNextPage"], false);
        assert_eq!(last["content"][0]["name"], "Product 20");

        let beyond = json_body(send(&app, "GET", "/api/products?page=9&size=10", None).await).await;
        assert_eq!(beyond["content"], json!([]));
        assert_eq!(beyond["hasNextPage"], false);
    }

    #[tokio::test]
    async fn product_with_unknown_category_is_400() {
        let app = app().await;

        let resp = send(
            &app,
            "POST",
            "/api/products",
            Some(json!({ "name": "Orphan", "categoryId": 99 })),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn deleting_category_detaches_its_products() {
        let app = app().await;
        let category_id = create_category(&app, "Garden").await["id"].as_i64().unwrap();
        let resp = send(
            &app,
            "POST",
            "/api/products",
            Some(json!({ "name": "Rake", "categoryId": category_id })),
        )
        .await;
        let product = json_body(resp).await;
        assert_eq!(product["categoryId"], category_id);

        let resp = send(
            &app,
            "DELETE",
            &format!("/api/categories/{category_id}"),
            None,
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = send(&app, "GET", &format!("/api/products/{}", product["id"]), None).await;
        assert_eq!(json_body(resp).await["categoryId"], Value::Null);
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let app = app().await;

        let resp = send(&app, "GET", "/health", None).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn openapi_document_lists_resources() {
        let app = app().await;

        let resp = send(&app, "GET", "/api-docs/openapi.json", None).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let doc = json_body(resp).await;
        assert!(doc["paths"]["/api/categories"].is_object());
        assert!(doc["paths"]["/api/products/{id}"].is_object());
    }
}
