use axum::{
    Router,
    http::{HeaderName, Request, Uri},
    routing::get,
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{error::AppError, state::AppState};

pub mod doc;
pub mod favorites;
pub mod health;
pub mod products;
pub mod users;

const REQUEST_ID: &str = "x-request-id";
const MAX_BODY_BYTES: usize = 1024 * 1024;
const MAX_IN_FLIGHT: usize = 100;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/products", products::router())
}

/// The whole service: `/health`, `/api`, `/docs`, the JSON 404 fallback and the middleware stack.
pub fn create_app(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID);
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            let request_id = request
                .headers()
                .get(REQUEST_ID)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id
            )
        })
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(route_not_found)
        .layer(trace_layer)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(ConcurrencyLimitLayer::new(MAX_IN_FLIGHT))
        .with_state(state)
}

async fn route_not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "no route");
    AppError::NotFound
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Method, StatusCode, header},
    };
    use serde_json::Value;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;

    // Never connects: every request below is answered before a query would run.
    fn app() -> Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unreachable")
            .unwrap();
        create_app(AppState::new(pool))
    }

    async fn send(method: Method, uri: &str, body: Option<&str>) -> (StatusCode, String, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, content_type, json)
    }

    fn assert_json_error(status: StatusCode, content_type: &str, body: &Value, expected: StatusCode) {
        assert_eq!(status, expected);
        assert!(content_type.starts_with("application/json"), "got {content_type}");
        assert!(body["error"].is_string(), "got {body}");
    }

    #[tokio::test]
    async fn malformed_user_id_is_a_json_bad_request() {
        let (status, content_type, body) =
            send(Method::GET, "/api/users/not-a-uuid/favorites", None).await;
        assert_json_error(status, &content_type, &body, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Bad Request"));
    }

    #[tokio::test]
    async fn malformed_favorite_id_is_a_json_bad_request() {
        let uri = format!("/api/users/{}/favorites/42", Uuid::new_v4());
        let (status, content_type, body) = send(Method::DELETE, &uri, None).await;
        assert_json_error(status, &content_type, &body, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn favorite_body_without_product_id_is_a_json_bad_request() {
        let uri = format!("/api/users/{}/favorites", Uuid::new_v4());
        let (status, content_type, body) = send(Method::POST, &uri, Some("{}")).await;
        assert_json_error(status, &content_type, &body, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("product_id"));

        let (status, content_type, body) = send(Method::POST, &uri, Some("{not json")).await;
        assert_json_error(status, &content_type, &body, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_route_is_a_json_not_found() {
        let (status, content_type, body) = send(Method::GET, "/api/orders", None).await;
        assert_json_error(status, &content_type, &body, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");
    }

    #[tokio::test]
    async fn health_is_served_by_the_full_app() {
        let (status, _, body) = send(Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
