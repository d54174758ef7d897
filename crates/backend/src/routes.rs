use axum::http::Method;
use axum::{middleware, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{self, AppState};
use crate::system::middleware::request_logger::request_logger;

/// Все маршруты сервиса вместе со слоями
pub fn configure_routes(state: AppState) -> Router {
    apply_layers(api_routes().with_state(state))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::calculator::welcome))
        .route("/health", get(|| async { "ok" }))
        // Арифметика
        .route("/add", get(handlers::calculator::add))
        .route("/subtract", get(handlers::calculator::subtract))
        .route("/multiply", get(handlers::calculator::multiply))
        .route("/divide", get(handlers::calculator::divide))
        .route("/power", get(handlers::calculator::power))
        .route("/sqrt", get(handlers::calculator::sqrt))
        .route("/mod", get(handlers::calculator::modulo))
        // Журнал операций
        .route("/history", get(handlers::history::list_recent))
        .fallback(handlers::error::not_found)
}

fn apply_layers(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS]);

    router
        .layer(CatchPanicLayer::custom(handlers::error::handle_panic))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::domain::a001_operation_log::store::testing::RecordingStore;
    use crate::handlers::testing::get as get_request;

    async fn boom() -> &'static str {
        panic!("handler exploded")
    }

    #[tokio::test]
    async fn test_health() {
        let app = configure_routes(AppState::new(Arc::new(RecordingStore::default())));
        let (status, body) = get_request(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("ok"));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = configure_routes(AppState::new(Arc::new(RecordingStore::default())));
        let (status, body) = get_request(&app, "/sqrt/extra").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not Found"}));
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_server_error() {
        let app = apply_layers(Router::new().route("/boom", get(boom)));
        let (status, body) = get_request(&app, "/boom").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Internal Server Error"}));
    }
}
