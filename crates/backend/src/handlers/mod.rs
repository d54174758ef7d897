pub mod calculator;
pub mod error;
pub mod history;

use std::sync::Arc;

use crate::domain::a001_operation_log::OperationLogStore;

/// Общее состояние обработчиков: журнал операций, созданный один раз в `main`
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn OperationLogStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn OperationLogStore>) -> Self {
        Self { store }
    }
}

#[cfg(test)]
pub mod testing {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    /// GET-запрос к роутеру; тело разбирается как JSON, иначе возвращается строкой
    pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, body)
    }
}
