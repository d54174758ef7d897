use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api_error::{self, ErrorResponse};

use crate::domain::a001_operation_log::StoreError;
use crate::usecases::u001_calculate::CalculationError;

/// Ошибки, которые доходят до клиента
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    #[error("failed to query operation history: {0}")]
    History(#[source] StoreError),

    #[error("route not found")]
    NotFound,
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Calculation(CalculationError::InvalidNumbers) => {
                (StatusCode::BAD_REQUEST, api_error::INVALID_NUMBERS)
            }
            ApiError::Calculation(CalculationError::DivisionByZero) => {
                (StatusCode::BAD_REQUEST, api_error::DIVISION_BY_ZERO)
            }
            ApiError::Calculation(CalculationError::NegativeRadicand) => {
                (StatusCode::BAD_REQUEST, api_error::NEGATIVE_RADICAND)
            }
            ApiError::History(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                api_error::HISTORY_UNAVAILABLE,
            ),
            ApiError::NotFound => (StatusCode::NOT_FOUND, api_error::NOT_FOUND),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Fallback для неизвестных маршрутов
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Последний рубеж: паника в обработчике превращается в 500 без подробностей
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!("Unhandled error: {}", details);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(api_error::INTERNAL_SERVER_ERROR)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(CalculationError::InvalidNumbers)
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::History(StoreError::NotConnected)
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_panic_response_hides_details() {
        let response = handle_panic(Box::new("secret connection string"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
