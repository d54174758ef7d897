use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use contracts::usecases::u001_calculate::request::OperandsQuery;
use contracts::usecases::u001_calculate::response::{OperationResponse, WelcomeResponse};

use super::error::ApiError;
use super::AppState;
use crate::domain::a001_operation_log::spawn_append;
use crate::usecases::u001_calculate::{self, CalculationError, Operation};

type OperandsExtractor = Result<Query<OperandsQuery>, QueryRejection>;

/// GET /
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::default())
}

/// GET /add?num1=&num2=
pub async fn add(
    State(state): State<AppState>,
    query: OperandsExtractor,
) -> Result<Json<OperationResponse>, ApiError> {
    perform_operation(&state, Operation::Addition, query)
}

/// GET /subtract?num1=&num2=
pub async fn subtract(
    State(state): State<AppState>,
    query: OperandsExtractor,
) -> Result<Json<OperationResponse>, ApiError> {
    perform_operation(&state, Operation::Subtraction, query)
}

/// GET /multiply?num1=&num2=
pub async fn multiply(
    State(state): State<AppState>,
    query: OperandsExtractor,
) -> Result<Json<OperationResponse>, ApiError> {
    perform_operation(&state, Operation::Multiplication, query)
}

/// GET /divide?num1=&num2=
pub async fn divide(
    State(state): State<AppState>,
    query: OperandsExtractor,
) -> Result<Json<OperationResponse>, ApiError> {
    perform_operation(&state, Operation::Division, query)
}

/// GET /power?num1=&num2=
pub async fn power(
    State(state): State<AppState>,
    query: OperandsExtractor,
) -> Result<Json<OperationResponse>, ApiError> {
    perform_operation(&state, Operation::Exponentiation, query)
}

/// GET /sqrt?num1=
pub async fn sqrt(
    State(state): State<AppState>,
    query: OperandsExtractor,
) -> Result<Json<OperationResponse>, ApiError> {
    perform_operation(&state, Operation::SquareRoot, query)
}

/// GET /mod?num1=&num2=
pub async fn modulo(
    State(state): State<AppState>,
    query: OperandsExtractor,
) -> Result<Json<OperationResponse>, ApiError> {
    perform_operation(&state, Operation::Modulo, query)
}

/// Проверка, вычисление, запись в журнал в фоне, ответ
fn perform_operation(
    state: &AppState,
    operation: Operation,
    query: OperandsExtractor,
) -> Result<Json<OperationResponse>, ApiError> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!("Malformed query for {}: {}", operation.label(), e);
        CalculationError::InvalidNumbers
    })?;

    let execution = u001_calculate::calculate(operation, &query)?;

    spawn_append(state.store.clone(), execution.record);

    Ok(Json(OperationResponse {
        operation: operation.label().to_string(),
        result: execution.result,
    }))
}
