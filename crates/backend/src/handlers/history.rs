use axum::extract::State;
use axum::Json;
use contracts::domain::a001_operation_log::aggregate::OperationRecord;

use super::error::ApiError;
use super::AppState;
use crate::domain::a001_operation_log::HISTORY_LIMIT;

/// GET /history — последние операции, новые сверху
pub async fn list_recent(
    State(state): State<AppState>,
) -> Result<Json<Vec<OperationRecord>>, ApiError> {
    let records = state
        .store
        .query_recent(HISTORY_LIMIT)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching history: {}", e);
            ApiError::History(e)
        })?;
    Ok(Json(records))
}
