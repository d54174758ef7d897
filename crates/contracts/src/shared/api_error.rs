use serde::{Deserialize, Serialize};

pub const INVALID_NUMBERS: &str = "Invalid numbers. Please provide valid numerical values.";
pub const DIVISION_BY_ZERO: &str = "Cannot divide by zero";
pub const NEGATIVE_RADICAND: &str = "Cannot calculate square root of a negative number";
pub const HISTORY_UNAVAILABLE: &str = "Failed to retrieve operation history";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
pub const NOT_FOUND: &str = "Not Found";

/// Тело ответа с ошибкой: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
