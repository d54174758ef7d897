use serde::{Deserialize, Serialize};

/// Успешный ответ арифметического маршрута
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResponse {
    pub operation: String,
    pub result: f64,
}

/// Ответ корневого маршрута
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: "Welcome to the Advanced Calculator Microservice".to_string(),
        }
    }
}
