use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Запись журнала операций: одна вычисленная операция
///
/// Создаётся сразу после вычисления результата и больше не изменяется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    /// Название операции ("addition", "square root", ...)
    pub operation: String,

    pub operand1: f64,

    /// Отсутствует у унарных операций
    pub operand2: Option<f64>,

    /// NaN и бесконечности сериализуются в JSON как `null`
    pub result: f64,

    pub timestamp: DateTime<Utc>,
}

impl OperationRecord {
    pub fn new(operation: impl Into<String>, operand1: f64, operand2: Option<f64>, result: f64) -> Self {
        Self {
            operation: operation.into(),
            operand1,
            operand2,
            result,
            timestamp: Utc::now(),
        }
    }
}
