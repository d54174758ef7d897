use serde::{Deserialize, Serialize};

/// Сырые параметры запроса `?num1=..&num2=..`
///
/// Значения остаются строками: разбор и проверка чисел выполняются на сервере,
/// чтобы любая ошибка давала один и тот же ответ 400.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperandsQuery {
    #[serde(default)]
    pub num1: Option<String>,

    #[serde(default)]
    pub num2: Option<String>,
}
