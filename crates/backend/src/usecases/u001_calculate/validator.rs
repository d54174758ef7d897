use super::CalculationError;

/// Проверенные операнды
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub operand1: f64,
    /// `None`, если второй операнд не передан
    pub operand2: Option<f64>,
}

/// Разбор одного обязательного и одного необязательного операнда
///
/// Ошибка одна и та же, какой бы из операндов ни оказался некорректным.
pub fn validate_operands(
    num1: Option<&str>,
    num2: Option<&str>,
) -> Result<Operands, CalculationError> {
    let operand1 = num1
        .and_then(parse_operand)
        .ok_or(CalculationError::InvalidNumbers)?;
    let operand2 = match num2 {
        Some(raw) => Some(parse_operand(raw).ok_or(CalculationError::InvalidNumbers)?),
        None => None,
    };
    Ok(Operands { operand1, operand2 })
}

/// Десятичное число с плавающей точкой; NaN и бесконечности не принимаются
fn parse_operand(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
