pub mod executor;
pub mod operation;
pub mod validator;

use contracts::usecases::u001_calculate::request::OperandsQuery;

pub use executor::Execution;
pub use operation::Operation;

use operation::Arity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalculationError {
    #[error("operands are missing or not valid numbers")]
    InvalidNumbers,

    #[error("division by zero")]
    DivisionByZero,

    #[error("square root of a negative number")]
    NegativeRadicand,
}

/// Разобрать операнды, проверить условие операции и вычислить результат
///
/// Запись журнала возвращается в `Execution` и ещё не сохранена.
pub fn calculate(operation: Operation, query: &OperandsQuery) -> Result<Execution, CalculationError> {
    let num2 = match operation.arity() {
        Arity::Binary => query.num2.as_deref(),
        Arity::Unary => None,
    };
    let operands = validator::validate_operands(query.num1.as_deref(), num2)?;

    operation.check_precondition(&operands)?;

    executor::execute(operation.label(), operation.computation(), operands)
        .ok_or(CalculationError::InvalidNumbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(num1: Option<&str>, num2: Option<&str>) -> OperandsQuery {
        OperandsQuery {
            num1: num1.map(str::to_string),
            num2: num2.map(str::to_string),
        }
    }

    #[test]
    fn test_binary_operation_requires_num2() {
        let err = calculate(Operation::Addition, &query(Some("2"), None)).unwrap_err();
        assert_eq!(err, CalculationError::InvalidNumbers);
    }

    #[test]
    fn test_divide_without_num2_is_invalid_not_division_by_zero() {
        let err = calculate(Operation::Division, &query(Some("10"), None)).unwrap_err();
        assert_eq!(err, CalculationError::InvalidNumbers);
    }

    #[test]
    fn test_divide_by_parsed_zero() {
        for zero in ["0", "0.0", "-0", " 0 ", "0e5"] {
            let err = calculate(Operation::Division, &query(Some("10"), Some(zero))).unwrap_err();
            assert_eq!(err, CalculationError::DivisionByZero, "num2={zero:?}");
        }
    }

    #[test]
    fn test_validation_runs_before_precondition() {
        let err = calculate(Operation::Division, &query(Some("abc"), Some("0"))).unwrap_err();
        assert_eq!(err, CalculationError::InvalidNumbers);
    }

    #[test]
    fn test_sqrt_ignores_num2() {
        let execution = calculate(Operation::SquareRoot, &query(Some("9"), Some("junk"))).unwrap();
        assert_eq!(execution.result, 3.0);
        assert_eq!(execution.record.operand2, None);
        assert_eq!(execution.record.operation, "square root");
    }

    #[test]
    fn test_negative_radicand() {
        let err = calculate(Operation::SquareRoot, &query(Some("-4"), None)).unwrap_err();
        assert_eq!(err, CalculationError::NegativeRadicand);
    }

    #[test]
    fn test_modulo_by_zero_is_not_an_error() {
        let execution = calculate(Operation::Modulo, &query(Some("10"), Some("0"))).unwrap();
        assert!(execution.result.is_nan());
        assert_eq!(execution.record.operand2, Some(0.0));
    }
}
