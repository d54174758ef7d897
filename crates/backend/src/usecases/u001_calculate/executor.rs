use contracts::domain::a001_operation_log::aggregate::OperationRecord;

use super::operation::Computation;
use super::validator::Operands;

/// Результат вычисления и ещё не сохранённая запись журнала
#[derive(Debug, Clone)]
pub struct Execution {
    pub result: f64,
    pub record: OperationRecord,
}

/// Вычислить `computation` над уже проверенными операндами
///
/// `None` только если бинарной операции не передан второй операнд.
pub fn execute(operation: &str, computation: Computation, operands: Operands) -> Option<Execution> {
    let result = match computation {
        Computation::Unary(f) => f(operands.operand1),
        Computation::Binary(f) => f(operands.operand1, operands.operand2?),
    };
    let operand2 = match computation {
        Computation::Unary(_) => None,
        Computation::Binary(_) => operands.operand2,
    };
    let record = OperationRecord::new(operation, operands.operand1, operand2, result);
    Some(Execution { result, record })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_binary() {
        let operands = Operands {
            operand1: 2.0,
            operand2: Some(3.0),
        };
        let before = chrono::Utc::now();
        let execution = execute("addition", Computation::Binary(|a, b| a + b), operands).unwrap();

        assert_eq!(execution.result, 5.0);
        assert_eq!(execution.record.operation, "addition");
        assert_eq!(execution.record.operand1, 2.0);
        assert_eq!(execution.record.operand2, Some(3.0));
        assert_eq!(execution.record.result, 5.0);
        assert!(execution.record.timestamp >= before);
    }

    #[test]
    fn test_execute_unary_drops_operand2() {
        let operands = Operands {
            operand1: 16.0,
            operand2: Some(1.0),
        };
        let execution = execute("square root", Computation::Unary(f64::sqrt), operands).unwrap();
        assert_eq!(execution.result, 4.0);
        assert_eq!(execution.record.operand2, None);
    }

    #[test]
    fn test_execute_binary_without_operand2() {
        let operands = Operands {
            operand1: 2.0,
            operand2: None,
        };
        assert!(execute("addition", Computation::Binary(|a, b| a + b), operands).is_none());
    }
}
