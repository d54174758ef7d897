use super::validator::Operands;
use super::CalculationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

/// Чистая числовая функция операции
#[derive(Debug, Clone, Copy)]
pub enum Computation {
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Exponentiation,
    SquareRoot,
    Modulo,
}

impl Operation {
    /// Название операции в ответе и в журнале
    pub fn label(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
            Operation::Exponentiation => "exponentiation",
            Operation::SquareRoot => "square root",
            Operation::Modulo => "modulo",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Operation::SquareRoot => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    /// IEEE-754 double: `powf` даёт NaN для отрицательного основания с дробным показателем,
    /// `%` берёт знак делимого и даёт NaN при нулевом делителе.
    pub fn computation(self) -> Computation {
        match self {
            Operation::Addition => Computation::Binary(|a, b| a + b),
            Operation::Subtraction => Computation::Binary(|a, b| a - b),
            Operation::Multiplication => Computation::Binary(|a, b| a * b),
            Operation::Division => Computation::Binary(|a, b| a / b),
            Operation::Exponentiation => Computation::Binary(f64::powf),
            Operation::SquareRoot => Computation::Unary(f64::sqrt),
            Operation::Modulo => Computation::Binary(|a, b| a % b),
        }
    }

    /// Условие конкретной операции; проверяется после разбора чисел и до вычисления
    pub fn check_precondition(self, operands: &Operands) -> Result<(), CalculationError> {
        match self {
            Operation::Division if operands.operand2 == Some(0.0) => {
                Err(CalculationError::DivisionByZero)
            }
            Operation::SquareRoot if operands.operand1 < 0.0 => {
                Err(CalculationError::NegativeRadicand)
            }
            _ => Ok(()),
        }
    }
}
