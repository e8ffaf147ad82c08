//! Errors produced by algebraic operations.

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlgebraError>;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum AlgebraError {
    #[error("unsupported operand type(s) for {op}: {lhs} and {rhs}")]
    UnsupportedOperandType {
        op: BinaryOp,
        lhs: &'static str,
        rhs: &'static str,
    },

    #[error("division by zero in {operation}")]
    DivisionByZero { operation: &'static str },
}

/// A binary operator, used for reporting which operation rejected its
/// operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Cross,
}

impl AlgebraError {
    pub(crate) fn unsupported(op: BinaryOp, lhs: &'static str, rhs: &'static str) -> Self {
        log::debug!("Rejected operands for {op}: {lhs} and {rhs}");
        Self::UnsupportedOperandType { op, lhs, rhs }
    }

    pub(crate) fn division_by_zero(operation: &'static str) -> Self {
        log::debug!("Division by zero in {operation}");
        Self::DivisionByZero { operation }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Cross => "cross",
        };
        write!(f, "{symbol}")
    }
}

/// Returns the given divisor, or a [`AlgebraError::DivisionByZero`] naming
/// the operation if it is zero.
#[inline]
pub(crate) fn nonzero_divisor(divisor: f64, operation: &'static str) -> Result<f64> {
    if divisor == 0.0 {
        Err(AlgebraError::division_by_zero(operation))
    } else {
        Ok(divisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_operand_message_names_operator_and_types() {
        let error = AlgebraError::unsupported(BinaryOp::Div, "Vector3", "Vector3");
        assert_eq!(
            error.to_string(),
            "unsupported operand type(s) for /: Vector3 and Vector3"
        );
    }

    #[test]
    fn division_by_zero_message_names_operation() {
        let error = AlgebraError::division_by_zero("Vector3::normalize");
        assert_eq!(error.to_string(), "division by zero in Vector3::normalize");
    }

    #[test]
    fn nonzero_divisor_rejects_only_zero() {
        assert_eq!(nonzero_divisor(2.0, "test"), Ok(2.0));
        assert_eq!(
            nonzero_divisor(-0.0, "test"),
            Err(AlgebraError::DivisionByZero { operation: "test" })
        );
    }
}
