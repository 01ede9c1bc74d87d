//! Error types for the calculation engine.

use thiserror::Error;

/// Request-scoped failures raised by the engine.
///
/// None of these are fatal: every variant maps to a client error and leaves
/// history and memory untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("{0}")]
    InvalidExpression(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result is not finite")]
    NonFiniteResult,

    #[error("Invalid number")]
    InvalidNumber,

    #[error("Unknown operation")]
    UnknownOperation,

    #[error("Invalid angle mode")]
    InvalidAngleMode,

    #[error("Factorial input out of range")]
    FactorialOutOfRange,

    #[error("Unknown conversion category")]
    UnknownCategory,

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Unknown temperature unit")]
    UnknownTemperatureUnit,

    #[error("Unknown memory operation")]
    UnknownMemoryOperation,
}

impl EngineError {
    pub fn invalid_expression(msg: impl Into<String>) -> Self {
        Self::InvalidExpression(msg.into())
    }

    pub fn unknown_unit(unit: impl Into<String>) -> Self {
        Self::UnknownUnit(unit.into())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
