//! # Error Types
//!
//! Structured error types for calc_core. Every variant is recoverable: the
//! engine has already settled into its post-failure state by the time the
//! caller sees the error, so a shell only needs to show the message.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult, OperandSide};
//!
//! fn require_left(buffer: &str) -> CalcResult<f64> {
//!     buffer
//!         .parse()
//!         .map_err(|_| CalcError::missing_operand(OperandSide::Left))
//! }
//!
//! assert!(require_left("").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Which operand an operation found missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperandSide {
    Left,
    Right,
}

impl std::fmt::Display for OperandSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperandSide::Left => write!(f, "left"),
            OperandSide::Right => write!(f, "right"),
        }
    }
}

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Operator chosen or evaluation requested without a usable operand
    #[error("{side} operand does not exist")]
    MissingOperand { side: OperandSide },

    /// Division with a right operand of exactly zero
    #[error("Division by zero: {left} / 0")]
    DivisionByZero { left: f64 },

    /// Result magnitude is outside the representable range
    #[error("Result is too large: {left} {operator} {right}")]
    Overflow {
        left: f64,
        operator: String,
        right: f64,
    },

    /// Result is not a real number (negative base with fractional exponent)
    #[error("Result is not a real number: {left} {operator} {right}")]
    Domain {
        left: f64,
        operator: String,
        right: f64,
    },

    /// A settings value is out of range
    #[error("Invalid setting '{field}': {value} - {reason}")]
    InvalidSetting {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create a MissingOperand error
    pub fn missing_operand(side: OperandSide) -> Self {
        CalcError::MissingOperand { side }
    }

    /// Create an Overflow error
    pub fn overflow(left: f64, operator: impl Into<String>, right: f64) -> Self {
        CalcError::Overflow {
            left,
            operator: operator.into(),
            right,
        }
    }

    /// Create a Domain error
    pub fn domain(left: f64, operator: impl Into<String>, right: f64) -> Self {
        CalcError::Domain {
            left,
            operator: operator.into(),
            right,
        }
    }

    /// Create an InvalidSetting error
    pub fn invalid_setting(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidSetting {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for failures produced by the arithmetic itself.
    ///
    /// These are the errors after which the engine has dropped its pending
    /// operation and the user must enter a fresh left operand.
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            CalcError::DivisionByZero { .. } | CalcError::Overflow { .. } | CalcError::Domain { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::MissingOperand { .. } => "MISSING_OPERAND",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::Overflow { .. } => "OVERFLOW",
            CalcError::Domain { .. } => "DOMAIN_ERROR",
            CalcError::InvalidSetting { .. } => "INVALID_SETTING",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
