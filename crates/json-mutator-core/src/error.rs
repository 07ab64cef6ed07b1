//! Error types for leaf mutation.
//!
//! None of these escape the public API: every strategy failure is recovered
//! by the dispatcher, which falls back to the original leaf value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable, machine-readable codes for the recoverable error classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    /// Integer arithmetic left the representable JSON integer range.
    Overflow,
    /// A division strategy drew a zero divisor.
    DivisionByZero,
    /// An arithmetic strategy was applied to a value that is not a number.
    NonNumericOperand,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutateError {
    #[error("Integer overflow in {operation} at {path}")]
    Overflow {
        path: String,
        operation: &'static str,
    },

    #[error("Division by zero at {path}")]
    DivisionByZero { path: String },

    #[error("Arithmetic mutation on non-numeric value at {path} (found: {found})")]
    NonNumericOperand { path: String, found: &'static str },
}

impl MutateError {
    /// Returns the stable error code for this error variant.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            MutateError::Overflow { .. } => ErrorCode::Overflow,
            MutateError::DivisionByZero { .. } => ErrorCode::DivisionByZero,
            MutateError::NonNumericOperand { .. } => ErrorCode::NonNumericOperand,
        }
    }

    /// JSON Pointer of the data position the failed strategy targeted.
    pub fn path(&self) -> &str {
        match self {
            MutateError::Overflow { path, .. } => path,
            MutateError::DivisionByZero { path } => path,
            MutateError::NonNumericOperand { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_code_serializes_snake_case() {
        let err = MutateError::DivisionByZero {
            path: "#/price".to_string(),
        };
        let json = serde_json::to_value(err.error_code()).unwrap();
        assert_eq!(json, json!("division_by_zero"));
    }

    #[test]
    fn test_display_includes_path() {
        let err = MutateError::Overflow {
            path: "#/count".to_string(),
            operation: "multiply",
        };
        let display = err.to_string();
        assert!(display.contains("multiply"), "got: {display}");
        assert!(display.contains("#/count"), "got: {display}");
        assert_eq!(err.path(), "#/count");
    }

    #[test]
    fn test_non_numeric_code() {
        let err = MutateError::NonNumericOperand {
            path: "#".to_string(),
            found: "string",
        };
        assert_eq!(err.error_code(), ErrorCode::NonNumericOperand);
    }
}
