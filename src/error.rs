// SPDX-License-Identifier: MIT

//! Typed error handling for calc-rs
//!
//! Evaluation failures are a closed enum so callers can classify them
//! without string comparison.

use thiserror::Error;

/// Errors produced while evaluating an expression
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// The input is empty, contains an unsupported character, has
    /// unbalanced parentheses, a malformed numeric literal, or an
    /// inconsistent operand/operator structure
    #[error("invalid expression")]
    InvalidExpression,

    /// The right-hand operand of a division is exactly zero
    #[error("division by zero")]
    DivisionByZero,
}
