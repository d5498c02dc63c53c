//! Infix arithmetic evaluation.
//!
//! Parses a restricted expression language (decimal numbers, `+ - * /`,
//! parentheses, unary minus) and evaluates it with a two-stack
//! shunting-yard pass. Evaluation is a pure function of the input string:
//! no state survives between calls, so the evaluator can be invoked from a
//! live preview on every keystroke and from a final submit with identical
//! results.
//!
//! The optional `%` operator (sharing the `* /` precedence tier and
//! computing `a * (b / 100)` rather than modulo) is gated behind
//! [`EvalOptions::enable_percent`] because it only existed in one variant
//! of the original calculator.
//!
//! # Example
//!
//! ```
//! use deskcalc::evaluator::evaluate;
//!
//! assert_eq!(evaluate("2+3*4")?, 14.0);
//! assert_eq!(evaluate("(2+3)*4")?, 20.0);
//! assert_eq!(evaluate("-3+5")?, 2.0);
//! # Ok::<(), deskcalc::evaluator::EvalError>(())
//! ```

pub mod engine;
pub mod lexer;

pub use engine::{evaluate, evaluate_with};
pub use lexer::{BinOp, Token, tokenize};

use thiserror::Error;

/// Evaluation failures, distinguishable by the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Empty input, a disallowed character, unbalanced parentheses, or a
    /// token sequence that does not reduce to exactly one value.
    #[error("invalid expression: {0}")]
    InvalidExpression(String),
    /// A `/` operator whose right operand is exactly zero. Kept distinct
    /// from [`EvalError::InvalidExpression`] so callers can tell "no
    /// result" from "invalid input".
    #[error("division by zero")]
    DivisionByZero,
}

/// Evaluator configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// Accept `%` as a binary operator computing `a * (b / 100)`.
    pub enable_percent: bool,
}

impl EvalOptions {
    pub fn with_percent() -> Self {
        Self { enable_percent: true }
    }
}
