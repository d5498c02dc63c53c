//! Input commands decoupled from their source.
//!
//! Button presses, keystrokes and pasted characters all reduce to the same
//! [`Command`] set, so the editor dispatches on intent instead of on where
//! the input came from.

use super::EditorConfig;
use crate::evaluator::BinOp;

/// A single calculator input action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Digit(u8),
    Operator(BinOp),
    Decimal,
    /// Rewrite the number being typed as itself divided by 100 (the
    /// percent button, distinct from the `%` binary operator).
    Percentage,
    OpenParen,
    CloseParen,
    /// Remove the last character (backspace).
    Delete,
    /// Reset the in-progress expression.
    Clear,
    /// Commit the expression as a confirmed calculation.
    Equals,
    /// Ask the caller to show the persisted history.
    OpenHistory,
}

impl Command {
    /// Map a typed or pasted character to a command. Returns `None` for
    /// characters outside the input language; `%` only maps when the
    /// percent operator is enabled.
    pub fn from_char(ch: char, config: &EditorConfig) -> Option<Self> {
        match ch {
            '0'..='9' => Some(Command::Digit(ch as u8 - b'0')),
            '+' => Some(Command::Operator(BinOp::Add)),
            '-' => Some(Command::Operator(BinOp::Sub)),
            '*' | '×' => Some(Command::Operator(BinOp::Mul)),
            '/' | '÷' => Some(Command::Operator(BinOp::Div)),
            '%' if config.enable_percent => Some(Command::Operator(BinOp::Percent)),
            '.' => Some(Command::Decimal),
            '(' => Some(Command::OpenParen),
            ')' => Some(Command::CloseParen),
            '=' => Some(Command::Equals),
            _ => None,
        }
    }
}
