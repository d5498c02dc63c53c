//! Input collection: building up an expression from discrete commands.
//!
//! The [`Editor`] owns the in-progress expression and applies [`Command`]s
//! through one exhaustive dispatch. It enforces the same entry rules the
//! calculator keypad did: binary operators need a preceding operand, `-`
//! may open an expression or follow another operator but never doubles,
//! and a number carries at most one decimal point.
//!
//! The editor performs no I/O. Confirmed calculations surface as
//! [`EditorEffect::Committed`] and persistence is the caller's problem, as
//! is deciding what to do with the expression after a failed commit.

pub mod commands;

pub use commands::Command;

use crate::evaluator::{BinOp, EvalError, EvalOptions, evaluate_with};
use crate::models::HistoryEntry;
use crate::models::entry::format_result;

/// Editor behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorConfig {
    /// Accept `%` from input and during evaluation.
    pub enable_percent: bool,
    /// Live-preview an expression that still ends with an operator by
    /// trimming the dangling tail first. Off by default: an incomplete
    /// expression previews as nothing.
    pub preview_partial: bool,
}

/// What applying a command produced, beyond the editor's own state change.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEffect {
    /// Expression changed (or stayed put); nothing to persist.
    Updated,
    /// A calculation was confirmed and should be appended to history.
    Committed(HistoryEntry),
    /// The caller should display the history view.
    ShowHistory,
}

/// The in-progress expression and the rules for growing it.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    expression: String,
    config: EditorConfig,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self { expression: String::new(), config }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn is_empty(&self) -> bool {
        self.expression.is_empty()
    }

    pub fn config(&self) -> EditorConfig {
        self.config
    }

    /// Apply one input command.
    ///
    /// `Equals` on an invalid expression returns the evaluation error and
    /// leaves the expression untouched; the caller decides whether to keep
    /// or clear it.
    pub fn apply(&mut self, command: Command) -> Result<EditorEffect, EvalError> {
        match command {
            Command::Digit(d) => {
                self.expression.push((b'0' + d) as char);
                Ok(EditorEffect::Updated)
            }
            Command::Operator(op) => {
                self.push_operator(op);
                Ok(EditorEffect::Updated)
            }
            Command::Decimal => {
                self.push_decimal();
                Ok(EditorEffect::Updated)
            }
            Command::Percentage => {
                self.apply_percentage();
                Ok(EditorEffect::Updated)
            }
            Command::OpenParen => {
                self.expression.push('(');
                Ok(EditorEffect::Updated)
            }
            Command::CloseParen => {
                self.expression.push(')');
                Ok(EditorEffect::Updated)
            }
            Command::Delete => {
                self.expression.pop();
                Ok(EditorEffect::Updated)
            }
            Command::Clear => {
                let committed = self.pending_entry();
                self.expression.clear();
                Ok(match committed {
                    Some(entry) => EditorEffect::Committed(entry),
                    None => EditorEffect::Updated,
                })
            }
            Command::Equals => {
                let result = evaluate_with(&self.expression, &self.eval_options())?;
                let entry = HistoryEntry::new(self.expression.clone(), result);
                self.expression = format_result(result);
                Ok(EditorEffect::Committed(entry))
            }
            Command::OpenHistory => Ok(EditorEffect::ShowHistory),
        }
    }

    /// Live-preview result for the current expression, or `None` when the
    /// expression is empty, incomplete (unless `preview_partial`), or
    /// fails to evaluate.
    pub fn preview(&self) -> Option<f64> {
        if self.expression.is_empty() {
            return None;
        }
        let candidate = if self.ends_complete() {
            self.expression.as_str()
        } else if self.config.preview_partial {
            self.expression.trim_end_matches(is_operator_char)
        } else {
            return None;
        };
        evaluate_with(candidate, &self.eval_options()).ok()
    }

    /// Load a past expression back into the editor (history recall).
    pub fn recall(&mut self, expression: &str) {
        self.expression = expression.to_string();
    }

    fn eval_options(&self) -> EvalOptions {
        EvalOptions { enable_percent: self.config.enable_percent }
    }

    /// Entry for the current expression if it has a previewable result.
    fn pending_entry(&self) -> Option<HistoryEntry> {
        let result = self.preview()?;
        Some(HistoryEntry::new(self.expression.clone(), result))
    }

    /// Expression ends with something that can close a calculation.
    fn ends_complete(&self) -> bool {
        matches!(self.expression.chars().last(), Some(c) if c.is_ascii_digit() || c == ')')
    }

    fn last_char_is_operator(&self) -> bool {
        matches!(self.expression.chars().last(), Some(c) if is_operator_char(c))
    }

    /// Keypad operator rules: `-` may start an expression or follow another
    /// operator (but not another `-`); the rest need a left operand.
    fn push_operator(&mut self, op: BinOp) {
        let symbol = op.symbol();
        if op == BinOp::Sub {
            if self.expression.is_empty() || self.last_char_is_operator() {
                if self.expression.chars().last() != Some('-') {
                    self.expression.push(symbol);
                }
            } else {
                self.expression.push(symbol);
            }
        } else if !self.expression.is_empty() && !self.last_char_is_operator() {
            self.expression.push(symbol);
        }
    }

    /// Replace the number being typed with itself divided by 100. A no-op
    /// when percent support is off or no number is being typed.
    fn apply_percentage(&mut self) {
        if !self.config.enable_percent {
            return;
        }
        let last = self.last_number();
        if last.is_empty() {
            return;
        }
        let Ok(value) = last.parse::<f64>() else {
            return;
        };
        let start = self.expression.len() - last.len();
        self.expression.truncate(start);
        self.expression.push_str(&format_result(value / 100.0));
    }

    /// One decimal point per number; a bare `.` becomes `0.`.
    fn push_decimal(&mut self) {
        let last_number = self.last_number();
        if last_number.contains('.') {
            return;
        }
        if last_number.is_empty() {
            self.expression.push_str("0.");
        } else {
            self.expression.push('.');
        }
    }

    /// Trailing run of digits and `.`, i.e. the number currently being
    /// typed. Empty right after an operator or paren.
    fn last_number(&self) -> &str {
        match self.expression.rfind(|c: char| !c.is_ascii_digit() && c != '.') {
            Some(pos) => {
                let len = self.expression[pos..].chars().next().map_or(1, char::len_utf8);
                &self.expression[pos + len..]
            }
            None => &self.expression,
        }
    }
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%')
}
