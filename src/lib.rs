//! deskcalc - arithmetic evaluation, persisted calculation history, and
//! unit conversion.
//!
//! This library re-implements a popup calculator's logic as composable
//! parts:
//!
//! - Evaluating restricted infix arithmetic (`+ - * / ( )`, decimals,
//!   unary minus, optional `%`) with a two-stack shunting-yard pass
//! - Collecting input command-by-command with keypad entry rules and a
//!   live preview
//! - Persisting confirmed calculations grouped by day in a JSON file
//! - Converting between length, mass, data-size and temperature units
//!
//! # Example
//!
//! ```
//! use deskcalc::evaluate;
//!
//! assert_eq!(evaluate("2+3*4")?, 14.0);
//! assert_eq!(evaluate("(2+3)*4")?, 20.0);
//! # Ok::<(), deskcalc::EvalError>(())
//! ```

pub mod cli;
pub mod editor;
pub mod evaluator;
pub mod history;
pub mod models;
pub mod units;
pub mod utils;

// Re-export commonly used types
pub use editor::{Command, Editor, EditorConfig, EditorEffect};
pub use evaluator::{EvalError, EvalOptions, evaluate, evaluate_with};
pub use history::HistoryStore;
pub use models::HistoryEntry;
pub use units::convert;
