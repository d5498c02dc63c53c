use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One confirmed calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: f64,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(expression: impl Into<String>, result: f64) -> Self {
        Self::at(expression, result, Utc::now())
    }

    /// Create an entry with an explicit timestamp.
    pub fn at(expression: impl Into<String>, result: f64, timestamp: DateTime<Utc>) -> Self {
        Self { expression: expression.into(), result, timestamp }
    }

    /// Date key used to group entries in the history store (`YYYY-MM-DD`).
    pub fn date_key(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    /// Human-readable line: `1+2 = 3 (12:30:05)`.
    pub fn display_line(&self) -> String {
        format!(
            "{} = {} ({})",
            self.expression,
            format_result(self.result),
            self.timestamp.format("%H:%M:%S")
        )
    }

    /// Two entries are the same calculation when expression and result
    /// match; the timestamp is ignored. Used for same-day deduplication.
    pub fn same_calculation(&self, other: &Self) -> bool {
        self.expression == other.expression && self.result == other.result
    }
}

/// Format a result the way the calculator displays it: integral values
/// without a trailing `.0`, everything else with Rust's shortest float
/// representation.
pub fn format_result(value: f64) -> String {
    format!("{value}")
}
