//! Persisted calculation history.
//!
//! Entries are grouped by day (`YYYY-MM-DD` keys) and stored as a single
//! versioned JSON file, written atomically (temp file + rename).
//!
//! Storage location: `<data dir>/deskcalc/history.json`
//! - macOS: `~/Library/Application Support/deskcalc/`
//! - Linux: `~/.local/share/deskcalc/`
//! - Windows: `%APPDATA%\deskcalc\`
//!
//! The `DESKCALC_DATA_DIR` environment variable overrides the data
//! directory (used by the test suite).

pub mod store;

pub use store::{HISTORY_VERSION, HistoryStore};
