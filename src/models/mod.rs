//! Data models for persisted calculations.
//!
//! - [`HistoryEntry`] - a single confirmed calculation with its result and
//!   the moment it was committed
//!
//! Entries are serialized with serde into the history file and are
//! immutable once saved; the only deletion path is an explicit clear.

pub mod entry;

pub use entry::HistoryEntry;
