//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use chrono::{TimeZone, Utc};
use deskcalc::HistoryEntry;
use tempfile::TempDir;

/// Builder for seeding an isolated deskcalc data directory
pub struct DataDirBuilder {
    temp_dir: TempDir,
    entries: Vec<HistoryEntry>,
}

impl DataDirBuilder {
    /// Create a builder backed by an empty temp directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, entries: Vec::new() }
    }

    /// Path to the data directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Queue an entry with an explicit day/hour on a fixed month
    pub fn with_entry(mut self, expression: &str, result: f64, day: u32, hour: u32) -> Self {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap();
        self.entries.push(HistoryEntry::at(expression, result, timestamp));
        self
    }

    /// Write a raw history file, bypassing the store (for corruption tests)
    pub fn with_raw_history(self, content: &str) -> Self {
        let path = self.temp_dir.path().join("history.json");
        fs::write(path, content).expect("Failed to write raw history file");
        self
    }

    /// Persist queued entries and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        if !self.entries.is_empty() {
            let mut store =
                deskcalc::HistoryStore::open(self.temp_dir.path()).expect("Failed to open store");
            for entry in self.entries {
                store.append(entry);
            }
            store.save().expect("Failed to save seeded history");
        }
        self.temp_dir
    }
}
