//! History persistence with atomic writes.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::models::HistoryEntry;

/// History schema version. A mismatch is reported as an error rather than
/// rebuilding: unlike a derived cache, history is the user's data.
pub const HISTORY_VERSION: u32 = 1;

const HISTORY_FILENAME: &str = "history.json";

/// On-disk shape of the history file.
#[derive(Debug, Serialize, Deserialize)]
struct HistoryFile {
    version: u32,
    days: BTreeMap<String, Vec<HistoryEntry>>,
}

/// Calculation history grouped by day, backed by a JSON file.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    days: BTreeMap<String, Vec<HistoryEntry>>,
}

impl HistoryStore {
    /// Path of the history file inside a data directory.
    pub fn history_path(data_dir: &Path) -> PathBuf {
        data_dir.join(HISTORY_FILENAME)
    }

    /// Open the store rooted at `data_dir`, creating the directory if
    /// missing. A missing history file yields an empty store; a corrupt or
    /// version-mismatched file is an error.
    pub fn open(data_dir: &Path) -> Result<Self> {
        if !data_dir.exists() {
            fs::create_dir_all(data_dir).with_context(|| {
                format!("Failed to create data directory: {}", data_dir.display())
            })?;
        }

        let path = Self::history_path(data_dir);
        if !path.exists() {
            return Ok(Self { path, days: BTreeMap::new() });
        }

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read history file: {}", path.display()))?;
        let file: HistoryFile =
            serde_json::from_str(&json).context("Failed to parse history file")?;

        if file.version != HISTORY_VERSION {
            bail!(
                "Unsupported history file version {} (expected {})",
                file.version,
                HISTORY_VERSION
            );
        }

        Ok(Self { path, days: file.days })
    }

    /// Append an entry under its date key. Returns `false` when the same
    /// expression/result pair already exists for that day (no duplicate is
    /// stored).
    pub fn append(&mut self, entry: HistoryEntry) -> bool {
        let day = self.days.entry(entry.date_key()).or_default();
        if day.iter().any(|existing| existing.same_calculation(&entry)) {
            return false;
        }
        day.push(entry);
        true
    }

    /// Total number of stored entries across all days.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days newest-first, each day's entries newest-first.
    pub fn days_desc(&self) -> Vec<(&str, Vec<&HistoryEntry>)> {
        self.days
            .iter()
            .rev()
            .map(|(date, entries)| {
                let mut sorted: Vec<&HistoryEntry> = entries.iter().collect();
                sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                (date.as_str(), sorted)
            })
            .collect()
    }

    /// The `n` most recent entries, newest first.
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.days_desc().into_iter().flat_map(|(_, entries)| entries).take(n).collect()
    }

    /// Drop all entries. The file is rewritten on the next [`Self::save`].
    pub fn clear(&mut self) {
        self.days.clear();
    }

    /// Write the history file atomically (temp file + rename).
    pub fn save(&self) -> Result<()> {
        let file = HistoryFile { version: HISTORY_VERSION, days: self.days.clone() };
        let json = serde_json::to_string_pretty(&file).context("Failed to serialize history")?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json).context("Failed to write history temp file")?;
        fs::rename(&temp_path, &self.path).context("Failed to rename history temp file")?;

        Ok(())
    }
}
