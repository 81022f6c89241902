//! Read-side access to the persisted speed record.
//!
//! Sessions only ever read the record: the chosen rate lives in memory for
//! the lifetime of the page, and per-session adjustments are deliberately
//! not written back.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::StoreError;

/// On-disk layout: a JSON object with one named field.
///
/// The field is kept loose because past writers were not strict about it;
/// only an actual JSON number counts as a persisted rate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeedRecord {
    #[serde(default)]
    pub speed: Option<serde_json::Value>,
}

impl SpeedRecord {
    /// The persisted rate, if the record really holds a number.
    pub fn numeric_speed(&self) -> Option<f64> {
        match &self.speed {
            Some(serde_json::Value::Number(number)) => number.as_f64(),
            _ => None,
        }
    }
}

/// Reads the rate a previous session persisted.
pub struct SpeedStore {
    path: PathBuf,
}

impl SpeedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict read. `Ok(None)` means the file is absent or holds no numeric
    /// rate; errors mean the file exists but could not be read or parsed.
    pub fn read(&self) -> Result<Option<f64>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        let record: SpeedRecord = serde_json::from_str(&contents)?;
        Ok(record.numeric_speed())
    }

    /// Forgiving read for startup: every failure counts as "nothing
    /// persisted" and is logged rather than propagated.
    pub fn load(&self) -> Option<f64> {
        match self.read() {
            Ok(speed) => speed,
            Err(error) => {
                debug!(path = %self.path.display(), %error, "persisted speed unreadable");
                None
            }
        }
    }
}
