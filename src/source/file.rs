use super::LogSource;
use crate::core::fetcher::ScanWindow;
use crate::errors::{AppError, AppResult};
use crate::models::LogRecord;
use std::fs;
use std::path::PathBuf;

/// Pre-saved records on disk.
///
/// - `.json` → array of `{ "timestamp": "2024-03-01T08:00:00", "event_id": 6005 }`
/// - anything else → CSV with header `timestamp,event_id`
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"))
    }

    fn read_json(&self) -> AppResult<Vec<LogRecord>> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.unavailable(e))?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::InvalidRecord(format!("{}: {e}", self.path.display())))
    }

    fn read_csv(&self) -> AppResult<Vec<LogRecord>> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| self.unavailable(e))?;

        rdr.deserialize::<LogRecord>()
            .enumerate()
            .map(|(i, row)| {
                // header is line 1
                row.map_err(|e| {
                    AppError::InvalidRecord(format!("{} line {}: {e}", self.path.display(), i + 2))
                })
            })
            .collect()
    }

    fn unavailable<E: std::fmt::Display>(&self, e: E) -> AppError {
        AppError::Source(format!("cannot read {}: {e}", self.path.display()))
    }
}

impl LogSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn records(&self, window: &ScanWindow) -> AppResult<Vec<LogRecord>> {
        let all = if self.is_json() {
            self.read_json()?
        } else {
            self.read_csv()?
        };

        Ok(all
            .into_iter()
            .filter(|r| window.contains(&r.timestamp))
            .collect())
    }
}
