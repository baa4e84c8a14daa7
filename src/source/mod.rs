//! Log sources: where startup/shutdown records come from.
//!
//! A source only has to return every record that intersects the requested
//! window. Order, batching and extra records outside the window are all
//! tolerated, the fetcher filters and sorts on its own.

mod file;
mod last;
mod memory;

pub use file::FileSource;
pub use last::{LastSource, parse_last_output};
pub use memory::MemorySource;

use crate::config::Config;
use crate::core::fetcher::ScanWindow;
use crate::errors::{AppError, AppResult};
use crate::models::LogRecord;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub trait LogSource {
    /// Human readable name used in status messages.
    fn name(&self) -> String;

    /// Read all records intersecting `window`.
    ///
    /// Either the full set is returned or an error: a source must never
    /// hand back a truncated read.
    fn records(&self, window: &ScanWindow) -> AppResult<Vec<LogRecord>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// `last -x` over the wtmp trail
    #[default]
    Last,
    /// Pre-saved CSV/JSON record file
    File,
}

/// Build the source selected by the configuration, or by `--source-file`.
pub fn open_source(cfg: &Config, source_file: Option<&str>) -> AppResult<Box<dyn LogSource>> {
    if let Some(path) = source_file {
        return Ok(Box::new(FileSource::new(PathBuf::from(path))));
    }

    match cfg.source {
        SourceKind::Last => Ok(Box::new(LastSource {
            wtmp: (!cfg.wtmp_file.trim().is_empty()).then(|| expand_tilde(&cfg.wtmp_file)),
        })),
        SourceKind::File => {
            if cfg.source_file.trim().is_empty() {
                return Err(AppError::Config(
                    "source is 'file' but source_file is empty".to_string(),
                ));
            }
            Ok(Box::new(FileSource::new(expand_tilde(&cfg.source_file))))
        }
    }
}
