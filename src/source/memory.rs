use super::LogSource;
use crate::core::fetcher::ScanWindow;
use crate::errors::AppResult;
use crate::models::LogRecord;

/// Records held in memory, returned as-is (window ignored).
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<LogRecord>,
}

impl MemorySource {
    pub fn new(records: Vec<LogRecord>) -> Self {
        Self { records }
    }
}

impl LogSource for MemorySource {
    fn name(&self) -> String {
        format!("memory ({} records)", self.records.len())
    }

    fn records(&self, _window: &ScanWindow) -> AppResult<Vec<LogRecord>> {
        Ok(self.records.clone())
    }
}
