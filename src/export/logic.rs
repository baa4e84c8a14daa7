// src/export/logic.rs

use crate::core::logic::MonthReport;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::summaries_to_rows;
use crate::ui::messages::warning;
use std::path::{Path, PathBuf};

/// High level export of a month report.
pub struct ExportLogic;

impl ExportLogic {
    /// `pc_events_<year>_<month>.<ext>`, month without zero padding.
    pub fn file_name(report: &MonthReport, format: ExportFormat) -> String {
        format!(
            "pc_events_{}_{}.{}",
            report.request.year(),
            report.request.month(),
            format.as_str()
        )
    }

    /// Write `report` into `dir`.
    ///
    /// Returns the written path, or `None` when the report holds no data
    /// (nothing is written in that case).
    pub fn export(
        report: &MonthReport,
        format: ExportFormat,
        dir: &Path,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        if report.is_empty() {
            warning(format!(
                "No startup/shutdown events for {}. Nothing to export.",
                report.request.label()
            ));
            return Ok(None);
        }

        if !dir.is_dir() {
            return Err(AppError::Export(format!(
                "export directory does not exist: {}",
                dir.display()
            )));
        }

        let path = dir.join(Self::file_name(report, format));
        ensure_writable(&path, force)?;

        let rows = summaries_to_rows(&report.days);

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(Some(path))
    }
}
