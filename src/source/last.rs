use super::LogSource;
use crate::core::fetcher::ScanWindow;
use crate::errors::{AppError, AppResult};
use crate::models::{EventCode, LogRecord};
use chrono::NaiveDateTime;
use regex::Regex;
use std::path::PathBuf;
use std::process::Command;

/// Unix wtmp trail read through `last -x -F`.
///
/// `reboot` entries become startup records and `shutdown` entries become
/// shutdown records; user logins and runlevel changes are skipped.
#[derive(Debug, Clone, Default)]
pub struct LastSource {
    /// Alternative wtmp file (`last -f`)
    pub wtmp: Option<PathBuf>,
}

impl LogSource for LastSource {
    fn name(&self) -> String {
        match &self.wtmp {
            Some(p) => format!("last -f {}", p.display()),
            None => "last".to_string(),
        }
    }

    fn records(&self, window: &ScanWindow) -> AppResult<Vec<LogRecord>> {
        let mut cmd = Command::new("last");
        cmd.args(["-x", "-F", "reboot", "shutdown"]);
        if let Some(p) = &self.wtmp {
            cmd.arg("-f").arg(p);
        }

        let output = cmd
            .output()
            .map_err(|e| AppError::Source(format!("cannot run 'last': {e}")))?;

        if !output.status.success() {
            return Err(AppError::Source(format!(
                "'last' exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(parse_last_output(&text)?
            .into_iter()
            .filter(|r| window.contains(&r.timestamp))
            .collect())
    }
}

/// Parse the text printed by `last -x -F`.
///
/// ```text
/// reboot   system boot  6.1.0-18-amd64   Mon Mar  4 08:00:12 2024   still running
/// shutdown system down  6.1.0-18-amd64   Mon Mar  4 17:30:01 2024 - Tue Mar  5 07:58:40 2024  (14:28)
/// ```
pub fn parse_last_output(text: &str) -> AppResult<Vec<LogRecord>> {
    let re = Regex::new(
        r"^(reboot|shutdown)\s+system (?:boot|down)\s+\S+\s+(\w{3}\s+\w{3}\s+\d{1,2}\s+\d{2}:\d{2}:\d{2}\s+\d{4})",
    )
    .map_err(|e| AppError::Source(e.to_string()))?;

    let mut records = Vec::new();

    for line in text.lines() {
        let Some(caps) = re.captures(line) else {
            continue;
        };

        let code = if &caps[1] == "reboot" {
            EventCode::Startup
        } else {
            EventCode::Shutdown
        };

        let stamp = caps[2].split_whitespace().collect::<Vec<_>>().join(" ");
        let ts = NaiveDateTime::parse_from_str(&stamp, "%a %b %d %H:%M:%S %Y")
            .map_err(|_| AppError::InvalidRecord(line.to_string()))?;

        records.push(LogRecord::new(ts, code.id()));
    }

    Ok(records)
}
