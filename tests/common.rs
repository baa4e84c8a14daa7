#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rpclogger::models::{EventCode, LogRecord, RawEvent};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's real configuration.
pub fn rpc(home: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("rpclogger");
    cmd.env("RPCLOGGER_HOME", home);
    cmd
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rpclogger_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Write `content` to `<dir>/<file>` and return the path
pub fn write_file(dir: &PathBuf, file: &str, content: &str) -> PathBuf {
    let path = dir.join(file);
    fs::write(&path, content).expect("write fixture");
    path
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

pub fn record(s: &str, event_id: u32) -> LogRecord {
    LogRecord::new(ts(s), event_id)
}

pub fn startup(d: NaiveDate, h: u32, m: u32) -> RawEvent {
    RawEvent::new(d, time(h, m), EventCode::Startup)
}

pub fn shutdown(d: NaiveDate, h: u32, m: u32) -> RawEvent {
    RawEvent::new(d, time(h, m), EventCode::Shutdown)
}

/// Small March 2024 record file: a full day, an empty day, a day with
/// spurious restarts, plus noise outside the month and other event ids.
pub const MARCH_CSV: &str = "timestamp,event_id
2024-03-03T18:05:00,6006
2024-03-03T12:00:00,6005
2024-03-03T08:10:00,2147489653
2024-03-03T12:01:00,6006
2024-03-01T17:30:00,6006
2024-03-01T08:00:00,6005
2024-03-01T09:00:00,7001
2024-02-29T08:00:00,6005
2024-04-01T00:00:00,6005
";
