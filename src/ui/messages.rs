//! Console output for the commands: one coloured, iconed line per message.
//! Diagnostics go to stderr, everything else to stdout.

use crate::core::duration::NOT_AVAILABLE;
use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";
const FG_GREY: &str = "\x1b[90m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{FG_BLUE}{BOLD}{ICON_INFO}{RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{FG_GREEN}{BOLD}{ICON_OK}{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{FG_YELLOW}{BOLD}{ICON_WARN}{RESET} {msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{FG_RED}{BOLD}{ICON_ERR}{RESET} {msg}");
}

/// `=== Daily Summary 2024-03 ===` above the table
pub fn header<T: fmt::Display>(msg: T) {
    println!("{FG_BLUE}{BOLD}=== {msg} ==={RESET}\n");
}

/// Grey text, for values that carry no information.
pub fn dim<T: fmt::Display>(msg: T) -> String {
    format!("{FG_GREY}{msg}{RESET}")
}

/// True for a table cell holding `N/A` or nothing at all (padding aside).
pub fn is_missing(cell: &str) -> bool {
    let v = cell.trim();
    v.is_empty() || v == NOT_AVAILABLE
}

/// Dim a missing cell, return any other cell untouched.
pub fn dim_missing(cell: &str) -> String {
    if is_missing(cell) {
        dim(cell)
    } else {
        cell.to_string()
    }
}
