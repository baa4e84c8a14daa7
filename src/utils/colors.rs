//! ANSI color helper utilities for terminal output.

use crate::ui::messages::{dim, is_missing};

pub const RESET: &str = "\x1b[0m";

pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";

/// Startup times in green, shutdown times in red; missing ones dimmed.
pub fn colorize_marker(value: &str, is_startup: bool) -> String {
    if is_missing(value) {
        return dim(value);
    }

    if is_startup {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
