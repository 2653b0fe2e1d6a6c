/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[2m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

pub const BADGE_TODAY: &str = "\x1b[30;43;1m";
pub const BADGE_NOW: &str = "\x1b[97;41;1m";

/// Wrap a placeholder value ("--") in grey.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
