/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Greys out placeholder cells (empty, `--` or a zero counter).
///
/// `colorize_optional("--")` → "<grey>--<reset>"
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" || v == "0" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Greens a counter when it is non-zero, greys it otherwise.
pub fn colorize_count(value: u64) -> String {
    if value > 0 {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{GREY}{value}{RESET}")
    }
}
