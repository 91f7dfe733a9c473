/// ANSI color helper utilities for terminal output.
use crate::models::{Role, Status};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

/// Approved → green, rejected → red, pending → yellow.
pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::Approved => GREEN,
        Status::Rejected => RED,
        Status::Pending => YELLOW,
    }
}

pub fn color_for_role(role: Role) -> &'static str {
    match role {
        Role::KepalaSekolah => MAGENTA,
        Role::Guru => BLUE,
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Grey out empty placeholders ("", "-").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
