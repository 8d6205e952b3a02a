//! Log formatting and console output with ANSI colors
//!
//! Produces aligned `time [TAG] [LEVEL] message` lines. Output goes to
//! stdout with broken-pipe tolerance so piping through `head` does not
//! abort the process.

use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stdout, ErrorKind, Write};

/// Log format widths for alignment
const TAG_WIDTH: usize = 10;
const LEVEL_WIDTH: usize = 7;

/// Format and output a log message
pub fn format_and_log(tag: LogTag, level: &str, message: &str) {
    let time = Local::now().format("%H:%M:%S").to_string();

    let line = format!(
        "{} [{}] [{}] {}",
        time.dimmed(),
        format_tag(&tag),
        format_level(level),
        message
    );
    print_stdout_safe(&line);
}

/// Colorize and pad the tag
fn format_tag(tag: &LogTag) -> ColoredString {
    let padded = format!("{:<width$}", tag.as_str(), width = TAG_WIDTH);
    match tag {
        LogTag::System => padded.bright_white(),
        LogTag::Webserver => padded.bright_blue(),
        LogTag::Cache => padded.bright_cyan(),
        LogTag::Market => padded.bright_green(),
        LogTag::Demo => padded.bright_magenta(),
        LogTag::Config => padded.yellow(),
    }
}

/// Colorize and pad the level
fn format_level(level: &str) -> ColoredString {
    let padded = format!("{:<width$}", level, width = LEVEL_WIDTH);
    match level {
        "ERROR" => padded.bright_red().bold(),
        "WARNING" => padded.yellow(),
        "INFO" => padded.normal(),
        "DEBUG" => padded.bright_black(),
        "VERBOSE" => padded.dimmed(),
        _ => padded.normal(),
    }
}

/// Print to stdout, ignoring broken pipes (e.g. `liquiboard | head`)
fn print_stdout_safe(line: &str) {
    let mut out = stdout();
    if let Err(e) = writeln!(out, "{}", line) {
        if e.kind() != ErrorKind::BrokenPipe {
            eprintln!("{}", line);
        }
    }
}
