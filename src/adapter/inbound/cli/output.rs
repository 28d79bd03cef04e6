//! Terminal output for CLI handlers.
//!
//! Every helper honors the global `--json` and `--quiet` flags: in JSON mode
//! each call emits one `{"type": ..., "payload": ...}` line on stdout, in
//! quiet mode only warnings and errors are printed.

use std::fmt::Display;

use owo_colors::OwoColorize;
use parking_lot::{const_rwlock, RwLock};
use serde::Serialize;
use serde_json::{json, Value};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }

    /// Log level for commands that do not take `--log-level`.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    const fn shows(&self, line: Line) -> bool {
        !self.quiet || matches!(line, Line::Always)
    }
}

/// Whether a human-readable line survives `--quiet`.
#[derive(Clone, Copy)]
enum Line {
    Regular,
    Always,
}

static OUTPUT: RwLock<OutputConfig> = const_rwlock(OutputConfig::new(false, false, 0));

/// Emit `payload` as a JSON line, or run `human` when the line is shown.
fn emit(kind: &str, payload: Value, line: Line, human: impl FnOnce()) {
    let config = current();
    if config.json {
        println!("{}", json!({ "type": kind, "payload": payload }));
    } else if config.shows(line) {
        human();
    }
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    *OUTPUT.write() = config;
}

/// Current output settings.
#[must_use]
pub fn current() -> OutputConfig {
    *OUTPUT.read()
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    emit(
        "header",
        json!({ "app": "bookwatch", "version": version }),
        Line::Regular,
        || {
            println!("{} {}", "bookwatch".bold(), version.dimmed());
            println!();
        },
    );
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        "field",
        json!({ "label": label, "value": value }),
        Line::Regular,
        || println!("  {:<14} {}", label.dimmed(), value),
    );
}

pub fn success(message: &str) {
    emit("success", json!({ "message": message }), Line::Regular, || {
        println!("  {} {}", "✓".green(), message);
    });
}

/// Print a warning line. Shown even in quiet mode.
pub fn warning(message: &str) {
    emit("warning", json!({ "message": message }), Line::Always, || {
        println!("  {} {}", "⚠".yellow(), message);
    });
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}

pub fn section(title: &str) {
    emit("section", json!({ "title": title }), Line::Regular, || {
        println!();
        println!("{}", title.bold());
    });
}

/// Print a book that just became available.
pub fn available(title: &str, branch: &str) {
    emit(
        "available",
        json!({ "title": title, "branch": branch }),
        Line::Always,
        || println!("  {} {} {}", "available".green(), title.bold(), branch.dimmed()),
    );
}

/// Print a hint with "hint:" prefix.
pub fn hint(message: &str) {
    emit("hint", json!({ "message": message }), Line::Regular, || {
        println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed());
    });
}

/// Print an action in progress ("Sending...").
pub fn action(verb: &str, target: &str) {
    emit(
        "action",
        json!({ "verb": verb, "target": target, "status": "in_progress" }),
        Line::Regular,
        || println!("  {} {}...", verb.bold().cyan(), target),
    );
}

/// Print a completed action.
pub fn action_done(verb: &str, target: &str) {
    emit(
        "action",
        json!({ "verb": verb, "target": target, "status": "done" }),
        Line::Regular,
        || println!("  {} {} {}", "✓".green(), verb.bold().green(), target),
    );
}

/// Print multiple lines of content, each indented.
pub fn lines(content: &str) {
    emit("lines", json!({ "content": content }), Line::Regular, || {
        for line in content.lines() {
            println!("  {line}");
        }
    });
}

/// Emit a JSON value directly (for commands that need custom JSON output).
pub fn json_output(value: Value) {
    println!("{value}");
}

/// Print rows as a table, or as one `row` JSON line each in JSON mode.
pub fn table<T>(rows: &[T])
where
    T: Tabled + Serialize,
{
    let config = current();
    if config.json {
        for row in rows {
            println!("{}", json!({ "type": "row", "payload": row }));
        }
    } else if config.shows(Line::Regular) {
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        for line in table.to_string().lines() {
            println!("  {line}");
        }
    }
}

fn paint(value: impl Display, style: fn(&str) -> String) -> String {
    let value = value.to_string();
    if is_json() {
        value
    } else {
        style(&value)
    }
}

/// Format a positive value in green.
pub fn positive(value: impl Display) -> String {
    paint(value, |v| v.green().to_string())
}

/// Format a negative value in red.
pub fn negative(value: impl Display) -> String {
    paint(value, |v| v.red().to_string())
}

/// Format a dimmed value.
pub fn muted(value: impl Display) -> String {
    paint(value, |v| v.dimmed().to_string())
}
