//! Output formatting for the CLI
//!
//! Results go to stdout as JSON or as a colored table. Messages go to stderr
//! so that stdout stays machine-readable.

use colored::Colorize;
use serde::Serialize;
use serde_json::json;
use std::io::{self, Write};

/// Output formatter for human and JSON modes
pub struct OutputFormatter {
    /// Use colored output
    use_color: bool,
    /// JSON output mode
    json_mode: bool,
    /// Verbosity level
    verbosity: u8,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(use_color: bool, json_mode: bool, verbosity: u8) -> Self {
        // Respect NO_COLOR environment variable
        let use_color = use_color && std::env::var("NO_COLOR").is_err();

        Self {
            use_color,
            json_mode,
            verbosity,
        }
    }

    pub fn is_json(&self) -> bool {
        self.json_mode
    }

    /// Print a JSON document to stdout, pretty-printed.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) {
        match pretty(value) {
            Ok(text) => println!("{}", text),
            Err(e) => self.error(&format!("failed to render output: {}", e)),
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.json_mode {
            eprintln!("{}", json!({ "type": "error", "message": message }));
            return;
        }

        if self.use_color {
            eprintln!("{} {}", "ERROR:".red().bold(), message);
        } else {
            eprintln!("ERROR: {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.json_mode {
            eprintln!("{}", json!({ "type": "warning", "message": message }));
            return;
        }

        if self.use_color {
            eprintln!("{} {}", "WARNING:".yellow().bold(), message);
        } else {
            eprintln!("WARNING: {}", message);
        }
    }

    /// Print an info message (respects verbosity)
    pub fn info(&self, message: &str) {
        if self.verbosity < 1 {
            return;
        }

        if self.json_mode {
            eprintln!("{}", json!({ "type": "info", "message": message }));
            return;
        }

        if self.use_color {
            eprintln!("{} {}", "INFO:".blue(), message);
        } else {
            eprintln!("INFO: {}", message);
        }
    }

    /// Print a table
    pub fn table(&self, headers: &[&str], rows: &[Vec<String>]) {
        if self.json_mode {
            self.json(&json!({ "headers": headers, "rows": rows }));
            return;
        }

        for line in render_table(headers, rows) {
            match line {
                TableLine::Header(text) if self.use_color => {
                    println!("{}", text.bright_white().bold())
                }
                TableLine::Separator(text) if self.use_color => {
                    println!("{}", text.bright_black())
                }
                TableLine::Header(text) | TableLine::Separator(text) | TableLine::Row(text) => {
                    println!("{}", text)
                }
            }
        }
    }

    /// Flush stdout
    pub fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

enum TableLine {
    Header(String),
    Separator(String),
    Row(String),
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> Vec<TableLine> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let join = |cells: Vec<String>| cells.join(" | ").trim_end().to_string();
    let mut lines = Vec::with_capacity(rows.len() + 2);

    lines.push(TableLine::Header(join(
        headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{:width$}", h, width = *w))
            .collect(),
    )));

    let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    lines.push(TableLine::Separator(sep.join("-+-")));

    for row in rows {
        lines.push(TableLine::Row(join(
            row.iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{:width$}", cell, width = *w))
                .collect(),
        )));
    }
    lines
}
