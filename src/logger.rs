//! Counted, colour-tagged console output.
//!
//! Every line is prefixed with a running counter and a tag:
//!
//! ```text
//! [1]  [success]: parsed command
//! [2]  [execute]: cmake --version > cpm.tmp
//! [3]  [error]: 'frob' is not a valid command
//! ```
//!
//! A `Logger` is created once in `main` and handed to each command by reference.

use colored::*;
use std::cell::Cell;

const COUNTER_WIDTH: usize = 5;

pub struct Logger {
    count: Cell<usize>,
    enabled: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            count: Cell::new(1),
            enabled: true,
        }
    }

    /// A logger that counts lines but prints nothing. Used by tests.
    pub fn quiet() -> Self {
        Self {
            count: Cell::new(1),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of lines logged so far.
    pub fn lines(&self) -> usize {
        self.count.get() - 1
    }

    fn counter(&self) -> String {
        let n = self.count.get();
        self.count.set(n + 1);

        let label = format!("[{n}]");
        let padding = COUNTER_WIDTH.saturating_sub(label.len());
        format!("{}{}", label.cyan(), " ".repeat(padding))
    }

    fn line(&self, tag: ColoredString, message: &str) -> String {
        format!("{}{}{} {}", self.counter(), tag, ":".normal(), message)
    }

    pub fn success(&self, message: &str) {
        let line = self.line("[success]".green(), message);
        if self.enabled {
            println!("{line}");
        }
    }

    pub fn success_q(&self, message: &str, quote: &str) {
        self.success(&quoted(message, quote));
    }

    pub fn error(&self, message: &str) {
        let line = self.line("[error]".red(), message);
        if self.enabled {
            eprintln!("{line}");
        }
    }

    pub fn warn(&self, message: &str) {
        let line = self.line("[warn]".yellow(), message);
        if self.enabled {
            println!("{line}");
        }
    }

    pub fn warn_q(&self, message: &str, quote: &str) {
        self.warn(&quoted(message, quote));
    }

    /// Logs a shell command right before it runs.
    pub fn execute(&self, command: &str) {
        let line = self.line("[execute]".truecolor(255, 165, 0), command);
        if self.enabled {
            println!("{line}");
        }
    }

    /// Logs with an arbitrary tag, e.g. `custom("cpm version 1.0", "version", "red")`.
    /// Unknown colour names fall back to white.
    pub fn custom(&self, message: &str, tag: &str, color: &str) {
        let line = self.line(format!("[{tag}]").color(color), message);
        if self.enabled {
            println!("{line}");
        }
    }

    /// Label shown in front of interactive prompts. Consumes a counter slot.
    pub fn prompt_label(&self, message: &str) -> String {
        format!("{}{} {}", self.counter(), "[prompt]:".yellow(), message)
    }
}

fn quoted(message: &str, quote: &str) -> String {
    format!("'{quote}' {message}")
}
