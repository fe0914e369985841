//! Terminal UI: the command table printed by `cpm help` and interactive prompts.
//!
//! ```text
//!   ┌─────────┬─────────────────────────────────────┐
//!   │ Command │ Description                         │
//!   ├─────────┼─────────────────────────────────────┤
//!   │ create  │ Creates a new project in the cwd    │
//!   └─────────┴─────────────────────────────────────┘
//! ```

use crate::logger::Logger;
use anyhow::Result;
use colored::*;
use console::{measure_text_width, truncate_str};

const MIN_COLUMN_WIDTH: usize = 8;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Rows with the wrong number of cells are ignored.
    pub fn add_row(&mut self, row: Vec<String>) {
        if row.len() == self.headers.len() {
            self.rows.push(row);
        }
    }

    /// Column widths that fit `max_width`, shrinking the widest column first.
    fn column_widths(&self, max_width: usize) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(measure_text_width(cell));
            }
        }

        let overhead = 3 + 3 * self.headers.len();
        let budget = max_width.saturating_sub(overhead);
        while widths.iter().sum::<usize>() > budget {
            let Some((idx, &widest)) = widths.iter().enumerate().max_by_key(|(_, w)| **w) else {
                break;
            };
            if widest <= MIN_COLUMN_WIDTH {
                break;
            }
            widths[idx] -= 1;
        }
        widths
    }

    pub fn render(&self, max_width: usize) -> Vec<String> {
        if self.headers.is_empty() {
            return Vec::new();
        }

        let widths = self.column_widths(max_width);
        let border = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("  {left}{}{right}", segments.join(mid))
        };
        let row_line = |cells: &[String], bold: bool| {
            let rendered: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| {
                    let flat = cell.replace(['\n', '\r', '\t'], " ");
                    let text = truncate_str(&flat, width, "...").to_string();
                    let padding = width.saturating_sub(measure_text_width(&text));
                    let text = if bold { text.bold().to_string() } else { text };
                    format!(" {text}{} ", " ".repeat(padding))
                })
                .collect();
            format!("  │{}│", rendered.join("│"))
        };

        let mut lines = vec![border("┌", "┬", "┐"), row_line(&self.headers[..], true)];
        lines.push(border("├", "┼", "┤"));
        lines.extend(self.rows.iter().map(|row| row_line(&row[..], false)));
        lines.push(border("└", "┴", "┘"));
        lines
    }

    pub fn print(&self) {
        let (_, term_width) = console::Term::stdout().size();
        for line in self.render(term_width as usize) {
            println!("{line}");
        }
    }
}

/// Source of interactive answers. `create` asks through this so tests can
/// script the conversation.
pub trait Prompter {
    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String>;
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

pub struct InquirePrompter<'a> {
    logger: &'a Logger,
}

impl<'a> InquirePrompter<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        Self { logger }
    }
}

impl Prompter for InquirePrompter<'_> {
    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        let label = self.logger.prompt_label(message);
        let mut prompt = inquire::Text::new(&label);
        if let Some(default) = default {
            prompt = prompt.with_default(default);
        }
        Ok(prompt.prompt()?.trim().to_string())
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let label = self.logger.prompt_label(message);
        Ok(inquire::Confirm::new(&label)
            .with_default(default)
            .prompt()?)
    }
}
