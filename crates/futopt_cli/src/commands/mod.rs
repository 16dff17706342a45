//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! result to the supplied writer as a table or as JSON.

pub mod greeks;
pub mod implied_vol;
pub mod price;

use serde::Serialize;
use std::io::Write;

use crate::config::OutputFormat;
use crate::Result;

/// A command result that can be printed as a table or serialised to JSON.
pub trait Report: Serialize {
    /// Label/value pairs shown in table output.
    fn rows(&self) -> Vec<(&'static str, String)>;
}

/// Write `report` to `out` in the requested format.
pub fn write_report<R: Report, W: Write>(
    out: &mut W,
    format: OutputFormat,
    report: &R,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            write!(out, "{}", render_table(&report.rows()))?;
        }
    }
    Ok(())
}

/// Render label/value pairs as a two-column box table.
pub fn render_table(rows: &[(&str, String)]) -> String {
    let label_width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, value)| value.chars().count()).max().unwrap_or(0);
    let left = "─".repeat(label_width + 2);
    let right = "─".repeat(value_width + 2);

    let mut table = format!("┌{}┬{}┐\n", left, right);
    for (label, value) in rows {
        table.push_str(&format!(
            "│ {:<lw$} │ {:>vw$} │\n",
            label,
            value,
            lw = label_width,
            vw = value_width
        ));
    }
    table.push_str(&format!("└{}┴{}┘\n", left, right));
    table
}
