//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output` (or the configured
//! default). Table uses `tabled`, structured formats use serde, plain emits
//! one identifier per line.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Longest text cell shown in tables before truncation.
const MAX_CELL: usize = 50;

// ── Format selection ─────────────────────────────────────────────────

/// Pick the output format: the flag wins, then the configured default.
/// An unrecognized configured value falls back to a table.
pub fn resolve_format(flag: Option<OutputFormat>, configured: &str) -> OutputFormat {
    flag.or_else(|| OutputFormat::from_str(configured, true).ok())
        .unwrap_or(OutputFormat::Table)
}

/// The format in effect for this invocation.
pub fn format(global: &GlobalOpts) -> OutputFormat {
    global.output.unwrap_or(OutputFormat::Table)
}

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

/// Green status line on stderr.
pub fn success(global: &GlobalOpts, message: &str) {
    if global.quiet {
        return;
    }
    if should_color(global.color) {
        eprintln!("{}", message.green());
    } else {
        eprintln!("{message}");
    }
}

/// Yellow status line on stderr.
pub fn warn(global: &GlobalOpts, message: &str) {
    if global.quiet {
        return;
    }
    if should_color(global.color) {
        eprintln!("{}", message.yellow());
    } else {
        eprintln!("{message}");
    }
}

/// Plain status line on stderr.
pub fn info(global: &GlobalOpts, message: &str) {
    if !global.quiet {
        eprintln!("{message}");
    }
}

/// Announce an empty listing. Returns `true` when the caller should stop,
/// which is only in table mode; structured formats still print `[]`.
pub fn report_empty<T>(global: &GlobalOpts, data: &[T], noun: &str) -> bool {
    if data.is_empty() && format(global) == OutputFormat::Table {
        info(global, &format!("No {noun} found."));
        return true;
    }
    false
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of records in the chosen format.
///
/// `to_row` builds the table row; `id_fn` gives the identifier printed in
/// plain mode. JSON and YAML serialize the records themselves.
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    Ok(match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::JsonCompact => serde_json::to_string(data)?,
        OutputFormat::Yaml => serde_yaml::to_string(data)?,
        OutputFormat::Plain => data.iter().map(id_fn).collect::<Vec<_>>().join("\n"),
    })
}

/// Render one record. Table mode uses the hand-aligned `detail_fn` view.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize + ?Sized,
{
    Ok(match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::JsonCompact => serde_json::to_string(data)?,
        OutputFormat::Yaml => serde_yaml::to_string(data)?,
        OutputFormat::Plain => id_fn(data),
    })
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", output.trim_end_matches('\n'));
}

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

// ── Cell formatting ──────────────────────────────────────────────────

/// Milliseconds since the epoch as `YYYY-MM-DD HH:MM:SS` (UTC).
pub fn timestamp(millis: Option<i64>) -> String {
    millis
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map_or_else(|| "-".into(), |t| t.format("%Y-%m-%d %H:%M:%S").to_string())
}

pub fn flag(value: Option<bool>) -> String {
    match value {
        Some(true) => "✓".into(),
        Some(false) => "✗".into(),
        None => "-".into(),
    }
}

/// Optional text, truncated to fit a table cell.
pub fn text(value: Option<&str>) -> String {
    match value {
        None | Some("") => "-".into(),
        Some(s) if s.chars().count() > MAX_CELL => {
            let head: String = s.chars().take(MAX_CELL - 3).collect();
            format!("{head}...")
        }
        Some(s) => s.to_owned(),
    }
}

pub fn opt<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".into(), |v| v.to_string())
}

pub fn join(values: &[String]) -> String {
    if values.is_empty() {
        "-".into()
    } else {
        values.join(", ")
    }
}
