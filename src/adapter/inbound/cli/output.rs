//! CLI output formatting.
//!
//! Human output goes through tables and labelled fields; `--json` switches
//! every command to one JSON document on stdout. Errors always go to stderr.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::Result;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

fn suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

/// Print a serializable value as pretty JSON.
///
/// # Errors
/// Returns an error if the value cannot be serialized.
pub fn json_output<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print items as a table, or as a JSON array in JSON mode.
///
/// `row` flattens one item into its table row; JSON output keeps the
/// item's own shape.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn list<T, R>(items: &[T], row: impl Fn(&T) -> R) -> Result<()>
where
    T: Serialize,
    R: Tabled,
{
    let config = read_config();
    if config.json {
        return json_output(items);
    }
    if suppressed(config) {
        return Ok(());
    }
    if items.is_empty() {
        println!("  {}", "(none)".dimmed());
        return Ok(());
    }
    let mut table = Table::new(items.iter().map(row));
    table.with(Style::rounded());
    println!("{table}");
    Ok(())
}

/// Print a section header.
pub fn section(title: &str) {
    let config = read_config();
    if config.json || suppressed(config) {
        return;
    }
    println!();
    println!("{}", title.bold());
}

/// Print a labelled value.
pub fn field(label: &str, value: impl Display) {
    let config = read_config();
    if config.json || suppressed(config) {
        return;
    }
    println!("  {:<12} {}", label.dimmed(), value);
}

/// Print a success line, or `{"message": ...}` in JSON mode.
pub fn success(message: &str) {
    let config = read_config();
    if config.json {
        println!("{}", json!({ "message": message }));
        return;
    }
    if suppressed(config) {
        return;
    }
    println!("  {} {}", "✓".green(), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if read_config().json {
        eprintln!("{}", json!({ "error": message }));
        return;
    }
    eprintln!("  {} {}", "×".red(), message);
}
