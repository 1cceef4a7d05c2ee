//! Terminal output formatting.
//!
//! Every printer has a JSON-line form for scripting and respects quiet mode.
//! Warnings and errors are printed even in quiet mode.

use std::fmt::Display;
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use parking_lot::RwLock;
use serde_json::json;

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
    *config_cell().read()
}

fn write_config(config: OutputConfig) {
    *config_cell().write() = config;
}

fn regular_output_suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!("{}", json!({ "type": kind, "payload": payload }));
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Route one message: a JSON line in JSON mode, otherwise `render()` unless
/// quiet mode suppresses it. `always` messages ignore quiet mode.
fn emit(kind: &str, payload: serde_json::Value, always: bool, render: impl FnOnce()) {
    let config = read_config();
    if config.json {
        emit_json_line(kind, payload);
    } else if always || !regular_output_suppressed(config) {
        render();
    }
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        "field",
        json!({ "label": label, "value": value }),
        false,
        || println!("  {:<14} {}", label.dimmed(), value),
    );
}

/// Print a success line.
pub fn success(message: &str) {
    emit("success", json!({ "message": message }), false, || {
        println!("  {} {}", "✓".green(), message);
    });
}

/// Print a warning line, even in quiet mode.
pub fn warning(message: &str) {
    emit("warning", json!({ "message": message }), true, || {
        println!("  {} {}", "⚠".yellow(), message);
    });
}

/// Print an error line to stderr, even in quiet mode.
pub fn error(message: &str) {
    if is_json() {
        eprintln!(
            "{}",
            json!({ "type": "error", "payload": { "message": message } })
        );
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}

/// Print a section header.
pub fn section(title: &str) {
    emit("section", json!({ "title": title }), false, || {
        println!();
        println!("{}", title.bold());
    });
}

/// Print a dimmed note.
pub fn note(message: &str) {
    emit("note", json!({ "message": message }), false, || {
        println!("  {}", message.dimmed());
    });
}

/// Print a hint with "hint:" prefix.
pub fn hint(message: &str) {
    emit("hint", json!({ "message": message }), false, || {
        println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed());
    });
}

/// Print multiple lines of content, each indented.
///
/// Skipped in JSON mode; callers emit structured data via [`json_value`].
pub fn lines(content: &str) {
    let config = read_config();
    if config.json || regular_output_suppressed(config) {
        return;
    }

    for line in content.lines() {
        println!("  {line}");
    }
}

/// Emit a typed JSON payload line.
pub fn json_value(kind: &str, payload: serde_json::Value) {
    if is_json() {
        emit_json_line(kind, payload);
    }
}

/// Render a text progress bar, `ratio` clamped to 0..=1.
#[must_use]
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "█".repeat(filled),
        "░".repeat(width.saturating_sub(filled)),
        ratio * 100.0
    )
}

const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Create and start a progress spinner.
///
/// Returns a hidden progress bar in JSON or quiet mode.
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    let config = read_config();
    if config.json || config.quiet {
        let pb = indicatif::ProgressBar::hidden();
        pb.set_message(message.to_string());
        return pb;
    }

    let pb = indicatif::ProgressBar::new_spinner();
    if let Ok(style) = indicatif::ProgressStyle::default_spinner()
        .tick_strings(BRAILLE_SPINNER)
        .template("  {spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

fn finish_spinner(pb: &indicatif::ProgressBar, mark: String, message: &str) {
    if is_json() {
        pb.finish_and_clear();
    } else {
        pb.finish_with_message(format!("{mark} {message}"));
    }
}

/// Finish a spinner with a success checkmark.
pub fn spinner_success(pb: &indicatif::ProgressBar, message: &str) {
    finish_spinner(pb, "✓".green().to_string(), message);
}

/// Finish a spinner with a failure mark.
pub fn spinner_fail(pb: &indicatif::ProgressBar, message: &str) {
    finish_spinner(pb, "×".red().to_string(), message);
}

fn styled(value: impl Display, paint: impl FnOnce(&str) -> String) -> String {
    let value = value.to_string();
    if is_json() {
        value
    } else {
        paint(&value)
    }
}

/// Cyan, for names and ids worth spotting.
pub fn highlight(value: impl Display) -> String {
    styled(value, |v| v.cyan().to_string())
}

/// Green, for points.
pub fn positive(value: impl Display) -> String {
    styled(value, |v| v.green().to_string())
}

pub fn muted(value: impl Display) -> String {
    styled(value, |v| v.dimmed().to_string())
}
