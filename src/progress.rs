//! Terminal presentation
//!
//! Status lines, the load spinner and the statistics summary all go to
//! stderr. Standard output carries nothing but the anagram groups.

use crate::config::AnagramConfig;
use crate::loader::LoadStats;
use crate::report::ReportSummary;

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Color theme for the tool
pub mod theme {
    use colored::Color;

    pub const PRIMARY: Color = Color::Green;
    pub const ACCENT: Color = Color::Cyan;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
}

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════╗
║             ANAGRAM  BUILDER             ║
║     dictionary words by letter family    ║
╚══════════════════════════════════════════╝
"#;

    eprintln!("{}", banner.color(theme::PRIMARY));
}

/// Print a section header
pub fn print_header(text: &str) {
    eprintln!("\n{} {}", "▶".color(theme::PRIMARY), text.color(theme::PRIMARY).bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    eprintln!("  {} {}", "ℹ".color(theme::ACCENT), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    eprintln!("  {} {}", "✔".color(theme::PRIMARY), text.color(theme::PRIMARY));
}

/// Print a warning message
pub fn print_warning(text: &str) {
    eprintln!("  {} {}", "⚠".color(theme::WARNING), text.color(theme::WARNING));
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".color(theme::ERROR), text.color(theme::ERROR));
}

/// Print the resolved configuration
pub fn print_config(config: &AnagramConfig) {
    print_header("Configuration");
    print_info(&format!("Dictionary:   {:?}", config.dictionary));
    print_info(&format!("Key length:   {}", config.anagram_length));
}

/// Create a styled spinner for the load phase
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Print load and report statistics
pub fn print_summary(load: &LoadStats, report: &ReportSummary, length: usize) {
    eprintln!();
    eprintln!("{}", "═".repeat(60).color(theme::PRIMARY));
    eprintln!("{}", "                    ANAGRAM SUMMARY".color(theme::PRIMARY).bold());
    eprintln!("{}", "═".repeat(60).color(theme::PRIMARY));
    eprintln!();

    eprintln!("  {} {}", "Dictionary size:".green(), ByteSize(load.source_bytes));
    eprintln!("  {} {}", "Encoding:       ".green(), load.encoding);
    eprintln!("  {} {}", "Words read:     ".green(), format_number(load.tokens as u64));
    eprintln!("  {} {}", "Anagram keys:   ".green(), format_number(load.distinct_keys as u64));
    eprintln!();
    let groups_label = format!("Groups (len {}):", length);
    eprintln!(
        "  {} {}",
        groups_label.as_str().green().bold(),
        format_number(report.groups as u64).green().bold()
    );
    eprintln!("  {} {}", "Words printed:  ".green(), format_number(report.tokens as u64));
    eprintln!();
    eprintln!("  {} {}", "Load time:      ".green(), format_duration(load.elapsed));
    eprintln!("{}", "═".repeat(60).color(theme::PRIMARY));
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 1 {
        format!("{}ms", duration.as_millis())
    } else if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
