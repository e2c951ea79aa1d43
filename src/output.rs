//! Terminal rendering for merge-icons.
//!
//! Diagnostics go through `tracing`; this module prints what the user asked
//! for and the missing-theme report.

use colored::Colorize;
use std::path::PathBuf;

use crate::constants::INDEX_FILENAME;
use crate::merge::MergeSummary;
use crate::theme::ThemeDescriptor;

/// Prints the list of theme roots lacking an `index.theme` to stderr.
pub fn render_missing_themes(roots: &[PathBuf]) {
    eprintln!(
        "{}",
        "The following theme paths are invalid (missing index.theme)"
            .red()
            .bold()
    );
    eprintln!("{}", missing_theme_lines(roots));
}

fn missing_theme_lines(roots: &[PathBuf]) -> String {
    roots
        .iter()
        .map(|root| format!("  - {}", root.join(INDEX_FILENAME).display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints a one-screen report of a finished merge.
pub fn render_summary(summary: &MergeSummary) {
    println!(
        "{} {}",
        "Merged theme:".bold(),
        summary.merged_root.display()
    );
    println!(
        "{} {}",
        "Themes:".bold(),
        summary.theme_names.join(" < ")
    );
    println!(
        "{}",
        format!(
            "{} icons, {} links, {} skipped",
            summary.identities,
            summary.linked,
            summary.dangling.len()
        )
        .dimmed()
    );
    for dangling in &summary.dangling {
        println!(
            "  {} {}",
            "dangling:".yellow(),
            dangling.source.display()
        );
    }
    for dir in &summary.legacy_replaced {
        println!("  {} {}", "legacy removed:".cyan(), dir.display());
    }
}

/// Prints the typed fields of one theme and how many icons it offers.
pub fn render_theme(theme: &ThemeDescriptor, identities: usize) {
    println!("{} {}", "Theme root:".bold(), theme.root.display());
    for (label, value) in theme_fields(theme) {
        println!("  {:<18} {}", format!("{}:", label).cyan(), value);
    }
    println!("  {:<18} {}", "Icons:".cyan(), identities);
}

fn theme_fields(theme: &ThemeDescriptor) -> Vec<(&'static str, String)> {
    let opt = |v: Option<&str>| v.unwrap_or("-").to_string();
    let list = |v: Vec<String>| if v.is_empty() { "-".to_string() } else { v.join(", ") };
    vec![
        ("Name", opt(theme.name())),
        ("Comment", opt(theme.comment())),
        ("Example", opt(theme.example())),
        ("Hidden", theme.hidden().to_string()),
        ("Inherits", list(theme.inherits())),
        ("Directories", list(theme.directories())),
        ("ScaledDirectories", list(theme.scaled_directories())),
    ]
}

/// Prints an error chain to stderr.
pub fn render_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "error:".red().bold(), err);
}
