//! Report formatting and printing.
//!
//! The per-key catalog report goes to stdout as plain text. Status messages
//! (catalog loaded/written, degraded steps, summary) go to stderr, colored.

use std::{
    error::Error,
    io::{self, Write},
};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, InitSummary, LoadOutcome, UpdateSummary, WriteOutcome,
};
use crate::{
    config::CONFIG_FILE_NAME,
    core::{Catalog, KeyStatus, StatusCounts, key_statuses},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Update(summary) => {
            print_update_status_to(summary, verbose, &mut io::stderr().lock());
            write_catalog_report(
                summary.language.code(),
                &summary.catalog,
                &mut io::stdout().lock(),
            );
            print_counts_to(&summary.counts(), &mut io::stderr().lock());
            print_degraded_to(result.warning_count, verbose, &mut io::stderr().lock());
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

/// Write the per-key report for a catalog.
///
/// ```text
/// For language 'fr':
/// fr 'Hello' = 'Bonjour'
/// fr (menu) 'Save' ! <not translated>
/// fr 'Old' = 'Vieux' ! <not used>
/// ```
pub fn write_catalog_report<W: Write>(language: &str, catalog: &Catalog, writer: &mut W) {
    let _ = writeln!(writer, "For language '{}':", language);
    for status in key_statuses(catalog) {
        let _ = writeln!(writer, "{}", format_key_line(language, &status));
    }
}

pub fn format_key_line(language: &str, status: &KeyStatus<'_>) -> String {
    let mut line = format!("{} ", language);
    if !status.context.is_empty() {
        line.push_str(&format!("({}) ", status.context));
    }
    line.push_str(&format!("'{}'", status.source));
    match status.translation {
        Some(translation) => line.push_str(&format!(" = '{}'", translation)),
        None => line.push_str(" ! <not translated>"),
    }
    if !status.is_used {
        line.push_str(" ! <not used>");
    }
    if !status.special_characters_ok {
        line.push_str(" ! <special characters mismatch>");
    }
    line
}

/// Print what happened to the catalog file during `update`.
pub fn print_update_status_to<W: Write>(summary: &UpdateSummary, verbose: bool, writer: &mut W) {
    let path = summary.catalog_path.display();

    match &summary.load {
        LoadOutcome::Loaded { entries } => {
            if verbose {
                let _ = writeln!(
                    writer,
                    "{} loaded {} {} from {}",
                    "note:".bold(),
                    entries,
                    if *entries == 1 { "string" } else { "strings" },
                    path
                );
            }
        }
        LoadOutcome::Missing => {
            let _ = writeln!(
                writer,
                "{} {} not found, creating a new catalog",
                "note:".bold(),
                path
            );
        }
        LoadOutcome::Failed(err) => {
            let _ = writeln!(
                writer,
                "{} {}, starting from an empty catalog",
                "warning:".bold().yellow(),
                describe_error(err, verbose)
            );
        }
    }

    match &summary.write {
        WriteOutcome::Written => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "{} was created/updated ({} {}{})",
                    path,
                    summary.catalog.len(),
                    if summary.catalog.len() == 1 { "string" } else { "strings" },
                    if summary.removed_unused {
                        ", unused removed"
                    } else {
                        ""
                    }
                )
                .green()
            );
        }
        WriteOutcome::Failed(err) => {
            let _ = writeln!(
                writer,
                "{} {}, {} was not created",
                "warning:".bold().yellow(),
                describe_error(err, verbose),
                path
            );
        }
    }
}

/// Print the closing summary line.
pub fn print_counts_to<W: Write>(counts: &StatusCounts, writer: &mut W) {
    if counts.has_problems() {
        let mut parts = Vec::new();
        if counts.untranslated > 0 {
            parts.push(format!("{} not translated", counts.untranslated));
        }
        if counts.unused > 0 {
            parts.push(format!("{} not used", counts.unused));
        }
        if counts.mismatched > 0 {
            parts.push(format!("{} special characters mismatch", counts.mismatched));
        }
        let _ = writeln!(
            writer,
            "\n{} {} {} ({})",
            FAILURE_MARK.red(),
            counts.total,
            if counts.total == 1 { "key" } else { "keys" },
            parts.join(", ").red()
        );
    } else {
        let _ = writeln!(
            writer,
            "\n{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} {}, all translated",
                counts.total,
                if counts.total == 1 { "key" } else { "keys" }
            )
            .green()
        );
    }
}

/// Note how many catalog steps fell back to defaults instead of aborting.
pub fn print_degraded_to<W: Write>(warning_count: usize, verbose: bool, writer: &mut W) {
    if warning_count == 0 {
        return;
    }
    let _ = writeln!(
        writer,
        "{} {} catalog {} degraded{}",
        "warning:".bold().yellow(),
        warning_count,
        if warning_count == 1 { "step" } else { "steps" },
        if verbose {
            String::new()
        } else {
            format!(" (use {} for details)", "-v".cyan())
        }
    );
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
    }
}

/// Top-level message, plus the cause chain in verbose mode.
fn describe_error(err: &dyn Error, verbose: bool) -> String {
    if !verbose {
        return format!("{} (use {} for details)", err, "-v".cyan());
    }
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {}", cause));
        source = cause.source();
    }
    message
}
