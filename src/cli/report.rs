//! Report formatting and printing utilities.
//!
//! Issues are displayed cargo-style. Kept out of `core` so the extractor can
//! be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use serde_json::{Map, Value, json};
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::METADATA_KEY;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = calculate_max_line_width(&sorted);
    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print the success line of an extraction run.
pub fn print_success_to<W: Write>(summary: &ExtractSummary, files: usize, writer: &mut W) {
    let messages = summary.message_count();
    let mut msg = format!(
        "Extracted {} {} from {} {}",
        messages,
        if messages == 1 { "message" } else { "messages" },
        files,
        if files == 1 { "file" } else { "files" }
    );
    let catalogs = summary.catalog_count();
    if catalogs > 0 {
        msg.push_str(&format!(
            ", wrote {} {}",
            catalogs,
            if catalogs == 1 { "catalog" } else { "catalogs" }
        ));
    }
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print a warning about paths the scanner skipped.
pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 {
        let _ = writeln!(
            writer,
            "{} {} path(s) skipped{}",
            "warning:".bold().yellow(),
            count,
            if verbose { "" } else { " (use -v for details)" }
        );
    }
}

/// `{ "<file>": { "react-intl": { "messages": [...] } } }`, in path order.
pub fn units_json(summary: &ExtractSummary) -> Value {
    let mut files = Map::new();
    for unit in &summary.units {
        files.insert(
            unit.file_path.clone(),
            json!({ METADATA_KEY: unit.metadata }),
        );
    }
    Value::Object(files)
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let file_path = loc.file_path();
    let (line, col) = loc.line_col();

    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // --> path:line:col, or just the path for file-level issues
    if line > 0 {
        let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);
    } else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    }

    if let ReportLocation::Source(ctx) = loc {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };
        let source_line = ctx.source_line.as_str();

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // col is 1-based
        let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .map(|i| i.location().line_col().0)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(result, summary, verbose),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_extract(result: &CommandResult, summary: &ExtractSummary, verbose: bool) {
    let mut stderr = io::stderr().lock();
    print_skipped_warning_to(summary.skipped_count, verbose, &mut stderr);

    // Keep stdout machine-readable in JSON mode.
    if summary.json {
        report_to(&result.issues, &mut stderr);
        match serde_json::to_string_pretty(&units_json(summary)) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("{} {}", "error:".bold().red(), e),
        }
        return;
    }

    let mut stdout = io::stdout().lock();
    report_to(&result.issues, &mut stdout);
    if result.error_count == 0 {
        print_success_to(summary, result.source_files_checked, &mut stdout);
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
    if let Some(ref error) = summary.error {
        eprintln!("{} {}", "error:".bold().red(), error);
    }
}

// ============================================================
// Tests
// ============================================================
