//! Pure formatting functions for UI output.
//!
//! Message text is built by `format_*`/`describe_*` functions so it can be
//! tested; `display_*` functions only style and print it.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::reconciler::{AliasOutcome, AliasReport};

/// Abbreviate a commit id for display.
pub fn short_commit(commit: &str) -> &str {
    commit.get(..7).unwrap_or(commit)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Format and print a non-fatal warning.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    println!("{} {}", style("!").yellow().bold(), warning);
}

/// Line for the final failure of a run.
///
/// Inside GitHub Actions this is an `::error::` workflow command so the step
/// is annotated with the message.
pub fn format_failure(message: &str, github_actions: bool) -> String {
    if github_actions {
        // Workflow commands end at the first newline unless it is escaped
        let escaped = message
            .replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A");
        format!("::error::{}", escaped)
    } else {
        message.to_string()
    }
}

/// Print the message a failed run ends with.
pub fn display_failure(message: &str, github_actions: bool) {
    if github_actions {
        eprintln!("{}", format_failure(message, true));
    } else {
        display_error(message);
    }
}

/// One-line description of an alias report.
pub fn describe_alias_report(report: &AliasReport) -> String {
    let intent = &report.intent;
    let target = short_commit(&intent.target);

    match (report.outcome, report.applied) {
        (AliasOutcome::Created, true) => format!(
            "Created {} tag {} at {} ({})",
            intent.kind, intent.name, target, intent.source
        ),
        (AliasOutcome::Created, false) => format!(
            "Would create {} tag {} at {} ({})",
            intent.kind, intent.name, target, intent.source
        ),
        (AliasOutcome::Updated, applied) => {
            let from = report.previous.as_deref().map(short_commit).unwrap_or("?");
            let verb = if applied { "Updated" } else { "Would update" };
            format!(
                "{} {} tag {} from {} to {} ({})",
                verb, intent.kind, intent.name, from, target, intent.source
            )
        }
        (AliasOutcome::Unchanged, _) => format!(
            "{} tag {} already points at {} ({})",
            capitalize(&intent.kind.to_string()),
            intent.name,
            target,
            intent.source
        ),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Print an alias report: success for pushed changes, status otherwise.
pub fn display_alias_report(report: &AliasReport) {
    let line = describe_alias_report(report);
    if report.mutated() {
        display_success(&line);
    } else {
        display_status(&line);
    }
}
