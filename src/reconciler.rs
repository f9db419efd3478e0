//! Brings one alias tag in line with its intent.

use crate::domain::{AliasAction, AliasIntent};
use crate::error::Result;
use crate::git::Repository;
use tracing::debug;

/// Terminal state of a successfully processed alias
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasOutcome {
    Created,
    Updated,
    Unchanged,
}

/// What happened (or, in a dry run, would happen) to one alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasReport {
    pub intent: AliasIntent,
    /// Commit the alias pointed at before the run
    pub previous: Option<String>,
    pub outcome: AliasOutcome,
    /// False when the change was only previewed
    pub applied: bool,
}

impl AliasReport {
    /// True if the alias was written and pushed.
    pub fn mutated(&self) -> bool {
        self.applied && self.outcome != AliasOutcome::Unchanged
    }
}

/// Reconciles a single alias against the repository.
///
/// A missing alias is created, an alias on another commit is re-annotated in
/// place, an alias already on the target is left alone. Writes are pushed
/// with force so the remote ref moves unconditionally. With `dry_run` the
/// decision is reported without writing or pushing.
pub fn reconcile_alias<R: Repository>(
    repo: &R,
    intent: &AliasIntent,
    remote: &str,
    dry_run: bool,
) -> Result<AliasReport> {
    let previous = repo.resolve_tag(&intent.name)?;
    if previous.is_none() {
        debug!(alias = %intent.name, "{} version tag not found", intent.kind);
    }

    let action = AliasAction::decide(previous.as_deref(), &intent.target);
    let outcome = match action {
        AliasAction::Create => AliasOutcome::Created,
        AliasAction::Update => AliasOutcome::Updated,
        AliasAction::Keep => AliasOutcome::Unchanged,
    };

    let mut report = AliasReport {
        intent: intent.clone(),
        previous,
        outcome,
        applied: false,
    };

    let Some(message) = action.message(intent.kind) else {
        return Ok(report);
    };
    if dry_run {
        return Ok(report);
    }

    repo.write_annotated_tag(
        &intent.name,
        &intent.target,
        &message,
        action == AliasAction::Update,
    )?;
    repo.force_push_tag(remote, &intent.name)?;
    report.applied = true;

    Ok(report)
}
