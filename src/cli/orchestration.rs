//! Main workflow orchestration logic
//!
//! Runs the pipeline end to end: trigger guard, tag inventory, alias
//! planning, alias reconciliation. Kept apart from `main` so it can be driven
//! by any [`Repository`] without clap.

use tracing::{debug, warn};

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{ensure_tag_trigger, plan_aliases, AliasOptions, TagIndex};
use crate::error::{GitPinError, Result};
use crate::git::Repository;
use crate::inventory::build_tag_index;
use crate::reconciler::{reconcile_alias, AliasReport};
use crate::ui;

/// Arguments for the pin workflow
///
/// Mirrors the CLI arguments that are not configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PinWorkflowArgs {
    /// Ref that triggered the run, e.g. `refs/tags/v1.2.3`
    pub trigger_ref: Option<String>,

    /// Preview mode - don't write or push tags
    pub dry_run: bool,
}

/// Result of a successful pin workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowResult {
    /// Highest release tag, if any release tags exist
    pub latest_tag: Option<String>,

    /// One report per alias that was processed
    pub reports: Vec<AliasReport>,

    /// Non-fatal conditions noticed along the way
    pub warnings: Vec<BoundaryWarning>,
}

impl WorkflowResult {
    /// Number of aliases written and pushed.
    pub fn mutation_count(&self) -> usize {
        self.reports.iter().filter(|r| r.mutated()).count()
    }
}

/// Main pin workflow
///
/// 1. Refuse to run unless triggered by a tag
/// 2. Configure the tagger identity and force-fetch all tags
/// 3. Index release tags and pick the latest
/// 4. Plan and reconcile the major/minor aliases
///
/// Steps that write (identity, fetch, tag writes, pushes) are skipped in a
/// dry run. Each alias is attempted even if the other failed; the run then
/// fails with the first alias error.
pub fn run_pin_workflow<R: Repository>(
    repo: &R,
    args: &PinWorkflowArgs,
    config: &Config,
) -> Result<WorkflowResult> {
    let trigger_tag = ensure_tag_trigger(args.trigger_ref.as_deref())?;

    ui::display_status("Updating pinned release versions...");

    let options: AliasOptions = config.aliases.into();
    debug!(update_major = options.update_major, "alias option");
    debug!(update_minor = options.update_minor, "alias option");

    if args.dry_run {
        ui::display_status("Dry run: using local tags, nothing will be written or pushed");
    } else {
        repo.configure_identity(&config.identity)?;
        repo.fetch_tags(&config.remote.name)?;
    }

    let index = build_tag_index(repo)?;
    let mut result = WorkflowResult::default();

    let Some(latest) = index.latest() else {
        let warning = BoundaryWarning::NoVersionTags;
        ui::display_boundary_warning(&warning);
        result.warnings.push(warning);
        return Ok(result);
    };
    debug!(latest_tag = %latest.tag, "latest release");
    result.latest_tag = Some(latest.tag.name().to_string());

    result.warnings = collect_warnings(repo, &index, trigger_tag, options)?;
    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }

    let mut first_failure: Option<GitPinError> = None;
    for intent in plan_aliases(&index, options) {
        debug!(alias = %intent.name, kind = %intent.kind, target = %intent.target, "planned alias");

        match reconcile_alias(repo, &intent, &config.remote.name, args.dry_run) {
            Ok(report) => {
                ui::display_alias_report(&report);
                result.reports.push(report);
            }
            Err(e) => {
                warn!(alias = %intent.name, error = %e, "failed to pin {} alias", intent.kind);
                if first_failure.is_none() {
                    first_failure = Some(e);
                }
            }
        }
    }

    match first_failure {
        Some(e) => Err(e),
        None => Ok(result),
    }
}

fn collect_warnings<R: Repository>(
    repo: &R,
    index: &TagIndex,
    trigger_tag: &str,
    options: AliasOptions,
) -> Result<Vec<BoundaryWarning>> {
    let mut warnings = Vec::new();
    let Some(latest) = index.latest() else {
        return Ok(warnings);
    };

    if trigger_tag != latest.tag.name() {
        warnings.push(BoundaryWarning::TriggerNotLatest {
            trigger_tag: trigger_tag.to_string(),
            latest_tag: latest.tag.name().to_string(),
        });
    }

    if let Some(other) = index.prefix_mismatch() {
        warnings.push(BoundaryWarning::MixedPrefix {
            latest_tag: latest.tag.name().to_string(),
            other_tag: other.tag.name().to_string(),
        });
    }

    // `vX.0` aliases are never maintained; an existing one is reported, not removed
    if options.update_minor && latest.tag.minor() == "0" {
        let alias = latest.tag.minor_alias();
        if repo.resolve_tag(&alias)?.is_some() {
            warnings.push(BoundaryWarning::StaleMinorAlias {
                alias,
                latest_tag: latest.tag.name().to_string(),
            });
        }
    }

    Ok(warnings)
}
