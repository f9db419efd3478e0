//! Alias planning and the per-alias reconcile decision.
//!
//! Pure rules: no git access happens here.

use super::tag::TagIndex;
use std::fmt;

/// Which floating alias an intent refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasKind {
    Major,
    Minor,
}

impl fmt::Display for AliasKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasKind::Major => f.write_str("major"),
            AliasKind::Minor => f.write_str("minor"),
        }
    }
}

/// Desired state of one alias tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasIntent {
    pub kind: AliasKind,
    /// Alias tag name, e.g. `v1` or `v1.2`
    pub name: String,
    /// Release tag the alias follows
    pub source: String,
    /// Commit the alias must resolve to
    pub target: String,
}

/// Which aliases the run is allowed to touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasOptions {
    pub update_major: bool,
    pub update_minor: bool,
}

impl Default for AliasOptions {
    fn default() -> Self {
        AliasOptions {
            update_major: true,
            update_minor: true,
        }
    }
}

/// Compute the alias intents for the latest tag in `index`.
///
/// Returns an empty plan for an empty index. The minor alias is skipped when
/// the latest minor component is literally `0`, since `vX` already covers it.
pub fn plan_aliases(index: &TagIndex, options: AliasOptions) -> Vec<AliasIntent> {
    let Some(latest) = index.latest() else {
        return Vec::new();
    };

    let mut intents = Vec::with_capacity(2);

    if options.update_major {
        intents.push(AliasIntent {
            kind: AliasKind::Major,
            name: latest.tag.major_alias(),
            source: latest.tag.name().to_string(),
            target: latest.commit.clone(),
        });
    }

    if options.update_minor && latest.tag.minor() != "0" {
        intents.push(AliasIntent {
            kind: AliasKind::Minor,
            name: latest.tag.minor_alias(),
            source: latest.tag.name().to_string(),
            target: latest.commit.clone(),
        });
    }

    intents
}

/// What must happen to an alias given its current commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasAction {
    Create,
    Update,
    Keep,
}

impl AliasAction {
    /// Three-way decision: absent → create, elsewhere → update, on target → keep.
    pub fn decide(current: Option<&str>, target: &str) -> Self {
        match current {
            None => AliasAction::Create,
            Some(commit) if commit != target => AliasAction::Update,
            Some(_) => AliasAction::Keep,
        }
    }

    /// Annotation message for the tag write, if this action writes one.
    pub fn message(&self, kind: AliasKind) -> Option<String> {
        match self {
            AliasAction::Create => Some(format!("create {} release tag", kind)),
            AliasAction::Update => Some(format!("update {} release tag", kind)),
            AliasAction::Keep => None,
        }
    }
}
