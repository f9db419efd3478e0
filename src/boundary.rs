use std::fmt;

/// Non-fatal conditions noticed while pinning aliases.
/// These are reported to the user but never fail the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Repository has no release tags at all
    NoVersionTags,
    /// The pushed tag is not the highest release; aliases follow the highest one
    TriggerNotLatest {
        trigger_tag: String,
        latest_tag: String,
    },
    /// Release tags mix `v`-prefixed and bare names
    MixedPrefix {
        latest_tag: String,
        other_tag: String,
    },
    /// A `vX.0` alias exists but minor aliases are not kept for `.0` releases
    StaleMinorAlias { alias: String, latest_tag: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoVersionTags => write!(f, "No tags found!"),
            BoundaryWarning::TriggerNotLatest {
                trigger_tag,
                latest_tag,
            } => write!(
                f,
                "Tag '{}' is not the latest release; aliases follow '{}'",
                trigger_tag, latest_tag
            ),
            BoundaryWarning::MixedPrefix {
                latest_tag,
                other_tag,
            } => write!(
                f,
                "Tag '{}' uses a different 'v' prefix convention than '{}'; aliases follow '{}'",
                other_tag, latest_tag, latest_tag
            ),
            BoundaryWarning::StaleMinorAlias { alias, latest_tag } => write!(
                f,
                "Alias '{}' exists but is not maintained for '{}'; leaving it untouched",
                alias, latest_tag
            ),
        }
    }
}
