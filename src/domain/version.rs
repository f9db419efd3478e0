use crate::error::{GitPinError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;

/// Strict release tag shape: optional `v`, three numeric components, nothing else.
const VERSION_TAG_PATTERN: &str = r"^(v?)([0-9]+)\.([0-9]+)\.([0-9]+)$";

fn version_tag_regex() -> Result<Regex> {
    Regex::new(VERSION_TAG_PATTERN)
        .map_err(|e| GitPinError::tag(format!("Invalid version tag pattern: {}", e)))
}

/// A release tag such as `v1.2.3` or `1.2.3`.
///
/// Components keep the exact text found in the tag name, so `v01.2.3`
/// produces the alias `v01`, not `v1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionTag {
    name: String,
    prefixed: bool,
    major: String,
    minor: String,
    patch: String,
}

impl VersionTag {
    /// Parse a tag name, rejecting anything outside the strict `v?X.Y.Z` shape
    /// (pre-release and build suffixes included).
    pub fn parse(name: &str) -> Result<Self> {
        let re = version_tag_regex()?;
        let caps = re.captures(name).ok_or_else(|| {
            GitPinError::tag(format!(
                "'{}' is not a release tag - expected vX.Y.Z or X.Y.Z",
                name
            ))
        })?;

        Ok(VersionTag {
            name: name.to_string(),
            prefixed: !caps[1].is_empty(),
            major: caps[2].to_string(),
            minor: caps[3].to_string(),
            patch: caps[4].to_string(),
        })
    }

    /// Returns true if `name` would parse as a release tag.
    pub fn matches(name: &str) -> bool {
        Self::parse(name).is_ok()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_prefix(&self) -> bool {
        self.prefixed
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }

    pub fn patch(&self) -> &str {
        &self.patch
    }

    fn prefix(&self) -> &'static str {
        if self.prefixed {
            "v"
        } else {
            ""
        }
    }

    /// Name of the floating major alias, e.g. `v1` for `v1.2.3`.
    pub fn major_alias(&self) -> String {
        format!("{}{}", self.prefix(), self.major)
    }

    /// Name of the floating minor alias, e.g. `v1.2` for `v1.2.3`.
    pub fn minor_alias(&self) -> String {
        format!("{}{}.{}", self.prefix(), self.major, self.minor)
    }
}

/// Compare two runs of ASCII digits by numeric value without parsing,
/// so arbitrarily long components never overflow.
fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for VersionTag {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_numeric(&self.major, &other.major)
            .then_with(|| cmp_numeric(&self.minor, &other.minor))
            .then_with(|| cmp_numeric(&self.patch, &other.patch))
            // Same version spelled differently (`1.2.3` / `v1.2.3` / `01.2.3`)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for VersionTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
