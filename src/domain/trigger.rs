//! Guard for the CI trigger context.

use crate::error::{GitPinError, Result};

/// Prefix every tag reference starts with.
pub const TAG_REF_PREFIX: &str = "refs/tags/";

/// Returns true if `git_ref` names a tag (`refs/tags/...`).
pub fn is_tag_ref(git_ref: &str) -> bool {
    git_ref.starts_with(TAG_REF_PREFIX)
}

/// Fails unless the run was triggered by a tag push.
///
/// Returns the short tag name (`v1.2.3` for `refs/tags/v1.2.3`).
pub fn ensure_tag_trigger(git_ref: Option<&str>) -> Result<&str> {
    match git_ref {
        Some(r) if is_tag_ref(r) => Ok(&r[TAG_REF_PREFIX.len()..]),
        _ => Err(GitPinError::trigger("This action can only be run on a tag.")),
    }
}
