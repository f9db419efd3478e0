//! Release tag inventory: which `v?X.Y.Z` tags exist and where they point.

use crate::domain::{TagIndex, TaggedCommit, VersionTag};
use crate::error::{GitPinError, Result};
use crate::git::Repository;
use tracing::debug;

/// Builds the version-ordered index of release tags in `repo`.
///
/// Tags outside the strict release pattern are ignored. Every release tag is
/// resolved through annotated tags to its commit. Listing or resolution
/// errors abort; an empty result is a valid, empty index.
pub fn build_tag_index<R: Repository>(repo: &R) -> Result<TagIndex> {
    let names = repo.list_tags()?;
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for name in names {
        let Ok(tag) = VersionTag::parse(&name) else {
            skipped += 1;
            continue;
        };

        let commit = repo.resolve_tag(&name)?.ok_or_else(|| {
            GitPinError::tag(format!("Tag '{}' vanished while it was being resolved", name))
        })?;

        entries.push(TaggedCommit { tag, commit });
    }

    let index = TagIndex::from_entries(entries);
    debug!(
        release_tags = index.len(),
        ignored_tags = skipped,
        "built release tag index"
    );
    Ok(index)
}
