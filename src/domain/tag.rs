use super::version::VersionTag;

/// A release tag together with the commit it ultimately points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedCommit {
    pub tag: VersionTag,
    pub commit: String,
}

/// Release tags of one run, in ascending version order.
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    entries: Vec<TaggedCommit>,
}

impl TagIndex {
    /// Build an index from resolved tags in any order.
    pub fn from_entries(mut entries: Vec<TaggedCommit>) -> Self {
        entries.sort_by(|a, b| a.tag.cmp(&b.tag));
        entries.dedup_by(|a, b| a.tag.name() == b.tag.name());

        TagIndex { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Highest version in the index.
    pub fn latest(&self) -> Option<&TaggedCommit> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaggedCommit> {
        self.entries.iter()
    }

    /// First indexed tag whose `v` prefix convention differs from the latest tag.
    pub fn prefix_mismatch(&self) -> Option<&TaggedCommit> {
        let latest = self.latest()?;
        self.iter()
            .find(|entry| entry.tag.has_prefix() != latest.tag.has_prefix())
    }
}
