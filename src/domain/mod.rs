//! Domain logic - pure release-alias rules independent of git operations

pub mod alias;
pub mod tag;
pub mod trigger;
pub mod version;

pub use alias::{plan_aliases, AliasAction, AliasIntent, AliasKind, AliasOptions};
pub use tag::{TagIndex, TaggedCommit};
pub use trigger::{ensure_tag_trigger, is_tag_ref, TAG_REF_PREFIX};
pub use version::VersionTag;
