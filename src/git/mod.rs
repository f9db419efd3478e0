//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the handful of git
//! operations git-pin needs, so the workflow runs against either a real
//! repository or an in-memory one in tests.
//!
//! - [repository::Git2Repository]: real implementation using the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for testing
//!
//! ```rust
//! # use git_pin::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_pin::Result<()> {
//! match repo.resolve_tag("v1")? {
//!     Some(commit) => println!("v1 -> {}", commit),
//!     None => println!("v1 does not exist yet"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::config::IdentityConfig;
use crate::error::Result;

/// Git operations used by the alias workflow
///
/// Commits are exchanged as full hex object ids. Every method is a blocking
/// call; errors carry the message reported by the git layer.
pub trait Repository {
    /// Set the local author identity used for tag annotations.
    fn configure_identity(&self, identity: &IdentityConfig) -> Result<()>;

    /// Fetch every tag from `remote`, overwriting local tags that differ.
    fn fetch_tags(&self, remote: &str) -> Result<()>;

    /// Names of all local tags, in no particular order.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Commit a tag ultimately points to (`refs/tags/<name>^{}`).
    ///
    /// # Returns
    /// * `Ok(Some(commit))` - The tag exists; annotated tags are peeled
    /// * `Ok(None)` - The tag does not exist
    /// * `Err` - Any other git failure
    fn resolve_tag(&self, name: &str) -> Result<Option<String>>;

    /// Create an annotated tag at `commit`, replacing an existing one when `force` is set.
    fn write_annotated_tag(&self, name: &str, commit: &str, message: &str, force: bool)
        -> Result<()>;

    /// Push a single tag to `remote`, overwriting the remote ref unconditionally.
    fn force_push_tag(&self, remote: &str, name: &str) -> Result<()>;
}
