//! User interface module - terminal output for a non-interactive CI run.
//!
//! - `formatter` - message building and styled printing
//! - This module - detection of the CI environment the output goes to

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    describe_alias_report, display_alias_report, display_boundary_warning, display_error,
    display_failure, display_status, display_success, format_failure, short_commit,
};

/// Returns true when running as a GitHub Actions step.
pub fn is_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").as_deref() == Ok("true")
}
