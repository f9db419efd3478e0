use thiserror::Error;

/// Unified error type for git-pin operations
#[derive(Error, Debug)]
pub enum GitPinError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Trigger(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-pin
pub type Result<T> = std::result::Result<T, GitPinError>;

impl GitPinError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitPinError::Config(msg.into())
    }

    /// Create a trigger (precondition) error
    pub fn trigger(msg: impl Into<String>) -> Self {
        GitPinError::Trigger(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        GitPinError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        GitPinError::Remote(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GitPinError::config("bad toml");
        assert_eq!(err.to_string(), "Configuration error: bad toml");
    }

    #[test]
    fn test_trigger_error_is_bare_message() {
        let err = GitPinError::trigger("This action can only be run on a tag.");
        assert_eq!(err.to_string(), "This action can only be run on a tag.");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GitPinError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_git2() {
        let err: GitPinError = git2::Error::from_str("reference not found").into();
        assert!(err.to_string().starts_with("Git operation failed"));
        assert!(err.to_string().contains("reference not found"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (GitPinError::config("x"), "Configuration error"),
            (GitPinError::tag("x"), "Tag error"),
            (GitPinError::remote("x"), "Remote operation failed"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_remote_error_keeps_git_stderr_text() {
        let stderr = "! [remote rejected] v1 -> v1 (permission denied)";
        let err = GitPinError::remote(stderr);
        assert!(err.to_string().contains(stderr));
    }
}
