use crate::config::IdentityConfig;
use crate::error::{GitPinError, Result};
use crate::git::Repository;
use std::cell::RefCell;
use std::collections::HashMap;

/// A state change the mock has been asked to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockMutation {
    WriteTag {
        name: String,
        commit: String,
        message: String,
        force: bool,
    },
    Push {
        remote: String,
        name: String,
    },
}

/// Mock repository for testing without actual git operations
///
/// Keeps a local and a remote tag store (tag name → peeled commit) so that
/// fetch and push move tags between them the way a real clone would.
pub struct MockRepository {
    remote_name: String,
    local_tags: RefCell<HashMap<String, String>>,
    remote_tags: RefCell<HashMap<String, String>>,
    identity: RefCell<Option<IdentityConfig>>,
    mutations: RefCell<Vec<MockMutation>>,
    fetch_failure: Option<String>,
    list_failure: Option<String>,
    resolve_failures: HashMap<String, String>,
    push_failures: HashMap<String, String>,
}

impl MockRepository {
    /// Create a new empty mock repository with an `origin` remote
    pub fn new() -> Self {
        MockRepository {
            remote_name: "origin".to_string(),
            local_tags: RefCell::new(HashMap::new()),
            remote_tags: RefCell::new(HashMap::new()),
            identity: RefCell::new(None),
            mutations: RefCell::new(Vec::new()),
            fetch_failure: None,
            list_failure: None,
            resolve_failures: HashMap::new(),
            push_failures: HashMap::new(),
        }
    }

    /// Add a tag that only exists locally
    pub fn add_tag(&mut self, name: impl Into<String>, commit: impl Into<String>) {
        self.local_tags
            .get_mut()
            .insert(name.into(), commit.into());
    }

    /// Add a tag that exists on the remote (picked up by the next fetch)
    pub fn add_remote_tag(&mut self, name: impl Into<String>, commit: impl Into<String>) {
        self.remote_tags
            .get_mut()
            .insert(name.into(), commit.into());
    }

    /// Make every fetch fail with `message`
    pub fn fail_fetch(&mut self, message: impl Into<String>) {
        self.fetch_failure = Some(message.into());
    }

    /// Make every tag listing fail with `message`
    pub fn fail_list(&mut self, message: impl Into<String>) {
        self.list_failure = Some(message.into());
    }

    /// Make resolving tag `name` fail with `message`
    pub fn fail_resolve_of(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.resolve_failures.insert(name.into(), message.into());
    }

    /// Make pushes of tag `name` fail with `message`
    pub fn fail_push_of(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.push_failures.insert(name.into(), message.into());
    }

    pub fn local_commit(&self, name: &str) -> Option<String> {
        self.local_tags.borrow().get(name).cloned()
    }

    pub fn remote_commit(&self, name: &str) -> Option<String> {
        self.remote_tags.borrow().get(name).cloned()
    }

    pub fn identity(&self) -> Option<IdentityConfig> {
        self.identity.borrow().clone()
    }

    /// Mutations performed so far, in call order
    pub fn mutations(&self) -> Vec<MockMutation> {
        self.mutations.borrow().clone()
    }

    pub fn clear_mutations(&self) {
        self.mutations.borrow_mut().clear();
    }

    fn check_remote(&self, remote: &str) -> Result<()> {
        if remote == self.remote_name {
            Ok(())
        } else {
            Err(GitPinError::remote(format!(
                "Cannot find remote '{}'",
                remote
            )))
        }
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn configure_identity(&self, identity: &IdentityConfig) -> Result<()> {
        *self.identity.borrow_mut() = Some(identity.clone());
        Ok(())
    }

    fn fetch_tags(&self, remote: &str) -> Result<()> {
        self.check_remote(remote)?;
        if let Some(message) = &self.fetch_failure {
            return Err(GitPinError::remote(message.clone()));
        }

        let remote_tags = self.remote_tags.borrow();
        let mut local_tags = self.local_tags.borrow_mut();
        for (name, commit) in remote_tags.iter() {
            local_tags.insert(name.clone(), commit.clone());
        }
        Ok(())
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        if let Some(message) = &self.list_failure {
            return Err(GitPinError::tag(message.clone()));
        }
        Ok(self.local_tags.borrow().keys().cloned().collect())
    }

    fn resolve_tag(&self, name: &str) -> Result<Option<String>> {
        if let Some(message) = self.resolve_failures.get(name) {
            return Err(GitPinError::tag(message.clone()));
        }
        Ok(self.local_commit(name))
    }

    fn write_annotated_tag(
        &self,
        name: &str,
        commit: &str,
        message: &str,
        force: bool,
    ) -> Result<()> {
        let mut local_tags = self.local_tags.borrow_mut();
        if !force && local_tags.contains_key(name) {
            return Err(GitPinError::tag(format!("tag '{}' already exists", name)));
        }

        local_tags.insert(name.to_string(), commit.to_string());
        self.mutations.borrow_mut().push(MockMutation::WriteTag {
            name: name.to_string(),
            commit: commit.to_string(),
            message: message.to_string(),
            force,
        });
        Ok(())
    }

    fn force_push_tag(&self, remote: &str, name: &str) -> Result<()> {
        self.check_remote(remote)?;
        if let Some(message) = self.push_failures.get(name) {
            return Err(GitPinError::remote(message.clone()));
        }

        let commit = self
            .local_commit(name)
            .ok_or_else(|| GitPinError::remote(format!("src refspec {} does not match any", name)))?;

        self.remote_tags
            .borrow_mut()
            .insert(name.to_string(), commit);
        self.mutations.borrow_mut().push(MockMutation::Push {
            remote: remote.to_string(),
            name: name.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_tags() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0", "aaaa");

        assert_eq!(repo.resolve_tag("v1.0.0").unwrap(), Some("aaaa".to_string()));
        assert_eq!(repo.resolve_tag("v2.0.0").unwrap(), None);
    }

    #[test]
    fn test_fetch_overwrites_local_tags() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1", "old");
        repo.add_remote_tag("v1", "new");
        repo.add_remote_tag("v1.0.0", "new");

        repo.fetch_tags("origin").unwrap();

        assert_eq!(repo.local_commit("v1").as_deref(), Some("new"));
        assert_eq!(repo.list_tags().unwrap().len(), 2);
    }

    #[test]
    fn test_fetch_unknown_remote_fails() {
        let repo = MockRepository::new();
        assert!(repo.fetch_tags("upstream").is_err());
    }

    #[test]
    fn test_write_without_force_refuses_existing() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1", "aaaa");

        assert!(repo.write_annotated_tag("v1", "bbbb", "msg", false).is_err());
        repo.write_annotated_tag("v1", "bbbb", "msg", true).unwrap();
        assert_eq!(repo.local_commit("v1").as_deref(), Some("bbbb"));
    }

    #[test]
    fn test_push_copies_local_tag_to_remote() {
        let repo = MockRepository::new();
        repo.write_annotated_tag("v1", "cccc", "create major release tag", false)
            .unwrap();
        repo.force_push_tag("origin", "v1").unwrap();

        assert_eq!(repo.remote_commit("v1").as_deref(), Some("cccc"));
        assert_eq!(repo.mutations().len(), 2);
    }

    #[test]
    fn test_push_failure_injection() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1", "cccc");
        repo.fail_push_of("v1", "permission denied");

        let err = repo.force_push_tag("origin", "v1").unwrap_err();
        assert!(err.to_string().contains("permission denied"));
        assert!(repo.remote_commit("v1").is_none());
    }

    #[test]
    fn test_list_and_resolve_failure_injection() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0", "aaaa");
        repo.add_tag("v1.1.0", "bbbb");
        repo.fail_resolve_of("v1.1.0", "bad object");

        assert_eq!(repo.resolve_tag("v1.0.0").unwrap(), Some("aaaa".to_string()));
        let err = repo.resolve_tag("v1.1.0").unwrap_err();
        assert!(err.to_string().contains("bad object"));

        repo.fail_list("unable to read refs");
        assert!(repo.list_tags().is_err());
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert!(repo.list_tags().unwrap().is_empty());
        assert!(repo.identity().is_none());
    }
}
