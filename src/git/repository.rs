use crate::config::IdentityConfig;
use crate::error::{GitPinError, Result};
use git2::{
    AutotagOption, ConfigLevel, Cred, CredentialType, ErrorCode, FetchOptions, ObjectType, Oid,
    PushOptions, RemoteCallbacks, Repository as Git2Repo,
};
use std::cell::RefCell;
use std::path::Path;
use tracing::debug;

/// Refspec that mirrors every remote tag locally, overwriting moved ones.
const FORCED_TAG_REFSPEC: &str = "+refs/tags/*:refs/tags/*";

/// Credential lookups allowed before a transfer is aborted.
const MAX_CREDENTIAL_ATTEMPTS: usize = 3;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    fn find_remote(&self, remote_name: &str) -> Result<git2::Remote<'_>> {
        self.repo.find_remote(remote_name).map_err(|e| {
            GitPinError::remote(format!("Cannot find remote '{}': {}", remote_name, e))
        })
    }
}

/// Builds transfer callbacks that authenticate the way CI runners expect.
///
/// HTTPS remotes use `GITHUB_TOKEN` as an `x-access-token` password, SSH
/// remotes go through the agent, anything else falls back to git's defaults.
fn remote_callbacks<'a>() -> RemoteCallbacks<'a> {
    let token = std::env::var("GITHUB_TOKEN")
        .ok()
        .filter(|t| !t.is_empty());
    let mut attempts = 0;

    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(move |_url, username_from_url, allowed_types| {
        attempts += 1;
        if attempts > MAX_CREDENTIAL_ATTEMPTS {
            return Err(git2::Error::from_str("authentication failed"));
        }

        if allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) {
            if let Some(token) = &token {
                return Cred::userpass_plaintext("x-access-token", token);
            }
        }

        if allowed_types.contains(CredentialType::SSH_KEY) {
            return Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"));
        }

        Cred::default()
    });
    callbacks
}

impl super::Repository for Git2Repository {
    fn configure_identity(&self, identity: &IdentityConfig) -> Result<()> {
        let mut config = self.repo.config()?.open_level(ConfigLevel::Local)?;
        config.set_str("user.name", &identity.name)?;
        config.set_str("user.email", &identity.email)?;

        debug!(name = %identity.name, email = %identity.email, "configured tagger identity");
        Ok(())
    }

    fn fetch_tags(&self, remote_name: &str) -> Result<()> {
        let mut remote = self.find_remote(remote_name)?;

        let mut options = FetchOptions::new();
        options.remote_callbacks(remote_callbacks());
        options.download_tags(AutotagOption::All);

        remote
            .fetch(&[FORCED_TAG_REFSPEC], Some(&mut options), None)
            .map_err(|e| {
                GitPinError::remote(format!(
                    "Failed to fetch tags from '{}': {}",
                    remote_name, e
                ))
            })?;

        Ok(())
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn resolve_tag(&self, name: &str) -> Result<Option<String>> {
        let reference_name = format!("refs/tags/{}", name);

        match self.repo.find_reference(&reference_name) {
            Ok(reference) => {
                // ObjectType::Any peels tag objects until a non-tag is reached
                let object = reference
                    .peel(ObjectType::Any)
                    .map_err(|e| GitPinError::tag(format!("Cannot peel tag '{}': {}", name, e)))?;

                Ok(Some(object.id().to_string()))
            }
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(GitPinError::tag(format!(
                "Cannot resolve tag '{}': {}",
                name, e
            ))),
        }
    }

    fn write_annotated_tag(
        &self,
        name: &str,
        commit: &str,
        message: &str,
        force: bool,
    ) -> Result<()> {
        let oid = Oid::from_str(commit)
            .map_err(|e| GitPinError::tag(format!("Invalid commit id '{}': {}", commit, e)))?;

        let object = self
            .repo
            .find_object(oid, None)
            .map_err(|e| GitPinError::tag(format!("Cannot find object {}: {}", commit, e)))?;

        let tagger = self
            .repo
            .signature()
            .map_err(|e| GitPinError::tag(format!("No tagger identity configured: {}", e)))?;

        self.repo
            .tag(name, &object, &tagger, message, force)
            .map_err(|e| GitPinError::tag(format!("Cannot write tag '{}': {}", name, e)))?;

        Ok(())
    }

    fn force_push_tag(&self, remote_name: &str, name: &str) -> Result<()> {
        let mut remote = self.find_remote(remote_name)?;
        let refspec = format!("+refs/tags/{0}:refs/tags/{0}", name);

        // The server reports per-ref rejections through this callback, not as a push error
        let rejected: RefCell<Option<String>> = RefCell::new(None);
        {
            let mut callbacks = remote_callbacks();
            callbacks.push_update_reference(|refname, status| {
                if let Some(status) = status {
                    *rejected.borrow_mut() = Some(format!("{}: {}", refname, status));
                }
                Ok(())
            });

            let mut options = PushOptions::new();
            options.remote_callbacks(callbacks);

            remote
                .push(&[refspec.as_str()], Some(&mut options))
                .map_err(|e| {
                    GitPinError::remote(format!(
                        "Failed to push tag '{}' to '{}': {}",
                        name, remote_name, e
                    ))
                })?;
        }

        if let Some(reason) = rejected.into_inner() {
            return Err(GitPinError::remote(format!("Push rejected for {}", reason)));
        }

        Ok(())
    }
}
