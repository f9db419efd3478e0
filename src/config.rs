use crate::domain::AliasOptions;
use crate::error::{GitPinError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the working directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "gitpin.toml";

/// CI input carrying the `update-major` option.
pub const INPUT_UPDATE_MAJOR: &str = "INPUT_UPDATE-MAJOR";

/// CI input carrying the `update-minor` option.
pub const INPUT_UPDATE_MINOR: &str = "INPUT_UPDATE-MINOR";

/// Represents the complete configuration for git-pin.
///
/// Contains alias toggles, the remote to sync tags with, and the identity
/// used to author alias tags.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub aliases: AliasConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub identity: IdentityConfig,
}

fn default_true() -> bool {
    true
}

/// Which floating aliases to maintain.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct AliasConfig {
    #[serde(default = "default_true")]
    pub update_major: bool,

    #[serde(default = "default_true")]
    pub update_minor: bool,
}

impl Default for AliasConfig {
    fn default() -> Self {
        AliasConfig {
            update_major: true,
            update_minor: true,
        }
    }
}

impl From<AliasConfig> for AliasOptions {
    fn from(cfg: AliasConfig) -> Self {
        AliasOptions {
            update_major: cfg.update_major,
            update_minor: cfg.update_minor,
        }
    }
}

fn default_remote_name() -> String {
    "origin".to_string()
}

/// Remote that tags are fetched from and pushed to.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_name")]
    pub name: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            name: default_remote_name(),
        }
    }
}

fn default_identity_name() -> String {
    "github-actions[bot]".to_string()
}

fn default_identity_email() -> String {
    "41898282+github-actions[bot]@users.noreply.github.com".to_string()
}

/// Author of the annotated alias tags.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IdentityConfig {
    #[serde(default = "default_identity_name")]
    pub name: String,

    #[serde(default = "default_identity_email")]
    pub email: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        IdentityConfig {
            name: default_identity_name(),
            email: default_identity_email(),
        }
    }
}

/// Interprets a CI boolean input.
///
/// Absent or empty keeps `current`; otherwise only the literal `"true"` enables.
pub fn parse_input_flag(value: Option<&str>, current: bool) -> bool {
    match value {
        None | Some("") => current,
        Some(v) => v == "true",
    }
}

impl Config {
    /// Overlay CI inputs on top of file/default values.
    ///
    /// `lookup` resolves an input variable name, normally `std::env::var`.
    pub fn apply_inputs<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.aliases.update_major = parse_input_flag(
            lookup(INPUT_UPDATE_MAJOR).as_deref(),
            self.aliases.update_major,
        );
        self.aliases.update_minor = parse_input_flag(
            lookup(INPUT_UPDATE_MINOR).as_deref(),
            self.aliases.update_minor,
        );
    }

    /// Overlay CI inputs read from the process environment.
    pub fn apply_env_inputs(&mut self) {
        self.apply_inputs(|key| std::env::var(key).ok());
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitpin.toml` in current directory
/// 3. `gitpin.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses a TOML configuration document.
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| GitPinError::config(e.to_string()))
}
