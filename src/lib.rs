pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod inventory;
pub mod reconciler;
pub mod ui;

pub use error::{GitPinError, Result};
