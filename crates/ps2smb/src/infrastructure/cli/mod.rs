//! Command-line front end: terminal prompts and the subcommand handlers.
//!
//! `main.rs` parses the arguments with `clap`, builds a
//! [`ToolConfig`](ps2smb_core::ToolConfig), and calls one of the `run_*`
//! handlers in [`commands`].  Handlers print their report to the writer they
//! are given and return a [`CliError`] for anything that should end the
//! process with a non-zero status.

pub mod commands;
pub mod prompt;

use ps2smb_core::{SettingsError, ShareError};
use thiserror::Error;

use crate::application::initialize::InitError;
use crate::infrastructure::network::interfaces::NetworkError;

/// Error type for the subcommand handlers.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("this command requires root privileges. Please run with sudo")]
    NotRoot,

    #[error("failed to detect distribution: {0}")]
    DistroDetection(#[source] std::io::Error),

    #[error("samba is required but not installed")]
    SambaMissing,

    #[error(transparent)]
    Init(#[from] InitError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ShareError> for CliError {
    fn from(e: ShareError) -> Self {
        Self::Init(InitError::Share(e))
    }
}
