//! Error types shared by the editor, the settings store, and the system
//! adapters.
//!
//! They live in the core crate so the application layer of `ps2smb` can name
//! them in its port traits without depending on the infrastructure that
//! produces them.  Each failure class the commands react to differently has
//! its own variant: a missing settings file prints "run init first", a
//! permission failure prints "run with sudo", and so on.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for `smb.conf` operations.
#[derive(Debug, Error)]
pub enum SmbConfError {
    /// The caller may not read or write the file (usually: not root).
    #[error("permission denied accessing {path}: {source}")]
    Permission {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other file-system failure on the config file or its backup.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The games directory or one of its media subdirectories could not be
    /// created (e.g. a regular file is in the way).
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SmbConfError {
    /// Classifies an I/O error on `path` as a permission or generic failure.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Self::Permission { path, source }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Error type for the persisted settings record.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Neither an explicit config directory nor `$HOME` is available.
    #[error("could not determine the home directory")]
    NoHomeDir,

    /// No settings file has been written yet.
    #[error("ps2smb is not configured (no settings at {path}); run 'sudo ps2smb init' first")]
    NotConfigured { path: PathBuf },

    /// A file-system error other than "not found".
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for the record schema.
    #[error("failed to parse settings JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type for external command execution.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The program could not be started at all.
    #[error("failed to execute '{command}': {message}")]
    Execution { command: String, message: String },

    /// The program ran and exited unsuccessfully.
    #[error("command '{command}' failed with code {code}: {stderr}")]
    Failed {
        command: String,
        code: i32,
        stderr: String,
    },
}

// ── Tests ─────────────────────────────────────────────────────────────────────
