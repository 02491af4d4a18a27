//! The share exported to the PS2 and how the console authenticates.
//!
//! # Why DVD and CD subdirectories?
//!
//! OPL looks for disc images in two fixed folders at the root of the share:
//! `DVD/` for DVD-sized images and `CD/` for CD-sized images.  A share
//! without them shows an empty game list, so ps2smb always creates both
//! next to the games directory itself.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Subdirectories OPL expects under the games directory, one per media type.
pub const MEDIA_SUBDIRECTORIES: [&str; 2] = ["DVD", "CD"];

/// Error type for constructing share records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareError {
    /// Authenticated access was requested without a username.
    #[error("authenticated access requires a non-empty username")]
    EmptyUsername,

    /// The share name is empty or would break the `[name]` header.
    #[error("invalid share name '{0}'")]
    InvalidShareName(String),

    /// The games path contains `[` or a line break.  Either one would end
    /// the stanza early when it is scanned for removal.
    #[error("invalid games path '{0}': it must not contain '[' or a line break")]
    InvalidPath(PathBuf),
}

/// How the PS2 authenticates against the share.
///
/// The username only exists for [`AccessMode::AuthenticatedUser`], so the
/// "username present iff authenticated" rule holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessMode {
    /// No credentials; Samba maps the console to the guest account.
    Guest,
    /// The console logs in as a dedicated Samba account.
    AuthenticatedUser { username: String },
}

impl AccessMode {
    /// Builds an authenticated access mode, rejecting blank usernames.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError::EmptyUsername`] when `username` is empty or only
    /// whitespace.
    pub fn authenticated(username: impl Into<String>) -> Result<Self, ShareError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ShareError::EmptyUsername);
        }
        Ok(Self::AuthenticatedUser { username })
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Self::Guest)
    }

    /// The Samba account name, `None` in guest mode.
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Guest => None,
            Self::AuthenticatedUser { username } => Some(username),
        }
    }
}

/// A share stanza ps2smb manages inside `smb.conf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRecord {
    share_name: String,
    path: PathBuf,
    access: AccessMode,
}

impl ShareRecord {
    /// Creates a record after validating the share name and the path.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError::InvalidShareName`] if the name is empty or
    /// contains `[`, `]` or a newline, and [`ShareError::InvalidPath`] if the
    /// path contains `[` or a newline.
    pub fn new(
        share_name: impl Into<String>,
        path: impl Into<PathBuf>,
        access: AccessMode,
    ) -> Result<Self, ShareError> {
        let share_name = share_name.into();
        if share_name.is_empty() || share_name.contains(['[', ']', '\n']) {
            return Err(ShareError::InvalidShareName(share_name));
        }
        let path = path.into();
        if path.to_string_lossy().contains(['[', '\n', '\r']) {
            return Err(ShareError::InvalidPath(path));
        }
        Ok(Self {
            share_name,
            path,
            access,
        })
    }

    pub fn share_name(&self) -> &str {
        &self.share_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn access(&self) -> &AccessMode {
        &self.access
    }

    /// The games directory followed by its media subdirectories, in creation
    /// order.
    pub fn directories(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.path.clone()];
        dirs.extend(MEDIA_SUBDIRECTORIES.iter().map(|sub| self.path.join(sub)));
        dirs
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
