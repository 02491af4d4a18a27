//! The settings record ps2smb persists between invocations.
//!
//! `init` writes it once the share is live; `info` and `status` read it back
//! so they never have to re-derive the games path or the auth mode from
//! `smb.conf`.  The on-disk form is a small JSON object:
//!
//! ```json
//! {
//!   "games_path": "/home/ps2games",
//!   "share_name": "PS2",
//!   "use_guest": false,
//!   "samba_user": "ps2user",
//!   "config_version": "1.0"
//! }
//! ```
//!
//! `samba_user` is omitted entirely in guest mode.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::share::ShareRecord;
use crate::error::SettingsError;

/// Persisted tool settings.  Always read and written as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersistedSettings {
    pub games_path: PathBuf,
    pub share_name: String,
    pub use_guest: bool,
    /// Samba account the console logs in with; absent in guest mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samba_user: Option<String>,
    /// Schema version string – bump when breaking changes are introduced.
    pub config_version: String,
}

impl PersistedSettings {
    /// Captures a freshly applied share under the given schema version.
    pub fn from_share(record: &ShareRecord, config_version: impl Into<String>) -> Self {
        Self {
            games_path: record.path().to_path_buf(),
            share_name: record.share_name().to_string(),
            use_guest: record.access().is_guest(),
            samba_user: record.access().username().map(str::to_string),
            config_version: config_version.into(),
        }
    }

    /// Serializes the record with 2-space indentation and no trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Serialization`] if serde fails.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a record previously written by [`Self::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Serialization`] for malformed JSON or a
    /// missing required field.
    pub fn from_json(content: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Path of one of the OPL media folders (`"DVD"` or `"CD"`).
    pub fn media_dir(&self, media: &str) -> PathBuf {
        self.games_path.join(media)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
