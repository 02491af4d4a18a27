//! JSON persistence of the settings record.
//!
//! The record lives at `<config dir>/config.json`:
//!
//! - explicit directory (`--config-dir` / `PS2SMB_CONFIG_DIR`) when given,
//! - otherwise `$HOME/.config/ps2smb`.
//!
//! `init` writes the file; `info` and `status` read it.  The file is always
//! replaced whole, never patched.
//!
//! # Why is `exists()` infallible? (for beginners)
//!
//! `status` and `init` only need a yes/no answer to "has init run before?".
//! Any problem locating the file (no `$HOME`, unreadable directory) is
//! therefore reported as "does not exist", and the precise error surfaces
//! later from [`SettingsStore::load`] or [`SettingsStore::save`] if the
//! command actually needs the file.

use std::path::PathBuf;

use ps2smb_core::{PersistedSettings, SettingsError};
use tracing::{debug, info};

use crate::application::ports::SettingsRepository;

/// File name of the settings record inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "config.json";

/// Directory name under `$HOME/.config`.
pub const APP_DIR_NAME: &str = "ps2smb";

/// File-backed settings repository.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: Option<PathBuf>,
}

impl SettingsStore {
    /// Store rooted at an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Store rooted at `explicit`, or at the per-user default when `None`.
    ///
    /// Never fails; an unknown home directory is reported by the first
    /// operation that needs the path.
    pub fn from_env(explicit: Option<PathBuf>) -> Self {
        Self {
            dir: explicit.or_else(default_config_dir),
        }
    }

    /// Returns the settings file path, creating its directory.
    ///
    /// # Errors
    ///
    /// [`SettingsError::NoHomeDir`] when no directory is known, or
    /// [`SettingsError::Io`] when it cannot be created.
    pub fn locate(&self) -> Result<PathBuf, SettingsError> {
        let dir = self.dir.as_ref().ok_or(SettingsError::NoHomeDir)?;
        std::fs::create_dir_all(dir).map_err(|source| SettingsError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(dir.join(SETTINGS_FILE_NAME))
    }

    /// Writes `settings`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// [`SettingsError::Serialization`] or [`SettingsError::Io`].
    pub fn save(&self, settings: &PersistedSettings) -> Result<(), SettingsError> {
        let path = self.locate()?;
        let content = settings.to_json()?;
        std::fs::write(&path, content).map_err(|source| SettingsError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Reads the record.
    ///
    /// # Errors
    ///
    /// [`SettingsError::NotConfigured`] when no file exists,
    /// [`SettingsError::Io`] for other read failures, and
    /// [`SettingsError::Serialization`] for malformed JSON.
    pub fn load(&self) -> Result<PersistedSettings, SettingsError> {
        let path = self.locate()?;
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SettingsError::NotConfigured { path });
            }
            Err(source) => return Err(SettingsError::Io { path, source }),
        };
        debug!(path = %path.display(), "settings loaded");
        PersistedSettings::from_json(&content)
    }

    /// Whether a settings file is present.  Never fails.
    pub fn exists(&self) -> bool {
        self.locate().is_ok_and(|path| path.is_file())
    }
}

impl SettingsRepository for SettingsStore {
    fn exists(&self) -> bool {
        SettingsStore::exists(self)
    }

    fn save(&self, settings: &PersistedSettings) -> Result<(), SettingsError> {
        SettingsStore::save(self, settings)
    }

    fn load(&self) -> Result<PersistedSettings, SettingsError> {
        SettingsStore::load(self)
    }
}

/// `$HOME/.config/ps2smb`, or `None` when `$HOME` is unset or empty.
fn default_config_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(|h| PathBuf::from(h).join(".config").join(APP_DIR_NAME))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
