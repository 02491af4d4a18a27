//! InitShareUseCase: applies a share to the host and records it.
//!
//! The sequence is fixed:
//!
//! ```text
//! backup smb.conf ─► add [PS2] stanza ─► (create Samba user) ─► enable unit
//!                                                                  │
//!                                      save settings ◄─ restart unit
//! ```
//!
//! Steps differ in how failures are treated:
//!
//! | Step            | On failure                                    |
//! |-----------------|-----------------------------------------------|
//! | backup          | warning, continue                             |
//! | add stanza      | abort                                         |
//! | `useradd`       | warning, continue (account usually exists)    |
//! | Samba password  | abort                                         |
//! | enable unit     | warning, continue                             |
//! | restart unit    | abort (the share would be silently inactive)  |
//! | save settings   | abort                                         |
//!
//! Nothing is rolled back on abort; every step is idempotent, so running
//! `init` again simply continues from the current state.

use std::path::PathBuf;
use std::sync::Arc;

use ps2smb_core::{
    AccessMode, CommandError, PersistedSettings, SettingsError, ShareError, ShareRecord,
    SmbConfError,
};
use thiserror::Error;
use tracing::{debug, info};

use super::ports::{ServiceManager, SettingsRepository, ShareConfigEditor, UserManager};

/// Error type for the init sequence.  Only fatal steps produce one.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("invalid share definition: {0}")]
    Share(#[from] ShareError),

    #[error("failed to add {share} share: {source}")]
    AddShare {
        share: String,
        #[source]
        source: SmbConfError,
    },

    #[error("failed to create Samba user '{username}': {source}")]
    SambaUser {
        username: String,
        #[source]
        source: CommandError,
    },

    #[error("failed to restart Samba ({unit}): {source}")]
    Restart {
        unit: String,
        #[source]
        source: CommandError,
    },

    #[error("failed to save configuration: {0}")]
    Settings(#[source] SettingsError),
}

/// What the user chose at the prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitRequest {
    pub games_path: PathBuf,
    pub access: AccessMode,
}

/// Progress notifications, emitted before each step runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitStep {
    BackingUp,
    BackupCreated(PathBuf),
    AddingShare,
    /// Emitted before `smbpasswd` takes over the terminal.
    CreatingUser(String),
    EnablingService(String),
    RestartingService(String),
    SavingSettings,
    Warning(String),
}

/// Result of a completed init.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    pub settings: PersistedSettings,
    pub backup: Option<PathBuf>,
    /// Non-fatal problems, in the order they happened.
    pub warnings: Vec<String>,
}

/// The Init Share use case.
pub struct InitShareUseCase {
    editor: Arc<dyn ShareConfigEditor>,
    users: Arc<dyn UserManager>,
    service: Arc<dyn ServiceManager>,
    settings: Arc<dyn SettingsRepository>,
    share_name: String,
    config_version: String,
}

impl InitShareUseCase {
    pub fn new(
        editor: Arc<dyn ShareConfigEditor>,
        users: Arc<dyn UserManager>,
        service: Arc<dyn ServiceManager>,
        settings: Arc<dyn SettingsRepository>,
        share_name: impl Into<String>,
        config_version: impl Into<String>,
    ) -> Self {
        Self {
            editor,
            users,
            service,
            settings,
            share_name: share_name.into(),
            config_version: config_version.into(),
        }
    }

    /// Runs the init sequence for `request`, reporting progress to `on_step`.
    ///
    /// # Errors
    ///
    /// Returns [`InitError`] for the first fatal step that fails; see the
    /// module docs for which steps are fatal.
    pub fn execute(
        &self,
        request: InitRequest,
        on_step: &mut dyn FnMut(InitStep),
    ) -> Result<InitOutcome, InitError> {
        let record = ShareRecord::new(self.share_name.as_str(), request.games_path, request.access)?;
        let mut warnings = Vec::new();

        // ── Backup ────────────────────────────────────────────────────────────
        on_step(InitStep::BackingUp);
        let backup = match self.editor.backup() {
            Ok(Some(path)) => {
                on_step(InitStep::BackupCreated(path.clone()));
                Some(path)
            }
            Ok(None) => None,
            Err(e) => {
                record_warning(&mut warnings, on_step, format!("backup failed: {e}"));
                None
            }
        };

        // ── Share stanza ──────────────────────────────────────────────────────
        on_step(InitStep::AddingShare);
        self.editor
            .add_managed_section(&record)
            .map_err(|source| InitError::AddShare {
                share: record.share_name().to_string(),
                source,
            })?;
        info!(share = record.share_name(), path = %record.path().display(), "share stanza written");

        // ── Samba account ─────────────────────────────────────────────────────
        if let Some(username) = record.access().username() {
            on_step(InitStep::CreatingUser(username.to_string()));
            if let Err(e) = self.users.create_user(username) {
                record_warning(
                    &mut warnings,
                    on_step,
                    format!("could not create system user '{username}' (it may already exist): {e}"),
                );
            }
            let samba_user = |source: CommandError| InitError::SambaUser {
                username: username.to_string(),
                source,
            };
            self.users.set_password(username).map_err(samba_user)?;
            self.users.enable_user(username).map_err(samba_user)?;
        }

        // ── Service ───────────────────────────────────────────────────────────
        let unit = self.service.unit();
        on_step(InitStep::EnablingService(unit.clone()));
        if let Err(e) = self.service.enable() {
            record_warning(
                &mut warnings,
                on_step,
                format!("failed to enable {unit} at boot: {e}"),
            );
        }

        on_step(InitStep::RestartingService(unit.clone()));
        self.service
            .restart()
            .map_err(|source| InitError::Restart {
                unit: unit.clone(),
                source,
            })?;
        info!(unit = %unit, "samba restarted");

        // ── Settings ──────────────────────────────────────────────────────────
        on_step(InitStep::SavingSettings);
        let settings = PersistedSettings::from_share(&record, self.config_version.as_str());
        self.settings.save(&settings).map_err(InitError::Settings)?;

        Ok(InitOutcome {
            settings,
            backup,
            warnings,
        })
    }
}

fn record_warning(
    warnings: &mut Vec<String>,
    on_step: &mut dyn FnMut(InitStep),
    message: String,
) {
    debug!(warning = %message, "non-fatal init step failed");
    on_step(InitStep::Warning(message.clone()));
    warnings.push(message);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
