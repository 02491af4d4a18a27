//! Capability traits the use cases depend on.
//!
//! Each trait is implemented once in the infrastructure layer against the
//! real system (files under `/etc`, `systemctl`, `smbpasswd`, sockets) and
//! once as a test double.  The use cases only ever see the trait, so they can
//! be exercised without root, without Samba installed, and without touching
//! the host's configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ps2smb_core::{CommandError, PersistedSettings, SettingsError, ShareRecord, SmbConfError};

/// Edits the Samba configuration file.
#[cfg_attr(test, mockall::automock)]
pub trait ShareConfigEditor {
    /// Copies the config file aside; `None` when there is nothing to copy.
    fn backup(&self) -> Result<Option<PathBuf>, SmbConfError>;

    /// Creates the share directories and (re)writes the managed stanza.
    fn add_managed_section(&self, record: &ShareRecord) -> Result<(), SmbConfError>;
}

/// Stores the single settings record.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsRepository {
    /// Best-effort presence check; never fails.
    fn exists(&self) -> bool;

    fn save(&self, settings: &PersistedSettings) -> Result<(), SettingsError>;

    fn load(&self) -> Result<PersistedSettings, SettingsError>;
}

/// Lifecycle of the Samba systemd unit.
#[cfg_attr(test, mockall::automock)]
pub trait ServiceManager {
    /// Unit name the manager acts on (`smbd` or `smb`).
    fn unit(&self) -> String;

    /// Starts the unit at boot.
    fn enable(&self) -> Result<(), CommandError>;

    fn restart(&self) -> Result<(), CommandError>;

    fn is_active(&self) -> bool;
}

/// System and Samba account management.
#[cfg_attr(test, mockall::automock)]
pub trait UserManager {
    /// Creates a login-less system account for `username`.
    fn create_user(&self, username: &str) -> Result<(), CommandError>;

    /// Adds `username` to the Samba database, prompting for its password.
    fn set_password(&self, username: &str) -> Result<(), CommandError>;

    /// Enables the Samba account.
    fn enable_user(&self, username: &str) -> Result<(), CommandError>;
}

/// Read-only facts about the host used by the health check.
#[cfg_attr(test, mockall::automock)]
pub trait HostInspector {
    /// Whether the Samba daemon binary is installed.
    fn samba_installed(&self) -> bool;

    fn dir_exists(&self, path: &Path) -> bool;

    /// Whether a TCP connection to `host:port` succeeds within `timeout`.
    fn port_reachable(&self, host: &str, port: u16, timeout: Duration) -> bool;
}
