//! Recording doubles for the system ports.
//!
//! # Why recording mocks?
//!
//! The real adapters run `systemctl`, `useradd` and `smbpasswd`, which need
//! root and would change the machine running the tests.  These doubles
//! push each call into a `Mutex<Vec<String>>` instead, so integration tests
//! can drive the full init sequence against a scratch `smb.conf` and then
//! assert exactly which system commands would have run, in order.
//!
//! # Usage in tests
//!
//! ```ignore
//! let service = Arc::new(RecordingServiceManager::new("smbd"));
//! // ... run InitShareUseCase with Arc::clone(&service) ...
//! assert_eq!(service.calls(), vec!["enable smbd", "restart smbd"]);
//! ```
//!
//! # `should_fail` flag
//!
//! Set `should_fail = true` to make every mutating call return a
//! [`CommandError::Failed`], for exercising the error paths of callers.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use ps2smb_core::CommandError;

use crate::application::ports::{HostInspector, ServiceManager, UserManager};

fn mock_failure(command: String) -> CommandError {
    CommandError::Failed {
        command,
        code: 1,
        stderr: "mock failure".to_string(),
    }
}

fn record(calls: &Mutex<Vec<String>>, call: String) {
    calls
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(call);
}

fn snapshot(calls: &Mutex<Vec<String>>) -> Vec<String> {
    calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
}

// ── Service ───────────────────────────────────────────────────────────────────

/// Records `enable`/`restart` calls as `"enable <unit>"`, `"restart <unit>"`.
#[derive(Debug, Default)]
pub struct RecordingServiceManager {
    pub unit: String,
    pub calls: Mutex<Vec<String>>,
    /// Value returned by `is_active`.
    pub active: bool,
    /// Fail `restart` only; `enable` still succeeds.
    pub fail_restart: bool,
    /// Fail every mutating call.
    pub should_fail: bool,
}

impl RecordingServiceManager {
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            active: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        snapshot(&self.calls)
    }
}

impl ServiceManager for RecordingServiceManager {
    fn unit(&self) -> String {
        self.unit.clone()
    }

    fn enable(&self) -> Result<(), CommandError> {
        let call = format!("enable {}", self.unit);
        record(&self.calls, call.clone());
        if self.should_fail {
            return Err(mock_failure(call));
        }
        Ok(())
    }

    fn restart(&self) -> Result<(), CommandError> {
        let call = format!("restart {}", self.unit);
        record(&self.calls, call.clone());
        if self.should_fail || self.fail_restart {
            return Err(mock_failure(call));
        }
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

// ── Users ─────────────────────────────────────────────────────────────────────

/// Records account calls as `"useradd <u>"`, `"smbpasswd -a <u>"`,
/// `"smbpasswd -e <u>"`.
#[derive(Debug, Default)]
pub struct RecordingUserManager {
    pub calls: Mutex<Vec<String>>,
    /// Fail `create_user` only, as when the account already exists.
    pub fail_create_user: bool,
    /// Fail every call.
    pub should_fail: bool,
}

impl RecordingUserManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        snapshot(&self.calls)
    }

    fn step(&self, call: String, fail: bool) -> Result<(), CommandError> {
        record(&self.calls, call.clone());
        if self.should_fail || fail {
            return Err(mock_failure(call));
        }
        Ok(())
    }
}

impl UserManager for RecordingUserManager {
    fn create_user(&self, username: &str) -> Result<(), CommandError> {
        self.step(format!("useradd {username}"), self.fail_create_user)
    }

    fn set_password(&self, username: &str) -> Result<(), CommandError> {
        self.step(format!("smbpasswd -a {username}"), false)
    }

    fn enable_user(&self, username: &str) -> Result<(), CommandError> {
        self.step(format!("smbpasswd -e {username}"), false)
    }
}

// ── Host ──────────────────────────────────────────────────────────────────────

/// Host facts fixed at construction; directory checks hit the real file
/// system so scratch directories can be used.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub samba_installed: bool,
    pub port_open: bool,
    /// Directories reported missing even if they exist on disk.
    pub missing_dirs: Vec<PathBuf>,
    /// `(host, port)` pairs passed to `port_reachable`.
    pub probes: Mutex<Vec<(String, u16)>>,
}

impl FakeHost {
    /// A host where Samba is installed and the port is open.
    pub fn healthy() -> Self {
        Self {
            samba_installed: true,
            port_open: true,
            ..Self::default()
        }
    }
}

impl HostInspector for FakeHost {
    fn samba_installed(&self) -> bool {
        self.samba_installed
    }

    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir() && !self.missing_dirs.iter().any(|m| m == path)
    }

    fn port_reachable(&self, host: &str, port: u16, _timeout: Duration) -> bool {
        self.probes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((host.to_string(), port));
        self.port_open
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
