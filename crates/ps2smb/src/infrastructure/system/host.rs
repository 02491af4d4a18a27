//! Facts read from the running host: privileges, distribution, host name,
//! installed software, directories and the SMB port.

use std::path::Path;
use std::time::Duration;

use ps2smb_core::Distro;
use tracing::debug;

use crate::application::ports::HostInspector;
use crate::infrastructure::network::probe::tcp_reachable;
use crate::infrastructure::system::runner::{command_exists, run_ok};

/// Standard location of the distribution identification file.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Whether the process runs with an effective uid of 0.
pub fn is_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

/// Reads and classifies `/etc/os-release`.
///
/// # Errors
///
/// Returns the I/O error when the file cannot be read.
pub fn detect_distro() -> std::io::Result<Distro> {
    let content = std::fs::read_to_string(OS_RELEASE_PATH)?;
    let distro = Distro::from_os_release(&content);
    debug!(id = %distro.id, package_manager = distro.package_manager.label(), "distro detected");
    Ok(distro)
}

/// Host name in uppercase, as OPL expects a NetBIOS name.
///
/// Tries `/etc/hostname`, then `hostnamectl hostname`, then `hostname`.
pub fn read_hostname() -> Option<String> {
    let from_file = std::fs::read_to_string("/etc/hostname").ok();
    let from_command = |program: &str, args: &[&str]| {
        run_ok(program, args).ok().map(|out| out.stdout)
    };

    from_file
        .and_then(|raw| normalize_hostname(&raw))
        .or_else(|| from_command("hostnamectl", &["hostname"]).and_then(|raw| normalize_hostname(&raw)))
        .or_else(|| from_command("hostname", &[]).and_then(|raw| normalize_hostname(&raw)))
}

/// Trims and uppercases a raw host name; `None` when nothing remains.
pub fn normalize_hostname(raw: &str) -> Option<String> {
    let name = raw.trim();
    (!name.is_empty()).then(|| name.to_uppercase())
}

/// [`HostInspector`] reading the real system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl HostInspector for SystemHost {
    fn samba_installed(&self) -> bool {
        command_exists("smbd")
    }

    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn port_reachable(&self, host: &str, port: u16, timeout: Duration) -> bool {
        tcp_reachable(host, port, timeout)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hostname_trims_and_uppercases() {
        assert_eq!(normalize_hostname("gamebox\n"), Some("GAMEBOX".to_string()));
        assert_eq!(normalize_hostname("  my-pc  "), Some("MY-PC".to_string()));
    }

    #[test]
    fn test_normalize_hostname_rejects_blank() {
        assert_eq!(normalize_hostname(""), None);
        assert_eq!(normalize_hostname(" \n"), None);
    }

    #[test]
    fn test_system_host_dir_exists_only_for_directories() {
        // Arrange
        let dir = std::env::temp_dir();
        let host = SystemHost;

        // Act / Assert
        assert!(host.dir_exists(&dir));
        assert!(!host.dir_exists(&dir.join("ps2smb-no-such-dir")));
    }
}
