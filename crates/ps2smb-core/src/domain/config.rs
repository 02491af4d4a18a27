//! Tool-wide configuration values.
//!
//! [`ToolConfig`] gathers every fixed name and path the commands need.  It is
//! built once in `main` (defaults overridden by CLI flags and environment
//! variables) and passed explicitly to the editor, the settings store, and the
//! use cases; nothing reads these values from globals.

use std::path::PathBuf;
use std::time::Duration;

/// All runtime configuration for ps2smb.
///
/// # Example
///
/// ```rust
/// use ps2smb_core::ToolConfig;
///
/// let cfg = ToolConfig::default();
/// assert_eq!(cfg.share_name, "PS2");
/// assert_eq!(cfg.smb_port, 445);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Samba configuration file the managed stanza is written to.
    pub smb_conf_path: PathBuf,

    /// Name of the managed share (the `[name]` header).
    pub share_name: String,

    /// Games directory offered when the user presses Enter at the prompt.
    pub default_games_path: PathBuf,

    /// Samba account created for authenticated access.
    pub samba_user: String,

    /// Schema version written into the settings record.
    pub config_version: String,

    /// TCP port the Samba daemon serves SMB on.
    pub smb_port: u16,

    /// Host the health check connects to.
    pub probe_host: String,

    /// Connect timeout of the health-check probe.
    pub probe_timeout: Duration,
}

impl Default for ToolConfig {
    /// | Field              | Default               |
    /// |--------------------|-----------------------|
    /// | smb_conf_path      | `/etc/samba/smb.conf` |
    /// | share_name         | `PS2`                 |
    /// | default_games_path | `/home/ps2games`      |
    /// | samba_user         | `ps2user`             |
    /// | config_version     | `1.0`                 |
    /// | smb_port           | `445`                 |
    /// | probe_host         | `localhost`           |
    /// | probe_timeout      | 2 seconds             |
    fn default() -> Self {
        Self {
            smb_conf_path: PathBuf::from("/etc/samba/smb.conf"),
            share_name: "PS2".to_string(),
            default_games_path: PathBuf::from("/home/ps2games"),
            samba_user: "ps2user".to_string(),
            config_version: "1.0".to_string(),
            smb_port: 445,
            probe_host: "localhost".to_string(),
            probe_timeout: Duration::from_secs(2),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_smb_conf_path_is_system_samba_config() {
        let cfg = ToolConfig::default();
        assert_eq!(cfg.smb_conf_path, PathBuf::from("/etc/samba/smb.conf"));
    }

    #[test]
    fn test_default_probe_targets_local_smb_port() {
        let cfg = ToolConfig::default();
        assert_eq!(cfg.probe_host, "localhost");
        assert_eq!(cfg.smb_port, 445);
        assert_eq!(cfg.probe_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_default_account_and_schema() {
        let cfg = ToolConfig::default();
        assert_eq!(cfg.samba_user, "ps2user");
        assert_eq!(cfg.config_version, "1.0");
        assert_eq!(cfg.default_games_path, PathBuf::from("/home/ps2games"));
    }
}
