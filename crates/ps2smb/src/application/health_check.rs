//! HealthCheckUseCase: the `status` checklist.
//!
//! Checks run in a fixed order and each yields a pass/fail line with
//! optional hints underneath:
//!
//! ```text
//! Configuration exists... ✓
//! Samba installed... ✓
//! Samba service running... ✗
//!   Start with: sudo systemctl start smbd
//! Games directory (/home/ps2games)... ✓
//! ...
//! ```
//!
//! A missing settings file ends the checklist after the first line, since
//! every later check needs the recorded games path.

use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Duration;

use ps2smb_core::{SettingsError, ToolConfig};

use super::ports::{HostInspector, ServiceManager, SettingsRepository};

/// One line of the checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub label: String,
    pub passed: bool,
    /// Printed indented under a failed check.
    pub hints: Vec<String>,
}

impl CheckResult {
    fn new(label: impl Into<String>, passed: bool, hints: Vec<String>) -> Self {
        Self {
            label: label.into(),
            passed,
            hints: if passed { Vec::new() } else { hints },
        }
    }
}

/// Outcome of a `status` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthReport {
    /// No settings file; `init` has never completed.
    NotConfigured,
    /// Settings were found and every check ran.
    Checked(Vec<CheckResult>),
}

impl HealthReport {
    /// `true` only when configured and every check passed.
    pub fn all_passed(&self) -> bool {
        match self {
            Self::NotConfigured => false,
            Self::Checked(checks) => checks.iter().all(|c| c.passed),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_report(&mut out);
        out
    }

    fn write_report(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "PS2SMB Status Check")?;
        writeln!(out, "===================")?;
        writeln!(out)?;

        let checks = match self {
            Self::NotConfigured => {
                writeln!(out, "Configuration exists... ✗")?;
                writeln!(out, "  Run 'sudo ps2smb init' to configure")?;
                return Ok(());
            }
            Self::Checked(checks) => checks,
        };

        writeln!(out, "Configuration exists... ✓")?;
        for check in checks {
            let mark = if check.passed { "✓" } else { "✗" };
            writeln!(out, "{}... {mark}", check.label)?;
            for hint in &check.hints {
                writeln!(out, "  {hint}")?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Summary:")?;
        writeln!(out, "--------")?;
        if self.all_passed() {
            writeln!(out, "All checks passed! Your PS2 SMB server is ready.")?;
            writeln!(out)?;
            writeln!(out, "Run 'ps2smb info' to see connection details.")?;
        } else {
            writeln!(out, "Some checks failed. Please fix the issues above.")?;
        }
        Ok(())
    }
}

/// The Health Check use case.
pub struct HealthCheckUseCase {
    settings: Arc<dyn SettingsRepository>,
    service: Arc<dyn ServiceManager>,
    host: Arc<dyn HostInspector>,
    probe_host: String,
    smb_port: u16,
    probe_timeout: Duration,
}

impl HealthCheckUseCase {
    pub fn new(
        settings: Arc<dyn SettingsRepository>,
        service: Arc<dyn ServiceManager>,
        host: Arc<dyn HostInspector>,
        config: &ToolConfig,
    ) -> Self {
        Self {
            settings,
            service,
            host,
            probe_host: config.probe_host.clone(),
            smb_port: config.smb_port,
            probe_timeout: config.probe_timeout,
        }
    }

    /// Runs every check.
    ///
    /// # Errors
    ///
    /// Returns the [`SettingsError`] when a settings file exists but cannot
    /// be read or parsed.  A missing file is [`HealthReport::NotConfigured`].
    pub fn execute(&self) -> Result<HealthReport, SettingsError> {
        if !self.settings.exists() {
            return Ok(HealthReport::NotConfigured);
        }
        let settings = match self.settings.load() {
            Ok(s) => s,
            Err(SettingsError::NotConfigured { .. }) => return Ok(HealthReport::NotConfigured),
            Err(e) => return Err(e),
        };

        let unit = self.service.unit();
        let mut checks = vec![
            CheckResult::new(
                "Samba installed",
                self.host.samba_installed(),
                vec!["Install Samba to continue".to_string()],
            ),
            CheckResult::new(
                "Samba service running",
                self.service.is_active(),
                vec![format!("Start with: sudo systemctl start {unit}")],
            ),
            CheckResult::new(
                format!("Games directory ({})", settings.games_path.display()),
                self.host.dir_exists(&settings.games_path),
                vec!["Directory does not exist".to_string()],
            ),
        ];
        for media in ps2smb_core::MEDIA_SUBDIRECTORIES {
            checks.push(CheckResult::new(
                format!("{media} directory"),
                self.host.dir_exists(&settings.media_dir(media)),
                Vec::new(),
            ));
        }
        let port = self.smb_port;
        checks.push(CheckResult::new(
            format!("Port {port} (SMB) reachable"),
            self.host
                .port_reachable(&self.probe_host, port, self.probe_timeout),
            vec![
                "Port may be blocked by firewall".to_string(),
                format!("Open with: sudo ufw allow {port}"),
            ],
        ));

        Ok(HealthReport::Checked(checks))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockHostInspector, MockServiceManager, MockSettingsRepository};
    use ps2smb_core::PersistedSettings;
    use std::path::{Path, PathBuf};

    fn stored_settings() -> MockSettingsRepository {
        let mut repo = MockSettingsRepository::new();
        repo.expect_exists().return_const(true);
        repo.expect_load().returning(|| {
            Ok(PersistedSettings {
                games_path: PathBuf::from("/home/ps2games"),
                share_name: "PS2".to_string(),
                use_guest: true,
                samba_user: None,
                config_version: "1.0".to_string(),
            })
        });
        repo
    }

    fn service(active: bool) -> MockServiceManager {
        let mut service = MockServiceManager::new();
        service.expect_unit().return_const("smbd".to_string());
        service.expect_is_active().return_const(active);
        service
    }

    fn healthy_host() -> MockHostInspector {
        let mut host = MockHostInspector::new();
        host.expect_samba_installed().return_const(true);
        host.expect_dir_exists().returning(|_| true);
        host.expect_port_reachable()
            .withf(|h, port, timeout| h == "localhost" && *port == 445 && *timeout == Duration::from_secs(2))
            .returning(|_, _, _| true);
        host
    }

    fn use_case(
        repo: MockSettingsRepository,
        service: MockServiceManager,
        host: MockHostInspector,
    ) -> HealthCheckUseCase {
        HealthCheckUseCase::new(
            Arc::new(repo),
            Arc::new(service),
            Arc::new(host),
            &ToolConfig::default(),
        )
    }

    #[test]
    fn test_not_configured_stops_after_first_check() {
        // Arrange: service and host mocks have no expectations, so any call panics.
        let mut repo = MockSettingsRepository::new();
        repo.expect_exists().return_const(false);
        let uc = use_case(repo, MockServiceManager::new(), MockHostInspector::new());

        // Act
        let report = uc.execute().unwrap();

        // Assert
        assert_eq!(report, HealthReport::NotConfigured);
        assert!(!report.all_passed());
        assert!(report
            .render()
            .ends_with("Configuration exists... ✗\n  Run 'sudo ps2smb init' to configure\n"));
    }

    #[test]
    fn test_healthy_host_passes_every_check() {
        let uc = use_case(stored_settings(), service(true), healthy_host());

        let report = uc.execute().unwrap();

        assert!(report.all_passed());
        let text = report.render();
        assert!(text.contains("Games directory (/home/ps2games)... ✓\n"));
        assert!(text.contains("DVD directory... ✓\nCD directory... ✓\n"));
        assert!(text.contains("Port 445 (SMB) reachable... ✓\n"));
        assert!(text.contains("All checks passed!"));
    }

    #[test]
    fn test_stopped_service_hint_names_the_unit() {
        let uc = use_case(stored_settings(), service(false), healthy_host());

        let report = uc.execute().unwrap();

        assert!(!report.all_passed());
        let text = report.render();
        assert!(text.contains("Samba service running... ✗\n  Start with: sudo systemctl start smbd\n"));
        assert!(text.contains("Some checks failed."));
    }

    #[test]
    fn test_missing_cd_directory_fails_only_that_check() {
        let mut host = MockHostInspector::new();
        host.expect_samba_installed().return_const(true);
        host.expect_dir_exists()
            .returning(|p: &Path| !p.ends_with("CD"));
        host.expect_port_reachable().returning(|_, _, _| true);
        let uc = use_case(stored_settings(), service(true), host);

        let report = uc.execute().unwrap();

        let HealthReport::Checked(checks) = report else {
            panic!("expected a checked report");
        };
        let failed: Vec<_> = checks.iter().filter(|c| !c.passed).map(|c| c.label.as_str()).collect();
        assert_eq!(failed, vec!["CD directory"]);
    }

    #[test]
    fn test_closed_port_adds_firewall_hints() {
        let mut host = MockHostInspector::new();
        host.expect_samba_installed().return_const(true);
        host.expect_dir_exists().returning(|_| true);
        host.expect_port_reachable().returning(|_, _, _| false);
        let uc = use_case(stored_settings(), service(true), host);

        let text = uc.execute().unwrap().render();

        assert!(text.contains(
            "Port 445 (SMB) reachable... ✗\n  Port may be blocked by firewall\n  Open with: sudo ufw allow 445\n"
        ));
    }

    #[test]
    fn test_malformed_settings_is_an_error() {
        let mut repo = MockSettingsRepository::new();
        repo.expect_exists().return_const(true);
        repo.expect_load()
            .returning(|| Err(PersistedSettings::from_json("{").unwrap_err()));
        let uc = use_case(repo, MockServiceManager::new(), MockHostInspector::new());

        let err = uc.execute().unwrap_err();

        assert!(matches!(err, SettingsError::Serialization(_)));
    }
}
