//! Samba unit lifecycle through `systemctl`.

use ps2smb_core::{CommandError, Distro};
use tracing::info;

use crate::application::ports::ServiceManager;
use crate::infrastructure::system::runner::{run, run_ok};

/// [`ServiceManager`] for one systemd unit.
#[derive(Debug, Clone)]
pub struct SystemdServiceManager {
    unit: String,
}

impl SystemdServiceManager {
    pub fn new(unit: impl Into<String>) -> Self {
        Self { unit: unit.into() }
    }

    /// Manager for the distro's Samba unit (`smb` on Arch, `smbd` elsewhere).
    pub fn for_distro(distro: &Distro) -> Self {
        Self::new(distro.samba_service())
    }
}

impl ServiceManager for SystemdServiceManager {
    fn unit(&self) -> String {
        self.unit.clone()
    }

    fn enable(&self) -> Result<(), CommandError> {
        run_ok("systemctl", &["enable", &self.unit])?;
        info!(unit = %self.unit, "unit enabled");
        Ok(())
    }

    fn restart(&self) -> Result<(), CommandError> {
        run_ok("systemctl", &["restart", &self.unit])?;
        info!(unit = %self.unit, "unit restarted");
        Ok(())
    }

    /// `systemctl is-active <unit>` printing exactly `active`.  A missing
    /// `systemctl` counts as inactive.
    fn is_active(&self) -> bool {
        run("systemctl", &["is-active", &self.unit])
            .is_ok_and(|out| out.success && out.stdout.trim() == "active")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
