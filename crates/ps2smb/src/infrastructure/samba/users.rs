//! System and Samba account management through `useradd` and `smbpasswd`.

use ps2smb_core::CommandError;
use tracing::info;

use crate::application::ports::UserManager;
use crate::infrastructure::system::runner::{run_interactive, run_ok};

/// Login shell given to the share account; it never logs in interactively.
pub const NOLOGIN_SHELL: &str = "/usr/sbin/nologin";

/// [`UserManager`] backed by the host's account tools.  Requires root.
#[derive(Debug, Default, Clone, Copy)]
pub struct SambaUserManager;

impl SambaUserManager {
    pub fn new() -> Self {
        Self
    }
}

impl UserManager for SambaUserManager {
    /// `useradd -M -s /usr/sbin/nologin <user>`: no home directory, no shell.
    fn create_user(&self, username: &str) -> Result<(), CommandError> {
        run_ok("useradd", &["-M", "-s", NOLOGIN_SHELL, username])?;
        info!(username, "system user created");
        Ok(())
    }

    /// `smbpasswd -a <user>` on the user's terminal so they type the
    /// password themselves.
    fn set_password(&self, username: &str) -> Result<(), CommandError> {
        run_interactive("smbpasswd", &["-a", username])?;
        info!(username, "samba password set");
        Ok(())
    }

    fn enable_user(&self, username: &str) -> Result<(), CommandError> {
        run_ok("smbpasswd", &["-e", username])?;
        info!(username, "samba user enabled");
        Ok(())
    }
}
