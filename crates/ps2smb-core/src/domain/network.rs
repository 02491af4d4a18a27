//! Network addressing as presented to the PS2 user.

use std::fmt;
use std::net::Ipv4Addr;

/// One IPv4 address bound to a named, up, non-loopback interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub name: String,
    pub addr: Ipv4Addr,
}

impl fmt::Display for InterfaceAddress {
    /// Formats as `192.168.1.5 (enp3s0)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.addr, self.name)
    }
}

/// Windows/OPL-style UNC path of a share: `\\192.168.1.5\PS2`.
pub fn smb_path(host: &str, share_name: &str) -> String {
    format!("\\\\{host}\\{share_name}")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
