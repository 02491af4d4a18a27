//! The `info` report: how a PS2 running OPL reaches this host.
//!
//! Gathering the facts (settings file, interface addresses, hostname, service
//! state) is the CLI's job; this module only turns them into text, so every
//! branch of the report can be tested from plain values.

use std::fmt::Write as _;
use std::net::Ipv4Addr;

use ps2smb_core::{smb_path, InterfaceAddress, PersistedSettings};

/// Everything the `info` report shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub settings: PersistedSettings,
    /// Address the PS2 should dial; the primary or the requested interface.
    pub ip: Ipv4Addr,
    /// Uppercase host name, when one could be read.
    pub netbios_name: Option<String>,
    /// `--netbios` was requested.
    pub prefer_netbios: bool,
    pub samba_running: bool,
    /// Unit name used in the "start it with" hint.
    pub service_unit: String,
    pub smb_port: u16,
    /// Every active IPv4 interface; listed only when there is more than one.
    pub interfaces: Vec<InterfaceAddress>,
}

impl ConnectionInfo {
    /// Whether OPL should be pointed at the NetBIOS name rather than the IP.
    pub fn uses_netbios(&self) -> bool {
        self.prefer_netbios && self.netbios_name.is_some()
    }

    /// Renders the full report, ending with a newline.
    pub fn render(&self) -> String {
        // Writing into a String cannot fail.
        let mut out = String::new();
        let _ = self.write_report(&mut out);
        out
    }

    fn write_report(&self, out: &mut String) -> std::fmt::Result {
        let s = &self.settings;
        let ip = self.ip.to_string();
        let games = s.games_path.display();

        writeln!(out, "PS2SMB Connection Information")?;
        writeln!(out, "=============================")?;
        writeln!(out)?;
        let (symbol, state) = if self.samba_running {
            ("✓", "Running")
        } else {
            ("✗", "Not Running")
        };
        writeln!(out, "Server Status: {symbol} {state}")?;
        writeln!(out, "IP Address: {ip}")?;
        if let Some(name) = &self.netbios_name {
            writeln!(out, "NetBIOS Name: {name}")?;
        }
        writeln!(out, "Share Name: {}", s.share_name)?;
        writeln!(out, "Games Path: {games}")?;
        writeln!(out)?;

        writeln!(out, "Authentication:")?;
        match s.samba_user.as_deref().filter(|_| !s.use_guest) {
            None => writeln!(out, "  Type: Guest (no password required)")?,
            Some(user) => {
                writeln!(out, "  Type: User authentication")?;
                writeln!(out, "  User: {user}")?;
                writeln!(out, "  Password: (set during init)")?;
            }
        }
        writeln!(out)?;

        writeln!(out, "SMB Path: {}", smb_path(&ip, &s.share_name))?;
        writeln!(out)?;

        // ── OPL walkthrough ───────────────────────────────────────────────────
        writeln!(out, "Configure on your PS2 (OPL):")?;
        writeln!(out, "=============================")?;
        writeln!(out)?;
        writeln!(out, "1. Go to 'Network Config' in OPL main menu")?;
        writeln!(out)?;
        writeln!(out, "2. PS2 Network Settings:")?;
        writeln!(out, "   - IP address type: DHCP (recommended)")?;
        writeln!(out)?;
        writeln!(out, "   OR if using Static IP:")?;
        writeln!(
            out,
            "     - IP address: 192.168.1.10 (must be in same network as {ip})"
        )?;
        writeln!(out, "       * Choose an available IP in the same range")?;
        writeln!(
            out,
            "       * Example: If PC is {ip}, PS2 could be 192.168.1.10, 192.168.1.20, etc"
        )?;
        writeln!(out, "     - Mask: 255.255.255.0")?;
        writeln!(
            out,
            "     - Gateway: {ip} (your PC's IP for direct connection, or router IP)"
        )?;
        writeln!(out)?;

        writeln!(out, "3. SMB Server Settings:")?;
        match self.netbios_name.as_deref() {
            Some(name) if self.uses_netbios() => {
                writeln!(out, "   - Address type: NetBIOS")?;
                writeln!(out, "   - Address: {name} (hostname in UPPERCASE)")?;
            }
            _ => {
                if self.prefer_netbios {
                    writeln!(out, "   WARNING: Could not get hostname, using IP instead")?;
                }
                writeln!(out, "   - Address type: IP")?;
                writeln!(out, "   - Address: {ip}")?;
            }
        }
        writeln!(out, "   - Share: {}", s.share_name)?;
        writeln!(out, "   - Port: {} (default, don't change)", self.smb_port)?;
        match s.samba_user.as_deref().filter(|_| !s.use_guest) {
            None => {
                writeln!(out, "   - User: (leave empty)")?;
                writeln!(out, "   - Password: (leave empty)")?;
            }
            Some(user) => {
                writeln!(out, "   - User: {user}")?;
                writeln!(out, "   - Password: (password you set during init)")?;
            }
        }
        writeln!(out)?;

        writeln!(out, "4. Advanced Settings (if needed):")?;
        writeln!(out, "   - For direct crossover cable connection:")?;
        writeln!(out, "     - Ethernet operation mode: 100Mbit half-duplex")?;
        writeln!(out)?;
        writeln!(out, "5. Save settings and select 'Reconnect'")?;
        writeln!(out)?;

        // ── Placement and warnings ────────────────────────────────────────────
        let [dvd, cd] = [s.media_dir("DVD"), s.media_dir("CD")];
        writeln!(out, "Place your game ISOs in:")?;
        writeln!(out, "  DVD games: {}/", dvd.display())?;
        writeln!(out, "  CD games:  {}/", cd.display())?;
        writeln!(out)?;

        if !self.samba_running {
            writeln!(out, "WARNING: Samba service is not running!")?;
            writeln!(out, "Start it with: sudo systemctl start {}", self.service_unit)?;
            writeln!(out)?;
        }

        if self.interfaces.len() > 1 {
            writeln!(out, "Available network interfaces:")?;
            for iface in &self.interfaces {
                writeln!(out, "  - {iface}")?;
            }
            writeln!(out)?;
            writeln!(out, "Tip: Use the interface connected to your PS2")?;
            writeln!(out)?;
        }

        if self.prefer_netbios {
            writeln!(out, "Tip: You can use IP address instead with: ps2smb info")?;
        } else {
            writeln!(
                out,
                "Tip: You can use NetBIOS instead of IP with: ps2smb info --netbios"
            )?;
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn guest_settings() -> PersistedSettings {
        PersistedSettings {
            games_path: PathBuf::from("/home/ps2games"),
            share_name: "PS2".to_string(),
            use_guest: true,
            samba_user: None,
            config_version: "1.0".to_string(),
        }
    }

    fn info(settings: PersistedSettings) -> ConnectionInfo {
        ConnectionInfo {
            settings,
            ip: Ipv4Addr::new(192, 168, 1, 50),
            netbios_name: Some("GAMEBOX".to_string()),
            prefer_netbios: false,
            samba_running: true,
            service_unit: "smbd".to_string(),
            smb_port: 445,
            interfaces: vec![InterfaceAddress {
                name: "enp3s0".to_string(),
                addr: Ipv4Addr::new(192, 168, 1, 50),
            }],
        }
    }

    #[test]
    fn test_guest_report_shows_path_and_empty_credentials() {
        // Arrange
        let info = info(guest_settings());

        // Act
        let text = info.render();

        // Assert
        assert!(text.contains("Server Status: ✓ Running\n"));
        assert!(text.contains("SMB Path: \\\\192.168.1.50\\PS2\n"));
        assert!(text.contains("  Type: Guest (no password required)\n"));
        assert!(text.contains("   - User: (leave empty)\n"));
        assert!(text.contains("   - Address type: IP\n   - Address: 192.168.1.50\n"));
        assert!(text.contains("  DVD games: /home/ps2games/DVD/\n"));
        assert!(text.contains("  CD games:  /home/ps2games/CD/\n"));
        assert!(!text.contains("WARNING"));
    }

    #[test]
    fn test_authenticated_report_names_the_user() {
        let mut settings = guest_settings();
        settings.use_guest = false;
        settings.samba_user = Some("ps2user".to_string());

        let text = info(settings).render();

        assert!(text.contains("  Type: User authentication\n  User: ps2user\n"));
        assert!(text.contains("   - User: ps2user\n"));
        assert!(!text.contains("leave empty"));
    }

    #[test]
    fn test_netbios_requested_and_available_uses_hostname() {
        let mut info = info(guest_settings());
        info.prefer_netbios = true;

        let text = info.render();

        assert!(info.uses_netbios());
        assert!(text.contains("   - Address type: NetBIOS\n"));
        assert!(text.contains("   - Address: GAMEBOX (hostname in UPPERCASE)\n"));
        assert!(text.ends_with("Tip: You can use IP address instead with: ps2smb info\n"));
    }

    #[test]
    fn test_netbios_requested_without_hostname_falls_back_to_ip() {
        let mut info = info(guest_settings());
        info.prefer_netbios = true;
        info.netbios_name = None;

        let text = info.render();

        assert!(!info.uses_netbios());
        assert!(text.contains("   WARNING: Could not get hostname, using IP instead\n"));
        assert!(text.contains("   - Address type: IP\n"));
        assert!(!text.contains("NetBIOS Name:"));
    }

    #[test]
    fn test_stopped_service_warning_names_the_unit() {
        let mut info = info(guest_settings());
        info.samba_running = false;
        info.service_unit = "smb".to_string();

        let text = info.render();

        assert!(text.contains("Server Status: ✗ Not Running\n"));
        assert!(text.contains("Start it with: sudo systemctl start smb\n"));
    }

    #[test]
    fn test_interface_list_only_shown_for_multiple_interfaces() {
        let single = info(guest_settings()).render();
        assert!(!single.contains("Available network interfaces:"));

        let mut multi = info(guest_settings());
        multi.interfaces.push(InterfaceAddress {
            name: "wlan0".to_string(),
            addr: Ipv4Addr::new(10, 0, 0, 7),
        });
        let text = multi.render();
        assert!(text.contains("  - 192.168.1.50 (enp3s0)\n  - 10.0.0.7 (wlan0)\n"));
    }
}
