//! IPv4 interface enumeration via `ip -j addr show`.
//!
//! iproute2 prints one JSON object per interface:
//!
//! ```json
//! [{"ifname":"enp3s0","flags":["BROADCAST","MULTICAST","UP","LOWER_UP"],
//!   "addr_info":[{"family":"inet","local":"192.168.1.50","prefixlen":24},
//!                {"family":"inet6","local":"fe80::1","prefixlen":64}]}]
//! ```
//!
//! Only `inet` addresses on interfaces that are `UP` and not `LOOPBACK` are
//! kept.  Order follows the kernel's interface index, so the first entry is
//! the primary address.

use std::net::Ipv4Addr;

use ps2smb_core::{CommandError, InterfaceAddress};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::infrastructure::system::runner::run_ok;

/// Error type for interface lookups.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("failed to list interfaces: {0}")]
    Command(#[from] CommandError),

    #[error("failed to parse `ip` output: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no local IPv4 address found")]
    NoAddress,

    #[error("interface {0} not found or has no IPv4 address")]
    InterfaceNotFound(String),
}

#[derive(Debug, Deserialize)]
struct IpLink {
    ifname: String,
    #[serde(default)]
    flags: Vec<String>,
    #[serde(default)]
    addr_info: Vec<IpAddrInfo>,
}

#[derive(Debug, Deserialize)]
struct IpAddrInfo {
    family: String,
    #[serde(default)]
    local: Option<String>,
}

impl IpLink {
    fn is_active(&self) -> bool {
        let has = |flag: &str| self.flags.iter().any(|f| f == flag);
        has("UP") && !has("LOOPBACK")
    }
}

/// Parses `ip -j addr show` output into one entry per IPv4 address.
///
/// # Errors
///
/// [`NetworkError::Parse`] when the text is not the expected JSON shape.
pub fn parse_ip_addr_json(json: &str) -> Result<Vec<InterfaceAddress>, NetworkError> {
    let links: Vec<IpLink> = serde_json::from_str(json)?;
    let addresses = links
        .into_iter()
        .filter(IpLink::is_active)
        .flat_map(|link| {
            let name = link.ifname;
            link.addr_info
                .into_iter()
                .filter(|a| a.family == "inet")
                .filter_map(|a| a.local?.parse::<Ipv4Addr>().ok())
                .map(move |addr| InterfaceAddress {
                    name: name.clone(),
                    addr,
                })
        })
        .collect();
    Ok(addresses)
}

/// Every IPv4 address on an up, non-loopback interface, in kernel order.
///
/// # Errors
///
/// [`NetworkError::Command`] if `ip` fails, [`NetworkError::Parse`] if its
/// output is unexpected.
pub fn list_ipv4_interfaces() -> Result<Vec<InterfaceAddress>, NetworkError> {
    let output = run_ok("ip", &["-j", "addr", "show"])?;
    let addresses = parse_ip_addr_json(&output.stdout)?;
    debug!(count = addresses.len(), "ipv4 interfaces listed");
    Ok(addresses)
}

/// `addresses` sorted by interface name, for display.
pub fn sorted_by_name(mut addresses: Vec<InterfaceAddress>) -> Vec<InterfaceAddress> {
    addresses.sort_by(|a, b| a.name.cmp(&b.name));
    addresses
}

/// The first address in `addresses`.
///
/// # Errors
///
/// [`NetworkError::NoAddress`] when the list is empty.
pub fn primary_ipv4(addresses: &[InterfaceAddress]) -> Result<Ipv4Addr, NetworkError> {
    addresses
        .first()
        .map(|a| a.addr)
        .ok_or(NetworkError::NoAddress)
}

/// The first address bound to interface `name`.
///
/// # Errors
///
/// [`NetworkError::InterfaceNotFound`] when `name` is absent, down, or has
/// no IPv4 address.
pub fn ipv4_for_interface(
    addresses: &[InterfaceAddress],
    name: &str,
) -> Result<Ipv4Addr, NetworkError> {
    addresses
        .iter()
        .find(|a| a.name == name)
        .map(|a| a.addr)
        .ok_or_else(|| NetworkError::InterfaceNotFound(name.to_string()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"ifindex":1,"ifname":"lo","flags":["LOOPBACK","UP","LOWER_UP"],
         "addr_info":[{"family":"inet","local":"127.0.0.1","prefixlen":8}]},
        {"ifindex":2,"ifname":"wlp2s0","flags":["BROADCAST","MULTICAST","UP","LOWER_UP"],
         "addr_info":[{"family":"inet","local":"192.168.1.50","prefixlen":24},
                      {"family":"inet6","local":"fe80::1","prefixlen":64}]},
        {"ifindex":3,"ifname":"enp3s0","flags":["BROADCAST","MULTICAST","UP","LOWER_UP"],
         "addr_info":[{"family":"inet","local":"10.0.0.2","prefixlen":8}]},
        {"ifindex":4,"ifname":"docker0","flags":["NO-CARRIER","BROADCAST","MULTICAST"],
         "addr_info":[{"family":"inet","local":"172.17.0.1","prefixlen":16}]},
        {"ifindex":5,"ifname":"tun0","flags":["POINTOPOINT","UP"],"addr_info":[]}
    ]"#;

    #[test]
    fn test_parse_skips_loopback_down_and_ipv6() {
        // Act
        let addresses = parse_ip_addr_json(SAMPLE).unwrap();

        // Assert: kernel order kept.
        assert_eq!(
            addresses,
            vec![
                InterfaceAddress {
                    name: "wlp2s0".to_string(),
                    addr: Ipv4Addr::new(192, 168, 1, 50),
                },
                InterfaceAddress {
                    name: "enp3s0".to_string(),
                    addr: Ipv4Addr::new(10, 0, 0, 2),
                },
            ]
        );
    }

    #[test]
    fn test_primary_is_first_in_kernel_order() {
        let addresses = parse_ip_addr_json(SAMPLE).unwrap();
        assert_eq!(primary_ipv4(&addresses).unwrap(), Ipv4Addr::new(192, 168, 1, 50));
    }

    #[test]
    fn test_sorted_by_name() {
        let names: Vec<_> = sorted_by_name(parse_ip_addr_json(SAMPLE).unwrap())
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["enp3s0", "wlp2s0"]);
    }

    #[test]
    fn test_lookup_by_interface_name() {
        let addresses = parse_ip_addr_json(SAMPLE).unwrap();

        assert_eq!(
            ipv4_for_interface(&addresses, "enp3s0").unwrap(),
            Ipv4Addr::new(10, 0, 0, 2)
        );
        assert!(matches!(
            ipv4_for_interface(&addresses, "docker0"),
            Err(NetworkError::InterfaceNotFound(name)) if name == "docker0"
        ));
    }

    #[test]
    fn test_empty_list_has_no_primary() {
        let addresses = parse_ip_addr_json("[]").unwrap();
        assert!(matches!(primary_ipv4(&addresses), Err(NetworkError::NoAddress)));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        assert!(matches!(
            parse_ip_addr_json("Object \"addr\" is unknown"),
            Err(NetworkError::Parse(_))
        ));
    }
}
