//! Single TCP connect probe used by `status`.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::debug;

/// Whether a TCP connection to `host:port` can be opened within `timeout`.
///
/// Every resolved address is tried in turn.  Resolution or connect failures
/// all count as "not reachable"; the connection is closed immediately.
pub fn tcp_reachable(host: &str, port: u16, timeout: Duration) -> bool {
    let addrs = match (host, port).to_socket_addrs() {
        Ok(addrs) => addrs,
        Err(e) => {
            debug!(host, port, error = %e, "probe address did not resolve");
            return false;
        }
    };

    for addr in addrs {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(_stream) => return true,
            Err(e) => debug!(%addr, error = %e, "probe connect failed"),
        }
    }
    false
}

// ── Tests ─────────────────────────────────────────────────────────────────────
