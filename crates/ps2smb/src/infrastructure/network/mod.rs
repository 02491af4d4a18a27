//! Network infrastructure: local addresses and the SMB port probe.
//!
//! - **`interfaces`** – IPv4 addresses of up, non-loopback interfaces, read
//!   from iproute2's JSON output.
//! - **`probe`**      – one TCP connect with a timeout.

pub mod interfaces;
pub mod probe;
