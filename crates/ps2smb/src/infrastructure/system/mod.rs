//! System infrastructure: child processes, the Samba unit, and host facts.
//!
//! - **`runner`**  – runs external programs and turns failures into
//!   [`CommandError`](ps2smb_core::CommandError)s.
//! - **`service`** – `systemctl enable|restart|is-active` for the Samba unit.
//! - **`host`**    – root check, `/etc/os-release`, host name, and the
//!   [`HostInspector`](crate::application::ports::HostInspector) used by
//!   `status`.
//! - **`mock`**    – recording doubles used by the integration tests.

pub mod host;
pub mod mock;
pub mod runner;
pub mod service;
