//! Application layer use cases for ps2smb.
//!
//! # What is the "application" layer? (for beginners)
//!
//! The *application* layer sits between the domain types in `ps2smb-core`
//! (shares, settings, distro rules) and the infrastructure that talks to the
//! operating system (`smb.conf`, `systemctl`, sockets).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects and ports to fulfil one command.
//! - **Depend on abstractions** (the traits in [`ports`]) rather than on the
//!   concrete adapters, so tests can swap in mocks.
//! - **Contain no OS calls**: no process spawning, no file access, no sockets.
//!
//! # Sub-modules
//!
//! - **`ports`**           – The capability traits the use cases are built on.
//!
//! - **`initialize`**      – The `init` sequence: back up `smb.conf`, write
//!   the managed stanza, create the Samba account, restart the service, and
//!   save the settings record.
//!
//! - **`connection_info`** – Renders the `info` report from already gathered
//!   facts.
//!
//! - **`health_check`**    – Runs the `status` checklist.

pub mod connection_info;
pub mod health_check;
pub mod initialize;
pub mod ports;
