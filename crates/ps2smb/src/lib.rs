//! # ps2smb
//!
//! Sets up a Samba share a PlayStation 2 running Open PS2 Loader can read
//! games from, and reports how to connect to it.
//!
//! The pure share model and `smb.conf` text handling live in `ps2smb-core`;
//! this crate adds the use cases and everything that touches the host.
//!
//! - **`application`**    – the `init` sequence, the `info` report and the
//!   `status` checklist, written against the traits in
//!   [`application::ports`].
//! - **`infrastructure`** – the adapters behind those traits and the CLI
//!   handlers.

pub mod application;
pub mod infrastructure;
