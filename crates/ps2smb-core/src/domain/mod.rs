//! Domain entities for ps2smb.
//!
//! Everything in this module is plain data plus the rules that keep it
//! consistent.  Nothing here touches the disk or spawns a process, so every
//! type can be unit-tested on any machine without root or a Samba install.
//!
//! - [`share`] – the exported directory and its access mode.
//! - [`settings`] – the JSON record ps2smb keeps between invocations.
//! - [`distro`] – mapping an `os-release` identifier to a package manager.
//! - [`config`] – tool-wide defaults (paths, names, ports).
//! - [`network`] – interface addresses and the UNC path shown to the user.

pub mod config;
pub mod distro;
pub mod network;
pub mod settings;
pub mod share;
