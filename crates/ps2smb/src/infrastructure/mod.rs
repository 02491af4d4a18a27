//! Infrastructure layer for ps2smb.
//!
//! Contains OS-facing adapters: the `smb.conf` editor and Samba account
//! tools, the settings file, `systemctl` and other child processes, network
//! interface enumeration, and the terminal front end.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `ps2smb_core`, but MUST NOT be imported by the `application` layer.

pub mod cli;
pub mod network;
pub mod samba;
pub mod storage;
pub mod system;
