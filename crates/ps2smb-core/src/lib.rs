//! # ps2smb-core
//!
//! Shared library for ps2smb containing the share model, the `smb.conf`
//! section editor logic, distro classification, and the persisted settings
//! record.
//!
//! This crate performs no I/O.  It has zero dependencies on the file system,
//! child processes, or sockets; the `ps2smb` crate supplies those.
//!
//! # Architecture overview (for beginners)
//!
//! ps2smb turns a Linux machine into a game server for a PlayStation 2
//! running Open PS2 Loader (OPL).  OPL reads disc images over the network
//! using SMB, so the host only needs a correctly configured Samba share.
//!
//! This crate (`ps2smb-core`) is the pure foundation.  It defines:
//!
//! - **`domain`** – The data the tool reasons about: the share being exported
//!   ([`ShareRecord`]), how the PS2 authenticates ([`AccessMode`]), which Linux
//!   distribution the host runs ([`Distro`]), the settings record saved
//!   between runs ([`PersistedSettings`]), and the tool-wide defaults
//!   ([`ToolConfig`]).
//!
//! - **`smbconf`** – Text operations on the Samba configuration file: rendering
//!   the managed `[PS2]` stanza and locating/removing a named section by a
//!   plain textual scan.
//!
//! - **`error`** – The error enums the editor, the settings store, and the
//!   command runner return.  They live here so the application layer of
//!   `ps2smb` can name them in its traits.

pub mod domain;
pub mod error;
pub mod smbconf;

pub use domain::config::ToolConfig;
pub use domain::distro::{Distro, PackageManager};
pub use domain::network::{smb_path, InterfaceAddress};
pub use domain::settings::PersistedSettings;
pub use domain::share::{AccessMode, ShareError, ShareRecord, MEDIA_SUBDIRECTORIES};
pub use error::{CommandError, SettingsError, SmbConfError};
pub use smbconf::section::{count_sections, remove_section, remove_section_bytes, section_range};
pub use smbconf::stanza::render_stanza;
