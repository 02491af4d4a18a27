//! Storage infrastructure: settings file persistence.
//!
//! The `settings` sub-module reads and writes the single
//! [`PersistedSettings`](ps2smb_core::PersistedSettings) record ps2smb keeps
//! between invocations, as pretty-printed JSON under the per-user config
//! directory.

pub mod settings;
