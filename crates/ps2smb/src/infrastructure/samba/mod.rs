//! Samba infrastructure: the configuration file and the account database.
//!
//! - **`config_editor`** – backs up `smb.conf` and maintains the managed
//!   share stanza inside it.
//! - **`users`** – creates the share account and registers it with Samba.

pub mod config_editor;
pub mod users;
