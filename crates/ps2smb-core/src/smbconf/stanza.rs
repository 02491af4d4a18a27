//! Rendering of the managed share stanza.
//!
//! The output is appended verbatim to `smb.conf`, so it is fixed down to the
//! byte: two leading newlines separate it from whatever precedes it, every
//! directive is indented by three spaces, and the auth directives come last.
//!
//! ```text
//!
//!
//! [PS2]
//!    comment = PlayStation 2 Games
//!    path = /home/ps2games
//!    browseable = yes
//!    read only = yes
//!    create mask = 0644
//!    directory mask = 0755
//!    guest ok = yes
//!    public = yes
//! ```

use std::fmt::Write as _;

use crate::domain::share::{AccessMode, ShareRecord};

/// Renders the stanza for `record`.
pub fn render_stanza(record: &ShareRecord) -> String {
    let mut out = format!(
        "\n\n[{}]\n   comment = PlayStation 2 Games\n   path = {}\n   browseable = yes\n   read only = yes\n   create mask = 0644\n   directory mask = 0755\n",
        record.share_name(),
        record.path().display(),
    );

    match record.access() {
        AccessMode::Guest => {
            out.push_str("   guest ok = yes\n");
            out.push_str("   public = yes\n");
        }
        AccessMode::AuthenticatedUser { username } => {
            out.push_str("   guest ok = no\n");
            // Writing into a String cannot fail.
            let _ = writeln!(out, "   valid users = {username}");
        }
    }

    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
