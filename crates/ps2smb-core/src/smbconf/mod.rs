//! Text operations on the Samba configuration file.
//!
//! `smb.conf` is an INI-like file of bracketed sections:
//!
//! ```text
//! [global]
//!    workgroup = WORKGROUP
//!
//! [PS2]
//!    path = /home/ps2games
//! ```
//!
//! ps2smb owns exactly one of those sections and never parses the rest of
//! the file.  [`stanza`] renders the managed section; [`section`] finds and
//! cuts it out again by a plain substring scan.

pub mod section;
pub mod stanza;
