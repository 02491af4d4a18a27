//! Locating and removing a named section by textual scan.
//!
//! # How the scan works
//!
//! The section starts at the first occurrence of the literal header
//! `[name]` and ends right before the next `[` byte found after that
//! header, or at the end of the file.  This is not an INI parser: a `[`
//! anywhere inside the section body (a comment, a quoted value) is taken as
//! the start of the next section and the removal stops there.  Share paths
//! containing `[` are rejected when the record is built, so removing a
//! section ps2smb wrote always takes the whole stanza.
//!
//! The scan works on raw bytes.  `smb.conf` files in the wild carry Latin-1
//! comments and other non-UTF-8 text, and everything outside the cut range
//! is kept byte for byte.
//!
//! ```text
//! "[A]\n x = 1\n[PS2]\n path = /g\n[B]\n"
//!               ^start            ^end
//! ```

use std::ops::Range;

fn header(name: &str) -> String {
    format!("[{name}]")
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}

/// Byte range of the first `[name]` section, or `None` if it is absent.
pub fn section_range(content: impl AsRef<[u8]>, name: &str) -> Option<Range<usize>> {
    let content = content.as_ref();
    let header = header(name);
    let start = find(content, header.as_bytes())?;
    let body = start + header.len();
    let end = content[body..]
        .iter()
        .position(|&b| b == b'[')
        .map_or(content.len(), |offset| body + offset);
    Some(start..end)
}

/// Returns `content` with the first `[name]` section cut out.
///
/// `None` means the section does not exist and the content needs no rewrite.
pub fn remove_section_bytes(content: &[u8], name: &str) -> Option<Vec<u8>> {
    let range = section_range(content, name)?;
    let mut out = Vec::with_capacity(content.len() - range.len());
    out.extend_from_slice(&content[..range.start]);
    out.extend_from_slice(&content[range.end..]);
    Some(out)
}

/// [`remove_section_bytes`] for text already known to be UTF-8.
pub fn remove_section(content: &str, name: &str) -> Option<String> {
    // Both cut points sit on an ASCII '[' or the end, so they are char
    // boundaries.
    let range = section_range(content, name)?;
    let mut out = String::with_capacity(content.len() - range.len());
    out.push_str(&content[..range.start]);
    out.push_str(&content[range.end..]);
    Some(out)
}

/// Number of `[name]` headers in `content`.
pub fn count_sections(content: impl AsRef<[u8]>, name: &str) -> usize {
    let header = header(name);
    let mut rest = content.as_ref();
    let mut count = 0;
    while let Some(at) = find(rest, header.as_bytes()) {
        count += 1;
        rest = &rest[at + header.len()..];
    }
    count
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_SECTIONS: &str = "[A]\n   a = 1\n\n[PS2]\n   path = /g\n\n[B]\n   b = 2\n";

    #[test]
    fn test_section_range_spans_header_to_next_bracket() {
        // Arrange / Act
        let range = section_range(THREE_SECTIONS, "PS2").expect("section present");

        // Assert
        assert_eq!(&THREE_SECTIONS[range], "[PS2]\n   path = /g\n\n");
    }

    #[test]
    fn test_section_range_runs_to_eof_for_last_section() {
        let content = "[A]\n a = 1\n[PS2]\n path = /g\n";
        let range = section_range(content, "PS2").unwrap();
        assert_eq!(range.end, content.len());
    }

    #[test]
    fn test_remove_middle_section_keeps_neighbours() {
        // Act
        let out = remove_section(THREE_SECTIONS, "PS2").expect("section present");

        // Assert
        assert_eq!(out, "[A]\n   a = 1\n\n[B]\n   b = 2\n");
    }

    #[test]
    fn test_remove_absent_section_returns_none() {
        assert_eq!(remove_section("[A]\n a = 1\n", "PS2"), None);
        assert_eq!(remove_section("", "PS2"), None);
    }

    #[test]
    fn test_remove_only_first_occurrence() {
        let content = "[PS2]\n x = 1\n[PS2]\n y = 2\n";
        let out = remove_section(content, "PS2").unwrap();
        assert_eq!(out, "[PS2]\n y = 2\n");
    }

    #[test]
    fn test_bracket_inside_section_body_truncates_removal() {
        // A '[' inside a comment is read as the next header; the tail of the
        // section survives.
        let content = "[PS2]\n   comment = games [disc]\n   path = /g\n[B]\n";
        let out = remove_section(content, "PS2").unwrap();
        assert_eq!(out, "[disc]\n   path = /g\n[B]\n");
    }

    #[test]
    fn test_header_match_is_literal_and_case_sensitive() {
        let content = "[ps2]\n x = 1\n[PS2X]\n y = 2\n";
        assert_eq!(section_range(content, "PS2"), None);
    }

    #[test]
    fn test_remove_bytes_keeps_non_utf8_neighbours() {
        // Arrange: a Latin-1 comment before and after the managed section.
        let content = b"[global]\n# caf\xe9\n[PS2]\n   path = /g\n[B]\n# \xff\n";

        // Act
        let out = remove_section_bytes(content, "PS2").expect("section present");

        // Assert
        assert_eq!(out, b"[global]\n# caf\xe9\n[B]\n# \xff\n".to_vec());
    }

    #[test]
    fn test_remove_bytes_absent_section_returns_none() {
        assert_eq!(remove_section_bytes(b"[global]\n# caf\xe9\n", "PS2"), None);
    }

    #[test]
    fn test_count_sections() {
        assert_eq!(count_sections(THREE_SECTIONS, "PS2"), 1);
        assert_eq!(count_sections("[PS2][PS2]", "PS2"), 2);
        assert_eq!(count_sections("", "PS2"), 0);
        assert_eq!(count_sections(b"[PS2]\n# \xe9\n[PS2]\n", "PS2"), 2);
    }
}
