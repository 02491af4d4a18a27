//! In-place editing of the Samba configuration file.
//!
//! [`ConfigEditor`] owns exactly one section of `smb.conf`, the managed share
//! (`[PS2]` by default).  It never parses the file as INI; sections are
//! located with the plain textual scan in [`ps2smb_core::smbconf`], and the
//! rest of the file is carried over byte for byte.  The file is never
//! required to be UTF-8.
//!
//! ```text
//!            add_managed_section            add_managed_section
//!   Absent ───────────────────────► Present(A) ───────────────────► Present(B)
//!      ▲                                │
//!      └────── remove_managed_section ──┘
//! ```
//!
//! There is no locking: concurrent edits by another tool are last-writer-wins.

use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use ps2smb_core::{remove_section_bytes, render_stanza, ShareRecord, SmbConfError};
use tracing::{debug, info};

use crate::application::ports::ShareConfigEditor;

/// Editor bound to one Samba configuration file.
#[derive(Debug, Clone)]
pub struct ConfigEditor {
    path: PathBuf,
}

impl ConfigEditor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path a backup taken at `unix_secs` is written to.
    pub fn backup_path(&self, unix_secs: u64) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".backup.{unix_secs}"));
        PathBuf::from(name)
    }

    /// Copies the config file to `<path>.backup.<now>`.
    ///
    /// Returns `Ok(None)` without creating anything when the config file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// [`SmbConfError::Permission`] or [`SmbConfError::Io`] when reading the
    /// source or writing the copy fails.
    pub fn backup(&self) -> Result<Option<PathBuf>, SmbConfError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        self.backup_at(now)
    }

    /// [`backup`](Self::backup) with an explicit timestamp.  A second backup
    /// in the same second overwrites the first.
    pub fn backup_at(&self, unix_secs: u64) -> Result<Option<PathBuf>, SmbConfError> {
        let content = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no config file to back up");
                return Ok(None);
            }
            Err(e) => return Err(SmbConfError::from_io(&self.path, e)),
        };

        let target = self.backup_path(unix_secs);
        std::fs::write(&target, content).map_err(|e| SmbConfError::from_io(&target, e))?;
        info!(backup = %target.display(), "smb.conf backed up");
        Ok(Some(target))
    }

    /// Deletes the first `[section_name]` section, if any.
    ///
    /// The section runs from its header up to the next `[` or end of file.
    /// A missing file or missing section leaves the disk untouched.
    ///
    /// # Errors
    ///
    /// [`SmbConfError::Permission`] or [`SmbConfError::Io`] on read or write
    /// failure.
    pub fn remove_managed_section(&self, section_name: &str) -> Result<(), SmbConfError> {
        let content = match std::fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(SmbConfError::from_io(&self.path, e)),
        };

        let Some(updated) = remove_section_bytes(&content, section_name) else {
            debug!(section = section_name, "section not present, nothing to remove");
            return Ok(());
        };

        std::fs::write(&self.path, updated).map_err(|e| SmbConfError::from_io(&self.path, e))?;
        info!(section = section_name, path = %self.path.display(), "removed existing section");
        Ok(())
    }

    /// Creates the share directories, drops any previous copy of the
    /// section, and appends the freshly rendered stanza.
    ///
    /// Nothing is appended when directory creation or removal fails.
    ///
    /// # Errors
    ///
    /// [`SmbConfError::DirectoryCreation`] for the directories, otherwise
    /// [`SmbConfError::Permission`] or [`SmbConfError::Io`].
    pub fn add_managed_section(&self, record: &ShareRecord) -> Result<(), SmbConfError> {
        for dir in record.directories() {
            std::fs::create_dir_all(&dir)
                .map_err(|source| SmbConfError::DirectoryCreation { path: dir.clone(), source })?;
        }

        self.remove_managed_section(record.share_name())?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| SmbConfError::from_io(&self.path, e))?;
        file.write_all(render_stanza(record).as_bytes())
            .map_err(|e| SmbConfError::from_io(&self.path, e))?;

        info!(
            section = record.share_name(),
            path = %self.path.display(),
            "share stanza appended"
        );
        Ok(())
    }
}

impl ShareConfigEditor for ConfigEditor {
    fn backup(&self) -> Result<Option<PathBuf>, SmbConfError> {
        ConfigEditor::backup(self)
    }

    fn add_managed_section(&self, record: &ShareRecord) -> Result<(), SmbConfError> {
        ConfigEditor::add_managed_section(self, record)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    use ps2smb_core::{count_sections, AccessMode};
    use uuid::Uuid;

    use crate::infrastructure::system::host::is_root;

    const GLOBAL: &str = "[global]\n   workgroup = WORKGROUP\n";

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ps2smb_test_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn guest(path: &Path) -> ShareRecord {
        ShareRecord::new("PS2", path, AccessMode::Guest).unwrap()
    }

    #[test]
    fn test_add_twice_leaves_one_identical_section() {
        // Arrange
        let dir = scratch_dir();
        let conf = dir.join("smb.conf");
        std::fs::write(&conf, GLOBAL).unwrap();
        let editor = ConfigEditor::new(&conf);
        let record = guest(&dir.join("games"));

        // Act
        editor.add_managed_section(&record).unwrap();
        let first = std::fs::read_to_string(&conf).unwrap();
        editor.add_managed_section(&record).unwrap();
        let second = std::fs::read_to_string(&conf).unwrap();

        // Assert
        assert_eq!(count_sections(&second, "PS2"), 1);
        let stanza = render_stanza(&record);
        let body = stanza.trim_start_matches('\n');
        assert!(first.ends_with(&stanza));
        assert!(second.ends_with(body));
        assert!(second.starts_with(GLOBAL));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_add_to_missing_file_creates_stanza_and_directories() {
        let dir = scratch_dir();
        let conf = dir.join("smb.conf");
        let games = dir.join("srv").join("ps2games");
        let editor = ConfigEditor::new(&conf);
        let record = guest(&games);

        editor.add_managed_section(&record).unwrap();

        assert_eq!(std::fs::read_to_string(&conf).unwrap(), render_stanza(&record));
        assert!(games.is_dir());
        assert!(games.join("DVD").is_dir());
        assert!(games.join("CD").is_dir());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_reconfigure_switches_access_mode() {
        let dir = scratch_dir();
        let conf = dir.join("smb.conf");
        std::fs::write(&conf, GLOBAL).unwrap();
        let editor = ConfigEditor::new(&conf);
        let games = dir.join("games");

        editor.add_managed_section(&guest(&games)).unwrap();
        let user = ShareRecord::new(
            "PS2",
            &games,
            AccessMode::authenticated("ps2user").unwrap(),
        )
        .unwrap();
        editor.add_managed_section(&user).unwrap();

        let content = std::fs::read_to_string(&conf).unwrap();
        assert_eq!(count_sections(&content, "PS2"), 1);
        assert!(content.contains("   valid users = ps2user\n"));
        assert!(!content.contains("guest ok = yes"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_remove_between_sections_keeps_neighbours() {
        let dir = scratch_dir();
        let conf = dir.join("smb.conf");
        std::fs::write(
            &conf,
            "[A]\n   x = 1\n[PS2]\n   path = /old\n[B]\n   y = 2\n",
        )
        .unwrap();
        let editor = ConfigEditor::new(&conf);

        editor.remove_managed_section("PS2").unwrap();

        assert_eq!(
            std::fs::read_to_string(&conf).unwrap(),
            "[A]\n   x = 1\n[B]\n   y = 2\n"
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_remove_absent_section_is_byte_identical() {
        let dir = scratch_dir();
        let conf = dir.join("smb.conf");
        let original = "[global]\r\n   workgroup = WORKGROUP\r\n\n\n[homes]\n";
        std::fs::write(&conf, original).unwrap();
        let editor = ConfigEditor::new(&conf);

        editor.remove_managed_section("PS2").unwrap();

        assert_eq!(std::fs::read_to_string(&conf).unwrap(), original);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_remove_on_missing_file_does_not_create_it() {
        let dir = scratch_dir();
        let conf = dir.join("smb.conf");

        ConfigEditor::new(&conf).remove_managed_section("PS2").unwrap();

        assert!(!conf.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_backup_copies_bytes_to_timestamped_path() {
        let dir = scratch_dir();
        let conf = dir.join("smb.conf");
        std::fs::write(&conf, GLOBAL).unwrap();
        let editor = ConfigEditor::new(&conf);

        let backup = editor.backup_at(1_700_000_000).unwrap();

        let expected = dir.join("smb.conf.backup.1700000000");
        assert_eq!(backup, Some(expected.clone()));
        assert_eq!(std::fs::read_to_string(expected).unwrap(), GLOBAL);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_backup_of_missing_file_creates_nothing() {
        let dir = scratch_dir();
        let editor = ConfigEditor::new(dir.join("smb.conf"));

        let backup = editor.backup().unwrap();

        assert_eq!(backup, None);
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_in_place_of_games_dir_is_directory_error() {
        // Arrange: a regular file occupies the games path.
        let dir = scratch_dir();
        let conf = dir.join("smb.conf");
        std::fs::write(&conf, GLOBAL).unwrap();
        let games = dir.join("games");
        std::fs::write(&games, "not a directory").unwrap();
        let editor = ConfigEditor::new(&conf);

        // Act
        let err = editor.add_managed_section(&guest(&games)).unwrap_err();

        // Assert: no stanza appended.
        assert!(matches!(err, SmbConfError::DirectoryCreation { .. }));
        assert_eq!(std::fs::read_to_string(&conf).unwrap(), GLOBAL);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_add_and_remove_keep_non_utf8_bytes() {
        // Arrange: a Latin-1 comment ("café") in the global section.
        let dir = scratch_dir();
        let conf = dir.join("smb.conf");
        let original: &[u8] = b"[global]\n# caf\xe9\n   workgroup = WORKGROUP\n";
        std::fs::write(&conf, original).unwrap();
        let editor = ConfigEditor::new(&conf);
        let record = guest(&dir.join("games"));

        // Act
        editor.add_managed_section(&record).unwrap();
        let added = std::fs::read(&conf).unwrap();
        editor.add_managed_section(&record).unwrap();
        let readded = std::fs::read(&conf).unwrap();
        editor.remove_managed_section("PS2").unwrap();
        let removed = std::fs::read(&conf).unwrap();

        // Assert
        let stanza = render_stanza(&record);
        assert_eq!(added, [original, stanza.as_bytes()].concat());
        assert!(readded.starts_with(original));
        assert_eq!(count_sections(&readded, "PS2"), 1);
        assert!(removed.starts_with(original));
        assert_eq!(count_sections(&removed, "PS2"), 0);
        assert!(removed[original.len()..].iter().all(|&b| b == b'\n'));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_backup_into_read_only_directory_is_permission_error() {
        // Root ignores directory permissions.
        if is_root() {
            return;
        }

        // Arrange
        let dir = scratch_dir();
        let conf = dir.join("smb.conf");
        std::fs::write(&conf, GLOBAL).unwrap();
        std::fs::set_permissions(&dir, std::fs::Permissions::from_mode(0o555)).unwrap();
        let editor = ConfigEditor::new(&conf);

        // Act
        let result = editor.backup_at(1_700_000_000);

        // Assert
        std::fs::set_permissions(&dir, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert!(
            matches!(result, Err(SmbConfError::Permission { .. })),
            "{result:?}"
        );
        assert!(!editor.backup_path(1_700_000_000).exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
