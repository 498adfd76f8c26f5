//! Size-rotated append-only writer for the trace file.
//!
//! Before each write the file size is checked; past the limit the file is
//! renamed to `<name>.<timestamp>` and a fresh one is started. Only the newest
//! backups are kept.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotate once the file grows past this size (5 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Backups kept after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// The file is opened lazily on the first write, so construction never fails.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer with the default limits.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes, rotating first if needed.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening, or writing, and an error
    /// if the internal lock is poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if self.needs_rotation() {
            *writer = None;
            self.rotate()?;
        }

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.6f").to_string();
        fs::rename(&self.file_path, self.backup_path(&stamp))?;
        self.prune_backups()
    }

    /// First unused backup name for `stamp`. Rotations within the same
    /// microsecond get a `-N` suffix, which still sorts after the bare stamp.
    fn backup_path(&self, stamp: &str) -> PathBuf {
        let candidate = |suffix: &str| {
            let mut name = self.file_path.clone().into_os_string();
            name.push(format!(".{stamp}{suffix}"));
            PathBuf::from(name)
        };

        let mut path = candidate("");
        let mut n = 1;
        while path.exists() {
            path = candidate(&format!("-{n}"));
            n += 1;
        }
        path
    }

    /// Deletes all but the newest `max_backups` backups. Timestamps sort
    /// lexically, so the names order the files.
    fn prune_backups(&self) -> io::Result<()> {
        let mut backups = self.backups()?;
        backups.sort();

        let excess = backups.len().saturating_sub(self.max_backups);
        for old in backups.iter().take(excess) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }

    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let parent = self.file_path.parent().unwrap_or_else(|| Path::new("."));
        let Some(prefix) = self
            .file_path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| format!("{name}."))
        else {
            return Ok(Vec::new());
        };

        Ok(fs::read_dir(parent)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("one").unwrap();
        writer.write_line("two").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn oversized_file_rotates_and_keeps_few_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let writer = FileWriter::with_limits(path.clone(), 8, 2);

        for i in 0..6 {
            writer.write_line(&format!("line number {i}")).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "line number 5\n");
        let backups = writer.backups().unwrap();
        assert!(!backups.is_empty());
        assert!(backups.len() <= 2);
    }

    #[test]
    fn same_stamp_never_overwrites_a_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let writer = FileWriter::new(path.clone());
        let stamp = "20260101T000000.000001";

        let first = writer.backup_path(stamp);
        fs::write(&first, "older").unwrap();
        let second = writer.backup_path(stamp);
        fs::write(&second, "newer").unwrap();
        let third = writer.backup_path(stamp);

        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_eq!(fs::read_to_string(&first).unwrap(), "older");

        let mut names = vec![third.clone(), second.clone(), first.clone()];
        names.sort();
        assert_eq!(names, vec![first, second, third]);
    }
}
