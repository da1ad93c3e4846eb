//! Rotating log file writer with size-based rotation and backup retention.
//!
//! [`FileWriter`] owns the log file and rotates it once it grows past
//! `MAX_FILE_SIZE_BYTES`, keeping at most `MAX_BACKUP_FILES` old copies.
//! [`LogHandle`] is the cheap per-event `io::Write` that the `fmt` layer asks for.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size > 10MB, rotate:
///    - Rename current file to `<name>.log.<timestamp>`
///    - Open a new empty file on the next write
///    - Remove oldest backups beyond 3
pub struct FileWriter {
    file_path: PathBuf,
    /// Opened lazily on first write.
    file: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer for `file_path`. Nothing is opened until the first write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            file: Mutex::new(None),
        }
    }

    /// Appends `buf` to the log file, rotating first if needed.
    ///
    /// # Errors
    ///
    /// Fails on permission or disk errors, or if the lock is poisoned.
    pub fn append(&self, buf: &[u8]) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut guard)?;

        if guard.is_none() {
            *guard = Some(OpenOptions::new().create(true).append(true).open(&self.file_path)?);
        }

        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(buf)?;
        file.flush()
    }

    fn check_and_rotate(&self, file: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *file = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let backup_path = self.file_path.with_extension(format!("log.{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// Deletes backups beyond the retention limit, oldest first.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;

        let prefix = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|name| format!("{name}."))
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Timestamp suffixes sort lexically within the same digit count.
        backups.sort_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

/// Per-event writer handed to the `fmt` layer.
#[derive(Debug, Clone)]
pub struct LogHandle(pub Arc<FileWriter>);

impl Write for LogHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
