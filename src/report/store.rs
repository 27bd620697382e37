use crate::error::StoreError;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only text log of completed tasks, one task per line.
///
/// The file is created lazily by the first append and removed entirely by
/// [`StatusStore::clear`]. There is no locking; concurrent writers from other
/// processes can interleave.
#[derive(Debug, Clone)]
pub struct StatusStore {
    path: PathBuf,
}

impl StatusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Append `task_body` plus a single `\n`, creating the file if absent.
    pub fn append(&self, task_body: &str) -> Result<(), StoreError> {
        let append_err = |source| StoreError::Append {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(append_err)?;

        let mut line = String::with_capacity(task_body.len() + 1);
        line.push_str(task_body);
        line.push('\n');
        file.write_all(line.as_bytes()).map_err(append_err)?;

        tracing::debug!(path = %self.path.display(), bytes = line.len(), "task appended");
        Ok(())
    }

    /// Everything recorded since the last clear.
    ///
    /// Never fails: a missing or unreadable file reads as `""` and the cause
    /// is only logged. Bytes that are not valid UTF-8 are replaced, never
    /// dropped.
    pub fn read_all(&self) -> String {
        match fs::read(&self.path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(contents) => contents,
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %e.utf8_error(),
                        "status store is not valid UTF-8, replacing invalid bytes"
                    );
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "status store does not exist yet");
                String::new()
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "status store unreadable, treating as empty"
                );
                String::new()
            }
        }
    }

    /// Remove the file. Fails if it is already gone.
    pub fn clear(&self) -> Result<(), StoreError> {
        fs::remove_file(&self.path).map_err(|source| StoreError::Clear {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "status store cleared");
        Ok(())
    }
}
