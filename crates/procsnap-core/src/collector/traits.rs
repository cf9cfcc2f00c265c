//! Filesystem access behind a trait so collectors can run against a real
//! `/proc` or an in-memory fixture.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Read-only filesystem operations needed by the collectors.
pub trait FileSystem {
    /// Reads the entire contents of a file as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Lists entries in a directory, in the order the filesystem returns them.
    ///
    /// # Returns
    /// Full paths of the direct children of `path`, or an I/O error if the
    /// directory itself cannot be listed. Entries that fail individually
    /// are left out.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        (**self).read_dir(path)
    }
}

/// Filesystem implementation that delegates to `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path)?;
        Ok(readable_entries(entries.map(|entry| entry.map(|e| e.path()))))
    }
}

/// Keeps the entries that listed cleanly. Under `/proc` an entry can vanish
/// between the directory read and its stat.
fn readable_entries(entries: impl IntoIterator<Item = io::Result<PathBuf>>) -> Vec<PathBuf> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                debug!(error = %e, "skipping unreadable directory entry");
                None
            }
        })
        .collect()
}
