//! In-memory filesystem for exercising collectors without a real `/proc`.

use crate::collector::traits::FileSystem;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory filesystem for testing.
///
/// Directory listings come back in path order, which keeps fixture-based
/// tests deterministic.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    /// Map from path to file contents.
    files: BTreeMap<PathBuf, String>,
    /// Set of directories (for read_dir support).
    directories: BTreeSet<PathBuf>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given content.
    ///
    /// Parent directories are automatically created.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.files.insert(path, content.into());
    }

    /// Adds an empty directory.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.directories.insert(path);
    }

    /// Adds `/proc/<pid>/status` with the given content.
    pub fn add_process(&mut self, pid: u32, status: &str) {
        let base = PathBuf::from(format!("/proc/{}", pid));
        self.add_dir(&base);
        self.add_file(base.join("status"), status);
    }

    /// Adds a running or sleeping process with a minimal status file.
    pub fn add_process_with_state(&mut self, pid: u32, name: &str, state: char) {
        let state_label = match state {
            'R' => "running",
            'S' => "sleeping",
            'D' => "disk sleep",
            'Z' => "zombie",
            'T' => "stopped",
            'I' => "idle",
            _ => "unknown",
        };
        let status = format!(
            "Name:\t{name}\nUmask:\t0022\nState:\t{state} ({state_label})\nTgid:\t{pid}\nPid:\t{pid}\nPPid:\t1\n"
        );
        self.add_process(pid, &status);
    }

    fn add_parents(&mut self, path: &Path) {
        let mut parent = path.parent();
        while let Some(p) = parent {
            if !p.as_os_str().is_empty() {
                self.directories.insert(p.to_path_buf());
            }
            parent = p.parent();
        }
    }
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {:?}", path),
            )
        })
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        if !self.directories.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory not found: {:?}", path),
            ));
        }

        let mut entries = BTreeSet::new();

        for file_path in self.files.keys() {
            if file_path.parent().is_some_and(|parent| parent == path) {
                entries.insert(file_path.clone());
            }
        }

        for dir_path in &self.directories {
            if dir_path.parent().is_some_and(|parent| parent == path) && dir_path != path {
                entries.insert(dir_path.clone());
            }
        }

        Ok(entries.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fs_add_file() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/meminfo", "MemTotal: 16384 kB\n");

        let content = fs.read_to_string(Path::new("/proc/meminfo")).unwrap();
        assert_eq!(content, "MemTotal: 16384 kB\n");
        assert!(fs.read_dir(Path::new("/proc")).is_ok());
    }

    #[test]
    fn test_mock_fs_read_dir() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/1/status", "Name:\tinit\n");
        fs.add_file("/proc/2/status", "Name:\tkthreadd\n");
        fs.add_file("/proc/meminfo", "MemTotal: 1 kB\n");

        let proc_entries = fs.read_dir(Path::new("/proc")).unwrap();
        assert_eq!(
            proc_entries,
            vec![
                PathBuf::from("/proc/1"),
                PathBuf::from("/proc/2"),
                PathBuf::from("/proc/meminfo"),
            ]
        );

        let proc1_entries = fs.read_dir(Path::new("/proc/1")).unwrap();
        assert_eq!(proc1_entries, vec![PathBuf::from("/proc/1/status")]);
    }

    #[test]
    fn test_mock_fs_add_process_with_state() {
        let mut fs = MockFs::new();
        fs.add_process_with_state(1234, "bash", 'S');

        let status = fs.read_to_string(Path::new("/proc/1234/status")).unwrap();
        assert!(status.starts_with("Name:\tbash\n"));
        assert!(status.contains("State:\tS (sleeping)\n"));
    }

    #[test]
    fn test_mock_fs_not_found() {
        let fs = MockFs::new();
        let result = fs.read_to_string(Path::new("/nonexistent"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);

        let result = fs.read_dir(Path::new("/proc"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
