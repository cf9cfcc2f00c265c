//! Process collector for finding running processes under `/proc/[pid]/`.

use crate::collector::procfs::parser::{ParseError, ProcStatus, parse_proc_status};
use crate::collector::traits::FileSystem;
use crate::model::ProcessEntry;
use std::path::Path;
use tracing::debug;

/// Error type for collection failures.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    /// A descriptor file or the proc root could not be read at all.
    #[error("failed to read {path}: {source}")]
    SourceUnavailable {
        path: String,
        source: std::io::Error,
    },
    /// A recognized field carried a value that is not a number.
    #[error("malformed field in {path}: {source}")]
    MalformedField { path: String, source: ParseError },
    /// Process disappeared during collection.
    #[error("process {0} disappeared")]
    ProcessGone(u32),
}

impl CollectError {
    pub(crate) fn unavailable(path: &str, source: std::io::Error) -> Self {
        CollectError::SourceUnavailable {
            path: path.to_string(),
            source,
        }
    }
}

/// Returns the pid for a `/proc` entry name made only of ASCII digits.
///
/// Rejects names like `self`, `3.5`, `-1` or `+5`.
fn parse_pid(name: &str) -> Option<u32> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}

/// Collects process information from `/proc/[pid]/status` files.
pub struct ProcessCollector<F: FileSystem> {
    fs: F,
    proc_path: String,
}

impl<F: FileSystem> ProcessCollector<F> {
    /// Creates a new process collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<String>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
        }
    }

    /// Reads the status of a single process.
    pub fn collect_process(&self, pid: u32) -> Result<ProcStatus, CollectError> {
        let status_path = format!("{}/{}/status", self.proc_path, pid);
        let content = self
            .fs
            .read_to_string(Path::new(&status_path))
            .map_err(|_| CollectError::ProcessGone(pid))?;
        Ok(parse_proc_status(&content))
    }

    /// Collects every process currently in the running (`R`) state.
    ///
    /// Entries are returned in directory-listing order. Non-numeric entries
    /// and processes that disappear before their status is read are
    /// silently skipped; only an unlistable proc root is an error.
    pub fn collect_running_processes(&self) -> Result<Vec<ProcessEntry>, CollectError> {
        let entries = self
            .fs
            .read_dir(Path::new(&self.proc_path))
            .map_err(|e| CollectError::unavailable(&self.proc_path, e))?;

        let mut running = Vec::new();

        for entry in entries {
            let Some(pid) = entry.file_name().and_then(|n| n.to_str()).and_then(parse_pid) else {
                continue;
            };

            match self.collect_process(pid) {
                Ok(status) if status.is_running() => {
                    running.push(ProcessEntry::new(pid, status.name));
                }
                Ok(_) => {}
                Err(e) => debug!(pid, error = %e, "skipping process"),
            }
        }

        Ok(running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    #[test]
    fn test_parse_pid() {
        assert_eq!(parse_pid("1"), Some(1));
        assert_eq!(parse_pid("4194304"), Some(4194304));
        assert_eq!(parse_pid("abc"), None);
        assert_eq!(parse_pid("3.5"), None);
        assert_eq!(parse_pid("-1"), None);
        assert_eq!(parse_pid("+5"), None);
        assert_eq!(parse_pid(""), None);
        assert_eq!(parse_pid("99999999999"), None);
    }

    #[test]
    fn test_collect_single_process() {
        let fs = MockFs::typical_system();
        let collector = ProcessCollector::new(fs, "/proc");

        let status = collector.collect_process(1000).unwrap();
        assert_eq!(status.name, "bash");
        assert_eq!(status.state, Some('S'));
    }

    #[test]
    fn test_collect_process_gone() {
        let mut fs = MockFs::new();
        fs.add_dir("/proc/9999"); // Directory exists but no files

        let collector = ProcessCollector::new(fs, "/proc");
        let result = collector.collect_process(9999);

        assert!(matches!(result, Err(CollectError::ProcessGone(9999))));
    }

    #[test]
    fn test_collect_running_processes() {
        let fs = MockFs::typical_system();
        let collector = ProcessCollector::new(fs, "/proc");

        let running = collector.collect_running_processes().unwrap();

        assert_eq!(
            running,
            vec![
                ProcessEntry::new(1001, "stress"),
                ProcessEntry::new(1002, "Web Content"),
            ]
        );
    }

    #[test]
    fn test_only_numeric_entries_are_candidates() {
        let fs = MockFs::racy_process_table();
        let collector = ProcessCollector::new(fs, "/proc");

        let running = collector.collect_running_processes().unwrap();

        // "abc", "3.5" and "-1" claim to be running but are not pids;
        // pid 2 vanished before its status was read.
        assert_eq!(running, vec![ProcessEntry::new(1, "init")]);
    }

    #[test]
    fn test_non_running_states_excluded() {
        let mut fs = MockFs::new();
        for (pid, state) in [(10, 'S'), (11, 'D'), (12, 'Z'), (13, 'T'), (14, 'I'), (15, 'R')] {
            fs.add_process_with_state(pid, &format!("p{pid}"), state);
        }

        let collector = ProcessCollector::new(fs, "/proc");
        let running = collector.collect_running_processes().unwrap();

        assert_eq!(running, vec![ProcessEntry::new(15, "p15")]);
    }

    #[test]
    fn test_unlistable_root() {
        let collector = ProcessCollector::new(MockFs::new(), "/proc");
        let err = collector.collect_running_processes().unwrap_err();

        match err {
            CollectError::SourceUnavailable { path, .. } => assert_eq!(path, "/proc"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_custom_proc_path() {
        let mut fs = MockFs::new();
        fs.add_file("/host/proc/7/status", "Name:\tcontainerd\nState:\tR (running)\n");

        let collector = ProcessCollector::new(fs, "/host/proc");
        let running = collector.collect_running_processes().unwrap();

        assert_eq!(running, vec![ProcessEntry::new(7, "containerd")]);
    }
}
