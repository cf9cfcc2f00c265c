//! System collector for CPU and memory descriptors under `/proc/`.

use crate::collector::procfs::parser::{parse_cpuinfo, parse_meminfo};
use crate::collector::procfs::process::CollectError;
use crate::collector::traits::FileSystem;
use crate::config::ParseOptions;
use crate::model::{CpuSummary, MemorySummary};
use std::path::Path;

/// Collects system-wide metrics from `/proc/`.
pub struct SystemCollector<F: FileSystem> {
    fs: F,
    proc_path: String,
    options: ParseOptions,
}

impl<F: FileSystem> SystemCollector<F> {
    /// Creates a new system collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    /// * `options` - Cache aggregation and numeric policy for cpuinfo
    pub fn new(fs: F, proc_path: impl Into<String>, options: ParseOptions) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
            options,
        }
    }

    fn read(&self, name: &str) -> Result<(String, String), CollectError> {
        let path = format!("{}/{}", self.proc_path, name);
        let content = self
            .fs
            .read_to_string(Path::new(&path))
            .map_err(|e| CollectError::unavailable(&path, e))?;
        Ok((path, content))
    }

    /// Collects the CPU summary from `/proc/cpuinfo`.
    pub fn collect_cpuinfo(&self) -> Result<CpuSummary, CollectError> {
        let (path, content) = self.read("cpuinfo")?;
        parse_cpuinfo(&content, &self.options)
            .map_err(|source| CollectError::MalformedField { path, source })
    }

    /// Collects memory totals from `/proc/meminfo`.
    pub fn collect_meminfo(&self) -> Result<MemorySummary, CollectError> {
        let (_, content) = self.read("meminfo")?;
        Ok(parse_meminfo(&content))
    }
}
