//! Information sources consumed by [`SystemInfo`](crate::SystemInfo).
//!
//! `InfoSource` lets the facade run against `/proc` through [`ProcfsSource`]
//! or against any hand-built fixture.

use crate::collector::procfs::{CollectError, ProcessCollector, SystemCollector};
use crate::collector::traits::FileSystem;
use crate::config::ProbeConfig;
use crate::model::{CpuSummary, MemorySummary, ProcessEntry};

/// Capability to produce the three host readings.
///
/// Each call performs a complete fresh read; implementations keep no cache.
pub trait InfoSource {
    fn cpu_info(&self) -> Result<CpuSummary, CollectError>;

    fn memory_info(&self) -> Result<MemorySummary, CollectError>;

    fn running_processes(&self) -> Result<Vec<ProcessEntry>, CollectError>;
}

impl<S: InfoSource + ?Sized> InfoSource for Box<S> {
    fn cpu_info(&self) -> Result<CpuSummary, CollectError> {
        (**self).cpu_info()
    }

    fn memory_info(&self) -> Result<MemorySummary, CollectError> {
        (**self).memory_info()
    }

    fn running_processes(&self) -> Result<Vec<ProcessEntry>, CollectError> {
        (**self).running_processes()
    }
}

/// Reads CPU, memory and process data from a process filesystem.
///
/// # Example
///
/// ```
/// use procsnap_core::collector::{InfoSource, MockFs, ProcfsSource};
/// use procsnap_core::ProbeConfig;
///
/// let source = ProcfsSource::new(MockFs::typical_system(), ProbeConfig::default());
/// let cpu = source.cpu_info().unwrap();
/// assert_eq!(cpu.vendor, "GenuineIntel");
/// ```
pub struct ProcfsSource<F: FileSystem> {
    fs: F,
    config: ProbeConfig,
}

impl<F: FileSystem> ProcfsSource<F> {
    pub fn new(fs: F, config: ProbeConfig) -> Self {
        Self { fs, config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    fn system(&self) -> SystemCollector<&F> {
        SystemCollector::new(&self.fs, &self.config.proc_path, self.config.options)
    }

    fn processes(&self) -> ProcessCollector<&F> {
        ProcessCollector::new(&self.fs, &self.config.proc_path)
    }
}

impl<F: FileSystem> InfoSource for ProcfsSource<F> {
    fn cpu_info(&self) -> Result<CpuSummary, CollectError> {
        self.system().collect_cpuinfo()
    }

    fn memory_info(&self) -> Result<MemorySummary, CollectError> {
        self.system().collect_meminfo()
    }

    fn running_processes(&self) -> Result<Vec<ProcessEntry>, CollectError> {
        self.processes().collect_running_processes()
    }
}
