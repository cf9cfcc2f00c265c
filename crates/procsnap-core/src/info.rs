//! Facade combining the three readers into snapshots and display values.

use crate::collector::{CollectError, InfoSource};
use crate::fmt::{format_cache, format_kb, format_mhz};
use crate::model::{ProcessEntry, Snapshot};

/// Query surface over an [`InfoSource`].
///
/// Every method performs a fresh read through the source. Accessors return
/// display strings with fixed unit suffixes.
pub struct SystemInfo<S: InfoSource> {
    source: S,
}

impl<S: InfoSource> SystemInfo<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Reads CPU, memory and running processes into one snapshot.
    ///
    /// Fails with the first reader error; no partial snapshot is produced.
    pub fn query(&self) -> Result<Snapshot, CollectError> {
        let cpu = self.source.cpu_info()?;
        let memory = self.source.memory_info()?;
        let processes = self.source.running_processes()?;
        Ok(Snapshot {
            cpu,
            memory,
            processes,
        })
    }

    pub fn core_count(&self) -> Result<String, CollectError> {
        Ok(self.source.cpu_info()?.core_count.to_string())
    }

    pub fn vendor(&self) -> Result<String, CollectError> {
        Ok(self.source.cpu_info()?.vendor)
    }

    pub fn model_name(&self) -> Result<String, CollectError> {
        Ok(self.source.cpu_info()?.model_name)
    }

    /// Cache size, e.g. `"512 KB"`.
    pub fn cache_size(&self) -> Result<String, CollectError> {
        Ok(format_cache(self.source.cpu_info()?.cache_size_kb))
    }

    /// Mean clock speed, e.g. `"1000 MHZ"`.
    pub fn clock_speed(&self) -> Result<String, CollectError> {
        Ok(format_mhz(self.source.cpu_info()?.clock_mhz))
    }

    pub fn total_memory(&self) -> Result<String, CollectError> {
        Ok(format_kb(self.source.memory_info()?.total_kb))
    }

    pub fn available_memory(&self) -> Result<String, CollectError> {
        Ok(format_kb(self.source.memory_info()?.available_kb))
    }

    /// Total minus available, e.g. `"512 KB"`. May be negative.
    pub fn used_memory(&self) -> Result<String, CollectError> {
        Ok(format_kb(self.source.memory_info()?.used_kb))
    }

    pub fn running_processes(&self) -> Result<Vec<ProcessEntry>, CollectError> {
        self.source.running_processes()
    }
}
