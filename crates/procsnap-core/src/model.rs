//! Data model produced by one probe query.
//!
//! Every value here is built once per query and never mutated afterwards.

use serde::Serialize;

/// Aggregated description of the host CPU.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CpuSummary {
    /// Physical cores, from `cpu cores` or, when absent, the number of processor blocks.
    pub core_count: u32,
    /// Number of per-processor blocks in cpuinfo.
    pub logical_processors: u32,
    pub vendor: String,
    pub model_name: String,
    /// Cache size in KB, aggregated according to `CacheAggregation`.
    pub cache_size_kb: u64,
    /// Mean clock across all logical processors.
    pub clock_mhz: f64,
}

/// Memory totals in KB.
///
/// Values are signed: `used_kb` is `total_kb - available_kb` even when that
/// goes negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MemorySummary {
    pub total_kb: i64,
    pub available_kb: i64,
    pub used_kb: i64,
}

impl MemorySummary {
    /// Builds a summary, deriving `used_kb`.
    pub fn new(total_kb: i64, available_kb: i64) -> Self {
        Self {
            total_kb,
            available_kb,
            used_kb: total_kb - available_kb,
        }
    }
}

/// A process seen in the running state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessEntry {
    pub pid: u32,
    pub name: String,
}

impl ProcessEntry {
    pub fn new(pid: u32, name: impl Into<String>) -> Self {
        Self {
            pid,
            name: name.into(),
        }
    }
}

/// Point-in-time view of CPU, memory and running processes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub cpu: CpuSummary,
    pub memory: MemorySummary,
    /// Running processes in directory-listing order.
    pub processes: Vec<ProcessEntry>,
}
