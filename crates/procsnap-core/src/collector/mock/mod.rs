//! Mock filesystem and `/proc` fixtures for tests.

mod filesystem;
mod scenarios;

pub use filesystem::MockFs;
pub use scenarios::{ARM_CPUINFO, TYPICAL_MEMINFO, X86_CPUINFO};
