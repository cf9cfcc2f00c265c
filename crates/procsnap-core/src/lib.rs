//! procsnap-core - point-in-time host probe over `/proc`.
//!
//! Provides:
//! - `collector` - filesystem abstraction, `/proc` parsers, collectors and
//!   the `InfoSource` capability
//! - `info` - the `SystemInfo` facade and its accessors
//! - `model` - snapshot data types
//! - `config` - proc root and parsing policies
//! - `fmt` - display formatting for accessor values

pub mod collector;
pub mod config;
pub mod fmt;
pub mod info;
pub mod model;

pub use config::{CacheAggregation, NumericPolicy, ParseOptions, ProbeConfig};
pub use info::SystemInfo;
pub use model::{CpuSummary, MemorySummary, ProcessEntry, Snapshot};
