//! Host information collection from the Linux `/proc` filesystem.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       ProcfsSource                       │
//! │  ┌─────────────────────┐   ┌──────────────────────────┐  │
//! │  │  ProcessCollector   │   │     SystemCollector      │  │
//! │  │  - /proc/[pid]/     │   │  - /proc/cpuinfo         │  │
//! │  │    status           │   │  - /proc/meminfo         │  │
//! │  └──────────┬──────────┘   └────────────┬─────────────┘  │
//! │             └──────────────┬────────────┘                │
//! │                     ┌──────▼──────┐                      │
//! │                     │  FileSystem │ (trait)              │
//! │                     └──────┬──────┘                      │
//! └────────────────────────────┼─────────────────────────────┘
//!                              │
//!              ┌───────────────┼───────────────┐
//!       ┌──────▼──────┐ ┌──────▼──────┐ ┌──────▼──────┐
//!       │   RealFs    │ │   MockFs    │ │  Scenarios  │
//!       │ (Linux)     │ │ (Testing)   │ │ (Fixtures)  │
//!       └─────────────┘ └─────────────┘ └─────────────┘
//! ```
//!
//! `ProcfsSource` implements [`InfoSource`], the capability the
//! [`SystemInfo`](crate::SystemInfo) facade is generic over.
//!
//! # Usage
//!
//! ```
//! use procsnap_core::collector::{MockFs, ProcfsSource};
//! use procsnap_core::{ProbeConfig, SystemInfo};
//!
//! let info = SystemInfo::new(ProcfsSource::new(MockFs::typical_system(), ProbeConfig::default()));
//! let snapshot = info.query().unwrap();
//! assert_eq!(snapshot.processes.len(), 2);
//! ```

pub mod mock;
pub mod procfs;
mod source;
pub mod traits;

pub use mock::MockFs;
pub use procfs::{CollectError, ParseError};
pub use source::{InfoSource, ProcfsSource};
pub use traits::{FileSystem, RealFs};
