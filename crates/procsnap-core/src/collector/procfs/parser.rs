//! Parsers for `/proc` text files.
//!
//! These are pure functions over file contents so they can be tested with
//! string inputs.

use std::collections::HashMap;
use std::str::FromStr;

use tracing::warn;

use crate::config::{CacheAggregation, NumericPolicy, ParseOptions};
use crate::model::{CpuSummary, MemorySummary};

/// A recognized field whose value could not be converted to a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub field: String,
    pub value: String,
}

impl ParseError {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: '{}'", self.field, self.value)
    }
}

impl std::error::Error for ParseError {}

const CPU_CORES: &str = "cpu cores";
const VENDOR_ID: &str = "vendor_id";
const MODEL_NAME: &str = "model name";
const CACHE_SIZE: &str = "cache size";
const CPU_MHZ: &str = "cpu MHz";
const PROCESSOR: &str = "processor";

/// Returns the text after the first `": "` of a cpuinfo line.
fn cpuinfo_value(line: &str) -> &str {
    line.split_once(": ").map(|(_, v)| v.trim()).unwrap_or("")
}

/// Drops a trailing unit such as `KB` or `kB` and surrounding whitespace.
fn strip_unit(value: &str) -> &str {
    value
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_alphabetic())
        .trim_end()
}

fn parse_number<T: FromStr + Default>(
    field: &str,
    raw: &str,
    policy: NumericPolicy,
) -> Result<T, ParseError> {
    match raw.parse::<T>() {
        Ok(v) => Ok(v),
        Err(_) => match policy {
            NumericPolicy::Strict => Err(ParseError::new(field, raw)),
            NumericPolicy::Lenient => {
                warn!(field, value = raw, "unparsable numeric field, using zero");
                Ok(T::default())
            }
        },
    }
}

/// Parses `/proc/cpuinfo` content into one aggregated summary.
///
/// The file holds one blank-line separated block per logical processor.
/// Vendor, model, core count and cache size are taken from the first block
/// reporting them. The clock is the sum of every `cpu MHz` reading divided
/// by the logical processor count, so blocks without a reading count as 0.
///
/// Fields missing from the text are left at zero or empty. A present field
/// with a non-numeric value is an error only under [`NumericPolicy::Strict`].
pub fn parse_cpuinfo(content: &str, options: &ParseOptions) -> Result<CpuSummary, ParseError> {
    let policy = options.numeric_policy;

    let mut summary = CpuSummary::default();
    let mut reported_cores: Option<u32> = None;
    let mut cache_kb: Option<u64> = None;
    let mut mhz_sum = 0.0_f64;
    let mut processors = 0u32;
    let mut blocks = 0u32;
    let mut in_block = false;

    for line in content.lines() {
        if line.trim().is_empty() {
            in_block = false;
            continue;
        }
        if !in_block {
            in_block = true;
            blocks += 1;
        }

        if line.starts_with(CPU_CORES) {
            if reported_cores.is_none() {
                reported_cores = Some(parse_number(CPU_CORES, cpuinfo_value(line), policy)?);
            }
        } else if line.starts_with(VENDOR_ID) {
            if summary.vendor.is_empty() {
                summary.vendor = cpuinfo_value(line).to_string();
            }
        } else if line.starts_with(MODEL_NAME) {
            if summary.model_name.is_empty() {
                summary.model_name = cpuinfo_value(line).to_string();
            }
        } else if line.starts_with(CACHE_SIZE) {
            if cache_kb.is_none() {
                let raw = strip_unit(cpuinfo_value(line));
                cache_kb = Some(parse_number(CACHE_SIZE, raw, policy)?);
            }
        } else if line.starts_with(CPU_MHZ) {
            mhz_sum += parse_number::<f64>(CPU_MHZ, cpuinfo_value(line), policy)?;
        } else if line.split(':').next().map(str::trim) == Some(PROCESSOR) {
            processors += 1;
        }
    }

    // Boards without `processor` keys still emit one block per CPU.
    summary.logical_processors = if processors > 0 { processors } else { blocks };
    summary.core_count = reported_cores.unwrap_or(summary.logical_processors);

    let cache_kb = cache_kb.unwrap_or(0);
    summary.cache_size_kb = match options.cache_aggregation {
        CacheAggregation::PerCore => cache_kb.saturating_mul(u64::from(summary.core_count)),
        CacheAggregation::TotalReported => cache_kb,
    };

    if summary.logical_processors > 0 {
        summary.clock_mhz = mhz_sum / f64::from(summary.logical_processors);
    }

    Ok(summary)
}

const MEM_TOTAL: &str = "MemTotal";
const MEM_AVAILABLE: &str = "MemAvailable";

/// Parses `/proc/meminfo` content.
///
/// Values that fail to parse become zero; `used_kb` is always derived.
pub fn parse_meminfo(content: &str) -> MemorySummary {
    let parse_kb = |field: &str, line: &str| -> i64 {
        let raw = line.split_once(':').map(|(_, v)| v).unwrap_or("");
        let raw = strip_unit(raw);
        // Memory fields never fail the query, whatever the numeric policy.
        parse_number(field, raw, NumericPolicy::Lenient).unwrap_or(0)
    };

    let mut total_kb = 0;
    let mut available_kb = 0;

    for line in content.lines() {
        if line.starts_with(MEM_TOTAL) {
            total_kb = parse_kb(MEM_TOTAL, line);
        } else if line.starts_with(MEM_AVAILABLE) {
            available_kb = parse_kb(MEM_AVAILABLE, line);
        }
    }

    MemorySummary::new(total_kb, available_kb)
}

/// Parsed data from `/proc/[pid]/status`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcStatus {
    pub name: String,
    /// Single-letter state code (`R`, `S`, `D`, `Z`, ...).
    pub state: Option<char>,
}

impl ProcStatus {
    pub fn is_running(&self) -> bool {
        self.state == Some('R')
    }
}

/// Parses `/proc/[pid]/status` content.
///
/// Format is `key:\tvalue` pairs, one per line. The first occurrence of a
/// key wins.
pub fn parse_proc_status(content: &str) -> ProcStatus {
    let mut fields: HashMap<&str, &str> = HashMap::new();

    for line in content.lines() {
        if let Some((key, value)) = line.split_once(':') {
            fields.entry(key.trim()).or_insert(value.trim());
        }
    }

    ProcStatus {
        name: fields.get("Name").unwrap_or(&"").to_string(),
        state: fields.get("State").and_then(|s| s.chars().next()),
    }
}
