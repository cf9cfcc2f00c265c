//! Reader configuration.

/// Default mount point of the process filesystem.
pub const DEFAULT_PROC_PATH: &str = "/proc";

/// How the `cache size` value reported in cpuinfo relates to the whole CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheAggregation {
    /// The reported value is per core; the summary multiplies it by the core count.
    PerCore,
    /// The reported value already covers the whole CPU and is used as-is.
    #[default]
    TotalReported,
}

/// What to do with a recognized numeric field that does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericPolicy {
    /// Substitute zero and log a warning.
    #[default]
    Lenient,
    /// Fail the CPU query with `MalformedField`. Memory fields still degrade to zero.
    Strict,
}

/// Options applied by the text parsers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub cache_aggregation: CacheAggregation,
    pub numeric_policy: NumericPolicy,
}

impl ParseOptions {
    pub fn new(cache_aggregation: CacheAggregation, numeric_policy: NumericPolicy) -> Self {
        Self {
            cache_aggregation,
            numeric_policy,
        }
    }
}

/// Configuration for a probe reading a process filesystem.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Base path of the process filesystem. Default: `/proc`.
    pub proc_path: String,
    pub options: ParseOptions,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            proc_path: DEFAULT_PROC_PATH.to_string(),
            options: ParseOptions::default(),
        }
    }
}

impl ProbeConfig {
    /// Creates a config for a custom proc root with default parse options.
    pub fn new(proc_path: impl Into<String>) -> Self {
        Self {
            proc_path: proc_path.into(),
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }
}
