//! procsnap - one-shot host probe.
//!
//! Reads CPU, memory and running-process information from the /proc
//! filesystem and prints it once.

use clap::{Parser, ValueEnum};
use tracing::{Level, debug, error};
use tracing_subscriber::EnvFilter;

use procsnap_core::collector::{CollectError, InfoSource, MockFs, ProcfsSource, RealFs};
use procsnap_core::fmt::{format_cache, format_kb, format_mhz};
use procsnap_core::{
    CacheAggregation, NumericPolicy, ParseOptions, ProbeConfig, Snapshot, SystemInfo,
};

/// Failures that end the probe with a non-zero exit code.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Collect(#[from] CollectError),

    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Which value to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Field {
    All,
    Cores,
    Vendor,
    Model,
    Cache,
    Mhz,
    TotalMem,
    AvailMem,
    UsedMem,
    Processes,
}

/// How to interpret the cpuinfo `cache size` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CacheMode {
    /// Value is per core; multiply by the core count.
    PerCore,
    /// Value already covers the whole CPU.
    Total,
}

impl From<CacheMode> for CacheAggregation {
    fn from(mode: CacheMode) -> Self {
        match mode {
            CacheMode::PerCore => CacheAggregation::PerCore,
            CacheMode::Total => CacheAggregation::TotalReported,
        }
    }
}

/// Point-in-time CPU, memory and running-process probe.
#[derive(Parser)]
#[command(name = "procsnap", about = "Point-in-time host probe over /proc", version)]
struct Args {
    /// Value to print.
    #[arg(value_enum, default_value = "all")]
    field: Field,

    /// Path to /proc filesystem.
    #[arg(long, default_value = procsnap_core::config::DEFAULT_PROC_PATH)]
    proc_path: String,

    /// Read from a built-in fixture instead of the real filesystem.
    #[arg(long)]
    fixture: bool,

    /// Interpretation of the cpuinfo cache size.
    #[arg(long, value_enum, default_value = "total")]
    cache_aggregation: CacheMode,

    /// Fail on malformed CPU fields instead of reporting zero.
    #[arg(long)]
    strict: bool,

    /// Print the whole snapshot as JSON.
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber on stderr so stdout stays parseable.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    for target in ["procsnap", "procsnap_core"] {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build_source(args: &Args) -> Box<dyn InfoSource> {
    let numeric_policy = if args.strict {
        NumericPolicy::Strict
    } else {
        NumericPolicy::Lenient
    };
    let options = ParseOptions::new(args.cache_aggregation.into(), numeric_policy);

    if args.fixture {
        debug!("using built-in fixture");
        let config = ProbeConfig::default().with_options(options);
        Box::new(ProcfsSource::new(MockFs::typical_system(), config))
    } else {
        let config = ProbeConfig::new(&args.proc_path).with_options(options);
        Box::new(ProcfsSource::new(RealFs::new(), config))
    }
}

fn render_json(snapshot: &Snapshot) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

fn run(args: &Args) -> Result<(), CliError> {
    let info = SystemInfo::new(build_source(args));

    if args.json {
        let snapshot = info.query()?;
        println!("{}", render_json(&snapshot)?);
        return Ok(());
    }

    match args.field {
        Field::All => {
            // Query once so every line comes from the same read.
            let snapshot = info.query()?;
            let cpu = &snapshot.cpu;
            let mem = &snapshot.memory;
            println!("cores: {}", cpu.core_count);
            println!("vendor: {}", cpu.vendor);
            println!("model: {}", cpu.model_name);
            println!("cache: {}", format_cache(cpu.cache_size_kb));
            println!("clock: {}", format_mhz(cpu.clock_mhz));
            println!("total memory: {}", format_kb(mem.total_kb));
            println!("available memory: {}", format_kb(mem.available_kb));
            println!("used memory: {}", format_kb(mem.used_kb));
            println!("running processes: {}", snapshot.processes.len());
            for p in &snapshot.processes {
                println!("  {} {}", p.pid, p.name);
            }
        }
        Field::Cores => println!("{}", info.core_count()?),
        Field::Vendor => println!("{}", info.vendor()?),
        Field::Model => println!("{}", info.model_name()?),
        Field::Cache => println!("{}", info.cache_size()?),
        Field::Mhz => println!("{}", info.clock_speed()?),
        Field::TotalMem => println!("{}", info.total_memory()?),
        Field::AvailMem => println!("{}", info.available_memory()?),
        Field::UsedMem => println!("{}", info.used_memory()?),
        Field::Processes => {
            for p in info.running_processes()? {
                println!("{} {}", p.pid, p.name);
            }
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    debug!(
        "Config: proc={}, fixture={}, cache={:?}, strict={}",
        args.proc_path, args.fixture, args.cache_aggregation, args.strict
    );

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
