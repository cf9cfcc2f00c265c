use procsnap_core::collector::{CollectError, InfoSource, MockFs, ProcfsSource, RealFs};
use procsnap_core::{
    CacheAggregation, CpuSummary, MemorySummary, NumericPolicy, ParseOptions, ProbeConfig,
    ProcessEntry, SystemInfo,
};
use tempfile::TempDir;

/// Fixed source returning the same canned readings on every call.
struct FixtureSource;

impl InfoSource for FixtureSource {
    fn cpu_info(&self) -> Result<CpuSummary, CollectError> {
        Ok(CpuSummary {
            core_count: 2,
            logical_processors: 2,
            vendor: "vendor name".to_string(),
            model_name: "model name".to_string(),
            cache_size_kb: 512,
            clock_mhz: 1000.0,
        })
    }

    fn memory_info(&self) -> Result<MemorySummary, CollectError> {
        Ok(MemorySummary::new(1024, 512))
    }

    fn running_processes(&self) -> Result<Vec<ProcessEntry>, CollectError> {
        Ok(vec![ProcessEntry::new(1, "main")])
    }
}

#[test]
fn test_fixture_cpu_accessors() {
    let info = SystemInfo::new(FixtureSource);

    assert_eq!(info.core_count().unwrap(), "2");
    assert_eq!(info.vendor().unwrap(), "vendor name");
    assert_eq!(info.model_name().unwrap(), "model name");
    assert_eq!(info.cache_size().unwrap(), "512 KB");
    assert_eq!(info.clock_speed().unwrap(), "1000 MHZ");
}

#[test]
fn test_fixture_memory_accessors() {
    let info = SystemInfo::new(FixtureSource);

    assert_eq!(info.total_memory().unwrap(), "1024 KB");
    assert_eq!(info.available_memory().unwrap(), "512 KB");
    assert_eq!(info.used_memory().unwrap(), "512 KB");
}

#[test]
fn test_fixture_running_processes() {
    let info = SystemInfo::new(FixtureSource);

    assert_eq!(
        info.running_processes().unwrap(),
        vec![ProcessEntry::new(1, "main")]
    );
}

#[test]
fn test_fixture_filesystem_round_trip() {
    let mut fs = MockFs::new();
    fs.add_file(
        "/proc/cpuinfo",
        "\
processor\t: 0
vendor_id\t: vendor name
model name\t: model name
cpu MHz\t\t: 900.000
cache size\t: 256 KB
cpu cores\t: 2

processor\t: 1
vendor_id\t: vendor name
model name\t: model name
cpu MHz\t\t: 1100.000
cache size\t: 256 KB
cpu cores\t: 2
",
    );
    fs.add_file(
        "/proc/meminfo",
        "MemTotal:           1024 kB\nMemFree:             100 kB\nMemAvailable:        512 kB\n",
    );
    fs.add_process_with_state(1, "main", 'R');
    fs.add_process_with_state(2, "idle", 'S');

    let options = ParseOptions::new(CacheAggregation::PerCore, NumericPolicy::Strict);
    let info = SystemInfo::new(ProcfsSource::new(
        fs,
        ProbeConfig::default().with_options(options),
    ));

    assert_eq!(info.core_count().unwrap(), "2");
    assert_eq!(info.vendor().unwrap(), "vendor name");
    assert_eq!(info.model_name().unwrap(), "model name");
    assert_eq!(info.cache_size().unwrap(), "512 KB");
    assert_eq!(info.clock_speed().unwrap(), "1000 MHZ");
    assert_eq!(info.total_memory().unwrap(), "1024 KB");
    assert_eq!(info.available_memory().unwrap(), "512 KB");
    assert_eq!(info.used_memory().unwrap(), "512 KB");
    assert_eq!(
        info.running_processes().unwrap(),
        vec![ProcessEntry::new(1, "main")]
    );
}

#[test]
fn test_unreadable_descriptor_fails_whole_query() {
    let mut fs = MockFs::new();
    fs.add_file("/proc/meminfo", "MemTotal: 1024 kB\nMemAvailable: 512 kB\n");
    fs.add_process_with_state(1, "main", 'R');

    let info = SystemInfo::new(ProcfsSource::new(fs, ProbeConfig::default()));
    let err = info.query().unwrap_err();

    assert!(matches!(err, CollectError::SourceUnavailable { .. }));
    assert!(err.to_string().starts_with("failed to read /proc/cpuinfo"));
}

#[test]
fn test_racy_table_still_succeeds() {
    let info = SystemInfo::new(ProcfsSource::new(
        MockFs::racy_process_table(),
        ProbeConfig::default(),
    ));

    let snapshot = info.query().unwrap();
    assert_eq!(snapshot.processes, vec![ProcessEntry::new(1, "init")]);
}

#[test]
fn test_real_fs_against_temp_proc_tree() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    std::fs::write(
        root.join("cpuinfo"),
        "processor\t: 0\nvendor_id\t: AuthenticAMD\ncpu MHz\t\t: 3600.000\n",
    )
    .unwrap();
    std::fs::write(
        root.join("meminfo"),
        "MemTotal:        2048 kB\nMemAvailable:    4096 kB\n",
    )
    .unwrap();
    for (pid, state) in [("10", "R (running)"), ("11", "S (sleeping)")] {
        std::fs::create_dir(root.join(pid)).unwrap();
        std::fs::write(
            root.join(pid).join("status"),
            format!("Name:\tworker-{pid}\nState:\t{state}\n"),
        )
        .unwrap();
    }
    std::fs::create_dir(root.join("12")).unwrap();
    std::fs::create_dir(root.join("net")).unwrap();

    let config = ProbeConfig::new(root.to_string_lossy());
    let info = SystemInfo::new(ProcfsSource::new(RealFs::new(), config));
    let snapshot = info.query().unwrap();

    assert_eq!(snapshot.cpu.core_count, 1);
    assert_eq!(snapshot.cpu.vendor, "AuthenticAMD");
    assert_eq!(snapshot.memory.used_kb, -2048);
    assert_eq!(snapshot.processes, vec![ProcessEntry::new(10, "worker-10")]);
    assert_eq!(info.used_memory().unwrap(), "-2048 KB");
}
