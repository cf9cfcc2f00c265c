//! Pre-built mock filesystem scenarios for testing.
//!
//! These scenarios provide realistic `/proc` filesystem states
//! for testing various system conditions.

use super::filesystem::MockFs;

/// Four logical processors, two physical cores, 8 MiB shared cache.
pub const X86_CPUINFO: &str = "\
processor\t: 0
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 142
model name\t: Intel(R) Core(TM) i7-8550U CPU @ 1.80GHz
stepping\t: 10
cpu MHz\t\t: 2400.000
cache size\t: 8192 KB
physical id\t: 0
siblings\t: 4
core id\t\t: 0
cpu cores\t: 2
flags\t\t: fpu vme de pse tsc msr pae mce cx8 apic sep

processor\t: 1
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 142
model name\t: Intel(R) Core(TM) i7-8550U CPU @ 1.80GHz
stepping\t: 10
cpu MHz\t\t: 2600.000
cache size\t: 8192 KB
physical id\t: 0
siblings\t: 4
core id\t\t: 1
cpu cores\t: 2
flags\t\t: fpu vme de pse tsc msr pae mce cx8 apic sep

processor\t: 2
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 142
model name\t: Intel(R) Core(TM) i7-8550U CPU @ 1.80GHz
stepping\t: 10
cpu MHz\t\t: 2800.000
cache size\t: 8192 KB
physical id\t: 0
siblings\t: 4
core id\t\t: 0
cpu cores\t: 2
flags\t\t: fpu vme de pse tsc msr pae mce cx8 apic sep

processor\t: 3
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 142
model name\t: Intel(R) Core(TM) i7-8550U CPU @ 1.80GHz
stepping\t: 10
cpu MHz\t\t: 3000.000
cache size\t: 8192 KB
physical id\t: 0
siblings\t: 4
core id\t\t: 1
cpu cores\t: 2
flags\t\t: fpu vme de pse tsc msr pae mce cx8 apic sep
";

/// Raspberry Pi style cpuinfo: no `cpu cores`, `cpu MHz`, `vendor_id` or `cache size`.
pub const ARM_CPUINFO: &str = "\
processor\t: 0
BogoMIPS\t: 108.00
Features\t: fp asimd evtstrm crc32 cpuid
CPU implementer\t: 0x41
CPU part\t: 0xd08

processor\t: 1
BogoMIPS\t: 108.00
Features\t: fp asimd evtstrm crc32 cpuid
CPU implementer\t: 0x41
CPU part\t: 0xd08

processor\t: 2
BogoMIPS\t: 108.00
Features\t: fp asimd evtstrm crc32 cpuid
CPU implementer\t: 0x41
CPU part\t: 0xd08

processor\t: 3
BogoMIPS\t: 108.00
Features\t: fp asimd evtstrm crc32 cpuid
CPU implementer\t: 0x41
CPU part\t: 0xd08

Hardware\t: BCM2835
Model\t\t: Raspberry Pi 4 Model B Rev 1.4
";

pub const TYPICAL_MEMINFO: &str = "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapCached:            0 kB
SwapTotal:       4096000 kB
SwapFree:        4096000 kB
";

impl MockFs {
    /// Creates a typical x86 system with a mix of running and sleeping processes.
    ///
    /// Running: 1001 (stress), 1002 (Web Content). Sleeping or idle: 1, 100, 1000.
    pub fn typical_system() -> Self {
        let mut fs = Self::new();

        fs.add_file("/proc/cpuinfo", X86_CPUINFO);
        fs.add_file("/proc/meminfo", TYPICAL_MEMINFO);
        fs.add_file("/proc/uptime", "12345.67 98765.43\n");
        fs.add_file("/proc/self/status", "Name:\tprocsnap\nState:\tR (running)\n");
        fs.add_dir("/proc/sys");

        fs.add_process_with_state(1, "systemd", 'S');
        fs.add_process_with_state(100, "kworker/0:1", 'I');
        fs.add_process_with_state(1000, "bash", 'S');
        fs.add_process_with_state(1001, "stress", 'R');
        fs.add_process_with_state(1002, "Web Content", 'R');

        fs
    }

    /// Creates an ARM board whose cpuinfo lacks most x86 fields.
    pub fn arm_board() -> Self {
        let mut fs = Self::new();

        fs.add_file("/proc/cpuinfo", ARM_CPUINFO);
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:        3884292 kB
MemFree:          218456 kB
MemAvailable:    2456780 kB
",
        );
        fs.add_process_with_state(1, "init", 'S');
        fs.add_process_with_state(512, "inference", 'R');

        fs
    }

    /// Creates a process table caught mid-churn.
    ///
    /// Entries `1` and `2` are candidates; `abc`, `3.5` and `-1` are not.
    /// PID 2 vanished between the directory listing and the status read.
    pub fn racy_process_table() -> Self {
        let mut fs = Self::new();

        fs.add_file("/proc/cpuinfo", X86_CPUINFO);
        fs.add_file("/proc/meminfo", TYPICAL_MEMINFO);

        fs.add_process_with_state(1, "init", 'R');
        fs.add_dir("/proc/2");
        fs.add_file("/proc/abc/status", "Name:\tbogus\nState:\tR (running)\n");
        fs.add_file("/proc/3.5/status", "Name:\tbogus\nState:\tR (running)\n");
        fs.add_file("/proc/-1/status", "Name:\tbogus\nState:\tR (running)\n");

        fs
    }

    /// Creates a system whose cpuinfo carries a non-numeric `cpu cores` value.
    pub fn with_malformed_cpuinfo() -> Self {
        let mut fs = Self::typical_system();
        fs.add_file(
            "/proc/cpuinfo",
            X86_CPUINFO.replace("cpu cores\t: 2", "cpu cores\t: two"),
        );
        fs
    }
}
