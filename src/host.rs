//! Identification of the machine the extension is built for.
//!
//! The result is computed once per process and shared afterwards.

use std::borrow::Cow;
use std::env::consts;
use std::sync::OnceLock;
use tracing::debug;

/// Operating system, CPU architecture and C compiler, spelled the way Nimporter names its build directories.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct HostInfo {
    /// Lower-case system name: `linux`, `darwin`, `windows`, ...
    pub operating_system: Cow<'static, str>,
    /// Lower-case architecture: `x86_64`, `x86_32`, `arm_8`, ...
    pub cpu_architecture: Cow<'static, str>,
    /// `vcc`, `clang` or `gcc`.
    pub compiler: &'static str,
}

impl HostInfo {
    fn probe() -> Self {
        let host = Self {
            operating_system: operating_system(consts::OS),
            cpu_architecture: normalize_architecture(architecture(consts::ARCH), usize::BITS),
            compiler: compiler(),
        };

        debug!(?host, "probed host");

        host
    }
}

/// Returns information about the current host. Only the first call does any work.
pub fn host_info() -> &'static HostInfo {
    static HOST_INFO: OnceLock<HostInfo> = OnceLock::new();

    HOST_INFO.get_or_init(HostInfo::probe)
}

/// Corrects an architecture reading for the pointer width of the running process: a 64-bit x86 machine running a
/// 32-bit process builds 32-bit code.
#[must_use]
pub fn normalize_architecture(reading: &str, pointer_width: u32) -> Cow<'static, str> {
    let reading = reading.to_ascii_lowercase();

    if pointer_width == 32 && reading == "x86_64" {
        Cow::Borrowed("x86_32")
    } else {
        Cow::Owned(reading)
    }
}

fn operating_system(os: &'static str) -> Cow<'static, str> {
    match os {
        "macos" | "ios" => Cow::Borrowed("darwin"),
        _ => Cow::Owned(os.to_ascii_lowercase()),
    }
}

fn architecture(arch: &'static str) -> &'static str {
    match arch {
        "x86" => "x86_32",
        "aarch64" => "arm_8",
        "arm" => "arm_7",
        "powerpc" => "ppc_32",
        "powerpc64" => "ppc_64",
        "mips" => "mips_32",
        "mips64" => "mips_64",
        "riscv32" => "riscv_32",
        "riscv64" => "riscv_64",
        "sparc" => "sparc_32",
        "sparc64" => "sparc_64",
        "loongarch64" => "loong_64",
        _ => arch,
    }
}

const fn compiler() -> &'static str {
    if cfg!(target_env = "msvc") {
        "vcc"
    } else if cfg!(target_vendor = "apple") {
        "clang"
    } else {
        "gcc"
    }
}
