//! Environment reporting.
//!
//! Before any test executes, the harness prints a fixed-format banner
//! describing the environment the run happened in: harness and collaborator
//! versions, platform, CPU classification, vectorized-math availability, and
//! the thread/core budget of the numeric backend. Every ambient value enters
//! through [`EnvProbe`] so the report can be rendered against a fake probe
//! in isolation.

use std::env;
use std::io::Write;
use std::thread;

/// Coarse CPU vendor classification for the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuVendor {
    /// A mainstream x86 part from AMD or Intel, where the vectorized-math
    /// layer has tuned kernels.
    AmdIntel,
    Other,
}

/// Supplies every ambient value the report queries.
///
/// Production code uses [`SystemProbe`]; tests inject a fixed fake. A `None`
/// from any version query means the collaborator is absent, and its line is
/// omitted from the banner rather than failing the report.
pub trait EnvProbe {
    /// Version of the driftsim library under test.
    fn library_version(&self) -> Option<String>;
    /// Version of the GPU acceleration backend.
    fn device_backend_version(&self) -> Option<String>;
    /// Version of the numeric array backend.
    fn array_backend_version(&self) -> Option<String>;
    /// Version of the expression-acceleration engine.
    fn expr_engine_version(&self) -> Option<String>;
    fn cpu_vendor(&self) -> CpuVendor;
    /// Version of the vectorized-math layer, when one is active.
    fn vector_math_version(&self) -> Option<String>;
    /// Threads the numeric backend will use by default.
    fn default_threads(&self) -> usize;
    /// Cores detected on the host.
    fn detected_cores(&self) -> usize;
}

// =============================================================================
// SYSTEM PROBE
// =============================================================================

/// Probe backed by the running process and host hardware.
///
/// Collaborator versions are taken from the process environment when the
/// launcher exports them, falling back to the versions recorded at build
/// time. Thread and core counts come from the host, with the usual
/// `DRIFTSIM_NUM_THREADS` override honored.
#[derive(Debug, Default)]
pub struct SystemProbe;

impl SystemProbe {
    pub fn detect() -> Self {
        SystemProbe
    }
}

fn version_from(runtime_key: &str, build_time: Option<&'static str>) -> Option<String> {
    env::var(runtime_key)
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| build_time.map(str::to_string))
}

impl EnvProbe for SystemProbe {
    fn library_version(&self) -> Option<String> {
        version_from("DRIFTSIM_VERSION", option_env!("DRIFTSIM_VERSION"))
    }

    fn device_backend_version(&self) -> Option<String> {
        version_from("DRIFTSIM_CUDA_VERSION", option_env!("DRIFTSIM_CUDA_VERSION"))
    }

    fn array_backend_version(&self) -> Option<String> {
        version_from(
            "DRIFTSIM_ARRAY_VERSION",
            option_env!("DRIFTSIM_ARRAY_VERSION"),
        )
    }

    fn expr_engine_version(&self) -> Option<String> {
        version_from("DRIFTSIM_EXPR_VERSION", option_env!("DRIFTSIM_EXPR_VERSION"))
    }

    fn cpu_vendor(&self) -> CpuVendor {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            let cpuid = raw_cpuid::CpuId::new();
            if let Some(vendor) = cpuid.get_vendor_info() {
                return match vendor.as_str() {
                    "GenuineIntel" | "AuthenticAMD" => CpuVendor::AmdIntel,
                    _ => CpuVendor::Other,
                };
            }
        }
        CpuVendor::Other
    }

    fn vector_math_version(&self) -> Option<String> {
        version_from("DRIFTSIM_VML_VERSION", option_env!("DRIFTSIM_VML_VERSION"))
    }

    fn default_threads(&self) -> usize {
        env::var("DRIFTSIM_NUM_THREADS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n| n > 0)
            .unwrap_or_else(|| self.detected_cores())
    }

    fn detected_cores(&self) -> usize {
        thread::available_parallelism().map(usize::from).unwrap_or(1)
    }
}

// =============================================================================
// REPORT
// =============================================================================

/// A snapshot of the execution environment, taken fresh each run.
#[derive(Debug, Clone)]
pub struct EnvironmentReport {
    pub harness_version: String,
    pub library_version: Option<String>,
    pub device_backend_version: Option<String>,
    pub array_backend_version: Option<String>,
    pub expr_engine_version: Option<String>,
    /// `os-arch` identifier, present on unix hosts only.
    pub platform: Option<String>,
    pub cpu_vendor: CpuVendor,
    pub vector_math_version: Option<String>,
    pub default_threads: usize,
    pub detected_cores: usize,
}

impl EnvironmentReport {
    pub fn collect(probe: &dyn EnvProbe) -> Self {
        let platform = cfg!(unix)
            .then(|| format!("{}-{}", env::consts::OS, env::consts::ARCH));
        EnvironmentReport {
            harness_version: env!("CARGO_PKG_VERSION").to_string(),
            library_version: probe.library_version(),
            device_backend_version: probe.device_backend_version(),
            array_backend_version: probe.array_backend_version(),
            expr_engine_version: probe.expr_engine_version(),
            platform,
            cpu_vendor: probe.cpu_vendor(),
            vector_math_version: probe.vector_math_version(),
            default_threads: probe.default_threads(),
            detected_cores: probe.detected_cores(),
        }
    }

    /// Writes the fixed-format banner. Absent optional values omit their
    /// line; nothing here is an error the caller has to handle.
    pub fn render(&self, out: &mut dyn Write) {
        let rule = "-=".repeat(38);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "Driftcheck version: {}", self.harness_version);
        if let Some(v) = &self.library_version {
            let _ = writeln!(out, "Driftsim version:   {v}");
        }
        if let Some(v) = &self.device_backend_version {
            let _ = writeln!(out, "Device backend:     {v}");
        }
        if let Some(v) = &self.array_backend_version {
            let _ = writeln!(out, "Array backend:      {v}");
        }
        if let Some(v) = &self.expr_engine_version {
            let _ = writeln!(out, "Expr engine:        {v}");
        }
        if let Some(p) = &self.platform {
            let _ = writeln!(out, "Platform:           {p}");
        }
        let _ = writeln!(
            out,
            "AMD/Intel CPU?      {}",
            self.cpu_vendor == CpuVendor::AmdIntel
        );
        let _ = writeln!(
            out,
            "Vector math layer?  {}",
            self.vector_math_version.is_some()
        );
        if let Some(v) = &self.vector_math_version {
            let _ = writeln!(out, "Vector math version: {v}");
        }
        let _ = writeln!(
            out,
            "Number of threads used by default: {} (out of {} detected cores)",
            self.default_threads, self.detected_cores
        );
        let _ = writeln!(out, "{rule}");
    }
}
