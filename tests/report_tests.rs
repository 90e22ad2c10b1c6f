//! Environment report rendering against injected probes.

use driftcheck::report::{CpuVendor, EnvProbe, EnvironmentReport};

/// Fully-populated fake probe; individual tests blank out fields.
struct FakeProbe {
    library: Option<String>,
    device: Option<String>,
    array: Option<String>,
    expr: Option<String>,
    vml: Option<String>,
    threads: usize,
    cores: usize,
}

impl FakeProbe {
    fn full() -> Self {
        FakeProbe {
            library: Some("0.6.1".to_string()),
            device: Some("12.4".to_string()),
            array: Some("1.26.4".to_string()),
            expr: Some("2.10.0".to_string()),
            vml: Some("2024.1".to_string()),
            threads: 8,
            cores: 16,
        }
    }
}

impl EnvProbe for FakeProbe {
    fn library_version(&self) -> Option<String> {
        self.library.clone()
    }
    fn device_backend_version(&self) -> Option<String> {
        self.device.clone()
    }
    fn array_backend_version(&self) -> Option<String> {
        self.array.clone()
    }
    fn expr_engine_version(&self) -> Option<String> {
        self.expr.clone()
    }
    fn cpu_vendor(&self) -> CpuVendor {
        CpuVendor::AmdIntel
    }
    fn vector_math_version(&self) -> Option<String> {
        self.vml.clone()
    }
    fn default_threads(&self) -> usize {
        self.threads
    }
    fn detected_cores(&self) -> usize {
        self.cores
    }
}

fn render(probe: &FakeProbe) -> String {
    let report = EnvironmentReport::collect(probe);
    let mut out = Vec::new();
    report.render(&mut out);
    String::from_utf8(out).unwrap()
}

#[test]
fn full_probe_prints_every_version_line() {
    let text = render(&FakeProbe::full());

    assert!(text.contains("Driftcheck version:"));
    assert!(text.contains("Driftsim version:   0.6.1"));
    assert!(text.contains("Device backend:     12.4"));
    assert!(text.contains("Array backend:      1.26.4"));
    assert!(text.contains("Expr engine:        2.10.0"));
    assert!(text.contains("AMD/Intel CPU?      true"));
    assert!(text.contains("Vector math layer?  true"));
    assert!(text.contains("Vector math version: 2024.1"));
    assert!(text.contains("Number of threads used by default: 8 (out of 16 detected cores)"));
}

#[test]
fn absent_vector_math_layer_omits_only_its_version_line() {
    let mut probe = FakeProbe::full();
    probe.vml = None;
    let text = render(&probe);

    assert!(text.contains("Vector math layer?  false"));
    assert!(!text.contains("Vector math version:"));
    // Every other line stays.
    assert!(text.contains("Driftsim version:   0.6.1"));
    assert!(text.contains("Number of threads used by default: 8 (out of 16 detected cores)"));
}

#[test]
fn absent_collaborators_degrade_to_omitted_lines() {
    let mut probe = FakeProbe::full();
    probe.library = None;
    probe.device = None;
    let text = render(&probe);

    assert!(!text.contains("Driftsim version:"));
    assert!(!text.contains("Device backend:"));
    assert!(text.contains("Driftcheck version:"));
    assert!(text.contains("Array backend:      1.26.4"));
}

#[test]
fn banner_is_framed_by_rule_lines() {
    let text = render(&FakeProbe::full());
    let rule = "-=".repeat(38);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.first(), Some(&rule.as_str()));
    assert_eq!(lines.last(), Some(&rule.as_str()));
}

#[cfg(unix)]
#[test]
fn platform_line_prints_on_unix() {
    let text = render(&FakeProbe::full());
    assert!(text.contains("Platform:           "));
    assert!(text.contains(std::env::consts::ARCH));
}
