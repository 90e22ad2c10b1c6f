//! Device discovery shared by the GPU-dependent modules.
//!
//! The harness never drives kernels itself; the solver groups only need to
//! know whether a device context can exist, so that GPU cases degrade to a
//! recorded per-case error instead of aborting the run.

use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceHandle {
    pub ordinal: u32,
}

/// Acquires the configured acceleration device, if any.
///
/// `DRIFTSIM_DEVICE` selects the device ordinal; unset, empty, or `none`
/// means no device is available on this host.
pub fn acquire() -> Result<DeviceHandle, String> {
    match env::var("DRIFTSIM_DEVICE") {
        Ok(v) if v.is_empty() || v.eq_ignore_ascii_case("none") => {
            Err("no acceleration device configured (set DRIFTSIM_DEVICE)".to_string())
        }
        Ok(v) => v
            .parse::<u32>()
            .map(|ordinal| DeviceHandle { ordinal })
            .map_err(|_| format!("invalid DRIFTSIM_DEVICE value '{v}'")),
        Err(_) => Err("no acceleration device configured (set DRIFTSIM_DEVICE)".to_string()),
    }
}
