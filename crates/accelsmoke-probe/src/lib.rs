//! Runtime capability probing.
//!
//! Answers, per backend, the tri-state question "can tensors go there right
//! now?" without constructing any device: shared-library presence is the
//! availability signal. Probing is cheap and side-effect free, so callers
//! capture one [`ProbeReport`] at startup and pass it down by value.
//!
//! Two environment variables steer the probes:
//!
//! - `ACCELSMOKE_PROBE_FAKE`: comma-separated backend names to report as
//!   available, or `none` for an empty set. Only consulted in builds where
//!   the backend is compiled in; it can never make a compiled-out backend
//!   appear available.
//! - `ACCELSMOKE_STRICT_PROBE=1`: ignore the fake and probe real runtimes.

pub mod dml;
pub mod hip;

use accelsmoke_common::ProbeReport;
use tracing::debug;

/// Capture a fresh snapshot of every backend's availability.
pub fn probe_report() -> ProbeReport {
    let report = ProbeReport {
        hip: hip::probe(),
        dml: dml::probe(),
    };
    debug!(summary = %report.summary(), "capability probe complete");
    report
}

/// True when HIP support was compiled into this build.
pub const fn hip_compiled() -> bool {
    cfg!(feature = "hip")
}

/// True when DirectML support was compiled into this build.
pub const fn dml_compiled() -> bool {
    cfg!(feature = "dml")
}

/// The probe-fake override, if one applies. `None` means probe for real.
#[cfg(any(feature = "hip", feature = "dml"))]
pub(crate) fn fake_backends() -> Option<std::collections::HashSet<String>> {
    let strict = std::env::var("ACCELSMOKE_STRICT_PROBE")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if strict {
        return None;
    }

    let fake = std::env::var("ACCELSMOKE_PROBE_FAKE").ok()?;
    debug!(fake = %fake, "probe fake override active");
    Some(parse_fake_list(&fake))
}

#[cfg(any(feature = "hip", feature = "dml"))]
fn parse_fake_list(raw: &str) -> std::collections::HashSet<String> {
    let normalized = raw.trim().to_ascii_lowercase();
    if normalized == "none" {
        return Default::default();
    }
    normalized
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
