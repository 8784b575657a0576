//! Device selection: preference + probe snapshot in, device out.
//!
//! `select_device` is a pure function over a [`ProbeReport`]. It reads no
//! environment and probes nothing itself, so every path through it is
//! testable with a hand-built snapshot. The answer records what was
//! requested, what was detected, and what was selected, so a single log line
//! can explain why a run landed where it did.

use crate::backend::{Backend, BackendRequest};
use crate::capability::{ProbeOutcome, ProbeReport};
use crate::device::Device;
use std::fmt;

/// The outcome of device selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// What the caller asked for.
    pub requested: BackendRequest,
    /// Backends that probed as available, in cascade order.
    pub detected: Vec<Backend>,
    /// The device tensors will be placed on.
    pub device: Device,
    /// Human-readable explanation of the choice.
    pub rationale: String,
}

impl Selection {
    /// One-line summary for logs:
    /// `requested=auto detected=[cpu] selected=cpu`.
    pub fn summary(&self) -> String {
        let detected: Vec<String> = self.detected.iter().map(Backend::to_string).collect();
        format!(
            "requested={} detected=[{}] selected={}",
            self.requested,
            detected.join(","),
            self.device
        )
    }
}

/// Selection failures. Only an explicit request can fail; the no-preference
/// cascade always terminates at the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// HIP was required but did not probe as available.
    HipUnavailable { outcome: ProbeOutcome },
    /// DirectML was required but did not probe as available.
    DmlUnavailable { outcome: ProbeOutcome },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::HipUnavailable { outcome } => {
                write!(f, "requested backend 'hip' is {outcome}")
            }
            SelectionError::DmlUnavailable { outcome } => {
                write!(f, "requested backend 'dml' is {outcome}")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// Pick a device for `request` given the probe snapshot in `report`.
///
/// An explicit request is strict: the named backend must be available or the
/// call fails, and it never falls back. With no preference the cascade runs
/// hip, then dml, then CPU, and the CPU terminal never fails.
///
/// ```
/// use accelsmoke_common::{select_device, BackendRequest, Device, ProbeOutcome, ProbeReport};
///
/// let report = ProbeReport {
///     hip: ProbeOutcome::Unsupported,
///     dml: ProbeOutcome::Unsupported,
/// };
/// let selection = select_device(BackendRequest::Auto, &report).unwrap();
/// assert_eq!(selection.device, Device::Cpu);
/// assert!(select_device(BackendRequest::Hip, &report).is_err());
/// ```
pub fn select_device(
    request: BackendRequest,
    report: &ProbeReport,
) -> Result<Selection, SelectionError> {
    let detected = report.detected();
    let (device, rationale) = match request {
        BackendRequest::Hip => {
            if !report.hip.is_available() {
                return Err(SelectionError::HipUnavailable { outcome: report.hip });
            }
            (Device::Hip(0), "hip explicitly requested and available".to_string())
        }
        BackendRequest::Dml => {
            if !report.dml.is_available() {
                return Err(SelectionError::DmlUnavailable { outcome: report.dml });
            }
            (Device::Dml(0), "dml explicitly requested and available".to_string())
        }
        BackendRequest::Auto => {
            if report.hip.is_available() {
                (Device::Hip(0), "no preference; hip is first in the cascade".to_string())
            } else if report.dml.is_available() {
                (
                    Device::Dml(0),
                    format!("no preference; hip is {}, dml is next", report.hip),
                )
            } else {
                (
                    Device::Cpu,
                    format!(
                        "no preference; hip is {}, dml is {}, falling back to cpu",
                        report.hip, report.dml
                    ),
                )
            }
        }
    };
    Ok(Selection {
        requested: request,
        detected,
        device,
        rationale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── snapshot helpers ─────────────────────────────────────────────────

    fn none() -> ProbeReport {
        ProbeReport {
            hip: ProbeOutcome::Unsupported,
            dml: ProbeOutcome::Unsupported,
        }
    }

    fn hip_only() -> ProbeReport {
        ProbeReport {
            hip: ProbeOutcome::Available,
            dml: ProbeOutcome::Unsupported,
        }
    }

    fn dml_only() -> ProbeReport {
        ProbeReport {
            hip: ProbeOutcome::Unavailable,
            dml: ProbeOutcome::Available,
        }
    }

    fn both() -> ProbeReport {
        ProbeReport {
            hip: ProbeOutcome::Available,
            dml: ProbeOutcome::Available,
        }
    }

    // ── no-preference cascade ────────────────────────────────────────────

    /// With no preference and no accelerators, the CPU wins with no error.
    #[test]
    fn auto_falls_back_to_cpu() {
        let selection = select_device(BackendRequest::Auto, &none()).unwrap();
        assert_eq!(selection.device, Device::Cpu);
        assert_eq!(selection.detected, vec![Backend::Cpu]);
    }

    /// hip outranks dml when both are available.
    #[test]
    fn auto_prefers_hip_over_dml() {
        let selection = select_device(BackendRequest::Auto, &both()).unwrap();
        assert_eq!(selection.device, Device::Hip(0));
    }

    /// A dml-only machine lands on dml without surfacing the hip miss.
    #[test]
    fn auto_takes_dml_when_hip_is_out() {
        let selection = select_device(BackendRequest::Auto, &dml_only()).unwrap();
        assert_eq!(selection.device, Device::Dml(0));
    }

    /// The cascade is total: every snapshot shape yields a device.
    #[test]
    fn auto_never_fails() {
        let outcomes = [
            ProbeOutcome::Available,
            ProbeOutcome::Unavailable,
            ProbeOutcome::Unsupported,
        ];
        for hip in outcomes {
            for dml in outcomes {
                let report = ProbeReport { hip, dml };
                assert!(
                    select_device(BackendRequest::Auto, &report).is_ok(),
                    "auto selection failed for {}",
                    report.summary()
                );
            }
        }
    }

    // ── explicit requests ────────────────────────────────────────────────

    #[test]
    fn explicit_hip_request_is_honored() {
        let selection = select_device(BackendRequest::Hip, &hip_only()).unwrap();
        assert_eq!(selection.device, Device::Hip(0));
        assert_eq!(selection.requested, BackendRequest::Hip);
    }

    /// An explicit request never falls back, whatever else is available.
    #[test]
    fn explicit_hip_fails_rather_than_falling_back() {
        let err = select_device(BackendRequest::Hip, &dml_only()).unwrap_err();
        assert_eq!(
            err,
            SelectionError::HipUnavailable {
                outcome: ProbeOutcome::Unavailable
            }
        );
    }

    /// The error carries the tri-state outcome so callers can tell a missing
    /// runtime apart from a build without support.
    #[test]
    fn explicit_dml_failure_reports_probe_outcome() {
        let err = select_device(BackendRequest::Dml, &none()).unwrap_err();
        assert_eq!(
            err,
            SelectionError::DmlUnavailable {
                outcome: ProbeOutcome::Unsupported
            }
        );

        let err = select_device(BackendRequest::Dml, &hip_only()).unwrap_err();
        assert!(err.to_string().contains("'dml'"));
    }

    #[test]
    fn explicit_dml_request_is_honored() {
        let selection = select_device(BackendRequest::Dml, &both()).unwrap();
        assert_eq!(selection.device, Device::Dml(0));
    }

    // ── parse-to-select pipeline ─────────────────────────────────────────

    proptest! {
        /// Any preference string outside the two recognized names follows
        /// the cascade and never errors, whatever the snapshot says.
        #[test]
        fn unknown_preferences_never_error(
            raw in "\\PC*",
            hip_idx in 0usize..3,
            dml_idx in 0usize..3,
        ) {
            let outcomes = [
                ProbeOutcome::Available,
                ProbeOutcome::Unavailable,
                ProbeOutcome::Unsupported,
            ];
            let report = ProbeReport {
                hip: outcomes[hip_idx],
                dml: outcomes[dml_idx],
            };
            let request = BackendRequest::parse(Some(&raw));
            prop_assume!(request == BackendRequest::Auto);

            let selection = select_device(request, &report).unwrap();
            let expected = if report.hip.is_available() {
                Device::Hip(0)
            } else if report.dml.is_available() {
                Device::Dml(0)
            } else {
                Device::Cpu
            };
            prop_assert_eq!(selection.device, expected);
        }
    }

    // ── summary ──────────────────────────────────────────────────────────

    /// Log scrapers key off this format; keep it stable.
    #[test]
    fn summary_format_is_stable() {
        let selection = select_device(BackendRequest::Auto, &none()).unwrap();
        assert_eq!(selection.summary(), "requested=auto detected=[cpu] selected=cpu");

        let selection = select_device(BackendRequest::Hip, &both()).unwrap();
        assert_eq!(
            selection.summary(),
            "requested=hip detected=[hip,dml,cpu] selected=hip:0"
        );
    }
}
