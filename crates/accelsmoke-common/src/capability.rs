//! Capability snapshots: the tri-state answer to "can this backend run here?".

use crate::backend::Backend;
use std::fmt;

/// Outcome of probing one backend.
///
/// `Unavailable` and `Unsupported` are deliberately distinct. The first
/// means support was compiled in but no runtime answered, which is worth a
/// log line on a machine that should have the hardware. The second means the
/// build or the platform cannot have this backend at all, which is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeOutcome {
    /// Support is compiled in and the runtime answered.
    Available,
    /// Support is compiled in but no runtime or device was found.
    Unavailable,
    /// Support is not compiled into this build, or cannot exist on this
    /// platform.
    Unsupported,
}

impl ProbeOutcome {
    pub fn is_available(self) -> bool {
        matches!(self, ProbeOutcome::Available)
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProbeOutcome::Available => "available",
            ProbeOutcome::Unavailable => "unavailable",
            ProbeOutcome::Unsupported => "unsupported",
        };
        write!(f, "{name}")
    }
}

/// Snapshot of every accelerator backend's probe outcome.
///
/// Captured once at startup and passed by reference from then on, so every
/// consumer reasons about the same moment in time. The CPU has no field: it
/// is always available and [`ProbeReport::outcome`] answers for it directly,
/// which keeps a "CPU missing" state unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeReport {
    pub hip: ProbeOutcome,
    pub dml: ProbeOutcome,
}

impl ProbeReport {
    /// The probe outcome for `backend`.
    pub fn outcome(&self, backend: Backend) -> ProbeOutcome {
        match backend {
            Backend::Hip => self.hip,
            Backend::Dml => self.dml,
            Backend::Cpu => ProbeOutcome::Available,
        }
    }

    /// Backends that probed as available, in cascade order. Never empty:
    /// the CPU is always the last entry.
    pub fn detected(&self) -> Vec<Backend> {
        Backend::CASCADE
            .into_iter()
            .filter(|backend| self.outcome(*backend).is_available())
            .collect()
    }

    /// One-line summary for logs: `hip=unsupported dml=unsupported cpu=available`.
    pub fn summary(&self) -> String {
        format!("hip={} dml={} cpu=available", self.hip, self.dml)
    }
}
