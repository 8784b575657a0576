//! Bridge between device handles and candle tensor placement.

use crate::backend::Backend;
use crate::device::Device;
use crate::error::{AccelError, Result};

/// Convert a device handle into a candle device.
///
/// CPU always succeeds. HIP maps onto candle's CUDA backend (ROCm driver
/// stacks expose HIP through the same interface) and needs the `hip`
/// feature. DirectML has no candle binding, so placement on a `Dml` handle
/// is rejected with a typed error instead of quietly landing on the CPU.
pub fn to_candle(device: Device) -> Result<candle_core::Device> {
    match device {
        Device::Cpu => Ok(candle_core::Device::Cpu),
        Device::Hip(index) => {
            #[cfg(feature = "hip")]
            {
                candle_core::Device::new_cuda(index).map_err(|e| AccelError::BackendUnavailable {
                    backend: Backend::Hip,
                    reason: e.to_string(),
                })
            }
            #[cfg(not(feature = "hip"))]
            {
                let _ = index;
                Err(AccelError::BackendUnsupported { backend: Backend::Hip })
            }
        }
        Device::Dml(_) => Err(AccelError::BackendUnsupported { backend: Backend::Dml }),
    }
}

/// Outcome of the completion barrier after device work.
///
/// The skip is an intentional branch, not a swallowed error: callers can
/// tell "nothing to wait for" apart from "the wait broke" and decide which
/// of those deserves a log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The barrier ran; outstanding device work is complete.
    Synced,
    /// The device has no barrier. CPU work is already complete when the
    /// operation returns.
    NotApplicable,
    /// The barrier was attempted and failed.
    Failed(String),
}

/// Block until outstanding work on `device` completes, where the device's
/// backend has a completion barrier at all.
pub fn synchronize(device: Device, candle: &candle_core::Device) -> SyncOutcome {
    match device.backend() {
        Backend::Cpu | Backend::Dml => SyncOutcome::NotApplicable,
        Backend::Hip => match candle.synchronize() {
            Ok(()) => SyncOutcome::Synced,
            Err(e) => SyncOutcome::Failed(e.to_string()),
        },
    }
}
