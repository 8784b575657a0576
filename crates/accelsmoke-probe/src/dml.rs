//! DirectML runtime detection and device acquisition.

use accelsmoke_common::{AccelError, Backend, Device, ProbeOutcome, Result};

/// Probe the DirectML backend.
///
/// Builds without the `dml` feature, and every platform other than Windows,
/// report [`ProbeOutcome::Unsupported`]. With the feature on Windows,
/// availability means `DirectML.dll` loads and at least one adapter
/// enumerates.
#[cfg(feature = "dml")]
pub fn probe() -> ProbeOutcome {
    if let Some(fake) = crate::fake_backends() {
        return if fake.contains("dml") {
            ProbeOutcome::Available
        } else {
            ProbeOutcome::Unavailable
        };
    }
    probe_runtime()
}

#[cfg(not(feature = "dml"))]
pub const fn probe() -> ProbeOutcome {
    ProbeOutcome::Unsupported
}

/// Acquire the default DirectML device, or fail.
///
/// This is the hard-requirement entry point for smoke checks: there is no
/// guard and no fallback, so a missing runtime surfaces as an error the
/// caller has to handle or propagate.
pub fn device() -> Result<Device> {
    match probe() {
        ProbeOutcome::Available => Ok(Device::Dml(0)),
        ProbeOutcome::Unavailable => Err(AccelError::BackendUnavailable {
            backend: Backend::Dml,
            reason: "no DirectML runtime or adapter was found".to_string(),
        }),
        ProbeOutcome::Unsupported => Err(AccelError::BackendUnsupported {
            backend: Backend::Dml,
        }),
    }
}

#[cfg(all(feature = "dml", target_os = "windows"))]
fn probe_runtime() -> ProbeOutcome {
    if runtime_library_present() && adapter_count() > 0 {
        ProbeOutcome::Available
    } else {
        ProbeOutcome::Unavailable
    }
}

#[cfg(all(feature = "dml", not(target_os = "windows")))]
fn probe_runtime() -> ProbeOutcome {
    ProbeOutcome::Unsupported
}

#[cfg(all(feature = "dml", target_os = "windows"))]
fn runtime_library_present() -> bool {
    // SAFETY: the library is opened to test presence only; no symbols are
    // resolved and the handle is dropped immediately.
    let present = unsafe { libloading::Library::new("DirectML.dll").is_ok() };
    tracing::debug!(present, "DirectML.dll presence check");
    present
}

#[cfg(all(feature = "dml", target_os = "windows"))]
fn adapter_count() -> usize {
    // Adapter enumeration goes through DXGI bindings this crate does not
    // carry yet; report zero so availability stays conservative.
    0
}
