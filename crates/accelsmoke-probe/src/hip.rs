//! HIP runtime detection.

use accelsmoke_common::ProbeOutcome;

/// Probe the HIP backend.
///
/// Builds without the `hip` feature always report
/// [`ProbeOutcome::Unsupported`]. With the feature, availability means the
/// HIP or CUDA driver library loads: ROCm installs ship `libamdhip64`, and
/// NVIDIA stacks expose the same device class through `libcuda`.
#[cfg(feature = "hip")]
pub fn probe() -> ProbeOutcome {
    if let Some(fake) = crate::fake_backends() {
        return if fake.contains("hip") {
            ProbeOutcome::Available
        } else {
            ProbeOutcome::Unavailable
        };
    }
    probe_runtime()
}

#[cfg(not(feature = "hip"))]
pub const fn probe() -> ProbeOutcome {
    ProbeOutcome::Unsupported
}

#[cfg(all(feature = "hip", any(target_os = "linux", target_os = "windows")))]
fn probe_runtime() -> ProbeOutcome {
    #[cfg(target_os = "linux")]
    const CANDIDATES: &[&str] = &["libamdhip64.so", "libamdhip64.so.6", "libcuda.so", "libcuda.so.1"];
    #[cfg(target_os = "windows")]
    const CANDIDATES: &[&str] = &["amdhip64.dll", "nvcuda.dll"];

    for name in CANDIDATES.iter().copied() {
        // SAFETY: the library is opened to test presence only; no symbols
        // are resolved and the handle is dropped immediately.
        if unsafe { libloading::Library::new(name).is_ok() } {
            tracing::debug!(library = name, "hip runtime library found");
            return ProbeOutcome::Available;
        }
    }
    ProbeOutcome::Unavailable
}

#[cfg(all(feature = "hip", not(any(target_os = "linux", target_os = "windows"))))]
fn probe_runtime() -> ProbeOutcome {
    ProbeOutcome::Unsupported
}
