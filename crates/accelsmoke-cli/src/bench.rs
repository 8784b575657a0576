//! The single-shot matmul benchmark.

use accelsmoke_common::{synchronize, to_candle, Device, Result, SyncOutcome};
use candle_core::Tensor;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default square dimension for a device class. Accelerators get the large
/// size; the CPU gets one it can finish in reasonable time. The split is a
/// crude runtime concession, not a sizing policy.
pub fn default_dim(device: Device) -> usize {
    if device.is_cpu() {
        1024
    } else {
        4096
    }
}

/// What one benchmark run produced.
#[derive(Debug)]
pub struct MatmulReport {
    pub rows: usize,
    pub cols: usize,
    pub elapsed: Duration,
    pub sync: SyncOutcome,
}

/// Allocate two `dim`×`dim` standard-normal matrices on `device`, multiply
/// them, and time the multiply.
///
/// Timing includes the completion barrier where the device has one, so the
/// number reflects finished work rather than asynchronous dispatch.
pub fn run_matmul(device: Device, dim: usize) -> Result<MatmulReport> {
    let dev = to_candle(device)?;

    let x = Tensor::randn(0f32, 1f32, (dim, dim), &dev)?;
    let y = Tensor::randn(0f32, 1f32, (dim, dim), &dev)?;

    let start = Instant::now();
    let z = x.matmul(&y)?;
    let sync = synchronize(device, &dev);
    let elapsed = start.elapsed();

    if let SyncOutcome::Failed(reason) = &sync {
        debug!(%reason, "completion barrier failed; timing may reflect dispatch only");
    }

    let (rows, cols) = z.dims2()?;
    Ok(MatmulReport {
        rows,
        cols,
        elapsed,
        sync,
    })
}
