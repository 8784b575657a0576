//! Fixed-backend smoke test: prove DirectML works or fail loudly.
//!
//! No preference variable, no guard, no fallback. A missing runtime
//! propagates straight out of `main` so a broken backend cannot go unnoticed.

use accelsmoke_cli::{init_tracing, CANDLE_VERSION};
use accelsmoke_common::to_candle;
use anyhow::{Context, Result};
use candle_core::Tensor;

const DIM: usize = 2048;

fn main() -> Result<()> {
    init_tracing();

    let device = accelsmoke_probe::dml::device()
        .context("this check requires a working DirectML backend")?;
    let dev = to_candle(device).context("placing tensors on the DirectML device")?;

    let x = Tensor::randn(0f32, 1f32, (DIM, DIM), &dev)?;
    let y = Tensor::randn(0f32, 1f32, (DIM, DIM), &dev)?;

    println!("Candle: {CANDLE_VERSION} | Device: {device}");

    let z = x.matmul(&y)?;
    let (rows, cols) = z.dims2()?;
    println!("OK: ({rows}, {cols})");

    Ok(())
}
