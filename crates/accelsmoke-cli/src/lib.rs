//! Shared plumbing for the `train` and `dml-smoke` binaries: the benchmark
//! itself, stdout line formatting, and exit codes.

pub mod bench;
pub mod exit;
pub mod output;

use tracing_subscriber::EnvFilter;

/// Version of the candle build this binary was compiled against, captured
/// from the workspace manifest at build time.
pub const CANDLE_VERSION: &str = env!("ACCELSMOKE_CANDLE_VERSION");

/// Initialize tracing for a binary.
///
/// Diagnostics go to stderr so the stdout result lines stay machine-parsable.
/// Quiet by default; `RUST_LOG` raises the filter in the usual way.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
