//! Device selector plus single matmul benchmark.
//!
//! Reads the `BACKEND` environment variable once at startup (`hip`, `dml`,
//! anything else means no preference), probes the backends, selects a device,
//! and times one square matmul on it. A hard request that cannot be satisfied
//! exits with a dedicated code instead of falling back: 3 for hip, 4 for dml.

use accelsmoke_cli::{bench, exit, init_tracing, output};
use accelsmoke_common::{select_device, BackendRequest, SelectionError};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "train")]
#[command(version)]
#[command(about = "Select a compute device and time a single matrix multiply")]
struct Args {
    /// Backend preference: `hip`, `dml`, or anything else for no preference.
    #[arg(long, env = "BACKEND")]
    backend: Option<String>,

    /// Square matrix dimension. Defaults to 4096 on accelerators, 1024 on CPU.
    #[arg(long, value_name = "N")]
    size: Option<usize>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let request = BackendRequest::parse(args.backend.as_deref());
    let report = accelsmoke_probe::probe_report();

    let selection = match select_device(request, &report) {
        Ok(selection) => selection,
        Err(err @ SelectionError::HipUnavailable { .. }) => {
            debug!(%err, "selection failed");
            println!("{}", output::hip_unavailable_line());
            std::process::exit(exit::EXIT_HIP_UNAVAILABLE);
        }
        Err(err @ SelectionError::DmlUnavailable { .. }) => {
            debug!(%err, "selection failed");
            println!("{}", output::dml_missing_line());
            std::process::exit(exit::EXIT_DML_MISSING);
        }
    };
    info!(summary = %selection.summary(), rationale = %selection.rationale, "device selected");

    println!("{}", output::device_line(selection.device));

    let dim = args.size.unwrap_or_else(|| bench::default_dim(selection.device));
    let report = bench::run_matmul(selection.device, dim)
        .with_context(|| format!("matmul benchmark on '{}' failed", selection.device))?;
    println!("{}", output::result_line(&report));

    Ok(())
}
