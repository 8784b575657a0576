//! Stdout lines for the `train` binary. These strings are the binary's
//! public interface; CI scripts match on them, so they change together with
//! the tests or not at all.

use crate::bench::MatmulReport;
use accelsmoke_common::Device;

/// `[train] Using device: cpu`
pub fn device_line(device: Device) -> String {
    format!("[train] Using device: {device}")
}

/// `[train] Matmul result: (1024, 1024)  elapsed=0.123s`
///
/// Elapsed is wall-clock seconds with exactly three decimal places.
pub fn result_line(report: &MatmulReport) -> String {
    format!(
        "[train] Matmul result: ({}, {})  elapsed={:.3}s",
        report.rows,
        report.cols,
        report.elapsed.as_secs_f64()
    )
}

/// Diagnostic for a hard HIP request that cannot be satisfied.
pub fn hip_unavailable_line() -> &'static str {
    "[train] Requested HIP but no HIP device available."
}

/// Diagnostic for a hard DirectML request without its support library.
pub fn dml_missing_line() -> &'static str {
    "[train] BACKEND=dml but the DirectML support library is missing."
}

#[cfg(test)]
mod tests {
    use super::*;
    use accelsmoke_common::SyncOutcome;
    use std::time::Duration;

    fn report(rows: usize, cols: usize, elapsed: Duration) -> MatmulReport {
        MatmulReport {
            rows,
            cols,
            elapsed,
            sync: SyncOutcome::NotApplicable,
        }
    }

    #[test]
    fn device_line_matches_contract() {
        assert_eq!(device_line(Device::Cpu), "[train] Using device: cpu");
        assert_eq!(device_line(Device::Hip(0)), "[train] Using device: hip:0");
    }

    /// Exactly three decimals, two spaces before `elapsed`.
    #[test]
    fn result_line_formats_three_decimals() {
        let line = result_line(&report(1024, 1024, Duration::from_millis(1234)));
        assert_eq!(line, "[train] Matmul result: (1024, 1024)  elapsed=1.234s");
    }

    #[test]
    fn result_line_pads_short_durations() {
        let line = result_line(&report(64, 64, Duration::from_millis(50)));
        assert_eq!(line, "[train] Matmul result: (64, 64)  elapsed=0.050s");

        let line = result_line(&report(64, 64, Duration::ZERO));
        assert_eq!(line, "[train] Matmul result: (64, 64)  elapsed=0.000s");
    }

    #[test]
    fn result_line_rounds_to_milliseconds() {
        let line = result_line(&report(8, 8, Duration::from_micros(123_456)));
        assert_eq!(line, "[train] Matmul result: (8, 8)  elapsed=0.123s");
    }
}
