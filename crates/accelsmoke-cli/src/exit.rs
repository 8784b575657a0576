//! Process exit codes. CI triage keys off these, so each precondition
//! failure gets its own code.

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_GENERIC_FAIL: i32 = 1;
/// HIP was explicitly requested but no HIP device is available.
pub const EXIT_HIP_UNAVAILABLE: i32 = 3;
/// DirectML was explicitly requested but its support library is missing.
pub const EXIT_DML_MISSING: i32 = 4;
