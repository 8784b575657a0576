//! Shared vocabulary for the accelsmoke workspace.
//!
//! This crate owns the types that flow between the probe layer and the
//! binaries: device handles, per-backend capability snapshots, the pure
//! selection function that turns a preference plus a snapshot into a device,
//! and the bridge onto the candle tensor library.
//!
//! Nothing in here touches the environment or spawns processes. Probing
//! lives in `accelsmoke-probe`; this crate only defines what a probe result
//! looks like and what to do with one.

pub mod backend;
pub mod capability;
pub mod device;
pub mod error;
pub mod selection;
pub mod tensor;

pub use backend::{Backend, BackendRequest};
pub use capability::{ProbeOutcome, ProbeReport};
pub use device::Device;
pub use error::{AccelError, Result};
pub use selection::{select_device, Selection, SelectionError};
pub use tensor::{synchronize, to_candle, SyncOutcome};
