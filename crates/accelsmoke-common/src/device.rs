//! Device handles: where tensor memory and computation land.

use crate::backend::Backend;
use std::fmt;

/// A concrete placement target, backend plus adapter index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    /// Host CPU.
    Cpu,
    /// HIP-class GPU at the given adapter index.
    Hip(usize),
    /// DirectML GPU at the given adapter index.
    Dml(usize),
}

impl Device {
    pub fn backend(self) -> Backend {
        match self {
            Device::Cpu => Backend::Cpu,
            Device::Hip(_) => Backend::Hip,
            Device::Dml(_) => Backend::Dml,
        }
    }

    pub fn is_cpu(self) -> bool {
        matches!(self, Device::Cpu)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
            Device::Hip(index) => write!(f, "hip:{index}"),
            Device::Dml(index) => write!(f, "dml:{index}"),
        }
    }
}
