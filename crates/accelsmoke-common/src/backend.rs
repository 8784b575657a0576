//! Backend identity and user preference.

use std::fmt;

/// A compute backend tensors can be placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// HIP/ROCm-class GPU, driven through the tensor library's CUDA backend.
    Hip,
    /// DirectML GPU.
    Dml,
    /// Host CPU. Always present.
    Cpu,
}

impl Backend {
    /// Fallback order when no backend was explicitly requested. CPU is the
    /// terminal entry and never fails.
    pub const CASCADE: [Backend; 3] = [Backend::Hip, Backend::Dml, Backend::Cpu];
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Backend::Hip => "hip",
            Backend::Dml => "dml",
            Backend::Cpu => "cpu",
        };
        write!(f, "{name}")
    }
}

/// A backend preference, parsed once from the `BACKEND` environment variable
/// and passed down as a value from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackendRequest {
    /// No preference: walk [`Backend::CASCADE`] and take the first backend
    /// that probes as available.
    #[default]
    Auto,
    /// HIP required; selection fails rather than falling back.
    Hip,
    /// DirectML required; selection fails rather than falling back.
    Dml,
}

impl BackendRequest {
    /// Lenient parse of the raw variable value.
    ///
    /// `hip` and `dml` are recognized in any casing. Every other value,
    /// including the empty string and an unset variable, means no
    /// preference. Unknown values are never an error.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return BackendRequest::Auto;
        };
        match raw.to_ascii_lowercase().as_str() {
            "hip" => BackendRequest::Hip,
            "dml" => BackendRequest::Dml,
            _ => BackendRequest::Auto,
        }
    }
}

impl fmt::Display for BackendRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendRequest::Auto => "auto",
            BackendRequest::Hip => "hip",
            BackendRequest::Dml => "dml",
        };
        write!(f, "{name}")
    }
}
