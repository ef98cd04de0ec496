//! Error types for the camera frustum gizmo
//!
//! The degenerate ray case of the ground sampler is NOT an error (it logs and
//! falls back to a sentinel). Errors cover configuration, component lifecycle
//! and host-side handle misuse.

use std::fmt;

/// Result type for frustum gizmo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Frustum gizmo errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Rejected configuration (radius, color, ...)
    InvalidConfig(String),

    /// Marker or material handle that the host does not know (destroyed or foreign)
    InvalidHandle(String),

    /// Component used before `start()`
    NotStarted(String),

    /// Host-specific failure
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidHandle(msg) => write!(f, "Invalid handle: {}", msg),
            Error::NotStarted(msg) => write!(f, "Component not started: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR (with file:line) and build the matching `Error` variant
///
/// # Example
///
/// ```no_run
/// # use camera_frustum_gizmo::gizmo_err;
/// let err = gizmo_err!("frustum_gizmo::DebugScene", InvalidHandle, "Marker {} does not exist", 3);
/// ```
#[macro_export]
macro_rules! gizmo_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::frustum_gizmo::Diagnostics::log_detailed(
            $crate::frustum_gizmo::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::frustum_gizmo::Error::$variant(message)
    }};
}

/// Log an ERROR and return early with the matching `Error` variant
#[macro_export]
macro_rules! gizmo_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::gizmo_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
