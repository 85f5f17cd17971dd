//! Error types for the Nova GL core
//!
//! This module defines the error taxonomy used throughout the core:
//! compilation and link failures (for callers that want them as error
//! values rather than statuses), buffer upload failures, configuration
//! errors detected at declaration time, and lifecycle errors.

use std::fmt;

use crate::driver::ShaderStage;

/// Result type for Nova GL operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nova GL core errors
///
/// Everything here is recoverable at the call site; nothing in the core
/// terminates the process on its own.
#[derive(Debug, Clone)]
pub enum Error {
    /// Shader compilation failed (stage + driver diagnostic log)
    ShaderCompile {
        /// Stage that failed to compile
        stage: ShaderStage,
        /// Driver diagnostic log
        log: String,
    },

    /// Program linking failed (driver diagnostic log)
    ProgramLink {
        /// Driver diagnostic log
        log: String,
    },

    /// The driver signalled an allocation failure during a buffer upload
    BufferUpload(String),

    /// Invalid configuration detected at declaration time
    /// (stride/offset disagreement, dead handle, unlinked program, ...)
    Configuration(String),

    /// Initialization failed (core lifecycle, driver registration)
    InitializationFailed(String),

    /// Backend-specific error
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShaderCompile { stage, log } => {
                write!(f, "Shader compilation failed ({:?}): {}", stage, log)
            }
            Error::ProgramLink { log } => write!(f, "Program link failed: {}", log),
            Error::BufferUpload(msg) => write!(f, "Buffer upload failed: {}", msg),
            Error::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR message and build a [`Error::Configuration`] from it
///
/// Used by validation code together with `ok_or_else`:
///
/// ```ignore
/// let rec = self.buffers.get(handle)
///     .ok_or_else(|| core_err!("novagl::LayoutBinder", "unknown buffer handle"))?;
/// ```
#[macro_export]
macro_rules! core_err {
    ($source:expr, $($arg:tt)*) => {{
        $crate::core_error!($source, $($arg)*);
        $crate::novagl::Error::Configuration(format!($($arg)*))
    }};
}

/// Log an ERROR message and return early with a [`Error::Configuration`]
///
/// ```ignore
/// if descriptor.components > 4 {
///     core_bail!("novagl::LayoutBinder", "component count {} out of range", descriptor.components);
/// }
/// ```
#[macro_export]
macro_rules! core_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::core_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
