/*!
# Nova GL

Core traits and types for the Nova GL rendering core.

This crate provides the platform-agnostic API for building shader programs
and wiring vertex buffers to shader attributes. Driver entry points are
expressed as a trait (`GlDriver`); the real OpenGL binding lives in the
`nova_gl_driver_opengl` crate, and a `MockDriver` is provided so host
applications (and this crate's own tests) can run without a GPU.

## Architecture

- **GlDriver**: trait over the raw driver entry points
- **ProgramBuilder**: shader compilation and program linking with diagnostics
- **LayoutBinder**: vertex/index upload and attribute layout declaration
- **RenderCore**: process-wide driver/logger lifecycle

The surrounding application owns the window, the GL context and the render
loop; this crate assumes a current context and performs no event handling.
*/

// Internal modules
mod error;
mod render_core;
pub mod log;
pub mod driver;
pub mod shader;
pub mod layout;

// Main novagl namespace module
pub mod novagl {
    // Error types
    pub use crate::error::{Error, Result};

    // Core singleton
    pub use crate::render_core::RenderCore;

    // Driver trait
    pub use crate::driver::GlDriver;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: core_* macros are NOT re-exported here - they are internal only
    }

    // Driver sub-module with all driver-level types
    pub mod driver {
        pub use crate::driver::*;
    }

    // Shader sub-module
    pub mod shader {
        pub use crate::shader::*;
    }

    // Layout sub-module
    pub mod layout {
        pub use crate::layout::*;
    }
}
