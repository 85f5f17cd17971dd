/// Driver module - the seam between the core and the GL implementation

// Module declarations
pub mod gl_driver;
pub mod types;

// Mock driver (no GPU required). Kept in the normal build, unlike a real
// backend, so host applications can unit-test against the public API.
pub mod mock_driver;

// Re-export the trait
pub use gl_driver::*;

// Re-export driver-level types
pub use types::*;

pub use mock_driver::MockDriver;
