/// Shader module - sources, compiled objects and the program builder

// Module declarations
pub mod shader_source;
pub mod compiled_shader;
pub mod shader_program;
pub mod program_builder;

// Re-exports
pub use shader_source::*;
pub use compiled_shader::*;
pub use shader_program::*;
pub use program_builder::*;
