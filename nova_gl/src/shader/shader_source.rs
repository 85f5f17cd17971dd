/// ShaderSource - immutable source text tagged with its stage
///
/// Sources are plain values handed to `ProgramBuilder::compile`, never
/// process-wide globals. They are created from literal text by the host
/// and never mutated.

use crate::driver::ShaderStage;

/// An immutable shader source string tagged with a stage kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    stage: ShaderStage,
    code: String,
}

impl ShaderSource {
    /// Create a shader source for an arbitrary stage
    pub fn new(stage: ShaderStage, code: impl Into<String>) -> Self {
        Self {
            stage,
            code: code.into(),
        }
    }

    /// Create a vertex shader source
    pub fn vertex(code: impl Into<String>) -> Self {
        Self::new(ShaderStage::Vertex, code)
    }

    /// Create a fragment shader source
    pub fn fragment(code: impl Into<String>) -> Self {
        Self::new(ShaderStage::Fragment, code)
    }

    /// Get the stage kind
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    /// Get the source text
    pub fn code(&self) -> &str {
        &self.code
    }
}

#[cfg(test)]
#[path = "shader_source_tests.rs"]
mod tests;
