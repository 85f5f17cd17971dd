/// CompiledShader - a driver shader object plus its compilation outcome

use crate::driver::ShaderStage;

/// Outcome of one shader compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileStatus {
    /// Compilation succeeded
    Success,
    /// Compilation failed; `log` is the driver's diagnostic text
    Failure {
        /// Driver diagnostic log (non-empty on real drivers)
        log: String,
    },
}

/// A compiled (or failed-to-compile) shader object
///
/// Always carries a handle plus a status; a failed compilation is reported
/// through the status, never as an error value. The object is owned by the
/// caller until destroyed via `ProgramBuilder::destroy_shader`, which may
/// happen immediately after linking.
#[derive(Debug, Clone)]
pub struct CompiledShader {
    raw: u32,
    stage: ShaderStage,
    status: CompileStatus,
    destroyed: bool,
}

impl CompiledShader {
    pub(crate) fn new(raw: u32, stage: ShaderStage, status: CompileStatus) -> Self {
        Self {
            raw,
            stage,
            status,
            destroyed: false,
        }
    }

    /// Raw driver name of the shader object
    pub fn raw(&self) -> u32 {
        self.raw
    }

    /// Stage this shader was compiled for
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    /// Compilation outcome
    pub fn status(&self) -> &CompileStatus {
        &self.status
    }

    /// True when compilation succeeded
    pub fn is_compiled(&self) -> bool {
        matches!(self.status, CompileStatus::Success)
    }

    /// Diagnostic log of a failed compilation
    pub fn log(&self) -> Option<&str> {
        match &self.status {
            CompileStatus::Success => None,
            CompileStatus::Failure { log } => Some(log),
        }
    }

    /// True once the shader object has been destroyed
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub(crate) fn mark_destroyed(&mut self) {
        self.destroyed = true;
    }
}

#[cfg(test)]
#[path = "compiled_shader_tests.rs"]
mod tests;
