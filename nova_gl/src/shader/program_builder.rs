/// ProgramBuilder - shader compilation and program linking with diagnostics
///
/// The compile/link loop the tutorial programs repeated inline, factored
/// against the driver trait. Failures are reported through the status of
/// the returned object, never as panics: the caller decides whether a
/// broken program is fatal to its frame.

use std::sync::{Arc, Mutex};

use crate::driver::{GlDriver, ShaderStage};
use crate::error::{Error, Result};
use crate::shader::{ShaderSource, CompiledShader, CompileStatus, ShaderProgram, LinkStatus};
use crate::{core_bail, core_debug, core_warn, core_error, core_trace};

/// Builds shader programs against a driver
pub struct ProgramBuilder {
    driver: Arc<Mutex<dyn GlDriver>>,
}

impl ProgramBuilder {
    /// Create a builder on a driver
    pub fn new(driver: Arc<Mutex<dyn GlDriver>>) -> Self {
        Self { driver }
    }

    // ===== COMPILE =====

    /// Compile one shader source
    ///
    /// Never fails: the returned object always carries a handle plus a
    /// status. On failure the status holds the driver's diagnostic log for
    /// this stage (each stage reports its own log). Compilation is
    /// deterministic for fixed source text, so there are no retries.
    pub fn compile(&self, source: &ShaderSource) -> CompiledShader {
        let mut driver = self.driver.lock().unwrap();

        let raw = driver.create_shader(source.stage());
        driver.shader_source(raw, source.code());
        driver.compile_shader(raw);

        let status = if driver.compile_status(raw) {
            core_debug!("novagl::ProgramBuilder", "compiled {:?} shader {}", source.stage(), raw);
            CompileStatus::Success
        } else {
            let log = driver.shader_info_log(raw);
            core_error!(
                "novagl::ProgramBuilder",
                "{:?} shader compilation failed: {}",
                source.stage(),
                log
            );
            CompileStatus::Failure { log }
        };

        CompiledShader::new(raw, source.stage(), status)
    }

    /// Compile, converting a failure status into an error value
    ///
    /// Convenience for hosts that treat a broken shader as fatal.
    pub fn compile_checked(&self, source: &ShaderSource) -> Result<CompiledShader> {
        let shader = self.compile(source);
        match shader.status() {
            CompileStatus::Success => Ok(shader),
            CompileStatus::Failure { log } => Err(Error::ShaderCompile {
                stage: shader.stage(),
                log: log.clone(),
            }),
        }
    }

    // ===== LINK =====

    /// Link compiled shaders into a program
    ///
    /// Attaches each shader to a new program object in sequence order,
    /// links and queries the status. The sequence must contain exactly one
    /// vertex and one fragment shader; violations yield a failed program
    /// (handle 0, descriptive log) without touching the driver.
    pub fn link(&self, shaders: &[&CompiledShader]) -> ShaderProgram {
        let vertex_count = shaders.iter().filter(|s| s.stage() == ShaderStage::Vertex).count();
        let fragment_count = shaders.iter().filter(|s| s.stage() == ShaderStage::Fragment).count();

        if vertex_count != 1 || fragment_count != 1 {
            let log = format!(
                "link requires exactly one vertex and one fragment shader (got {} vertex, {} fragment)",
                vertex_count, fragment_count
            );
            core_error!("novagl::ProgramBuilder", "{}", log);
            return ShaderProgram::new(0, LinkStatus::Failure { log });
        }

        if let Some(dead) = shaders.iter().find(|s| s.is_destroyed()) {
            let log = format!("cannot link destroyed {:?} shader {}", dead.stage(), dead.raw());
            core_error!("novagl::ProgramBuilder", "{}", log);
            return ShaderProgram::new(0, LinkStatus::Failure { log });
        }

        for shader in shaders {
            if !shader.is_compiled() {
                core_warn!(
                    "novagl::ProgramBuilder",
                    "linking with failed {:?} shader {}, link will not succeed",
                    shader.stage(),
                    shader.raw()
                );
            }
        }

        let mut driver = self.driver.lock().unwrap();

        let raw = driver.create_program();
        for shader in shaders {
            driver.attach_shader(raw, shader.raw());
        }
        driver.link_program(raw);

        let status = if driver.link_status(raw) {
            core_debug!("novagl::ProgramBuilder", "linked program {}", raw);
            LinkStatus::Success
        } else {
            let log = driver.program_info_log(raw);
            core_error!("novagl::ProgramBuilder", "program link failed: {}", log);
            LinkStatus::Failure { log }
        };

        ShaderProgram::new(raw, status)
    }

    /// Link, converting a failure status into an error value
    pub fn link_checked(&self, shaders: &[&CompiledShader]) -> Result<ShaderProgram> {
        let program = self.link(shaders);
        match program.status() {
            LinkStatus::Success => Ok(program),
            LinkStatus::Failure { log } => Err(Error::ProgramLink { log: log.clone() }),
        }
    }

    // ===== ACTIVATION =====

    /// Make a program current for subsequent draw calls
    ///
    /// # Errors
    ///
    /// Configuration error if the program failed to link or was destroyed.
    pub fn activate(&self, program: &ShaderProgram) -> Result<()> {
        if program.is_destroyed() {
            core_bail!("novagl::ProgramBuilder", "cannot activate destroyed program {}", program.raw());
        }
        if !program.is_linked() {
            core_bail!("novagl::ProgramBuilder", "cannot activate program {}: link failed", program.raw());
        }

        self.driver.lock().unwrap().use_program(program.raw());
        Ok(())
    }

    // ===== DESTRUCTION =====

    /// Destroy a shader object
    ///
    /// Idempotent: tutorial call sites destroy shaders immediately after
    /// linking and sometimes more than once; later calls are no-ops.
    pub fn destroy_shader(&self, shader: &mut CompiledShader) {
        if shader.is_destroyed() {
            core_trace!("novagl::ProgramBuilder", "shader {} already destroyed", shader.raw());
            return;
        }
        self.driver.lock().unwrap().delete_shader(shader.raw());
        shader.mark_destroyed();
    }

    /// Destroy a program object
    ///
    /// Idempotent; a program that never reached the driver (handle 0) is
    /// only marked destroyed.
    pub fn destroy_program(&self, program: &mut ShaderProgram) {
        if program.is_destroyed() {
            core_trace!("novagl::ProgramBuilder", "program {} already destroyed", program.raw());
            return;
        }
        if program.raw() != 0 {
            self.driver.lock().unwrap().delete_program(program.raw());
        }
        program.mark_destroyed();
    }
}

#[cfg(test)]
#[path = "program_builder_tests.rs"]
mod tests;
