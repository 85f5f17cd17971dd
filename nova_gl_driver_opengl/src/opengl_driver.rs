/// OpenGlDriver - GlDriver implementation over the raw OpenGL entry points
///
/// Every method is a thin unsafe wrapper around the corresponding gl call;
/// validation and binding discipline live in the core. The GL context must
/// be current on the calling thread, and one context must never be driven
/// from two threads - the core serializes access through its mutex, the
/// rest is the host's responsibility.

use std::ffi::c_void;

use gl::types::{GLchar, GLint, GLsizei, GLsizeiptr, GLuint};

use nova_gl::novagl::{GlDriver, Error, Result};
use nova_gl::novagl::driver::{
    ShaderStage, BufferTarget, BufferUsage, AttribDataType, PrimitiveMode, ClearMask,
};
use nova_gl::{core_info, core_warn};

use crate::conversions::{
    shader_stage_to_gl, buffer_target_to_gl, buffer_usage_to_gl, attrib_type_to_gl,
    primitive_mode_to_gl, clear_mask_to_gl,
};

/// OpenGL 3.3 driver implementation
pub struct OpenGlDriver {
    _private: (),
}

impl OpenGlDriver {
    /// Bind the GL entry points from a procedure-address resolver
    ///
    /// The resolver typically wraps the windowing library's
    /// `get_proc_address`. The context must be current; this is the only
    /// place entry points are loaded, calling it again merely re-resolves
    /// the same pointers.
    pub fn from_loader<F>(mut loader: F) -> Self
    where
        F: FnMut(&str) -> *const c_void,
    {
        gl::load_with(|symbol| loader(symbol));

        // GetString needs a current context; a null here means the caller
        // broke the precondition
        let version = unsafe {
            let ptr = gl::GetString(gl::VERSION);
            if ptr.is_null() {
                None
            } else {
                Some(
                    std::ffi::CStr::from_ptr(ptr as *const std::os::raw::c_char)
                        .to_string_lossy()
                        .into_owned(),
                )
            }
        };
        match version {
            Some(version) => {
                core_info!("novagl::opengl::Driver", "entry points bound, GL version: {}", version);
            }
            None => {
                core_warn!("novagl::opengl::Driver", "entry points bound but no context appears current");
            }
        }

        Self { _private: () }
    }

    /// Read a shader object's full info log
    fn read_shader_log(shader: GLuint) -> String {
        unsafe {
            let mut len: GLint = 0;
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
            if len <= 0 {
                return String::new();
            }
            let mut buf = vec![0u8; len as usize];
            let mut written: GLsizei = 0;
            gl::GetShaderInfoLog(shader, len, &mut written, buf.as_mut_ptr() as *mut GLchar);
            buf.truncate(written.max(0) as usize);
            String::from_utf8_lossy(&buf).into_owned()
        }
    }

    /// Read a program object's full info log
    fn read_program_log(program: GLuint) -> String {
        unsafe {
            let mut len: GLint = 0;
            gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
            if len <= 0 {
                return String::new();
            }
            let mut buf = vec![0u8; len as usize];
            let mut written: GLsizei = 0;
            gl::GetProgramInfoLog(program, len, &mut written, buf.as_mut_ptr() as *mut GLchar);
            buf.truncate(written.max(0) as usize);
            String::from_utf8_lossy(&buf).into_owned()
        }
    }
}

impl GlDriver for OpenGlDriver {
    // ===== SHADER OBJECTS =====

    fn create_shader(&mut self, stage: ShaderStage) -> u32 {
        unsafe { gl::CreateShader(shader_stage_to_gl(stage)) }
    }

    fn shader_source(&mut self, shader: u32, source: &str) {
        // One string, explicit length - the text needs no NUL terminator
        let ptr = source.as_ptr() as *const GLchar;
        let len = source.len() as GLint;
        unsafe {
            gl::ShaderSource(shader, 1, &ptr, &len);
        }
    }

    fn compile_shader(&mut self, shader: u32) {
        unsafe {
            gl::CompileShader(shader);
        }
    }

    fn compile_status(&mut self, shader: u32) -> bool {
        let mut status: GLint = 0;
        unsafe {
            gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
        }
        status == gl::TRUE as GLint
    }

    fn shader_info_log(&mut self, shader: u32) -> String {
        Self::read_shader_log(shader)
    }

    fn delete_shader(&mut self, shader: u32) {
        unsafe {
            gl::DeleteShader(shader);
        }
    }

    // ===== PROGRAM OBJECTS =====

    fn create_program(&mut self) -> u32 {
        unsafe { gl::CreateProgram() }
    }

    fn attach_shader(&mut self, program: u32, shader: u32) {
        unsafe {
            gl::AttachShader(program, shader);
        }
    }

    fn link_program(&mut self, program: u32) {
        unsafe {
            gl::LinkProgram(program);
        }
    }

    fn link_status(&mut self, program: u32) -> bool {
        let mut status: GLint = 0;
        unsafe {
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);
        }
        status == gl::TRUE as GLint
    }

    fn program_info_log(&mut self, program: u32) -> String {
        Self::read_program_log(program)
    }

    fn delete_program(&mut self, program: u32) {
        unsafe {
            gl::DeleteProgram(program);
        }
    }

    fn use_program(&mut self, program: u32) {
        unsafe {
            gl::UseProgram(program);
        }
    }

    // ===== BUFFER OBJECTS =====

    fn gen_buffer(&mut self) -> u32 {
        let mut name: GLuint = 0;
        unsafe {
            gl::GenBuffers(1, &mut name);
        }
        name
    }

    fn bind_buffer(&mut self, target: BufferTarget, buffer: u32) {
        unsafe {
            gl::BindBuffer(buffer_target_to_gl(target), buffer);
        }
    }

    fn buffer_data(&mut self, target: BufferTarget, data: &[u8], usage: BufferUsage) -> Result<()> {
        unsafe {
            // Drain stale error state so the check below sees only this call
            while gl::GetError() != gl::NO_ERROR {}

            gl::BufferData(
                buffer_target_to_gl(target),
                data.len() as GLsizeiptr,
                data.as_ptr() as *const c_void,
                buffer_usage_to_gl(usage),
            );

            match gl::GetError() {
                gl::NO_ERROR => Ok(()),
                gl::OUT_OF_MEMORY => {
                    Err(Error::BufferUpload("driver reported GL_OUT_OF_MEMORY".to_string()))
                }
                other => Err(Error::BackendError(format!(
                    "glBufferData raised error 0x{:04x}",
                    other
                ))),
            }
        }
    }

    fn delete_buffer(&mut self, buffer: u32) {
        unsafe {
            gl::DeleteBuffers(1, &buffer);
        }
    }

    // ===== VERTEX ARRAY OBJECTS =====

    fn gen_vertex_array(&mut self) -> u32 {
        let mut name: GLuint = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut name);
        }
        name
    }

    fn bind_vertex_array(&mut self, vao: u32) {
        unsafe {
            gl::BindVertexArray(vao);
        }
    }

    fn delete_vertex_array(&mut self, vao: u32) {
        unsafe {
            gl::DeleteVertexArrays(1, &vao);
        }
    }

    fn vertex_attrib_pointer(
        &mut self,
        location: u32,
        components: u32,
        data_type: AttribDataType,
        normalized: bool,
        stride: u32,
        offset: u32,
    ) {
        unsafe {
            gl::VertexAttribPointer(
                location,
                components as GLint,
                attrib_type_to_gl(data_type),
                normalized as u8,
                stride as GLsizei,
                offset as usize as *const c_void,
            );
        }
    }

    fn enable_vertex_attrib_array(&mut self, location: u32) {
        unsafe {
            gl::EnableVertexAttribArray(location);
        }
    }

    // ===== FRAME OPERATIONS =====

    fn set_clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        unsafe {
            gl::ClearColor(r, g, b, a);
        }
    }

    fn clear(&mut self, mask: ClearMask) {
        unsafe {
            gl::Clear(clear_mask_to_gl(mask));
        }
    }

    fn set_viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        unsafe {
            gl::Viewport(x, y, width as GLsizei, height as GLsizei);
        }
    }

    fn draw_arrays(&mut self, mode: PrimitiveMode, first: u32, count: u32) {
        unsafe {
            gl::DrawArrays(primitive_mode_to_gl(mode), first as GLint, count as GLsizei);
        }
    }

    fn draw_elements(&mut self, mode: PrimitiveMode, count: u32, offset: u32) {
        unsafe {
            gl::DrawElements(
                primitive_mode_to_gl(mode),
                count as GLsizei,
                gl::UNSIGNED_INT,
                offset as usize as *const c_void,
            );
        }
    }
}
