/// GlDriver trait - raw driver entry points
///
/// One method per GL call family used by the core. Implementations:
/// `OpenGlDriver` (nova_gl_driver_opengl crate, real driver) and
/// [`MockDriver`](crate::driver::MockDriver) (in-process, for tests).
///
/// All calls are synchronous and assume a current GL context. The trait is
/// shared as `Arc<Mutex<dyn GlDriver>>`; the mutex serializes access, but
/// driving one GL context from multiple threads remains unsupported and
/// must be avoided by the caller.

use crate::error::Result;
use crate::driver::types::{
    ShaderStage, BufferTarget, BufferUsage, AttribDataType, PrimitiveMode, ClearMask,
};

/// Raw driver entry points
///
/// Object names follow GL conventions: `u32` names, `0` meaning "none".
pub trait GlDriver: Send + Sync {
    // ===== SHADER OBJECTS =====

    /// Create an empty shader object for the given stage
    fn create_shader(&mut self, stage: ShaderStage) -> u32;

    /// Replace the source text of a shader object
    fn shader_source(&mut self, shader: u32, source: &str);

    /// Compile a shader object
    fn compile_shader(&mut self, shader: u32);

    /// Query the compile status of a shader object
    fn compile_status(&mut self, shader: u32) -> bool;

    /// Read the full diagnostic log of a shader object
    ///
    /// Returns an empty string when the driver has nothing to report.
    fn shader_info_log(&mut self, shader: u32) -> String;

    /// Delete a shader object (no-op for name 0)
    fn delete_shader(&mut self, shader: u32);

    // ===== PROGRAM OBJECTS =====

    /// Create an empty program object
    fn create_program(&mut self) -> u32;

    /// Attach a shader object to a program object
    fn attach_shader(&mut self, program: u32, shader: u32);

    /// Link a program object from its attached shaders
    fn link_program(&mut self, program: u32);

    /// Query the link status of a program object
    fn link_status(&mut self, program: u32) -> bool;

    /// Read the full diagnostic log of a program object
    fn program_info_log(&mut self, program: u32) -> String;

    /// Delete a program object (no-op for name 0)
    fn delete_program(&mut self, program: u32);

    /// Make a program current for subsequent draw calls
    fn use_program(&mut self, program: u32);

    // ===== BUFFER OBJECTS =====

    /// Generate a buffer object name
    fn gen_buffer(&mut self) -> u32;

    /// Bind a buffer object to a target (0 unbinds)
    fn bind_buffer(&mut self, target: BufferTarget, buffer: u32);

    /// Upload data to the buffer currently bound to `target`
    ///
    /// Fails only when the driver signals an allocation failure
    /// (`Error::BufferUpload`).
    fn buffer_data(&mut self, target: BufferTarget, data: &[u8], usage: BufferUsage) -> Result<()>;

    /// Delete a buffer object (no-op for name 0)
    fn delete_buffer(&mut self, buffer: u32);

    // ===== VERTEX ARRAY OBJECTS =====

    /// Generate a vertex array object name
    fn gen_vertex_array(&mut self) -> u32;

    /// Bind a vertex array object (0 unbinds)
    fn bind_vertex_array(&mut self, vao: u32);

    /// Delete a vertex array object (no-op for name 0)
    fn delete_vertex_array(&mut self, vao: u32);

    /// Define the layout of one attribute location
    ///
    /// Sources from the buffer currently bound to the array target, into
    /// the vertex array currently bound. The core always brackets this
    /// call with explicit binds; implementations never rely on ambient
    /// state left by earlier calls.
    fn vertex_attrib_pointer(
        &mut self,
        location: u32,
        components: u32,
        data_type: AttribDataType,
        normalized: bool,
        stride: u32,
        offset: u32,
    );

    /// Enable an attribute location in the bound vertex array
    fn enable_vertex_attrib_array(&mut self, location: u32);

    // ===== FRAME OPERATIONS (render-loop collaborators) =====
    //
    // The core itself never issues these; they are exposed so the host's
    // render loop can drive a frame through the same driver handle.

    /// Set the clear color
    fn set_clear_color(&mut self, r: f32, g: f32, b: f32, a: f32);

    /// Clear the framebuffer
    fn clear(&mut self, mask: ClearMask);

    /// Set the viewport rectangle
    fn set_viewport(&mut self, x: i32, y: i32, width: u32, height: u32);

    /// Draw non-indexed vertices from the bound layout
    fn draw_arrays(&mut self, mode: PrimitiveMode, first: u32, count: u32);

    /// Draw indexed vertices (32-bit indices) from the bound layout
    fn draw_elements(&mut self, mode: PrimitiveMode, count: u32, offset: u32);
}
