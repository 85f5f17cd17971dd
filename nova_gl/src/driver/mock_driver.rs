/// Mock driver for unit tests (no GPU required)
///
/// Models just enough GL object state to verify the core's behavior:
/// object tables for shaders/programs/buffers/vertex arrays, the current
/// bindings, VAO-captured attribute pointers and element-buffer bindings,
/// and a call trace. Operations that would be errors against a real core
/// profile context (attribute pointers without a bound VAO or buffer) are
/// recorded in `invalid_ops` so tests can assert the core never relies on
/// ambient state.
///
/// Compilation is simulated: any source containing `void main` compiles,
/// anything else fails with a non-empty GLSL-style log. Linking succeeds
/// exactly when one compiled vertex and one compiled fragment shader are
/// attached.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::driver::gl_driver::GlDriver;
use crate::driver::types::{
    ShaderStage, BufferTarget, BufferUsage, AttribDataType, PrimitiveMode, ClearMask,
};

// ============================================================================
// Mock object records
// ============================================================================

/// Recorded state of one mock shader object
#[derive(Debug, Clone)]
pub struct MockShader {
    pub stage: ShaderStage,
    pub source: String,
    pub compiled: bool,
    pub compile_ok: bool,
    pub info_log: String,
}

/// Recorded state of one mock program object
#[derive(Debug, Clone, Default)]
pub struct MockProgram {
    pub attached: Vec<u32>,
    pub linked: bool,
    pub link_ok: bool,
    pub info_log: String,
}

/// Recorded state of one mock buffer object
#[derive(Debug, Clone, Default)]
pub struct MockBuffer {
    pub data: Vec<u8>,
    pub usage: Option<BufferUsage>,
}

/// One attribute pointer captured by a vertex array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockAttribPointer {
    /// Array buffer that was bound when the pointer was declared
    pub buffer: u32,
    pub components: u32,
    pub data_type: AttribDataType,
    pub normalized: bool,
    pub stride: u32,
    pub offset: u32,
}

/// Recorded state of one mock vertex array object
#[derive(Debug, Clone, Default)]
pub struct MockVertexArray {
    /// location -> captured pointer
    pub pointers: FxHashMap<u32, MockAttribPointer>,
    /// Enabled attribute locations
    pub enabled: Vec<u32>,
    /// Element buffer captured while this VAO was bound
    pub element_buffer: u32,
}

// ============================================================================
// Mock driver
// ============================================================================

/// GL driver double tracking object state without a GPU
#[derive(Debug, Default)]
pub struct MockDriver {
    next_name: u32,

    shaders: FxHashMap<u32, MockShader>,
    programs: FxHashMap<u32, MockProgram>,
    buffers: FxHashMap<u32, MockBuffer>,
    vertex_arrays: FxHashMap<u32, MockVertexArray>,

    bound_array_buffer: u32,
    /// Element binding outside any VAO (GL keeps one per VAO)
    unattached_element_buffer: u32,
    bound_vertex_array: u32,
    active_program: u32,

    clear_color: (f32, f32, f32, f32),
    viewport: (i32, i32, u32, u32),

    /// Chronological trace of driver calls
    calls: Vec<String>,
    /// Operations that would raise GL errors in a core profile context
    invalid_ops: Vec<String>,

    fail_next_buffer_data: bool,
}

impl MockDriver {
    /// Create a new mock driver with no objects
    pub fn new() -> Self {
        Self {
            next_name: 1,
            ..Default::default()
        }
    }

    fn alloc_name(&mut self) -> u32 {
        let name = self.next_name;
        self.next_name += 1;
        name
    }

    // ===== TEST ACCESSORS =====

    /// Look up a shader record
    pub fn shader(&self, name: u32) -> Option<&MockShader> {
        self.shaders.get(&name)
    }

    /// Look up a program record
    pub fn program(&self, name: u32) -> Option<&MockProgram> {
        self.programs.get(&name)
    }

    /// Look up a buffer record
    pub fn buffer(&self, name: u32) -> Option<&MockBuffer> {
        self.buffers.get(&name)
    }

    /// Look up a vertex array record
    pub fn vertex_array(&self, name: u32) -> Option<&MockVertexArray> {
        self.vertex_arrays.get(&name)
    }

    /// Currently bound vertex array (0 = none)
    pub fn bound_vertex_array(&self) -> u32 {
        self.bound_vertex_array
    }

    /// Currently bound array buffer (0 = none)
    pub fn bound_array_buffer(&self) -> u32 {
        self.bound_array_buffer
    }

    /// Currently active program (0 = none)
    pub fn active_program(&self) -> u32 {
        self.active_program
    }

    /// Current clear color
    pub fn clear_color(&self) -> (f32, f32, f32, f32) {
        self.clear_color
    }

    /// Current viewport
    pub fn viewport(&self) -> (i32, i32, u32, u32) {
        self.viewport
    }

    /// Number of live buffer objects
    pub fn live_buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Number of live shader objects
    pub fn live_shader_count(&self) -> usize {
        self.shaders.len()
    }

    /// Chronological call trace
    pub fn calls(&self) -> &[String] {
        &self.calls
    }

    /// Operations that would have raised GL errors (empty = clean run)
    pub fn invalid_ops(&self) -> &[String] {
        &self.invalid_ops
    }

    /// Snapshot of the bound state relevant to a draw call
    ///
    /// (vertex array, element buffer of that array, active program)
    pub fn draw_state(&self) -> (u32, u32, u32) {
        let element = self
            .vertex_arrays
            .get(&self.bound_vertex_array)
            .map(|vao| vao.element_buffer)
            .unwrap_or(self.unattached_element_buffer);
        (self.bound_vertex_array, element, self.active_program)
    }

    /// Make the next `buffer_data` call report an allocation failure
    pub fn fail_next_buffer_data(&mut self) {
        self.fail_next_buffer_data = true;
    }
}

impl GlDriver for MockDriver {
    // ===== SHADER OBJECTS =====

    fn create_shader(&mut self, stage: ShaderStage) -> u32 {
        let name = self.alloc_name();
        self.shaders.insert(name, MockShader {
            stage,
            source: String::new(),
            compiled: false,
            compile_ok: false,
            info_log: String::new(),
        });
        self.calls.push(format!("create_shader({:?}) -> {}", stage, name));
        name
    }

    fn shader_source(&mut self, shader: u32, source: &str) {
        if let Some(record) = self.shaders.get_mut(&shader) {
            record.source = source.to_string();
        } else {
            self.invalid_ops.push(format!("shader_source on unknown shader {}", shader));
        }
        self.calls.push(format!("shader_source({})", shader));
    }

    fn compile_shader(&mut self, shader: u32) {
        if let Some(record) = self.shaders.get_mut(&shader) {
            record.compiled = true;
            // Crude stand-in for a GLSL front end: an entry point is enough
            if record.source.contains("void main") {
                record.compile_ok = true;
                record.info_log.clear();
            } else {
                record.compile_ok = false;
                record.info_log =
                    "ERROR: 0:1: compile failed: no entry point found in source".to_string();
            }
        } else {
            self.invalid_ops.push(format!("compile_shader on unknown shader {}", shader));
        }
        self.calls.push(format!("compile_shader({})", shader));
    }

    fn compile_status(&mut self, shader: u32) -> bool {
        self.shaders.get(&shader).map(|r| r.compile_ok).unwrap_or(false)
    }

    fn shader_info_log(&mut self, shader: u32) -> String {
        self.shaders.get(&shader).map(|r| r.info_log.clone()).unwrap_or_default()
    }

    fn delete_shader(&mut self, shader: u32) {
        if shader != 0 {
            self.shaders.remove(&shader);
        }
        self.calls.push(format!("delete_shader({})", shader));
    }

    // ===== PROGRAM OBJECTS =====

    fn create_program(&mut self) -> u32 {
        let name = self.alloc_name();
        self.programs.insert(name, MockProgram::default());
        self.calls.push(format!("create_program() -> {}", name));
        name
    }

    fn attach_shader(&mut self, program: u32, shader: u32) {
        if let Some(record) = self.programs.get_mut(&program) {
            record.attached.push(shader);
        } else {
            self.invalid_ops.push(format!("attach_shader on unknown program {}", program));
        }
        self.calls.push(format!("attach_shader({}, {})", program, shader));
    }

    fn link_program(&mut self, program: u32) {
        self.calls.push(format!("link_program({})", program));

        let Some(record) = self.programs.get(&program) else {
            self.invalid_ops.push(format!("link_program on unknown program {}", program));
            return;
        };

        let mut vertex_count = 0;
        let mut fragment_count = 0;
        let mut failure: Option<String> = None;

        for &shader in &record.attached {
            match self.shaders.get(&shader) {
                Some(s) if s.compile_ok => match s.stage {
                    ShaderStage::Vertex => vertex_count += 1,
                    ShaderStage::Fragment => fragment_count += 1,
                },
                Some(s) => {
                    failure = Some(format!(
                        "error: attached {:?} shader failed to compile",
                        s.stage
                    ));
                    break;
                }
                None => {
                    failure = Some(format!("error: attached shader {} does not exist", shader));
                    break;
                }
            }
        }

        if failure.is_none() && (vertex_count == 0 || fragment_count == 0) {
            failure = Some(
                "error: program must have one vertex and one fragment shader".to_string(),
            );
        }

        let record = self.programs.get_mut(&program).expect("checked above");
        record.linked = true;
        match failure {
            Some(log) => {
                record.link_ok = false;
                record.info_log = log;
            }
            None => {
                record.link_ok = true;
                record.info_log.clear();
            }
        }
    }

    fn link_status(&mut self, program: u32) -> bool {
        self.programs.get(&program).map(|r| r.link_ok).unwrap_or(false)
    }

    fn program_info_log(&mut self, program: u32) -> String {
        self.programs.get(&program).map(|r| r.info_log.clone()).unwrap_or_default()
    }

    fn delete_program(&mut self, program: u32) {
        if program != 0 {
            self.programs.remove(&program);
            if self.active_program == program {
                self.active_program = 0;
            }
        }
        self.calls.push(format!("delete_program({})", program));
    }

    fn use_program(&mut self, program: u32) {
        self.active_program = program;
        self.calls.push(format!("use_program({})", program));
    }

    // ===== BUFFER OBJECTS =====

    fn gen_buffer(&mut self) -> u32 {
        let name = self.alloc_name();
        self.buffers.insert(name, MockBuffer::default());
        self.calls.push(format!("gen_buffer() -> {}", name));
        name
    }

    fn bind_buffer(&mut self, target: BufferTarget, buffer: u32) {
        match target {
            BufferTarget::Array => self.bound_array_buffer = buffer,
            BufferTarget::ElementArray => {
                // The element binding is vertex-array state in GL
                if self.bound_vertex_array != 0 {
                    if let Some(vao) = self.vertex_arrays.get_mut(&self.bound_vertex_array) {
                        vao.element_buffer = buffer;
                    }
                } else {
                    self.unattached_element_buffer = buffer;
                }
            }
        }
        self.calls.push(format!("bind_buffer({:?}, {})", target, buffer));
    }

    fn buffer_data(&mut self, target: BufferTarget, data: &[u8], usage: BufferUsage) -> Result<()> {
        self.calls.push(format!("buffer_data({:?}, {} bytes, {:?})", target, data.len(), usage));

        if self.fail_next_buffer_data {
            self.fail_next_buffer_data = false;
            return Err(Error::BufferUpload("out of memory".to_string()));
        }

        let bound = match target {
            BufferTarget::Array => self.bound_array_buffer,
            BufferTarget::ElementArray => {
                if self.bound_vertex_array != 0 {
                    self.vertex_arrays
                        .get(&self.bound_vertex_array)
                        .map(|vao| vao.element_buffer)
                        .unwrap_or(0)
                } else {
                    self.unattached_element_buffer
                }
            }
        };

        if bound == 0 {
            self.invalid_ops.push(format!("buffer_data with no buffer bound to {:?}", target));
            return Err(Error::BufferUpload(format!("no buffer bound to {:?}", target)));
        }

        if let Some(record) = self.buffers.get_mut(&bound) {
            record.data = data.to_vec();
            record.usage = Some(usage);
        }
        Ok(())
    }

    fn delete_buffer(&mut self, buffer: u32) {
        if buffer != 0 {
            self.buffers.remove(&buffer);
            if self.bound_array_buffer == buffer {
                self.bound_array_buffer = 0;
            }
            if self.unattached_element_buffer == buffer {
                self.unattached_element_buffer = 0;
            }
        }
        self.calls.push(format!("delete_buffer({})", buffer));
    }

    // ===== VERTEX ARRAY OBJECTS =====

    fn gen_vertex_array(&mut self) -> u32 {
        let name = self.alloc_name();
        self.vertex_arrays.insert(name, MockVertexArray::default());
        self.calls.push(format!("gen_vertex_array() -> {}", name));
        name
    }

    fn bind_vertex_array(&mut self, vao: u32) {
        self.bound_vertex_array = vao;
        self.calls.push(format!("bind_vertex_array({})", vao));
    }

    fn delete_vertex_array(&mut self, vao: u32) {
        if vao != 0 {
            self.vertex_arrays.remove(&vao);
            if self.bound_vertex_array == vao {
                self.bound_vertex_array = 0;
            }
        }
        self.calls.push(format!("delete_vertex_array({})", vao));
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
        self.calls.push(format!(
            "vertex_attrib_pointer(loc {}, {} x {:?}, stride {}, offset {})",
            location, components, data_type, stride, offset
        ));

        if self.bound_vertex_array == 0 {
            self.invalid_ops.push(format!(
                "vertex_attrib_pointer(loc {}) with no vertex array bound", location
            ));
            return;
        }
        if self.bound_array_buffer == 0 {
            self.invalid_ops.push(format!(
                "vertex_attrib_pointer(loc {}) with no array buffer bound", location
            ));
            return;
        }

        let buffer = self.bound_array_buffer;
        if let Some(vao) = self.vertex_arrays.get_mut(&self.bound_vertex_array) {
            vao.pointers.insert(location, MockAttribPointer {
                buffer,
                components,
                data_type,
                normalized,
                stride,
                offset,
            });
        }
    }

    fn enable_vertex_attrib_array(&mut self, location: u32) {
        self.calls.push(format!("enable_vertex_attrib_array({})", location));

        if self.bound_vertex_array == 0 {
            self.invalid_ops.push(format!(
                "enable_vertex_attrib_array({}) with no vertex array bound", location
            ));
            return;
        }
        if let Some(vao) = self.vertex_arrays.get_mut(&self.bound_vertex_array) {
            if !vao.enabled.contains(&location) {
                vao.enabled.push(location);
            }
        }
    }

    // ===== FRAME OPERATIONS =====

    fn set_clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.clear_color = (r, g, b, a);
        self.calls.push(format!("set_clear_color({}, {}, {}, {})", r, g, b, a));
    }

    fn clear(&mut self, mask: ClearMask) {
        self.calls.push(format!("clear({:?})", mask));
    }

    fn set_viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.viewport = (x, y, width, height);
        self.calls.push(format!("set_viewport({}, {}, {}, {})", x, y, width, height));
    }

    fn draw_arrays(&mut self, mode: PrimitiveMode, first: u32, count: u32) {
        self.calls.push(format!("draw_arrays({:?}, {}, {})", mode, first, count));
        if self.bound_vertex_array == 0 {
            self.invalid_ops.push("draw_arrays with no vertex array bound".to_string());
        }
    }

    fn draw_elements(&mut self, mode: PrimitiveMode, count: u32, offset: u32) {
        self.calls.push(format!("draw_elements({:?}, {}, {})", mode, count, offset));
        let (vao, element, _) = self.draw_state();
        if vao == 0 {
            self.invalid_ops.push("draw_elements with no vertex array bound".to_string());
        } else if element == 0 {
            self.invalid_ops.push("draw_elements with no element buffer in the vertex array".to_string());
        }
    }
}

#[cfg(test)]
#[path = "mock_driver_tests.rs"]
mod tests;
