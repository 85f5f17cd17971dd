/// LayoutBinder - uploads buffers and wires them to shader attributes
///
/// The binding discipline is explicit: every operation that touches driver
/// binding state names its buffer, binds it, works, and unbinds before
/// returning. Nothing here depends on a binding left over from an earlier
/// call, which is the bug class the tutorial originals kept hitting.

use std::sync::{Arc, Mutex};

use slotmap::{SlotMap, new_key_type};

use crate::driver::{GlDriver, BufferTarget, BufferUsage};
use crate::error::Result;
use crate::layout::attribute::AttributeDescriptor;
use crate::layout::vertex_layout::VertexLayout;
use crate::shader::ShaderProgram;
use crate::{core_bail, core_err, core_debug, core_trace};

new_key_type! {
    /// Generation-checked handle to a buffer owned by a LayoutBinder
    pub struct BufferHandle;
}

/// Size in bytes of one 32-bit index
const INDEX_SIZE: u64 = 4;

/// Internal record of one uploaded buffer
struct BufferRecord {
    /// Raw driver name
    raw: u32,
    /// Role the buffer was uploaded for
    target: BufferTarget,
    /// Size in bytes
    size: u64,
}

/// Uploads vertex/index data and declares attribute layouts
///
/// Owns the buffers it uploads; handles are generation-checked slotmap
/// keys, so a destroyed handle can never alias a live buffer.
pub struct LayoutBinder {
    driver: Arc<Mutex<dyn GlDriver>>,
    buffers: SlotMap<BufferHandle, BufferRecord>,
}

impl LayoutBinder {
    /// Create a binder on a driver
    pub fn new(driver: Arc<Mutex<dyn GlDriver>>) -> Self {
        Self {
            driver,
            buffers: SlotMap::with_key(),
        }
    }

    // ===== UPLOADS =====

    /// Upload raw interleaved vertex bytes to a new GPU buffer
    ///
    /// The bytes are copied verbatim. Whether their length is a multiple of
    /// the eventual stride is NOT checked here (the stride is unknown until
    /// attributes are declared); a mismatch surfaces later as corrupted
    /// rendering, exactly as in the programs this core was distilled from.
    ///
    /// # Errors
    ///
    /// Configuration error on an empty upload; BufferUpload when the driver
    /// signals an allocation failure.
    pub fn upload_vertex_data(&mut self, bytes: &[u8], usage: BufferUsage) -> Result<BufferHandle> {
        if bytes.is_empty() {
            core_bail!("novagl::LayoutBinder", "vertex upload is empty");
        }
        self.upload(bytes, BufferTarget::Array, usage)
    }

    /// Upload a float slice, the tutorials' native vertex format
    pub fn upload_vertex_floats(&mut self, data: &[f32], usage: BufferUsage) -> Result<BufferHandle> {
        if data.is_empty() {
            core_bail!("novagl::LayoutBinder", "vertex upload is empty");
        }
        self.upload(bytemuck::cast_slice(data), BufferTarget::Array, usage)
    }

    /// Upload 32-bit indices to a new GPU buffer for indexed drawing
    pub fn upload_index_data(&mut self, indices: &[u32]) -> Result<BufferHandle> {
        if indices.is_empty() {
            core_bail!("novagl::LayoutBinder", "index upload is empty");
        }
        self.upload(bytemuck::cast_slice(indices), BufferTarget::ElementArray, BufferUsage::StaticDraw)
    }

    /// Shared upload path
    ///
    /// Buffer objects carry no target in GL; data is pushed through the
    /// array binding point regardless of role, and index buffers are
    /// attached to the element slot of a VAO at layout creation. This keeps
    /// the upload independent of any vertex-array binding.
    fn upload(&mut self, bytes: &[u8], target: BufferTarget, usage: BufferUsage) -> Result<BufferHandle> {
        let raw = {
            let mut driver = self.driver.lock().unwrap();
            let raw = driver.gen_buffer();
            driver.bind_buffer(BufferTarget::Array, raw);
            let uploaded = driver.buffer_data(BufferTarget::Array, bytes, usage);
            driver.bind_buffer(BufferTarget::Array, 0);
            if let Err(e) = uploaded {
                driver.delete_buffer(raw);
                return Err(e);
            }
            raw
        };

        let handle = self.buffers.insert(BufferRecord {
            raw,
            target,
            size: bytes.len() as u64,
        });
        core_debug!(
            "novagl::LayoutBinder",
            "uploaded {} bytes to {:?} buffer {}",
            bytes.len(),
            target,
            raw
        );
        Ok(handle)
    }

    /// Size in bytes of an uploaded buffer (None for a destroyed handle)
    pub fn buffer_size(&self, handle: BufferHandle) -> Option<u64> {
        self.buffers.get(handle).map(|record| record.size)
    }

    // ===== LAYOUT CREATION =====

    /// Create a layout over one vertex buffer and an optional index buffer
    ///
    /// Generates the vertex array and captures the element-buffer binding
    /// into it; attributes are declared afterwards, one call per attribute.
    ///
    /// # Errors
    ///
    /// Configuration error when a handle is dead or a buffer is used in the
    /// wrong role.
    pub fn create_layout(
        &mut self,
        vertex_buffer: BufferHandle,
        index_buffer: Option<BufferHandle>,
    ) -> Result<VertexLayout> {
        let vertex_record = self.buffers.get(vertex_buffer)
            .ok_or_else(|| core_err!("novagl::LayoutBinder", "vertex buffer handle is dead"))?;
        if vertex_record.target != BufferTarget::Array {
            core_bail!("novagl::LayoutBinder", "buffer {} was not uploaded as vertex data", vertex_record.raw);
        }

        let mut index_raw = 0;
        let mut index_count = 0;
        if let Some(handle) = index_buffer {
            let index_record = self.buffers.get(handle)
                .ok_or_else(|| core_err!("novagl::LayoutBinder", "index buffer handle is dead"))?;
            if index_record.target != BufferTarget::ElementArray {
                core_bail!("novagl::LayoutBinder", "buffer {} was not uploaded as index data", index_record.raw);
            }
            index_raw = index_record.raw;
            index_count = (index_record.size / INDEX_SIZE) as u32;
        }

        let vao = {
            let mut driver = self.driver.lock().unwrap();
            let vao = driver.gen_vertex_array();
            driver.bind_vertex_array(vao);
            if index_raw != 0 {
                // Captured into the VAO's element slot
                driver.bind_buffer(BufferTarget::ElementArray, index_raw);
            }
            driver.bind_vertex_array(0);
            // Clear the ambient element binding only after the VAO is off
            if index_raw != 0 {
                driver.bind_buffer(BufferTarget::ElementArray, 0);
            }
            vao
        };

        core_debug!("novagl::LayoutBinder", "created layout vao {} ({} indices)", vao, index_count);
        Ok(VertexLayout::new(vao, vertex_buffer, index_buffer, index_count))
    }

    // ===== ATTRIBUTE DECLARATION =====

    /// Declare one attribute of a layout
    ///
    /// The buffer is an explicit argument and is re-bound internally; the
    /// call never relies on an ambient current binding. Order among
    /// attributes is irrelevant, but each location may only be declared
    /// once and all attributes on the buffer must agree on stride - both
    /// are configuration errors at declaration time, not silent
    /// misrendering later.
    pub fn declare_attribute(
        &mut self,
        layout: &mut VertexLayout,
        program: &ShaderProgram,
        buffer: BufferHandle,
        descriptor: AttributeDescriptor,
    ) -> Result<()> {
        if layout.is_destroyed() {
            core_bail!("novagl::LayoutBinder", "layout vao {} is destroyed", layout.vao());
        }
        if program.is_destroyed() || !program.is_linked() {
            core_bail!(
                "novagl::LayoutBinder",
                "attribute at location {} targets a program that is not usable",
                descriptor.location
            );
        }

        descriptor.validate()?;

        if buffer != layout.vertex_buffer() {
            core_bail!(
                "novagl::LayoutBinder",
                "attribute at location {} must source from the layout's vertex buffer",
                descriptor.location
            );
        }
        let record = self.buffers.get(buffer)
            .ok_or_else(|| core_err!("novagl::LayoutBinder", "vertex buffer handle is dead"))?;

        if let Some(stride) = layout.stride() {
            if stride != descriptor.stride {
                core_bail!(
                    "novagl::LayoutBinder",
                    "stride {} at location {} disagrees with stride {} declared earlier on the same buffer",
                    descriptor.stride,
                    descriptor.location,
                    stride
                );
            }
        }
        if layout.attribute_at_location(descriptor.location).is_some() {
            core_bail!(
                "novagl::LayoutBinder",
                "location {} is already declared on this layout",
                descriptor.location
            );
        }

        {
            let mut driver = self.driver.lock().unwrap();
            driver.bind_vertex_array(layout.vao());
            driver.bind_buffer(BufferTarget::Array, record.raw);
            driver.vertex_attrib_pointer(
                descriptor.location,
                descriptor.components,
                descriptor.data_type,
                descriptor.normalized,
                descriptor.stride,
                descriptor.offset,
            );
            driver.enable_vertex_attrib_array(descriptor.location);
            driver.bind_buffer(BufferTarget::Array, 0);
            driver.bind_vertex_array(0);
        }

        layout.push_attribute(descriptor);
        core_debug!(
            "novagl::LayoutBinder",
            "declared location {} on vao {} (stride {}, offset {})",
            descriptor.location,
            layout.vao(),
            descriptor.stride,
            descriptor.offset
        );
        Ok(())
    }

    // ===== DRAW BINDING =====

    /// Activate a layout as the current draw source
    ///
    /// Binds the vertex array, which carries the vertex buffer pointers,
    /// the enabled locations and the element buffer. Idempotent:
    /// consecutive calls produce the same bound state.
    ///
    /// # Errors
    ///
    /// Configuration error when the layout is destroyed or has no declared
    /// attributes.
    pub fn bind_for_draw(&self, layout: &VertexLayout) -> Result<()> {
        if layout.is_destroyed() {
            core_bail!("novagl::LayoutBinder", "cannot bind destroyed layout vao {}", layout.vao());
        }
        if layout.attribute_count() == 0 {
            core_bail!("novagl::LayoutBinder", "layout vao {} has no declared attributes", layout.vao());
        }

        self.driver.lock().unwrap().bind_vertex_array(layout.vao());
        Ok(())
    }

    // ===== DESTRUCTION =====

    /// Destroy an uploaded buffer
    ///
    /// Idempotent: a dead handle is ignored.
    pub fn destroy_buffer(&mut self, handle: BufferHandle) {
        match self.buffers.remove(handle) {
            Some(record) => {
                self.driver.lock().unwrap().delete_buffer(record.raw);
                core_debug!("novagl::LayoutBinder", "destroyed buffer {}", record.raw);
            }
            None => {
                core_trace!("novagl::LayoutBinder", "buffer already destroyed, ignoring");
            }
        }
    }

    /// Destroy a layout's vertex array
    ///
    /// Idempotent. The layout's buffers are owned separately and stay
    /// alive; destroy them through `destroy_buffer`.
    pub fn destroy_layout(&mut self, layout: &mut VertexLayout) {
        if layout.is_destroyed() {
            core_trace!("novagl::LayoutBinder", "layout already destroyed, ignoring");
            return;
        }
        self.driver.lock().unwrap().delete_vertex_array(layout.vao());
        layout.mark_destroyed();
    }
}

#[cfg(test)]
#[path = "layout_binder_tests.rs"]
mod tests;
