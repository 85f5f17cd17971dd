/// VertexLayout - one mesh's buffers plus its declared attribute set
///
/// Bound to exactly one vertex buffer and optionally one index buffer.
/// Created once per mesh by the `LayoutBinder` and reused across frames
/// without reallocation.

use rustc_hash::FxHashMap;

use crate::layout::attribute::AttributeDescriptor;
use crate::layout::layout_binder::BufferHandle;

/// An ordered set of attribute descriptors over one vertex buffer
pub struct VertexLayout {
    /// Vertex array object capturing the attribute and element state
    vao: u32,
    /// The one vertex buffer all attributes source from
    vertex_buffer: BufferHandle,
    /// Optional index buffer (captured in the VAO at creation)
    index_buffer: Option<BufferHandle>,
    /// Number of 32-bit indices in the index buffer (0 if non-indexed)
    index_count: u32,
    /// Attributes in declaration order
    attributes: Vec<AttributeDescriptor>,
    /// Location to attribute index mapping
    locations: FxHashMap<u32, usize>,
    destroyed: bool,
}

impl VertexLayout {
    pub(crate) fn new(
        vao: u32,
        vertex_buffer: BufferHandle,
        index_buffer: Option<BufferHandle>,
        index_count: u32,
    ) -> Self {
        Self {
            vao,
            vertex_buffer,
            index_buffer,
            index_count,
            attributes: Vec::new(),
            locations: FxHashMap::default(),
            destroyed: false,
        }
    }

    // ===== ACCESSORS =====

    /// Raw driver name of the vertex array object
    pub fn vao(&self) -> u32 {
        self.vao
    }

    /// The vertex buffer this layout slices
    pub fn vertex_buffer(&self) -> BufferHandle {
        self.vertex_buffer
    }

    /// The index buffer, if this layout draws indexed
    pub fn index_buffer(&self) -> Option<BufferHandle> {
        self.index_buffer
    }

    /// True when the layout draws indexed
    pub fn is_indexed(&self) -> bool {
        self.index_buffer.is_some()
    }

    /// Number of 32-bit indices (0 if non-indexed)
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Declared attributes in declaration order
    pub fn attributes(&self) -> &[AttributeDescriptor] {
        &self.attributes
    }

    /// Number of declared attributes
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Look up a declared attribute by its shader location
    pub fn attribute_at_location(&self, location: u32) -> Option<&AttributeDescriptor> {
        self.locations.get(&location).map(|&index| &self.attributes[index])
    }

    /// The stride every declared attribute agreed on (None before the first
    /// declaration)
    pub fn stride(&self) -> Option<u32> {
        self.attributes.first().map(|a| a.stride)
    }

    /// True once the layout's vertex array has been destroyed
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    // ===== INTERNAL =====

    /// Record a declared attribute (validated by the binder)
    pub(crate) fn push_attribute(&mut self, descriptor: AttributeDescriptor) {
        let index = self.attributes.len();
        self.locations.insert(descriptor.location, index);
        self.attributes.push(descriptor);
    }

    pub(crate) fn mark_destroyed(&mut self) {
        self.destroyed = true;
    }
}

#[cfg(test)]
#[path = "vertex_layout_tests.rs"]
mod tests;
