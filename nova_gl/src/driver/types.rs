/// Driver-level enums shared by the core and the backends

use bitflags::bitflags;

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment/Pixel shader
    Fragment,
}

/// Buffer binding target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferTarget {
    /// Vertex data (GL_ARRAY_BUFFER)
    Array,
    /// Index data (GL_ELEMENT_ARRAY_BUFFER)
    ElementArray,
}

/// Buffer upload usage hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Written once, drawn many times
    StaticDraw,
    /// Rewritten frequently
    DynamicDraw,
}

/// Data type of one vertex attribute component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttribDataType {
    /// 32-bit float
    F32,
    /// Signed 8-bit integer
    I8,
    /// Unsigned 8-bit integer
    U8,
    /// Signed 16-bit integer
    I16,
    /// Unsigned 16-bit integer
    U16,
    /// Signed 32-bit integer
    I32,
    /// Unsigned 32-bit integer
    U32,
}

impl AttribDataType {
    /// Size in bytes of one component of this type
    pub fn size_bytes(&self) -> u32 {
        match self {
            AttribDataType::I8 | AttribDataType::U8 => 1,
            AttribDataType::I16 | AttribDataType::U16 => 2,
            AttribDataType::F32 | AttribDataType::I32 | AttribDataType::U32 => 4,
        }
    }
}

/// Primitive topology for draw calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveMode {
    /// Triangle list
    Triangles,
    /// Triangle strip
    TriangleStrip,
    /// Line list
    Lines,
    /// Point list
    Points,
}

bitflags! {
    /// Framebuffer clear mask
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearMask: u32 {
        /// Color buffer
        const COLOR = 1 << 0;
        /// Depth buffer
        const DEPTH = 1 << 1;
        /// Stencil buffer
        const STENCIL = 1 << 2;
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
