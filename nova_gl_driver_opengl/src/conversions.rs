/// Conversions from driver-level enums to GL enums

use gl::types::{GLbitfield, GLenum};
use nova_gl::novagl::driver::{
    ShaderStage, BufferTarget, BufferUsage, AttribDataType, PrimitiveMode, ClearMask,
};

/// Convert a shader stage to its GL shader type
pub(crate) fn shader_stage_to_gl(stage: ShaderStage) -> GLenum {
    match stage {
        ShaderStage::Vertex => gl::VERTEX_SHADER,
        ShaderStage::Fragment => gl::FRAGMENT_SHADER,
    }
}

/// Convert a buffer target to its GL binding point
pub(crate) fn buffer_target_to_gl(target: BufferTarget) -> GLenum {
    match target {
        BufferTarget::Array => gl::ARRAY_BUFFER,
        BufferTarget::ElementArray => gl::ELEMENT_ARRAY_BUFFER,
    }
}

/// Convert an upload usage hint to its GL usage enum
pub(crate) fn buffer_usage_to_gl(usage: BufferUsage) -> GLenum {
    match usage {
        BufferUsage::StaticDraw => gl::STATIC_DRAW,
        BufferUsage::DynamicDraw => gl::DYNAMIC_DRAW,
    }
}

/// Convert an attribute component type to its GL type enum
pub(crate) fn attrib_type_to_gl(data_type: AttribDataType) -> GLenum {
    match data_type {
        AttribDataType::F32 => gl::FLOAT,
        AttribDataType::I8 => gl::BYTE,
        AttribDataType::U8 => gl::UNSIGNED_BYTE,
        AttribDataType::I16 => gl::SHORT,
        AttribDataType::U16 => gl::UNSIGNED_SHORT,
        AttribDataType::I32 => gl::INT,
        AttribDataType::U32 => gl::UNSIGNED_INT,
    }
}

/// Convert a primitive mode to its GL draw mode
pub(crate) fn primitive_mode_to_gl(mode: PrimitiveMode) -> GLenum {
    match mode {
        PrimitiveMode::Triangles => gl::TRIANGLES,
        PrimitiveMode::TriangleStrip => gl::TRIANGLE_STRIP,
        PrimitiveMode::Lines => gl::LINES,
        PrimitiveMode::Points => gl::POINTS,
    }
}

/// Convert a clear mask to the GL bitfield
pub(crate) fn clear_mask_to_gl(mask: ClearMask) -> GLbitfield {
    let mut bits: GLbitfield = 0;
    if mask.contains(ClearMask::COLOR) {
        bits |= gl::COLOR_BUFFER_BIT;
    }
    if mask.contains(ClearMask::DEPTH) {
        bits |= gl::DEPTH_BUFFER_BIT;
    }
    if mask.contains(ClearMask::STENCIL) {
        bits |= gl::STENCIL_BUFFER_BIT;
    }
    bits
}

#[cfg(test)]
#[path = "conversions_tests.rs"]
mod tests;
