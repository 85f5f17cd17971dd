//! Unit tests for driver-level types
//!
//! Tests AttribDataType sizes, enum equality/copy semantics and ClearMask.

use crate::driver::{
    ShaderStage, BufferTarget, BufferUsage, AttribDataType, PrimitiveMode, ClearMask,
};

// ============================================================================
// ATTRIB DATA TYPE TESTS
// ============================================================================

#[test]
fn test_attrib_data_type_size_bytes() {
    assert_eq!(AttribDataType::I8.size_bytes(), 1);
    assert_eq!(AttribDataType::U8.size_bytes(), 1);
    assert_eq!(AttribDataType::I16.size_bytes(), 2);
    assert_eq!(AttribDataType::U16.size_bytes(), 2);
    assert_eq!(AttribDataType::F32.size_bytes(), 4);
    assert_eq!(AttribDataType::I32.size_bytes(), 4);
    assert_eq!(AttribDataType::U32.size_bytes(), 4);
}

#[test]
fn test_attrib_data_type_span_calculations() {
    // A vec3 of floats covers 12 bytes
    let span = 3 * AttribDataType::F32.size_bytes();
    assert_eq!(span, 12);

    // A vec2 of floats covers 8 bytes
    let span = 2 * AttribDataType::F32.size_bytes();
    assert_eq!(span, 8);
}

// ============================================================================
// ENUM SEMANTICS TESTS
// ============================================================================

#[test]
fn test_shader_stage_equality() {
    assert_eq!(ShaderStage::Vertex, ShaderStage::Vertex);
    assert_eq!(ShaderStage::Fragment, ShaderStage::Fragment);
    assert_ne!(ShaderStage::Vertex, ShaderStage::Fragment);
}

#[test]
fn test_shader_stage_copy() {
    let stage1 = ShaderStage::Vertex;
    let stage2 = stage1; // Copy, not move
    assert_eq!(stage1, stage2);
}

#[test]
fn test_buffer_target_equality() {
    assert_eq!(BufferTarget::Array, BufferTarget::Array);
    assert_ne!(BufferTarget::Array, BufferTarget::ElementArray);
}

#[test]
fn test_buffer_usage_debug() {
    assert!(format!("{:?}", BufferUsage::StaticDraw).contains("StaticDraw"));
    assert!(format!("{:?}", BufferUsage::DynamicDraw).contains("DynamicDraw"));
}

#[test]
fn test_primitive_mode_equality() {
    assert_eq!(PrimitiveMode::Triangles, PrimitiveMode::Triangles);
    assert_ne!(PrimitiveMode::Triangles, PrimitiveMode::Lines);
}

// ============================================================================
// CLEAR MASK TESTS
// ============================================================================

#[test]
fn test_clear_mask_combination() {
    let mask = ClearMask::COLOR | ClearMask::DEPTH;
    assert!(mask.contains(ClearMask::COLOR));
    assert!(mask.contains(ClearMask::DEPTH));
    assert!(!mask.contains(ClearMask::STENCIL));
}

#[test]
fn test_clear_mask_bits_are_distinct() {
    assert_eq!(ClearMask::COLOR.bits() & ClearMask::DEPTH.bits(), 0);
    assert_eq!(ClearMask::COLOR.bits() & ClearMask::STENCIL.bits(), 0);
    assert_eq!(ClearMask::DEPTH.bits() & ClearMask::STENCIL.bits(), 0);
}

#[test]
fn test_clear_mask_empty() {
    let mask = ClearMask::empty();
    assert!(!mask.contains(ClearMask::COLOR));
    assert!(mask.is_empty());
}
