//! Unit tests for MockDriver
//!
//! Verifies the mock models enough GL object state to back the core's
//! tests: object tables, bindings, VAO-captured state and the simulated
//! compiler/linker.

use crate::driver::mock_driver::MockDriver;
use crate::driver::{GlDriver, ShaderStage, BufferTarget, BufferUsage, AttribDataType};

const GOOD_SOURCE: &str = "#version 330 core\nvoid main() { }";
const BAD_SOURCE: &str = "this is not glsl";

// ============================================================================
// SHADER OBJECT TESTS
// ============================================================================

#[test]
fn test_compile_good_source_succeeds() {
    let mut driver = MockDriver::new();
    let shader = driver.create_shader(ShaderStage::Vertex);
    driver.shader_source(shader, GOOD_SOURCE);
    driver.compile_shader(shader);

    assert!(driver.compile_status(shader));
    assert!(driver.shader_info_log(shader).is_empty());
}

#[test]
fn test_compile_bad_source_fails_with_log() {
    let mut driver = MockDriver::new();
    let shader = driver.create_shader(ShaderStage::Fragment);
    driver.shader_source(shader, BAD_SOURCE);
    driver.compile_shader(shader);

    assert!(!driver.compile_status(shader));
    assert!(!driver.shader_info_log(shader).is_empty());
}

#[test]
fn test_compile_without_source_fails() {
    let mut driver = MockDriver::new();
    let shader = driver.create_shader(ShaderStage::Vertex);
    driver.compile_shader(shader);

    assert!(!driver.compile_status(shader));
}

#[test]
fn test_delete_shader_removes_record() {
    let mut driver = MockDriver::new();
    let shader = driver.create_shader(ShaderStage::Vertex);
    assert!(driver.shader(shader).is_some());

    driver.delete_shader(shader);
    assert!(driver.shader(shader).is_none());

    // Deleting again (or name 0) stays a no-op
    driver.delete_shader(shader);
    driver.delete_shader(0);
}

// ============================================================================
// PROGRAM OBJECT TESTS
// ============================================================================

fn compiled_shader(driver: &mut MockDriver, stage: ShaderStage, source: &str) -> u32 {
    let shader = driver.create_shader(stage);
    driver.shader_source(shader, source);
    driver.compile_shader(shader);
    shader
}

#[test]
fn test_link_vertex_plus_fragment_succeeds() {
    let mut driver = MockDriver::new();
    let vs = compiled_shader(&mut driver, ShaderStage::Vertex, GOOD_SOURCE);
    let fs = compiled_shader(&mut driver, ShaderStage::Fragment, GOOD_SOURCE);

    let program = driver.create_program();
    driver.attach_shader(program, vs);
    driver.attach_shader(program, fs);
    driver.link_program(program);

    assert!(driver.link_status(program));
    assert!(driver.program_info_log(program).is_empty());
}

#[test]
fn test_link_missing_fragment_fails() {
    let mut driver = MockDriver::new();
    let vs = compiled_shader(&mut driver, ShaderStage::Vertex, GOOD_SOURCE);

    let program = driver.create_program();
    driver.attach_shader(program, vs);
    driver.link_program(program);

    assert!(!driver.link_status(program));
    assert!(driver.program_info_log(program).contains("fragment"));
}

#[test]
fn test_link_with_failed_shader_fails() {
    let mut driver = MockDriver::new();
    let vs = compiled_shader(&mut driver, ShaderStage::Vertex, GOOD_SOURCE);
    let fs = compiled_shader(&mut driver, ShaderStage::Fragment, BAD_SOURCE);

    let program = driver.create_program();
    driver.attach_shader(program, vs);
    driver.attach_shader(program, fs);
    driver.link_program(program);

    assert!(!driver.link_status(program));
    assert!(driver.program_info_log(program).contains("failed to compile"));
}

#[test]
fn test_use_program_tracks_active() {
    let mut driver = MockDriver::new();
    let program = driver.create_program();

    driver.use_program(program);
    assert_eq!(driver.active_program(), program);

    driver.use_program(0);
    assert_eq!(driver.active_program(), 0);
}

// ============================================================================
// BUFFER OBJECT TESTS
// ============================================================================

#[test]
fn test_buffer_data_stores_bytes() {
    let mut driver = MockDriver::new();
    let buffer = driver.gen_buffer();
    driver.bind_buffer(BufferTarget::Array, buffer);
    driver
        .buffer_data(BufferTarget::Array, &[1, 2, 3, 4], BufferUsage::StaticDraw)
        .unwrap();
    driver.bind_buffer(BufferTarget::Array, 0);

    let record = driver.buffer(buffer).unwrap();
    assert_eq!(record.data, vec![1, 2, 3, 4]);
    assert_eq!(record.usage, Some(BufferUsage::StaticDraw));
}

#[test]
fn test_buffer_data_without_binding_is_invalid() {
    let mut driver = MockDriver::new();
    let _buffer = driver.gen_buffer();

    let result = driver.buffer_data(BufferTarget::Array, &[1, 2], BufferUsage::StaticDraw);
    assert!(result.is_err());
    assert!(!driver.invalid_ops().is_empty());
}

#[test]
fn test_fail_next_buffer_data() {
    let mut driver = MockDriver::new();
    let buffer = driver.gen_buffer();
    driver.bind_buffer(BufferTarget::Array, buffer);

    driver.fail_next_buffer_data();
    let first = driver.buffer_data(BufferTarget::Array, &[0; 8], BufferUsage::StaticDraw);
    assert!(first.is_err());

    // Only the next call fails
    let second = driver.buffer_data(BufferTarget::Array, &[0; 8], BufferUsage::StaticDraw);
    assert!(second.is_ok());
}

#[test]
fn test_delete_buffer_clears_binding() {
    let mut driver = MockDriver::new();
    let buffer = driver.gen_buffer();
    driver.bind_buffer(BufferTarget::Array, buffer);

    driver.delete_buffer(buffer);
    assert_eq!(driver.bound_array_buffer(), 0);
    assert!(driver.buffer(buffer).is_none());
}

// ============================================================================
// VERTEX ARRAY TESTS
// ============================================================================

#[test]
fn test_vertex_attrib_pointer_captures_bound_buffer() {
    let mut driver = MockDriver::new();
    let buffer = driver.gen_buffer();
    let vao = driver.gen_vertex_array();

    driver.bind_vertex_array(vao);
    driver.bind_buffer(BufferTarget::Array, buffer);
    driver.vertex_attrib_pointer(0, 3, AttribDataType::F32, false, 12, 0);
    driver.enable_vertex_attrib_array(0);
    driver.bind_buffer(BufferTarget::Array, 0);
    driver.bind_vertex_array(0);

    let record = driver.vertex_array(vao).unwrap();
    let pointer = record.pointers.get(&0).unwrap();
    assert_eq!(pointer.buffer, buffer);
    assert_eq!(pointer.components, 3);
    assert_eq!(pointer.stride, 12);
    assert!(record.enabled.contains(&0));
    assert!(driver.invalid_ops().is_empty());
}

#[test]
fn test_vertex_attrib_pointer_without_vao_is_invalid() {
    let mut driver = MockDriver::new();
    let buffer = driver.gen_buffer();
    driver.bind_buffer(BufferTarget::Array, buffer);

    driver.vertex_attrib_pointer(0, 3, AttribDataType::F32, false, 12, 0);
    assert!(!driver.invalid_ops().is_empty());
}

#[test]
fn test_element_binding_is_vao_state() {
    let mut driver = MockDriver::new();
    let index_buffer = driver.gen_buffer();
    let vao = driver.gen_vertex_array();

    driver.bind_vertex_array(vao);
    driver.bind_buffer(BufferTarget::ElementArray, index_buffer);
    driver.bind_vertex_array(0);

    // Captured into the VAO, not into the ambient slot
    assert_eq!(driver.vertex_array(vao).unwrap().element_buffer, index_buffer);

    driver.bind_vertex_array(vao);
    let (bound_vao, element, _) = driver.draw_state();
    assert_eq!(bound_vao, vao);
    assert_eq!(element, index_buffer);
}

#[test]
fn test_draw_state_snapshot() {
    let mut driver = MockDriver::new();
    let vao = driver.gen_vertex_array();
    let program = driver.create_program();

    driver.bind_vertex_array(vao);
    driver.use_program(program);

    assert_eq!(driver.draw_state(), (vao, 0, program));
}

#[test]
fn test_calls_are_traced() {
    let mut driver = MockDriver::new();
    let vao = driver.gen_vertex_array();
    driver.bind_vertex_array(vao);

    let calls = driver.calls();
    assert!(calls.iter().any(|c| c.starts_with("gen_vertex_array")));
    assert!(calls.iter().any(|c| c == &format!("bind_vertex_array({})", vao)));
}
