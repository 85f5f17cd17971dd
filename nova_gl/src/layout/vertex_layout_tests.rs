//! Unit tests for VertexLayout
//!
//! Construction goes through LayoutBinder (the only way to get valid
//! handles); these tests focus on the layout's own bookkeeping.

use crate::layout::{LayoutBinder, AttributeDescriptor};
use crate::driver::mock_driver::MockDriver;
use crate::driver::BufferUsage;
use crate::shader::{ProgramBuilder, ShaderSource, ShaderProgram};
use std::sync::{Arc, Mutex};

// ============================================================================
// Helpers
// ============================================================================

fn create_binder() -> (LayoutBinder, ProgramBuilder) {
    let driver: Arc<Mutex<MockDriver>> = Arc::new(Mutex::new(MockDriver::new()));
    (LayoutBinder::new(driver.clone()), ProgramBuilder::new(driver))
}

fn linked_program(builder: &ProgramBuilder) -> ShaderProgram {
    let vs = builder.compile(&ShaderSource::vertex("void main() { }"));
    let fs = builder.compile(&ShaderSource::fragment("void main() { }"));
    builder.link(&[&vs, &fs])
}

// ============================================================================
// ACCESSOR TESTS
// ============================================================================

#[test]
fn test_new_layout_is_empty() {
    let (mut binder, _) = create_binder();
    let buffer = binder
        .upload_vertex_floats(&[0.0; 9], BufferUsage::StaticDraw)
        .unwrap();
    let layout = binder.create_layout(buffer, None).unwrap();

    assert!(layout.vao() > 0);
    assert_eq!(layout.vertex_buffer(), buffer);
    assert!(layout.index_buffer().is_none());
    assert!(!layout.is_indexed());
    assert_eq!(layout.index_count(), 0);
    assert_eq!(layout.attribute_count(), 0);
    assert!(layout.stride().is_none());
    assert!(!layout.is_destroyed());
}

#[test]
fn test_indexed_layout_counts_indices() {
    let (mut binder, _) = create_binder();
    let vertices = binder
        .upload_vertex_floats(&[0.0; 12], BufferUsage::StaticDraw)
        .unwrap();
    let indices = binder.upload_index_data(&[0, 1, 2, 2, 3, 0]).unwrap();
    let layout = binder.create_layout(vertices, Some(indices)).unwrap();

    assert!(layout.is_indexed());
    assert_eq!(layout.index_buffer(), Some(indices));
    assert_eq!(layout.index_count(), 6);
}

#[test]
fn test_attributes_keep_declaration_order() {
    let (mut binder, programs) = create_binder();
    let program = linked_program(&programs);
    let buffer = binder
        .upload_vertex_floats(&[0.0; 32], BufferUsage::StaticDraw)
        .unwrap();
    let mut layout = binder.create_layout(buffer, None).unwrap();

    // Declared out of location order on purpose
    binder
        .declare_attribute(&mut layout, &program, buffer, AttributeDescriptor::floats(2, 2, 32, 24))
        .unwrap();
    binder
        .declare_attribute(&mut layout, &program, buffer, AttributeDescriptor::floats(0, 3, 32, 0))
        .unwrap();

    let attributes = layout.attributes();
    assert_eq!(attributes.len(), 2);
    assert_eq!(attributes[0].location, 2);
    assert_eq!(attributes[1].location, 0);
}

#[test]
fn test_attribute_at_location() {
    let (mut binder, programs) = create_binder();
    let program = linked_program(&programs);
    let buffer = binder
        .upload_vertex_floats(&[0.0; 24], BufferUsage::StaticDraw)
        .unwrap();
    let mut layout = binder.create_layout(buffer, None).unwrap();

    binder
        .declare_attribute(&mut layout, &program, buffer, AttributeDescriptor::floats(1, 3, 24, 12))
        .unwrap();

    let found = layout.attribute_at_location(1).expect("declared location");
    assert_eq!(found.offset, 12);
    assert!(layout.attribute_at_location(0).is_none());
}

#[test]
fn test_stride_reflects_first_declaration() {
    let (mut binder, programs) = create_binder();
    let program = linked_program(&programs);
    let buffer = binder
        .upload_vertex_floats(&[0.0; 18], BufferUsage::StaticDraw)
        .unwrap();
    let mut layout = binder.create_layout(buffer, None).unwrap();

    assert_eq!(layout.stride(), None);

    binder
        .declare_attribute(&mut layout, &program, buffer, AttributeDescriptor::floats(0, 3, 24, 0))
        .unwrap();
    assert_eq!(layout.stride(), Some(24));
}
