//! Unit tests for ShaderSource

use crate::shader::ShaderSource;
use crate::driver::ShaderStage;

#[test]
fn test_vertex_constructor() {
    let source = ShaderSource::vertex("void main() { }");
    assert_eq!(source.stage(), ShaderStage::Vertex);
    assert_eq!(source.code(), "void main() { }");
}

#[test]
fn test_fragment_constructor() {
    let source = ShaderSource::fragment("void main() { }");
    assert_eq!(source.stage(), ShaderStage::Fragment);
}

#[test]
fn test_new_with_owned_string() {
    let code = String::from("#version 330 core\nvoid main() { }");
    let source = ShaderSource::new(ShaderStage::Vertex, code.clone());
    assert_eq!(source.code(), code);
}

#[test]
fn test_source_is_cloneable_and_comparable() {
    let a = ShaderSource::vertex("void main() { }");
    let b = a.clone();
    assert_eq!(a, b);

    let c = ShaderSource::fragment("void main() { }");
    assert_ne!(a, c); // same text, different stage
}
