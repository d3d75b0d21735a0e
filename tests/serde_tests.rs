// tests/serde_tests.rs

// Only compile and run these tests if the "serde" feature is enabled.
#![cfg(feature = "serde")]

use lintra::*;

#[test]
fn vector_serializes_as_named_fields() {
    let v = Vector3::new(0.5, -1.0, 2.0);
    let serialized = serde_json::to_string(&v).unwrap();
    assert_eq!(serialized, r#"{"x":0.5,"y":-1.0,"z":2.0}"#);
    let deserialized: Vector3 = serde_json::from_str(&serialized).unwrap();
    assert_eq!(v, deserialized);
}

#[test]
fn matrix_serializes_as_rows() {
    let m = transform::translation(Vector3::new(1.0, 2.0, 3.0));
    let serialized = serde_json::to_string(&m).unwrap();
    assert!(serialized.starts_with("[[1.0,0.0,0.0,1.0],"));
    let deserialized: Matrix4 = serde_json::from_str(&serialized).unwrap();
    assert_eq!(m, deserialized);
}

#[test]
fn layout_survives_serialization() {
    let layout = Vertex3dColor::vertex_layout();
    let serialized = serde_json::to_string(&layout).unwrap();
    let deserialized: VertexBufferLayout = serde_json::from_str(&serialized).unwrap();
    assert_eq!(layout, deserialized);
    assert_eq!(deserialized.stride(), 40);
}
