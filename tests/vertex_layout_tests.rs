// tests/vertex_layout_tests.rs

use lintra::*;

#[test]
fn vertex3d_has_three_attributes_in_field_order() {
    let layout = Vertex3d::vertex_layout();
    let counts: Vec<u32> = layout.attributes().iter().map(|a| a.count).collect();
    assert_eq!(counts, vec![3, 3, 2]);
    assert!(
        layout
            .attributes()
            .iter()
            .all(|a| a.element_type == ElementType::Float32)
    );
}

#[test]
fn vertex3d_descriptors_match_wgpu_formats() {
    let layout = Vertex3d::vertex_layout();
    let attributes = layout.wgpu_attributes().unwrap();

    let expected = [
        (wgpu::VertexFormat::Float32x3, 0, 0),
        (wgpu::VertexFormat::Float32x3, 12, 1),
        (wgpu::VertexFormat::Float32x2, 24, 2),
    ];
    for (attribute, (format, offset, location)) in attributes.iter().zip(expected) {
        assert_eq!(attribute.format, format);
        assert_eq!(attribute.offset, offset);
        assert_eq!(attribute.shader_location, location);
    }

    let buffer_layout = layout.wgpu_layout(&attributes);
    assert_eq!(buffer_layout.array_stride, 32);
    assert_eq!(buffer_layout.attributes.len(), 3);
}

#[test]
fn colored_shapes_use_four_component_color() {
    let layout_2d = Vertex2dColor::vertex_layout();
    assert_eq!(layout_2d.attributes()[1].count, Vector4::COMPONENTS);
    assert_eq!(layout_2d.stride(), 24);

    let layout_3d = Vertex3dColor::vertex_layout();
    assert_eq!(layout_3d.attributes()[2].count, Vector4::COMPONENTS);
    assert_eq!(layout_3d.attributes()[2].offset, 24);
    assert_eq!(layout_3d.stride(), 40);
}

#[test]
fn uploaded_bytes_follow_layout() {
    let vertices = [
        Vertex3dColor::new(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::Y_AXIS,
            Vector4::new(1.0, 0.0, 0.0, 1.0),
        ),
        Vertex3dColor::new(
            Vector3::new(4.0, 5.0, 6.0),
            Vector3::Y_AXIS,
            Vector4::new(0.0, 1.0, 0.0, 1.0),
        ),
    ];
    let layout = Vertex3dColor::vertex_layout();
    let bytes = Vertex3dColor::as_bytes(&vertices);
    assert_eq!(bytes.len() as u64, 2 * layout.stride());

    // Second vertex's color starts at stride + color offset.
    let color_offset = layout.stride() + layout.attributes()[2].offset;
    let start = color_offset as usize;
    let green: &[f32] = bytemuck::cast_slice(&bytes[start..start + 16]);
    assert_eq!(green, &[0.0, 1.0, 0.0, 1.0]);
}

#[test]
fn layouts_can_be_shared_across_threads() {
    let layout = std::sync::Arc::new(Vertex2d::vertex_layout());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let layout = std::sync::Arc::clone(&layout);
            std::thread::spawn(move || layout.stride())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 16);
    }
}

#[test]
fn custom_layout_mixes_element_types() {
    let layout = VertexBufferLayout::new()
        .push(ElementType::Float32, 3)
        .push(ElementType::Unorm8, 4)
        .push(ElementType::Uint16, 2);
    assert_eq!(layout.stride(), 12 + 4 + 4);

    let formats: Vec<_> = layout
        .wgpu_attributes()
        .unwrap()
        .into_iter()
        .map(|a| a.format)
        .collect();
    assert_eq!(
        formats,
        vec![
            wgpu::VertexFormat::Float32x3,
            wgpu::VertexFormat::Unorm8x4,
            wgpu::VertexFormat::Uint16x2,
        ]
    );
}
