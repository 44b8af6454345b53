//! 3D preview preparation tests

use embodi_canvas::mesh_preview::{MeshPreview, PreviewSource, parse_obj};

const QUAD: &str = "\
v -10 -10 5
v 10 -10 5
v 10 10 5
v -10 10 5
f 1 2 3 4
";

#[test]
fn test_longest_side_fits_extent() {
    let preview = MeshPreview::from_obj(Some(QUAD), (640, 480));
    assert_eq!(preview.source, PreviewSource::Model);
    assert_eq!(preview.center, [0.0, 0.0, 5.0]);

    let framed = preview.framed_vertices();
    let max_x = framed.iter().map(|v| v[0]).fold(f32::MIN, f32::max);
    let min_x = framed.iter().map(|v| v[0]).fold(f32::MAX, f32::min);
    assert!((max_x - min_x - 2.0).abs() < 1e-5);
    assert!(framed.iter().all(|v| v[2].abs() < 1e-6));
    assert!((preview.aspect - 4.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_quad_face_kept_whole() {
    let mesh = parse_obj(QUAD).unwrap();
    assert_eq!(mesh.faces, vec![vec![0, 1, 2, 3]]);
}

#[test]
fn test_single_point_keeps_unit_scale() {
    let preview = MeshPreview::from_obj(Some("v 3 3 3\n"), (100, 100));
    assert_eq!(preview.source, PreviewSource::Model);
    assert_eq!(preview.scale, 1.0);
    assert_eq!(preview.framed_vertices(), vec![[0.0, 0.0, 0.0]]);
}

#[test]
fn test_empty_string_is_placeholder() {
    assert!(MeshPreview::from_obj(Some(""), (100, 100)).is_placeholder());
}
