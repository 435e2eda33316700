use super::*;
use crate::foundation::core::Canvas;
use crate::surface::model::Shape;

#[test]
fn emits_six_polygons_in_painters_order() {
    let spec = CubeSpec::default();
    let mut surface = Surface::new(Canvas::business_card());
    render_cube(&mut surface, &spec).unwrap();

    assert_eq!(surface.len(), 6);
    let faces = project_cube_faces(&spec).unwrap();
    for (i, face) in Face::DRAW_ORDER.iter().enumerate() {
        match &surface.shapes()[i] {
            Shape::Polygon { points, .. } => {
                assert_eq!(points.as_slice(), faces.quad(*face).as_slice(), "{face:?}");
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }
}

#[test]
fn side_face_always_uses_the_accent_fill() {
    let spec = CubeSpec {
        fill_color: "hotpink".to_string(),
        ..CubeSpec::default()
    };
    let mut surface = Surface::new(Canvas::business_card());
    render_cube(&mut surface, &spec).unwrap();

    for (i, shape) in surface.shapes().iter().enumerate() {
        let Shape::Polygon { fill, .. } = shape else {
            panic!("expected polygon");
        };
        if Face::DRAW_ORDER[i] == Face::Side {
            assert_eq!(fill, SIDE_ACCENT_FILL);
        } else {
            assert_eq!(fill, "hotpink");
        }
    }
}

#[test]
fn rendering_is_additive() {
    let mut surface = Surface::new(Canvas::business_card());
    render_cube(&mut surface, &CubeSpec::default()).unwrap();
    render_cube(&mut surface, &CubeSpec::default()).unwrap();
    assert_eq!(surface.len(), 12);
}

#[test]
fn invalid_spec_adds_nothing() {
    let mut surface = Surface::new(Canvas::business_card());
    let bad = CubeSpec {
        size: -1.0,
        ..CubeSpec::default()
    };
    assert!(render_cube(&mut surface, &bad).is_err());
    assert!(surface.is_empty());
}
