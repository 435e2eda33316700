use super::*;
use crate::foundation::core::Canvas;

fn render_to_string(surface: &Surface) -> String {
    let mut out = Vec::new();
    Svg::write(surface, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn document_wraps_shapes_with_canvas_dimensions() {
    let surface = Surface::new(Canvas::new(100.0, 50.0).unwrap());
    let doc = render_to_string(&surface);
    assert!(doc.starts_with(
        r#"<svg width="100px" height="50px" xmlns="http://www.w3.org/2000/svg">"#
    ));
    assert!(doc.trim_end().ends_with("</svg>"));
}

#[test]
fn polygon_serializes_points_and_opacities() {
    let mut surface = Surface::new(Canvas::new(100.0, 50.0).unwrap());
    surface.add_polygon(
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.5),
            Point::new(0.0, 10.5),
        ],
        "#D1E2F2",
        "#4365E1",
        0.5,
        1.0,
    );
    let doc = render_to_string(&surface);
    assert!(doc.contains(
        r##"<polygon points="0,0 10,0 10,10.5 0,10.5" fill="#D1E2F2" stroke="#4365E1" fill-opacity="0.5" stroke-opacity="1"/>"##
    ));
}

#[test]
fn rect_serializes_rounding_and_optional_stroke() {
    let mut surface = Surface::new(Canvas::new(100.0, 50.0).unwrap());
    surface.add_rect(
        Point::new(5.0, 6.0),
        7.0,
        8.0,
        RectStyle {
            fill: "white".to_string(),
            stroke: None,
            opacity: 0.25,
            corner_radius: 1.0,
            ..RectStyle::default()
        },
    );
    let doc = render_to_string(&surface);
    assert!(doc.contains(
        r#"<rect x="5" y="6" width="7" height="8" rx="1" ry="1" fill="white" stroke="none" stroke-width="1" fill-opacity="0.25" stroke-opacity="0.25"/>"#
    ));
}

#[test]
fn text_is_escaped_and_anchored() {
    let mut surface = Surface::new(Canvas::new(100.0, 50.0).unwrap());
    surface.add_text(
        "R&D <lab>",
        Point::new(15.0, 20.0),
        TextStyle {
            font_size: 8.0,
            anchor: TextAnchor::End,
            ..TextStyle::default()
        },
    );
    let doc = render_to_string(&surface);
    assert!(doc.contains(r#"text-anchor="end">R&amp;D &lt;lab&gt;</text>"#));
}

#[test]
fn image_serializes_href_and_placement() {
    let mut surface = Surface::new(Canvas::new(100.0, 50.0).unwrap());
    surface.add_image("qr_code.svg", Point::new(20.0, 20.0), 50.0, 50.0);
    let doc = render_to_string(&surface);
    assert!(
        doc.contains(r#"<image href="qr_code.svg" x="20" y="20" width="50" height="50"/>"#)
    );
}

#[test]
fn identical_surfaces_serialize_byte_identically() {
    let mut a = Surface::new(Canvas::business_card());
    let mut b = Surface::new(Canvas::business_card());
    for s in [&mut a, &mut b] {
        s.add_rect(Point::new(1.0, 2.0), 3.0, 4.0, RectStyle::default());
    }
    assert_eq!(render_to_string(&a), render_to_string(&b));
}

#[test]
fn numbers_use_a_stable_short_form() {
    assert_eq!(num(1.0), "1");
    assert_eq!(num(1.5), "1.5");
    assert_eq!(num(1.0 / 3.0), "0.333");
    assert_eq!(num(-0.0001), "0");
    assert_eq!(num(297.6372), "297.637");
}
