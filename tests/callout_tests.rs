//! End-to-end construction tests against the public API.

use callouts::{
    AxisTransforms, BBox, CalloutError, Environment, Point, PointSpec, StylePatch,
    ellipse_callout, rectangle_callout, rectangle_callout_polar, svg_document,
};

fn fixed_size(width: f64, height: f64) -> StylePatch {
    StylePatch {
        width: Some(width),
        height: Some(height),
        ..Default::default()
    }
}

#[test]
fn rectangle_end_to_end() {
    let callout = rectangle_callout(
        (100.0, 50.0),
        (200.0, 150.0),
        "Hello",
        &StylePatch::default(),
        &Environment::new(),
    )
    .unwrap();

    let anchors = callout.anchors();
    assert_eq!(anchors.center, Point::new(100.0, 50.0));
    assert_eq!(anchors.pointer, Point::new(200.0, 150.0));
    assert!(callout.outline().is_closed());
    assert!(callout.outline().returns_to_start());
}

#[test]
fn rectangle_path_data_snapshot() {
    let callout = rectangle_callout(
        (100.0, 50.0),
        (200.0, 150.0),
        "Hello",
        &fixed_size(100.0, 60.0),
        &Environment::new(),
    )
    .unwrap();

    insta::assert_snapshot!(
        callout.outline().to_path_data(),
        @"M 54 20 L 146 20 Q 150 20 150 24 L 150 76 Q 150 80 146 80 L 144 80 L 200 150 L 130 80 L 54 80 Q 50 80 50 76 L 50 24 Q 50 20 54 20 Z"
    );
}

#[test]
fn ellipse_tip_leads_the_contour() {
    let callout = ellipse_callout(
        (100.0, 50.0),
        (220.0, 150.0),
        "Hello",
        &StylePatch::default(),
        &Environment::new(),
    )
    .unwrap();

    let d = callout.outline().to_path_data();
    assert!(d.starts_with("M 220 150 L "));
    assert!(d.contains(" A "));
    assert!(d.ends_with(" Z"));
}

#[test]
fn polar_placement_through_the_public_api() {
    let patch = StylePatch {
        angle: Some(90.0),
        distance: Some(80.0),
        pointer_gap: Some(6.0),
        ..Default::default()
    };
    let callout =
        rectangle_callout_polar((50.0, 40.0), "Note", &patch, &Environment::new()).unwrap();

    let anchors = callout.anchors();
    assert!((anchors.center.x - 50.0).abs() < 1e-9);
    assert!((anchors.center.y - 120.0).abs() < 1e-9);
    assert!((anchors.pointer.y - 46.0).abs() < 1e-9);
}

#[test]
fn domain_coordinates_and_element_references_compose() {
    struct Dots;
    impl callouts::ElementLookup for Dots {
        fn bounding_box(&self, reference: &str) -> Option<BBox> {
            (reference == "#equilibrium").then(|| BBox::from_rect(140.0, 100.0, 8.0, 8.0))
        }
    }

    let env = Environment::new()
        .with_coord_system(AxisTransforms {
            to_x: |q: f64| 20.0 + q * 3.0,
            to_y: |p: f64| 350.0 - p * 2.0,
        })
        .with_lookup(Dots);

    let callout = rectangle_callout(
        PointSpec::Domain { q: 80.0, p: 110.0 },
        "#equilibrium",
        "Equilibrium",
        &StylePatch::default(),
        &env,
    )
    .unwrap();

    assert_eq!(callout.anchors().center, Point::new(260.0, 130.0));
    assert_eq!(callout.anchors().pointer, Point::new(144.0, 104.0));
}

#[test]
fn missing_coord_system_surfaces_at_the_entry_point() {
    let err = rectangle_callout(
        PointSpec::Domain { q: 1.0, p: 2.0 },
        (0.0, 0.0),
        "x",
        &StylePatch::default(),
        &Environment::new(),
    )
    .unwrap_err();
    assert!(matches!(err, CalloutError::CoordSystemRequired));
}

#[test]
fn document_snapshot() {
    let callout = rectangle_callout(
        (100.0, 50.0),
        (200.0, 150.0),
        "Hello",
        &fixed_size(100.0, 60.0),
        &Environment::new(),
    )
    .unwrap();

    insta::assert_snapshot!(svg_document(&[callout], 320.0, 240.0), @r##"
    <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 320 240">
    <g class="callout callout-rectangle">
    <path d="M 54 20 L 146 20 Q 150 20 150 24 L 150 76 Q 150 80 146 80 L 144 80 L 200 150 L 130 80 L 54 80 Q 50 80 50 76 L 50 24 Q 50 20 54 20 Z" fill="#fdf6e3" stroke="#586e75" stroke-width="2"/>
    <text x="100" text-anchor="middle" font-size="18" font-family="'Times New Roman', serif" font-style="italic" fill="#586e75"><tspan x="100" y="50" dominant-baseline="central">Hello</tspan></text>
    </g>
    </svg>
    "##);
}
