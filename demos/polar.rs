fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let env = callouts::Environment::new();
    let patch = callouts::StylePatch {
        angle: Some(-45.0),
        distance: Some(90.0),
        pointer_gap: Some(4.0),
        fill: Some("#eee8d5".to_string()),
        ..Default::default()
    };

    match callouts::ellipse_callout_polar((80.0, 200.0), "Look here", &patch, &env) {
        Ok(callout) => println!("{}", callouts::svg_document(&[callout], 320.0, 240.0)),
        Err(e) => eprintln!("Error: {}", e),
    }
}
