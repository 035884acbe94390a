fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let env = callouts::Environment::new();
    let patch = callouts::StylePatch::default();

    let result = callouts::rectangle_callout(
        (160.0, 60.0),
        (60.0, 200.0),
        ["Supply meets", "demand here"],
        &patch,
        &env,
    );

    match result {
        Ok(callout) => println!("{}", callouts::svg_document(&[callout], 320.0, 240.0)),
        Err(e) => eprintln!("Error: {}", e),
    }
}
