use expenses_mockup::{Error, MockupConfig};

fn config_into(dir: &std::path::Path, name: &str) -> MockupConfig {
    MockupConfig {
        output_path: dir.join(name),
        ..Default::default()
    }
}

#[test]
fn run_writes_one_decodable_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_into(dir.path(), "ui-mockup-modern.png");

    let summary = expenses_mockup::run(&config).expect("run");

    assert_eq!(summary.path, config.output_path);
    assert!(summary.bytes > 0);
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);

    let bytes = std::fs::read(&config.output_path).unwrap();
    assert_eq!(bytes.len(), summary.bytes);
    assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgb8();
    assert_eq!(img.dimensions(), (800, 1400));
    // Top-left corner only ever receives the background
    assert_eq!(img.get_pixel(0, 0).0, [15, 15, 15]);
}

#[test]
fn missing_fonts_degrade_instead_of_failing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = MockupConfig {
        regular_font: dir.path().join("missing-regular.ttf"),
        bold_font: dir.path().join("missing-bold.ttf"),
        ..config_into(dir.path(), "fallback.png")
    };

    let summary = expenses_mockup::run(&config).expect("run with bitmap fallback");
    assert_eq!((summary.width, summary.height), (800, 1400));
    assert!(config.output_path.exists());
}

#[test]
fn two_runs_share_geometry() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first = expenses_mockup::run(&config_into(dir.path(), "a.png")).expect("first run");
    let second = expenses_mockup::run(&config_into(dir.path(), "b.png")).expect("second run");

    assert_eq!((first.width, first.height), (second.width, second.height));
    assert_eq!(first.fingerprint, second.fingerprint);
}

#[test]
fn missing_output_directory_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_into(&dir.path().join("does/not/exist"), "out.png");

    match expenses_mockup::run(&config) {
        Err(Error::Io { path, .. }) => assert_eq!(path, config.output_path),
        other => panic!("expected an I/O error, got {:?}", other),
    }
    assert!(!config.output_path.exists());
}
