use svgoverlay_core::{LabelSegment, OverlayResolver, Resolution, resolve};
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

fn fixtures_root() -> PathBuf {
    workspace_root().join("fixtures")
}

/// Copies `fixtures/<name>/<name>.{svg,pdf_tex}` into a scratch dir so the label-free output never
/// lands in the fixture tree.
fn stage_fixture(name: &str, tmp: &Path) -> PathBuf {
    let src = fixtures_root().join(name);
    for ext in ["svg", "pdf_tex"] {
        let file = format!("{name}.{ext}");
        std::fs::copy(src.join(&file), tmp.join(&file))
            .unwrap_or_else(|e| panic!("failed to copy fixture {file}: {e}"));
    }
    tmp.join(format!("{name}.svg"))
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn pump_fixture_resolves_placed_labels() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let diagram = stage_fixture("pump", tmp.path());

    let Resolution::Available(overlay) = resolve(&diagram) else {
        panic!("expected overlay for {}", diagram.display());
    };

    let texts: Vec<String> = overlay
        .matches
        .iter()
        .map(|m| m.label.plain_text())
        .collect();
    assert_eq!(texts, vec!["Sensor A", "Pump\ninlet"]);

    let sensor = &overlay.matches[0];
    assert_close(sensor.position.x, 0.25);
    assert_close(sensor.position.y, 0.2);

    let pump = &overlay.matches[1];
    assert_eq!(
        pump.label.segments(),
        &[
            LabelSegment::text("Pump"),
            LabelSegment::LineBreak,
            LabelSegment::text("inlet"),
        ]
    );
    assert_close(pump.position.x, 0.6);
    assert_close(pump.position.y, 0.6);
}

#[test]
fn pump_fixture_label_free_copy_keeps_artwork() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let diagram = stage_fixture("pump", tmp.path());
    let original = std::fs::read_to_string(&diagram).expect("read fixture");

    let overlay = OverlayResolver::default()
        .try_resolve(&diagram)
        .expect("resolve fixture");
    assert_eq!(
        overlay.label_free_path,
        tmp.path().join("pump_txt_removed.svg")
    );

    let label_free = std::fs::read_to_string(&overlay.label_free_path).expect("read output");
    assert!(!label_free.contains("<text"));
    assert!(!label_free.contains("Draft note"));
    assert!(label_free.contains(r#"id="rect1""#));
    assert!(label_free.contains("<sodipodi:namedview"));
    assert!(label_free.starts_with("<?xml version=\"1.0\""));
    roxmltree::Document::parse(&label_free).expect("label-free copy is well-formed");

    assert_eq!(
        std::fs::read_to_string(&diagram).expect("reread fixture"),
        original
    );
}

#[test]
fn pump_fixture_without_companion_is_unavailable() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let diagram = stage_fixture("pump", tmp.path());
    std::fs::remove_file(tmp.path().join("pump.pdf_tex")).expect("remove companion");

    assert_eq!(resolve(&diagram), Resolution::Unavailable);
    assert!(!tmp.path().join("pump_txt_removed.svg").exists());
}
