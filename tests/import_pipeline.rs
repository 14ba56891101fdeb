use stitchkit::{import_pattern, Config, Point2, Rgb, StitchDocument};
use tempfile::TempDir;

const DOCUMENT: &str = r#"{
    "events": [
        {"x": 0, "y": 0, "command": 0},
        {"x": 10000, "y": 0, "command": 0},
        {"x": 20000, "y": 0, "command": 1},
        {"x": 30000, "y": 0, "command": 0},
        {"x": 40000, "y": 0, "command": 7},
        {"x": 50000, "y": 0, "command": 0},
        {"x": 0, "y": 0, "command": 4}
    ],
    "palette": [[0.2, 0.4, 0.6]]
}"#;

fn write_document(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("pattern.json");
    std::fs::write(&path, DOCUMENT).unwrap();
    path
}

#[test]
fn test_import_with_jump_wires() {
    let dir = TempDir::new().unwrap();
    let document = StitchDocument::load(&write_document(&dir)).unwrap();

    let report = import_pattern(&document, &Config::default()).unwrap();
    let points: Vec<&[Point2]> = report
        .sections
        .iter()
        .map(|section| section.points.as_slice())
        .collect();

    assert_eq!(
        points,
        vec![
            &[
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(3.0, 0.0)
            ][..],
            &[Point2::new(4.0, 0.0), Point2::new(5.0, 0.0)][..],
            &[][..],
        ]
    );
    assert_eq!(report.stats.unknown_count(), 1);
    assert_eq!(report.summary().unknown_commands, 1);
    assert_eq!(report.bounds.width(), 5.0);
}

#[test]
fn test_import_with_hidden_jumps() {
    let dir = TempDir::new().unwrap();
    let document = StitchDocument::load(&write_document(&dir)).unwrap();

    let mut config = Config::default();
    config.import.show_jump_wires = false;
    let report = import_pattern(&document, &config).unwrap();

    assert_eq!(report.sections.len(), 4);
    assert_eq!(
        report.sections[1].points,
        vec![Point2::new(3.0, 0.0)],
        "the jump target is not drawn"
    );
    assert!(!report.sections[1].is_jump_only);
    assert!(report
        .plan
        .sections
        .iter()
        .all(|plan| plan.color == Some(Rgb::new(0.2, 0.4, 0.6))));
}

#[test]
fn test_config_file_drives_import() {
    let dir = TempDir::new().unwrap();
    let document = StitchDocument::load(&write_document(&dir)).unwrap();

    let config_path = dir.path().join("stitchkit.toml");
    std::fs::write(
        &config_path,
        "[import]\nscale = 5000.0\n\n[render]\nsection_lift = 0.5\n",
    )
    .unwrap();
    let config = Config::load_from_file(&config_path).unwrap();

    let report = import_pattern(&document, &config).unwrap();
    assert_eq!(report.sections[0].points[1], Point2::new(2.0, 0.0));
    assert_eq!(report.plan.sections[2].lift, 1.0);
}

#[test]
fn test_plan_serializes_for_emitter() {
    let dir = TempDir::new().unwrap();
    let document = StitchDocument::load(&write_document(&dir)).unwrap();
    let report = import_pattern(&document, &Config::default()).unwrap();

    let json = serde_json::to_value(&report.plan).unwrap();
    let sections = json["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0]["thread_number"], 0);
    assert_eq!(sections[0]["arcs"].as_array().unwrap().len(), 3);
    assert_eq!(json["settings"]["create_material"], true);
}

#[test]
fn test_material_opt_out_reaches_plan() {
    let dir = TempDir::new().unwrap();
    let document = StitchDocument::load(&write_document(&dir)).unwrap();

    let config_path = dir.path().join("stitchkit.json");
    std::fs::write(&config_path, r#"{"render": {"create_material": false}}"#).unwrap();
    let config = Config::load_from_file(&config_path).unwrap();

    let report = import_pattern(&document, &config).unwrap();
    assert!(!report.plan.needs_material());

    let json = serde_json::to_value(&report.plan).unwrap();
    assert_eq!(json["settings"]["create_material"], false);
}
