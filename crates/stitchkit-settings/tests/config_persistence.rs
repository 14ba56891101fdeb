use stitchkit_settings::{Config, SettingsError};
use tempfile::TempDir;

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stitchkit.toml");

    let mut config = Config::default();
    config.import.scale = 254.0;
    config.import.show_jump_wires = false;
    config.render.create_material = false;
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_round_trip_in_nested_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("stitchkit.json");

    let mut config = Config::default();
    config.render.section_lift = 0.001;
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.render.section_lift, 0.001);
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"import": {"scale": -5.0}}"#).unwrap();

    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::Config(_))
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::LoadError(_))
    ));
    assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
}

#[test]
fn test_save_rejects_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stitchkit.toml");

    let mut config = Config::default();
    config.render.z_height = f64::INFINITY;
    assert!(config.save_to_file(&path).is_err());
    assert!(!path.exists());
}
