//! Tests for YAML configuration files

use pose_semaphore::{
    config::{Config, EXAMPLE_CONFIG},
    renderer::Show3d,
    tracker::{InputSource, LandmarkModel},
    Error,
};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_round_trip_through_file() {
    let mut config = Config::default();
    config.tracker.input = InputSource::File(PathBuf::from("walk.mp4"));
    config.tracker.lm_model = LandmarkModel::Lite;
    config.tracker.internal_fps = Some(20);
    config.renderer.show_3d = Show3d::Image;
    config.renderer.output = Some(PathBuf::from("out.avi"));
    config.display.show_semaphore = true;

    let file = NamedTempFile::new().unwrap();
    config.to_file(file.path()).unwrap();
    let loaded = Config::from_file(file.path()).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_example_config_loads() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(EXAMPLE_CONFIG.as_bytes()).unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config, Config::default());
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"tracker: [not, a, map]\n").unwrap();

    assert!(matches!(Config::from_file(file.path()), Err(Error::ConfigError(_))));
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        Config::from_file("/nonexistent/pose-semaphore.yaml"),
        Err(Error::Io(_))
    ));
}

#[test]
fn test_validate_missing_input_file() {
    let mut config = Config::default();
    config.tracker.input = InputSource::File(PathBuf::from("/nonexistent/clip.mp4"));
    assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
}

#[test]
fn test_validate_existing_model_file() {
    let model = NamedTempFile::new().unwrap();
    let mut config = Config::default();
    config.tracker.lm_model = LandmarkModel::Path(model.path().to_path_buf());
    config.tracker.pd_model = Some(model.path().to_path_buf());
    assert!(config.validate().is_ok());
}
