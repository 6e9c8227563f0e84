//! Tests for command-line argument parsing

use clap::Parser;
use pose_semaphore::{
    cli::Args,
    config::Config,
    renderer::Show3d,
    tracker::{InputSource, LandmarkModel, TrackerMode},
};
use std::path::PathBuf;

fn parse(args: &[&str]) -> Config {
    let args = Args::try_parse_from(std::iter::once("pose-semaphore").chain(args.iter().copied()))
        .expect("arguments should parse");
    let mut config = Config::default();
    args.apply(&mut config).expect("arguments should apply");
    config
}

#[test]
fn test_help_argument() {
    let result = Args::try_parse_from(["pose-semaphore", "--help"]);

    // Help should cause an error (but a specific help error)
    assert!(result.is_err());
    assert_eq!(result.unwrap_err().kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn test_no_arguments() {
    let config = parse(&[]);
    assert_eq!(config, Config::default());
    assert_eq!(config.tracker.input, InputSource::Rgb);
    assert_eq!(config.tracker.lm_model, LandmarkModel::Full);
    assert_eq!(config.tracker.internal_frame_height, 640);
    assert!(config.tracker.smoothing);
}

#[test]
fn test_tracker_flags() {
    let config = parse(&[
        "-e",
        "-i",
        "dance.mp4",
        "--xyz",
        "-c",
        "--no_smoothing",
        "-f",
        "15",
        "--internal_frame_height",
        "450",
        "-s",
        "-t",
        "--force_detection",
    ]);
    let tracker = &config.tracker;
    assert_eq!(tracker.mode, TrackerMode::Edge);
    assert_eq!(tracker.input, InputSource::File(PathBuf::from("dance.mp4")));
    assert!(tracker.xyz);
    assert!(tracker.crop);
    assert!(!tracker.smoothing);
    assert_eq!(tracker.internal_fps, Some(15));
    assert_eq!(tracker.internal_frame_height, 450);
    assert!(tracker.stats);
    assert!(tracker.trace);
    assert!(tracker.force_detection);
}

#[test]
fn test_model_choices() {
    for (name, expected) in [("full", LandmarkModel::Full), ("lite", LandmarkModel::Lite), ("831", LandmarkModel::V831)] {
        assert_eq!(parse(&["-m", name]).tracker.lm_model, expected);
    }
    assert!(Args::try_parse_from(["pose-semaphore", "-m", "heavy"]).is_err());
}

#[test]
fn test_model_files() {
    let config = parse(&["--pd_m", "pd.blob", "--lm_m", "lm.blob"]);
    assert_eq!(config.tracker.pd_model, Some(PathBuf::from("pd.blob")));
    assert_eq!(config.tracker.lm_model, LandmarkModel::Path(PathBuf::from("lm.blob")));
}

#[test]
fn test_renderer_flags() {
    let config = parse(&["-3", "world", "-o", "out.avi", "--semaphore"]);
    assert_eq!(config.renderer.show_3d, Show3d::World);
    assert_eq!(config.renderer.output, Some(PathBuf::from("out.avi")));
    assert!(config.display.show_semaphore);

    assert_eq!(parse(&["--show_3d", "mixed"]).renderer.show_3d, Show3d::Mixed);
    assert!(Args::try_parse_from(["pose-semaphore", "-3", "side"]).is_err());
}

#[test]
fn test_invalid_number() {
    let result = Args::try_parse_from(["pose-semaphore", "--internal_fps", "fast"]);
    assert!(result.is_err());
}

#[test]
fn test_unknown_argument() {
    let result = Args::try_parse_from(["pose-semaphore", "--gesture"]);
    assert_eq!(result.unwrap_err().kind(), clap::error::ErrorKind::UnknownArgument);
}

#[test]
fn test_kebab_aliases() {
    let config = parse(&["--no-smoothing", "--internal-frame-height", "360"]);
    assert!(!config.tracker.smoothing);
    assert_eq!(config.tracker.internal_frame_height, 360);
}
