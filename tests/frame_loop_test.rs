//! Tests for the frame loop and collaborator release


use opencv::prelude::*;
use pose_semaphore::{
    app::{DemoApp, ExitReason},
    body::Body,
    config::DisplayConfig,
    tracker::PoseTracker,
    Error,
};
use std::cell::RefCell;
use std::rc::Rc;
use test_helpers::{body_with_arms, count, Event, EventLog, MockRenderer, MockTracker, Step};

fn new_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

fn assert_released_once_in_order(log: &EventLog) {
    assert_eq!(count(log, &Event::RendererExit), 1);
    assert_eq!(count(log, &Event::TrackerExit), 1);
    let events = log.borrow();
    let n = events.len();
    assert_eq!(&events[n - 2..], &[Event::RendererExit, Event::TrackerExit]);
}

#[test]
fn test_terminates_at_end_of_input() {
    let log = new_log();
    let tracker = MockTracker::new(vec![Step::Frame(None), Step::Frame(None)], &log);
    let renderer = MockRenderer::new(vec![], &log);

    let summary = DemoApp::new(tracker, renderer, DisplayConfig::default()).run().unwrap();

    assert_eq!(summary.exit_reason, ExitReason::EndOfInput);
    assert_eq!(summary.frames, 2);
    assert_eq!(summary.bodies, 0);
    assert_eq!(count(&log, &Event::NextFrame), 3);
    assert_eq!(count(&log, &Event::WaitKey), 2);
    assert_released_once_in_order(&log);
}

#[test]
fn test_terminates_on_escape() {
    let log = new_log();
    let steps = (0..10).map(|_| Step::Frame(None)).collect();
    let tracker = MockTracker::new(steps, &log);
    let renderer = MockRenderer::new(vec![None, Some(27)], &log);

    let summary = DemoApp::new(tracker, renderer, DisplayConfig::default()).run().unwrap();

    assert_eq!(summary.exit_reason, ExitReason::KeyPressed(27));
    assert_eq!(summary.frames, 2);
    assert_eq!(count(&log, &Event::NextFrame), 2);
    assert_released_once_in_order(&log);
}

#[test]
fn test_terminates_on_q() {
    let log = new_log();
    let steps = (0..10).map(|_| Step::Frame(None)).collect();
    let tracker = MockTracker::new(steps, &log);
    let renderer = MockRenderer::new(vec![Some(i32::from(b'q'))], &log);

    let summary = DemoApp::new(tracker, renderer, DisplayConfig::default()).run().unwrap();

    assert_eq!(summary.exit_reason, ExitReason::KeyPressed(i32::from(b'q')));
    assert_eq!(summary.frames, 1);
    assert_released_once_in_order(&log);
}

#[test]
fn test_other_keys_do_not_stop() {
    let log = new_log();
    let steps = (0..3).map(|_| Step::Frame(None)).collect();
    let tracker = MockTracker::new(steps, &log);
    let renderer = MockRenderer::new(vec![Some(32), Some(i32::from(b'Q')), Some(13)], &log);

    let summary = DemoApp::new(tracker, renderer, DisplayConfig::default()).run().unwrap();

    assert_eq!(summary.exit_reason, ExitReason::EndOfInput);
    assert_eq!(summary.frames, 3);
}

#[test]
fn test_bodies_are_drawn_and_annotated() {
    let log = new_log();
    let body = body_with_arms((0.0, 60.0), (0.0, 60.0));
    let tracker = MockTracker::new(vec![Step::Frame(Some(body)), Step::Frame(None)], &log);
    let renderer = MockRenderer::new(vec![], &log);
    let shown = Rc::clone(&renderer.shown);

    let summary = DemoApp::new(tracker, renderer, DisplayConfig::default()).run().unwrap();

    assert_eq!(summary.bodies, 1);
    assert_eq!(count(&log, &Event::Draw { with_body: true }), 1);
    assert_eq!(count(&log, &Event::Draw { with_body: false }), 1);

    let shown = shown.borrow();
    let annotated = opencv::core::sum_elems(&shown[0]).unwrap();
    let plain = opencv::core::sum_elems(&shown[1]).unwrap();
    assert!(annotated[1] > 0.0, "angle labels should be drawn in green");
    assert_eq!(plain[1], 0.0);
    assert_eq!(shown[0].cols(), 640);
}

#[test]
fn test_tracker_error_still_releases() {
    let log = new_log();
    let tracker = MockTracker::new(vec![Step::Frame(None), Step::Fail], &log);
    let renderer = MockRenderer::new(vec![], &log);

    let result = DemoApp::new(tracker, renderer, DisplayConfig::default()).run();

    assert!(matches!(result, Err(Error::Tracker(_))));
    assert_released_once_in_order(&log);
}

#[test]
fn test_short_body_is_fatal_but_releases() {
    let log = new_log();
    let short = Body::from_points(&[[0.0, 0.0, 0.0]; 17]).unwrap();
    let tracker = MockTracker::new(vec![Step::Frame(Some(short))], &log);
    let renderer = MockRenderer::new(vec![], &log);

    let result = DemoApp::new(tracker, renderer, DisplayConfig::default()).run();

    assert!(matches!(result, Err(Error::MissingKeypoint { .. })));
    assert_eq!(count(&log, &Event::WaitKey), 0);
    assert_released_once_in_order(&log);
}

#[test]
fn test_semaphore_overlay_is_opt_in() {
    // 'A' pose; the letter is drawn in orange, which has a red component
    let right = test_helpers::octant_vector(3);
    let left = test_helpers::octant_vector(4);

    let mut red_sums = Vec::new();
    for show_semaphore in [false, true] {
        let log = new_log();
        let body = body_with_arms(right, left);
        let tracker = MockTracker::new(vec![Step::Frame(Some(body))], &log);
        let renderer = MockRenderer::new(vec![], &log);
        let shown = Rc::clone(&renderer.shown);
        let display = DisplayConfig {
            show_semaphore,
            ..DisplayConfig::default()
        };

        DemoApp::new(tracker, renderer, display).run().unwrap();
        let sum = opencv::core::sum_elems(&shown.borrow()[0]).unwrap();
        red_sums.push(sum[2]);
    }
    assert_eq!(red_sums[0], 0.0);
    assert!(red_sums[1] > 0.0);
}

#[test]
fn test_renderer_failure_releases_tracker() {
    let log = new_log();
    let tracker = MockTracker::new(vec![Step::Frame(None)], &log);

    let result = DemoApp::<MockTracker, MockRenderer>::start(
        tracker,
        |_| Err(Error::Renderer("no display".to_string())),
        DisplayConfig::default(),
    );

    assert!(matches!(result, Err(Error::Renderer(_))));
    assert_eq!(*log.borrow(), vec![Event::TrackerExit]);
}

#[test]
fn test_start_builds_renderer_from_tracker() {
    let log = new_log();
    let tracker = MockTracker::new(vec![Step::Frame(None)], &log);
    let renderer_log = Rc::clone(&log);

    let app = DemoApp::start(
        tracker,
        |tracker| {
            assert!(!tracker.xyz_enabled());
            Ok(MockRenderer::new(vec![], &renderer_log))
        },
        DisplayConfig::default(),
    )
    .unwrap();
    assert!(log.borrow().is_empty());

    let summary = app.run().unwrap();
    assert_eq!(summary.frames, 1);
    assert_released_once_in_order(&log);
}
