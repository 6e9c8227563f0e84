//! Main application module: the per-frame loop.

use crate::{
    config::DisplayConfig,
    constants::{KEY_ESC, KEY_QUIT},
    error::Result,
    gesture::recognize_gesture,
    joint_angles::compute_joint_angles,
    overlay,
    renderer::PoseRenderer,
    tracker::{PoseTracker, TrackedFrame},
};
use log::{debug, info, warn};

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The tracker returned no frame
    EndOfInput,
    /// ESC or 'q' was pressed
    KeyPressed(i32),
}

/// Counters returned once the loop is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub bodies: u64,
    pub exit_reason: ExitReason,
}

/// True for the keys that stop the loop
#[must_use]
pub fn is_exit_key(key: i32) -> bool {
    key == KEY_ESC || key == KEY_QUIT
}

/// Demo application owning one tracker and one renderer
pub struct DemoApp<T: PoseTracker, R: PoseRenderer> {
    tracker: T,
    renderer: R,
    display: DisplayConfig,
}

impl<T: PoseTracker, R: PoseRenderer> DemoApp<T, R> {
    /// Create the application from its collaborators
    pub fn new(tracker: T, renderer: R, display: DisplayConfig) -> Self {
        Self {
            tracker,
            renderer,
            display,
        }
    }

    /// Create the renderer for `tracker` and assemble the application.
    ///
    /// If the renderer cannot be created the tracker is released before the
    /// error is returned.
    ///
    /// # Errors
    ///
    /// Returns the error raised by `make_renderer`.
    pub fn start<F>(mut tracker: T, make_renderer: F, display: DisplayConfig) -> Result<Self>
    where
        F: FnOnce(&T) -> Result<R>,
    {
        match make_renderer(&tracker) {
            Ok(renderer) => Ok(Self::new(tracker, renderer, display)),
            Err(e) => {
                if let Err(exit_err) = tracker.exit() {
                    warn!("Failed to release tracker: {exit_err}");
                }
                Err(e)
            }
        }
    }

    /// Run until the input ends or an exit key is pressed.
    ///
    /// The renderer and then the tracker are released exactly once, whether
    /// the loop ended normally or with an error. A loop error takes
    /// precedence over a release error.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the loop or by a release.
    pub fn run(mut self) -> Result<RunSummary> {
        info!("Starting main application loop");
        let outcome = self.run_loop();

        let renderer_exit = self.renderer.exit();
        let tracker_exit = self.tracker.exit();
        info!("Application shutting down");

        let summary = outcome?;
        renderer_exit?;
        tracker_exit?;
        Ok(summary)
    }

    fn run_loop(&mut self) -> Result<RunSummary> {
        let mut frames = 0;
        let mut bodies = 0;

        loop {
            let Some(TrackedFrame { frame, body }) = self.tracker.next_frame()? else {
                info!("End of input reached");
                return Ok(RunSummary {
                    frames,
                    bodies,
                    exit_reason: ExitReason::EndOfInput,
                });
            };
            frames += 1;

            let mut frame = self.renderer.draw(frame, body.as_ref())?;

            if let Some(body) = &body {
                bodies += 1;
                let angles = compute_joint_angles(body)?;
                for angle in &angles {
                    debug!("{angle}");
                }
                overlay::draw_joint_angles(&mut frame, &angles, &self.display)?;

                if self.display.show_semaphore {
                    match recognize_gesture(body)? {
                        Some(letter) => overlay::draw_letter(&mut frame, letter)?,
                        None => debug!("No semaphore letter"),
                    }
                }
            }

            if let Some(key) = self.renderer.wait_key(&frame, self.display.key_delay_ms)? {
                if is_exit_key(key) {
                    info!("Exit requested by user");
                    return Ok(RunSummary {
                        frames,
                        bodies,
                        exit_reason: ExitReason::KeyPressed(key),
                    });
                }
                debug!("Ignoring key {key}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_keys() {
        assert!(is_exit_key(27));
        assert!(is_exit_key(i32::from(b'q')));
        assert!(!is_exit_key(i32::from(b'Q')));
        assert!(!is_exit_key(32));
    }
}
