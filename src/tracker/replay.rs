use super::{landmark_file::LandmarkFile, InputSource, PoseTracker, TrackedFrame, TrackerConfig};
use crate::{
    constants::DEFAULT_FPS,
    Error, Result,
};
use log::{debug, info, warn};
use opencv::{
    core::{Mat, Rect, Size},
    imgcodecs, imgproc,
    prelude::*,
    videoio::{self, VideoCapture, CAP_PROP_BUFFERSIZE, CAP_PROP_FPS},
};
use std::path::Path;
use std::time::Instant;

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "tif", "tiff"];

enum FrameSource {
    Capture(VideoCapture),
    /// A still image is served on every call
    Image(Mat),
}

/// Tracker that reads frames with `OpenCV` and replays recorded landmarks.
///
/// Frames are center-cropped when `crop` is set, then resized to the
/// internal frame height. Recorded landmarks must be expressed in the
/// coordinates of those processed frames.
pub struct ReplayTracker {
    config: TrackerConfig,
    source: FrameSource,
    landmarks: LandmarkFile,
    video_fps: f64,
    frame_index: u64,
    bodies_returned: u64,
    started: Instant,
    released: bool,
}

impl ReplayTracker {
    /// Open the configured input and load the replay file
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the input cannot be
    /// opened or the replay file cannot be parsed.
    pub fn new(config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        info!("Initializing replay tracker ({:?} mode)", config.mode);
        info!(
            "Landmark model: {}, pose detection model: {}",
            config.lm_model,
            config
                .pd_model
                .as_ref()
                .map_or_else(|| "default".to_string(), |p| p.display().to_string())
        );
        debug!(
            "smoothing={} force_detection={} xyz={} crop={}",
            config.smoothing, config.force_detection, config.xyz, config.crop
        );

        let source = Self::open_source(&config)?;
        let video_fps = match &source {
            FrameSource::Capture(cap) => {
                let fps = cap.get(CAP_PROP_FPS)?;
                if fps > 0.0 {
                    fps
                } else {
                    config.internal_fps.map_or(DEFAULT_FPS, f64::from)
                }
            }
            FrameSource::Image(_) => config.internal_fps.map_or(DEFAULT_FPS, f64::from),
        };
        info!("Source fps: {video_fps:.1}");

        let landmarks = match &config.landmarks {
            Some(path) => LandmarkFile::load(path)?,
            None => {
                warn!("No landmark replay file given, frames will have no body");
                LandmarkFile::default()
            }
        };

        Ok(Self {
            config,
            source,
            landmarks,
            video_fps,
            frame_index: 0,
            bodies_returned: 0,
            started: Instant::now(),
            released: false,
        })
    }

    fn open_source(config: &TrackerConfig) -> Result<FrameSource> {
        match &config.input {
            InputSource::Rgb | InputSource::RgbLaconic => {
                info!("Opening camera 0 ({})", config.input);
                let mut cap = VideoCapture::new(0, videoio::CAP_ANY)?;
                if !cap.is_opened()? {
                    return Err(Error::Tracker("Cannot open camera 0".to_string()));
                }
                cap.set(CAP_PROP_BUFFERSIZE, 1.0)?;
                if let Some(fps) = config.internal_fps {
                    if !cap.set(CAP_PROP_FPS, f64::from(fps))? {
                        warn!("Camera refused fps {fps}");
                    }
                }
                Ok(FrameSource::Capture(cap))
            }
            InputSource::File(path) if is_image(path) => {
                info!("Opening image file: {}", path.display());
                let image = imgcodecs::imread(&path.to_string_lossy(), imgcodecs::IMREAD_COLOR)?;
                if image.empty() {
                    return Err(Error::Tracker(format!("Cannot decode image {}", path.display())));
                }
                Ok(FrameSource::Image(image))
            }
            InputSource::File(path) => {
                info!("Opening video file: {}", path.display());
                let cap = VideoCapture::from_file(&path.to_string_lossy(), videoio::CAP_ANY)?;
                if !cap.is_opened()? {
                    return Err(Error::Tracker(format!("Cannot open video {}", path.display())));
                }
                Ok(FrameSource::Capture(cap))
            }
        }
    }

    fn read_raw(&mut self) -> Result<Option<Mat>> {
        match &mut self.source {
            FrameSource::Capture(cap) => {
                let mut frame = Mat::default();
                if !cap.read(&mut frame)? || frame.empty() {
                    return Ok(None);
                }
                Ok(Some(frame))
            }
            FrameSource::Image(image) => Ok(Some(image.try_clone()?)),
        }
    }

    fn prepare(&self, frame: Mat) -> Result<Mat> {
        let frame = if self.config.crop {
            center_crop(&frame)?
        } else {
            frame
        };
        resize_to_height(&frame, self.config.internal_frame_height)
    }
}

impl PoseTracker for ReplayTracker {
    fn next_frame(&mut self) -> Result<Option<TrackedFrame>> {
        let Some(raw) = self.read_raw()? else {
            info!("End of input after {} frames", self.frame_index);
            return Ok(None);
        };
        let frame = self.prepare(raw)?;

        let mut body = self.landmarks.body(self.frame_index).cloned();
        if let Some(body) = body.as_mut() {
            if !self.config.xyz {
                body.xyz = None;
            }
            self.bodies_returned += 1;
        }
        if self.config.trace {
            debug!(
                "Frame {}: {}",
                self.frame_index,
                if body.is_some() { "body" } else { "no body" }
            );
        }
        self.frame_index += 1;

        Ok(Some(TrackedFrame { frame, body }))
    }

    fn video_fps(&self) -> f64 {
        self.video_fps
    }

    fn xyz_enabled(&self) -> bool {
        self.config.xyz
    }

    fn exit(&mut self) -> Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        if let FrameSource::Capture(cap) = &mut self.source {
            cap.release()?;
        }
        if self.config.stats {
            let elapsed = self.started.elapsed().as_secs_f64();
            #[allow(clippy::cast_precision_loss)]
            let fps = if elapsed > 0.0 { self.frame_index as f64 / elapsed } else { 0.0 };
            info!(
                "FPS : {fps:.1} f/s (# frames = {}, # bodies = {})",
                self.frame_index, self.bodies_returned
            );
        }
        Ok(())
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Largest centred square of `frame`
///
/// # Errors
///
/// Returns an error if `OpenCV` cannot extract the region.
pub fn center_crop(frame: &Mat) -> Result<Mat> {
    let (width, height) = (frame.cols(), frame.rows());
    let side = width.min(height);
    let rect = Rect::new((width - side) / 2, (height - side) / 2, side, side);
    Ok(Mat::roi(frame, rect)?.try_clone()?)
}

/// Resize `frame` to `height` rows, keeping the aspect ratio
///
/// # Errors
///
/// Returns an error if `OpenCV` fails to resize.
#[allow(clippy::cast_possible_truncation)]
pub fn resize_to_height(frame: &Mat, height: i32) -> Result<Mat> {
    if frame.rows() == height || frame.rows() == 0 {
        return Ok(frame.clone());
    }
    let width = (f64::from(frame.cols()) * f64::from(height) / f64::from(frame.rows())).round() as i32;
    let mut resized = Mat::default();
    imgproc::resize(frame, &mut resized, Size::new(width, height), 0.0, 0.0, imgproc::INTER_AREA)?;
    Ok(resized)
}
