use super::{view3d, PoseRenderer, RendererConfig, Show3d};
use crate::{
    body::Body,
    constants::{MAIN_WINDOW_NAME, VIEW_3D_WINDOW_NAME},
    keypoints::{body_side, BodySide, BODY_CONNECTIONS},
    tracker::PoseTracker,
    utils::to_point,
    Error, Result,
};
use log::{info, warn};
use opencv::{
    core::{Mat, Point, Scalar, Size, CV_8UC3},
    highgui::{self, WINDOW_AUTOSIZE},
    imgproc::{self, FONT_HERSHEY_PLAIN, LINE_AA},
    prelude::*,
    videoio::VideoWriter,
};
use std::path::Path;

const LEFT_COLOR: (f64, f64, f64) = (0.0, 255.0, 0.0);
const RIGHT_COLOR: (f64, f64, f64) = (0.0, 128.0, 255.0);
const CENTER_COLOR: (f64, f64, f64) = (255.0, 255.0, 255.0);
const POINT_COLOR: (f64, f64, f64) = (0.0, 0.0, 255.0);

fn bgr((b, g, r): (f64, f64, f64)) -> Scalar {
    Scalar::new(b, g, r, 0.0)
}

fn side_color(a: usize, b: usize) -> Scalar {
    match (body_side(a), body_side(b)) {
        (BodySide::Left, BodySide::Left) => bgr(LEFT_COLOR),
        (BodySide::Right, BodySide::Right) => bgr(RIGHT_COLOR),
        _ => bgr(CENTER_COLOR),
    }
}

/// Draws the body skeleton with `OpenCV` and shows it in a window
pub struct SkeletonRenderer {
    config: RendererConfig,
    video_fps: f64,
    show_xyz: bool,
    writer: Option<VideoWriter>,
    view_3d: Option<Mat>,
    released: bool,
}

impl SkeletonRenderer {
    /// Create a renderer for frames produced by `tracker`
    ///
    /// # Errors
    ///
    /// Returns an error if a window cannot be created.
    pub fn new(tracker: &dyn PoseTracker, config: RendererConfig) -> Result<Self> {
        info!("Initializing skeleton renderer (3D view: {:?})", config.show_3d);
        highgui::named_window(MAIN_WINDOW_NAME, WINDOW_AUTOSIZE)?;
        if config.show_3d != Show3d::None {
            highgui::named_window(VIEW_3D_WINDOW_NAME, WINDOW_AUTOSIZE)?;
        }
        Ok(Self {
            video_fps: tracker.video_fps(),
            show_xyz: tracker.xyz_enabled(),
            config,
            writer: None,
            view_3d: None,
            released: false,
        })
    }

    fn draw_skeleton(frame: &mut Mat, body: &Body) -> Result<()> {
        for [a, b] in BODY_CONNECTIONS {
            if a >= body.len() || b >= body.len() {
                continue;
            }
            let (ax, ay) = body.landmark_xy(a)?;
            let (bx, by) = body.landmark_xy(b)?;
            imgproc::line(frame, to_point(ax, ay), to_point(bx, by), side_color(a, b), 2, LINE_AA, 0)?;
        }
        for i in 0..body.len() {
            let (x, y) = body.landmark_xy(i)?;
            imgproc::circle(frame, to_point(x, y), 4, bgr(POINT_COLOR), -1, LINE_AA, 0)?;
        }
        Ok(())
    }

    fn draw_xyz(frame: &mut Mat, xyz: [f32; 3]) -> Result<()> {
        // millimetres shown as centimetres
        let labels = ["X", "Y", "Z"];
        for (i, (label, value)) in labels.iter().zip(xyz).enumerate() {
            let text = format!("{label}:{:3.0} cm", value / 10.0);
            let y = 30 + 25 * i32::try_from(i).unwrap_or(0);
            imgproc::put_text(frame, &text, Point::new(10, y), FONT_HERSHEY_PLAIN, 1.5, bgr(POINT_COLOR), 2, LINE_AA, false)?;
        }
        Ok(())
    }

    fn render_3d(&self, body: &Body) -> Result<Option<Mat>> {
        let Some(points) = view3d::project_body(body, self.config.show_3d) else {
            return Ok(None);
        };
        let mut canvas = Mat::new_rows_cols_with_default(
            view3d::CANVAS_SIZE,
            view3d::CANVAS_SIZE,
            CV_8UC3,
            Scalar::all(0.0),
        )?;
        for [a, b] in BODY_CONNECTIONS {
            if let (Some(&(ax, ay)), Some(&(bx, by))) = (points.get(a), points.get(b)) {
                imgproc::line(&mut canvas, Point::new(ax, ay), Point::new(bx, by), side_color(a, b), 2, LINE_AA, 0)?;
            }
        }
        Ok(Some(canvas))
    }

    fn open_writer(&self, path: &Path, size: Size) -> Result<VideoWriter> {
        info!("Writing output video to {} ({:.1} fps)", path.display(), self.video_fps);
        let fourcc = VideoWriter::fourcc('M', 'J', 'P', 'G')?;
        let writer = VideoWriter::new(&path.to_string_lossy(), fourcc, self.video_fps, size, true)?;
        if !writer.is_opened()? {
            return Err(Error::Renderer(format!("Cannot open output video {}", path.display())));
        }
        Ok(writer)
    }
}

impl PoseRenderer for SkeletonRenderer {
    fn draw(&mut self, mut frame: Mat, body: Option<&Body>) -> Result<Mat> {
        self.view_3d = None;
        if let Some(body) = body {
            Self::draw_skeleton(&mut frame, body)?;
            if self.show_xyz {
                if let Some(xyz) = body.xyz {
                    Self::draw_xyz(&mut frame, xyz)?;
                }
            }
            self.view_3d = self.render_3d(body)?;
        }
        Ok(frame)
    }

    fn wait_key(&mut self, frame: &Mat, delay_ms: i32) -> Result<Option<i32>> {
        if let Some(path) = self.config.output.clone() {
            if self.writer.is_none() {
                self.writer = Some(self.open_writer(&path, frame.size()?)?);
            }
            if let Some(writer) = self.writer.as_mut() {
                writer.write(frame)?;
            }
        }
        highgui::imshow(MAIN_WINDOW_NAME, frame)?;
        if self.config.show_3d != Show3d::None {
            match &self.view_3d {
                Some(view) => highgui::imshow(VIEW_3D_WINDOW_NAME, view)?,
                None => {
                    let blank = Mat::zeros(view3d::CANVAS_SIZE, view3d::CANVAS_SIZE, CV_8UC3)?.to_mat()?;
                    highgui::imshow(VIEW_3D_WINDOW_NAME, &blank)?;
                }
            }
        }
        let key = highgui::wait_key(delay_ms)?;
        Ok((key >= 0).then_some(key))
    }

    fn exit(&mut self) -> Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        if let Some(mut writer) = self.writer.take() {
            writer.release()?;
        }
        if let Err(e) = highgui::destroy_all_windows() {
            warn!("Failed to close windows: {e}");
        }
        Ok(())
    }
}
