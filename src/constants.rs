//! Constants used throughout the application

/// Number of body landmarks produced by the full-body landmark models
pub const NUM_BODY_LANDMARKS: usize = 33;

/// Key code returned by the window system for ESC
pub const KEY_ESC: i32 = 27;

/// Key code for 'q'
pub const KEY_QUIT: i32 = b'q' as i32;

/// Default key poll delay in milliseconds
pub const DEFAULT_KEY_DELAY_MS: i32 = 1;

/// Default internal camera frame height in pixels
pub const DEFAULT_INTERNAL_FRAME_HEIGHT: i32 = 640;

/// Fallback fps when the source does not report one
pub const DEFAULT_FPS: f64 = 30.0;

/// Main window title
pub const MAIN_WINDOW_NAME: &str = "Blazepose";

/// 3D view window title
pub const VIEW_3D_WINDOW_NAME: &str = "Blazepose 3D";

/// Angle labels are drawn this many pixels left of the right frame border
pub const LABEL_RIGHT_OFFSET: i32 = 420;

/// Baseline of the first angle label
pub const LABEL_START_Y: i32 = 50;

/// Vertical distance between angle labels
pub const LABEL_LINE_STEP: i32 = 20;

/// Width of one octant in degrees
pub const OCTANT_WIDTH_DEG: f64 = 45.0;

/// Offset that aligns octant borders with semaphore arm positions
pub const OCTANT_OFFSET_DEG: f64 = 202.5;

/// Number of octants
pub const NUM_OCTANTS: u8 = 8;
