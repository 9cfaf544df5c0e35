//! Constants used throughout the application

/// Number of facial landmarks for full face
pub const NUM_FACIAL_LANDMARKS: usize = 68;

/// Weight given to accumulated history in angle smoothing
pub const SMOOTHING_HISTORY_WEIGHT: f64 = 11.0;

/// Divisor for the smoothing blend (history weight + 1 new sample)
pub const SMOOTHING_DIVISOR: f64 = 12.0;

/// Empirical correction factor applied to the raw vertical angle
pub const VERTICAL_ANGLE_CORRECTION: f64 = 0.5;

/// Assumed real-world face width between the two outline extremes
pub const FACE_WIDTH_UNITS: f64 = 80.0;

/// Calibration constant for the inverse distance relation
pub const DISTANCE_SCALE: f64 = 1000.0;

/// Default screen canvas dimensions used as the projection center
pub const DEFAULT_SCREEN_WIDTH: f64 = 1000.0;
pub const DEFAULT_SCREEN_HEIGHT: f64 = 718.0;

/// Default left/right and up/down calibration ratios (no calibration)
pub const DEFAULT_HORIZONTAL_RATIO: f64 = 1.0;
pub const DEFAULT_VERTICAL_RATIO: f64 = 1.0;
