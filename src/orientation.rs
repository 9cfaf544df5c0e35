//! Per-frame head orientation estimation.
//!
//! [`OrientationEstimator`] is the one piece of state that lives for the
//! whole session. It is constructed once by the owner of the frame loop
//! and fed every frame's landmark sets; there is no ambient global. All
//! per-frame irregularities (no face, degenerate geometry) are absorbed
//! here and never surface as errors to the caller.

use crate::{
    angles::{face_distance, horizontal_angle, vertical_angle},
    face_selection::most_prominent,
    geometry::FaceVectors,
    landmarks::LandmarkSet,
    projection::{ScreenGeometry, ScreenPoint},
    smoothing::AngleSmoother,
};
use log::{debug, trace};
use nalgebra::{Point2, Vector2};

/// Result of processing one frame in which a face was found
#[derive(Debug, Clone)]
pub struct FrameEstimate {
    /// Smoothed horizontal (yaw) angle in degrees
    pub h_angle: f64,
    /// Smoothed vertical (pitch) angle in degrees
    pub v_angle: f64,
    /// Distance proxy from the on-screen face width
    pub distance: f64,
    /// Projected pointer position
    pub screen: ScreenPoint,
    /// Intermediate values for overlay drawing, present when the debug
    /// overlay is enabled
    pub overlay: Option<OverlayData>,
}

/// Intermediate values exposed for debug overlay rendering: the five key
/// landmark-derived points plus the angle and screen readouts
#[derive(Debug, Clone, Copy)]
pub struct OverlayData {
    pub left_eye_center: Point2<f64>,
    pub right_eye_center: Point2<f64>,
    pub nose_tip: Point2<f64>,
    pub brow_midpoint: Point2<f64>,
    pub upper_lip_center: Point2<f64>,
    /// Smoothed (horizontal, vertical) angles in degrees
    pub angles: (f64, f64),
    /// Projected (x, y) screen position
    pub screen: (f64, f64),
}

/// Session-lifetime orientation state and per-frame estimator
#[derive(Debug, Clone)]
pub struct OrientationEstimator {
    h_smoother: AngleSmoother,
    v_smoother: AngleSmoother,
    h_ratio: f64,
    v_ratio: f64,
    screen: ScreenGeometry,
    overlay_enabled: bool,
    last_face_vector: Option<Vector2<f64>>,
}

impl OrientationEstimator {
    /// Create an estimator for the given screen canvas.
    ///
    /// The ratios calibrate left/right and up/down facial asymmetry per
    /// user; 1.0 disables calibration.
    #[must_use]
    pub fn new(screen: ScreenGeometry, h_ratio: f64, v_ratio: f64, overlay_enabled: bool) -> Self {
        Self {
            h_smoother: AngleSmoother::new(),
            v_smoother: AngleSmoother::new(),
            h_ratio,
            v_ratio,
            screen,
            overlay_enabled,
            last_face_vector: None,
        }
    }

    /// Process one frame's landmark sets.
    ///
    /// Selects the most prominent face, updates the smoothed angles and
    /// projects the pointer position. An empty frame leaves all state
    /// untouched and produces no estimate.
    pub fn process(&mut self, sets: &[LandmarkSet]) -> Option<FrameEstimate> {
        let index = most_prominent(sets)?;
        let set = &sets[index];
        if sets.len() > 1 {
            trace!("Selected face {} of {}", index, sets.len());
        }

        let vectors = FaceVectors::from_landmarks(set);
        let h_angle = self.h_smoother.update(horizontal_angle(&vectors, self.h_ratio));
        let v_angle = self.v_smoother.update(vertical_angle(&vectors, self.v_ratio));
        let distance = face_distance(&vectors);
        self.last_face_vector = Some(vectors.face);

        let screen = self.screen.project(h_angle, v_angle, distance);
        debug!(
            "angles=({:.2}, {:.2}) distance={:.1} screen=({:.1}, {:.1})",
            h_angle, v_angle, distance, screen.x, screen.y
        );

        let overlay = self.overlay_enabled.then(|| OverlayData {
            left_eye_center: set.left_eye_center(),
            right_eye_center: set.right_eye_center(),
            nose_tip: set.nose_tip(),
            brow_midpoint: set.brow_midpoint(),
            upper_lip_center: set.upper_lip_center(),
            angles: (h_angle, v_angle),
            screen: (screen.x, screen.y),
        });

        Some(FrameEstimate {
            h_angle,
            v_angle,
            distance,
            screen,
            overlay,
        })
    }

    /// Current smoothed horizontal angle in degrees
    #[must_use]
    pub const fn h_angle(&self) -> f64 {
        self.h_smoother.value()
    }

    /// Current smoothed vertical angle in degrees
    #[must_use]
    pub const fn v_angle(&self) -> f64 {
        self.v_smoother.value()
    }

    /// Face-width vector of the last frame in which a face was found
    #[must_use]
    pub const fn last_face_vector(&self) -> Option<Vector2<f64>> {
        self.last_face_vector
    }
}
