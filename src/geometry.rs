//! Geometric vectors derived from a landmark set.

use crate::landmarks::LandmarkSet;
use nalgebra::{Vector2, Vector3};

/// The 2-D feature vectors the angle estimation works from, all anchored
/// at the nose tip (except `mouth` and `face`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceVectors {
    /// Left eye center minus nose tip
    pub left: Vector2<f64>,
    /// Right eye center minus nose tip
    pub right: Vector2<f64>,
    /// Brow midpoint (between the eye centers) minus nose tip
    pub up: Vector2<f64>,
    /// Upper lip center minus nose tip
    pub down: Vector2<f64>,
    /// Upper lip center minus lower lip center; unused by the angle
    /// formulas but kept available for mouth-openness heuristics
    pub mouth: Vector2<f64>,
    /// Right face-outline extreme minus left one
    pub face: Vector2<f64>,
}

impl FaceVectors {
    /// Derive the feature vectors from one face's landmarks
    #[must_use]
    pub fn from_landmarks(set: &LandmarkSet) -> Self {
        let nose = set.nose_tip();
        let upper_lip = set.upper_lip_center();
        Self {
            left: set.left_eye_center() - nose,
            right: set.right_eye_center() - nose,
            up: set.brow_midpoint() - nose,
            down: upper_lip - nose,
            mouth: upper_lip - set.lower_lip_center(),
            face: set.face_width_vector(),
        }
    }
}

/// Lift a planar vector into 3-D with the given reconstructed depth.
///
/// Each estimation branch builds its own fully-specified 3-D vector
/// instead of patching a z-component into shared scratch state.
#[must_use]
pub fn with_depth(v: Vector2<f64>, z: f64) -> Vector3<f64> {
    Vector3::new(v.x, v.y, z)
}
