//! Raw angle and distance estimation from face vectors.
//!
//! The head yaw foreshortens the eye-to-nose vector on the side away from
//! the camera. Comparing the two planar lengths and reconstructing the
//! missing depth on the shorter one via the Pythagorean relation recovers
//! a 3-D geometry; the tilt angle then falls out of the angle between the
//! vertical reference axis (0, 0, 1) and the relevant reconstructed
//! vector (or the normal of the pair, for yaw). Pitch reuses the pattern
//! with the nose-to-brow and nose-to-lip vectors.
//!
//! Noisy landmarks can violate the assumed near/far ordering or collapse
//! a vector to zero length; both surface as a non-finite intermediate and
//! the estimate for that frame is reported as `None`.

use crate::{
    constants::{DISTANCE_SCALE, FACE_WIDTH_UNITS, VERTICAL_ANGLE_CORRECTION},
    geometry::{with_depth, FaceVectors},
};
use nalgebra::Vector3;

/// Estimate the raw horizontal (yaw) angle in degrees.
///
/// `h_ratio` calibrates left/right asymmetry; 1.0 means no calibration.
/// Positive angles mean the head is turned so the left eye is nearer the
/// camera. Returns `None` when the geometry is degenerate.
#[must_use]
pub fn horizontal_angle(vectors: &FaceVectors, h_ratio: f64) -> Option<f64> {
    let left_len = vectors.left.norm();
    let right_len = vectors.right.norm();

    let raw = if left_len > right_len * h_ratio {
        // Left side nearer: reconstruct depth on the far (right) vector
        let depth = ((left_len / h_ratio).powi(2) - right_len.powi(2)).sqrt();
        let normal = with_depth(vectors.left, 0.0).cross(&with_depth(vectors.right, depth));
        (normal.dot(&Vector3::z()) / normal.norm()).acos().to_degrees()
    } else {
        let depth = ((right_len * h_ratio).powi(2) - left_len.powi(2)).sqrt();
        let normal = with_depth(vectors.left, depth).cross(&with_depth(vectors.right, 0.0));
        -(normal.dot(&Vector3::z()) / normal.norm()).acos().to_degrees()
    };

    raw.is_finite().then_some(raw)
}

/// Estimate the raw vertical (pitch) angle in degrees.
///
/// `v_ratio` compensates for the asymmetric default proportions of the
/// nose-to-brow and nose-to-lip distances; 1.0 means no calibration.
/// Positive angles mean the head is tilted up. Returns `None` when the
/// geometry is degenerate.
#[must_use]
pub fn vertical_angle(vectors: &FaceVectors, v_ratio: f64) -> Option<f64> {
    let up_len = vectors.up.norm();
    let down_len = vectors.down.norm();

    let raw = if up_len > down_len * v_ratio {
        let depth = ((up_len / v_ratio).powi(2) - down_len.powi(2)).sqrt();
        let down = with_depth(vectors.down, depth);
        -(down.dot(&Vector3::z()) / down.norm()).asin().to_degrees()
    } else {
        let depth = ((down_len * v_ratio).powi(2) - up_len.powi(2)).sqrt();
        let up = with_depth(vectors.up, depth);
        (up.dot(&Vector3::z()) / up.norm()).asin().to_degrees()
    };

    let corrected = raw * VERTICAL_ANGLE_CORRECTION;
    corrected.is_finite().then_some(corrected)
}

/// Distance proxy from the on-screen face width.
///
/// Inverse relation assuming a fixed real-world face width; recomputed
/// fresh each frame, never smoothed.
#[must_use]
pub fn face_distance(vectors: &FaceVectors) -> f64 {
    DISTANCE_SCALE * FACE_WIDTH_UNITS / vectors.face.norm()
}
