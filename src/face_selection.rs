//! Selection of the most prominent face among multiple detections.

use crate::landmarks::LandmarkSet;

/// Pick the most prominent face from this frame's detections.
///
/// Prominence is the squared length of the face-outline width vector, a
/// proxy for "closest to the camera". Ties resolve to the lowest index,
/// so the result is deterministic. Returns `None` for an empty frame.
#[must_use]
pub fn most_prominent(sets: &[LandmarkSet]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, set) in sets.iter().enumerate() {
        let width_sq = set.face_width_vector().norm_squared();
        match best {
            Some((_, best_sq)) if best_sq >= width_sq => {}
            _ => best = Some((i, width_sq)),
        }
    }
    best.map(|(i, _)| i)
}
