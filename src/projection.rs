//! Projection of smoothed angles onto the screen canvas.

use crate::constants::{DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH};
use serde::{Deserialize, Serialize};

/// Screen canvas dimensions used as the projection center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenGeometry {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
}

impl Default for ScreenGeometry {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
        }
    }
}

/// Projected pointer position in screen pixel space, recomputed fresh
/// every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenGeometry {
    /// Project smoothed angles and a distance proxy to screen pixels.
    ///
    /// Angular deviation times the depth proxy becomes a linear pixel
    /// offset from the canvas center; looking right moves the point
    /// right and looking up moves it up.
    #[must_use]
    pub fn project(&self, h_angle_deg: f64, v_angle_deg: f64, distance: f64) -> ScreenPoint {
        ScreenPoint {
            x: distance * h_angle_deg.to_radians().tan() + self.width / 2.0,
            y: -distance * v_angle_deg.to_radians().tan() + self.height / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_angles_project_to_center() {
        let screen = ScreenGeometry::default();
        let point = screen.project(0.0, 0.0, 500.0);
        assert_relative_eq!(point.x, 500.0);
        assert_relative_eq!(point.y, 359.0);
    }

    #[test]
    fn known_pose_projects_to_expected_pixels() {
        let screen = ScreenGeometry {
            width: 1000.0,
            height: 718.0,
        };
        let point = screen.project(10.0, 5.0, 500.0);
        assert_relative_eq!(point.x, 588.163, epsilon = 1e-2);
        assert_relative_eq!(point.y, 315.26, epsilon = 1e-2);
    }

    #[test]
    fn looking_up_moves_point_up() {
        let screen = ScreenGeometry::default();
        let up = screen.project(0.0, 10.0, 500.0);
        let down = screen.project(0.0, -10.0, 500.0);
        assert!(up.y < screen.height / 2.0);
        assert!(down.y > screen.height / 2.0);
    }

    #[test]
    fn looking_right_moves_point_right() {
        let screen = ScreenGeometry::default();
        let right = screen.project(10.0, 0.0, 500.0);
        let left = screen.project(-10.0, 0.0, 500.0);
        assert!(right.x > screen.width / 2.0);
        assert!(left.x < screen.width / 2.0);
    }
}
