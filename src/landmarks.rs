//! Facial landmark types for the fixed 68-point topology.
//!
//! The landmark fitting collaborator emits 68 indexable 2-D points per
//! detected face. Index semantics follow the iBUG 68-point annotation
//! scheme; every index this crate relies on is named once in [`Landmark`]
//! rather than scattered as literals.

use crate::{constants::NUM_FACIAL_LANDMARKS, Error, Result};
use nalgebra::{Point2, Vector2};

/// Named landmark indices used by the orientation estimator.
///
/// "Left" and "right" are image-space: the left eye is the one on the
/// left side of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landmark {
    /// Leftmost point of the jaw/face outline
    FaceOutlineLeft,
    /// Rightmost point of the jaw/face outline
    FaceOutlineRight,
    /// Tip of the nose
    NoseTip,
    /// Outer corner of the left eye
    LeftEyeOuter,
    /// Inner corner of the left eye
    LeftEyeInner,
    /// Inner corner of the right eye
    RightEyeInner,
    /// Outer corner of the right eye
    RightEyeOuter,
    /// Left point of the upper inner lip
    UpperLipLeft,
    /// Center point of the upper inner lip
    UpperLipCenter,
    /// Right point of the upper inner lip
    UpperLipRight,
    /// Right point of the lower inner lip
    LowerLipRight,
    /// Center point of the lower inner lip
    LowerLipCenter,
    /// Left point of the lower inner lip
    LowerLipLeft,
}

impl Landmark {
    /// Index of this landmark within a 68-point set
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::FaceOutlineLeft => 0,
            Self::FaceOutlineRight => 16,
            Self::NoseTip => 30,
            Self::LeftEyeOuter => 36,
            Self::LeftEyeInner => 39,
            Self::RightEyeInner => 42,
            Self::RightEyeOuter => 45,
            Self::UpperLipLeft => 61,
            Self::UpperLipCenter => 62,
            Self::UpperLipRight => 63,
            Self::LowerLipRight => 65,
            Self::LowerLipCenter => 66,
            Self::LowerLipLeft => 67,
        }
    }
}

/// One detected face's 68 landmark points, valid for a single frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    points: Vec<Point2<f64>>,
}

impl LandmarkSet {
    /// Create a landmark set from exactly 68 points
    ///
    /// # Errors
    ///
    /// Returns an error if the number of points is not exactly 68.
    pub fn from_points(points: Vec<Point2<f64>>) -> Result<Self> {
        if points.len() != NUM_FACIAL_LANDMARKS {
            return Err(Error::InvalidInput(format!(
                "Expected {} landmarks, got {}",
                NUM_FACIAL_LANDMARKS,
                points.len()
            )));
        }
        Ok(Self { points })
    }

    /// Point at a named landmark
    #[must_use]
    pub fn point(&self, landmark: Landmark) -> Point2<f64> {
        self.points[landmark.index()]
    }

    /// Midpoint of the left eye's inner and outer corners
    #[must_use]
    pub fn left_eye_center(&self) -> Point2<f64> {
        midpoint(self.point(Landmark::LeftEyeOuter), self.point(Landmark::LeftEyeInner))
    }

    /// Midpoint of the right eye's inner and outer corners
    #[must_use]
    pub fn right_eye_center(&self) -> Point2<f64> {
        midpoint(self.point(Landmark::RightEyeInner), self.point(Landmark::RightEyeOuter))
    }

    /// Tip of the nose
    #[must_use]
    pub fn nose_tip(&self) -> Point2<f64> {
        self.point(Landmark::NoseTip)
    }

    /// Midpoint between the two eye centers (top of the nose bridge)
    #[must_use]
    pub fn brow_midpoint(&self) -> Point2<f64> {
        midpoint(self.left_eye_center(), self.right_eye_center())
    }

    /// Average of the three upper inner-lip points
    #[must_use]
    pub fn upper_lip_center(&self) -> Point2<f64> {
        centroid3(
            self.point(Landmark::UpperLipLeft),
            self.point(Landmark::UpperLipCenter),
            self.point(Landmark::UpperLipRight),
        )
    }

    /// Average of the three lower inner-lip points
    #[must_use]
    pub fn lower_lip_center(&self) -> Point2<f64> {
        centroid3(
            self.point(Landmark::LowerLipRight),
            self.point(Landmark::LowerLipCenter),
            self.point(Landmark::LowerLipLeft),
        )
    }

    /// Vector from the left face-outline extreme to the right one
    #[must_use]
    pub fn face_width_vector(&self) -> Vector2<f64> {
        self.point(Landmark::FaceOutlineRight) - self.point(Landmark::FaceOutlineLeft)
    }
}

fn midpoint(a: Point2<f64>, b: Point2<f64>) -> Point2<f64> {
    Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

fn centroid3(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Point2<f64> {
    Point2::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
}
