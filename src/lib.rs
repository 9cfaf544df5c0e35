//! Head-orientation pointer library.
//!
//! Converts per-frame sets of 68 2-D facial landmark points into a
//! temporally smoothed head orientation (horizontal and vertical tilt,
//! in degrees), a distance proxy, and a projected screen-space pointer
//! position used to select rectangular catalog regions.
//!
//! Face detection and landmark fitting are external collaborators; this
//! crate consumes their output through the [`source::LandmarkSource`]
//! seam and owns everything from face selection onward:
//! 1. Most-prominent-face selection among multiple detections
//! 2. Geometric vector derivation from key landmarks
//! 3. Yaw/pitch estimation via Pythagorean depth reconstruction
//! 4. Exponential smoothing of both angles
//! 5. Perspective-style projection to screen pixels
//! 6. First-match region selection
//!
//! # Examples
//!
//! ```
//! use head_pointer::config::Config;
//! use head_pointer::landmarks::LandmarkSet;
//! use head_pointer::orientation::OrientationEstimator;
//! use nalgebra::Point2;
//!
//! # fn main() -> head_pointer::Result<()> {
//! let config = Config::default();
//! let mut estimator = OrientationEstimator::new(
//!     config.screen,
//!     config.calibration.horizontal_ratio,
//!     config.calibration.vertical_ratio,
//!     config.debug_overlay,
//! );
//!
//! // One frame of landmarks from the fitting collaborator
//! let face = LandmarkSet::from_points(vec![Point2::new(5.0, 5.0); 68])?;
//! if let Some(estimate) = estimator.process(&[face]) {
//!     let region = config.regions.select(&estimate.screen);
//!     println!("pointer at ({:.1}, {:.1}), region {:?}", estimate.screen.x, estimate.screen.y, region);
//! }
//! # Ok(())
//! # }
//! ```

/// Facial landmark types for the 68-point topology
pub mod landmarks;

/// Selection of the most prominent face per frame
pub mod face_selection;

/// Geometric feature vectors derived from landmarks
pub mod geometry;

/// Raw yaw/pitch angle and distance estimation
pub mod angles;

/// Exponential angle smoothing
pub mod smoothing;

/// Session-lifetime orientation estimation
pub mod orientation;

/// Projection of angles onto the screen canvas
pub mod projection;

/// Selectable screen regions and catalog text
pub mod regions;

/// Landmark input seam and recorded playback
pub mod source;

/// Frame-synchronous application loop
pub mod app;

/// Configuration management
pub mod config;

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

pub use error::{Error, Result};
