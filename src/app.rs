//! Frame-synchronous application loop.

use crate::{
    config::Config,
    error::Result,
    landmarks::LandmarkSet,
    orientation::{FrameEstimate, OrientationEstimator},
    projection::ScreenPoint,
    regions::RegionCatalog,
    source::LandmarkSource,
};
use log::{info, trace};

/// Output of one processed frame
#[derive(Debug, Clone)]
pub struct FrameOutput {
    /// Orientation estimate, absent when no face was found this frame
    pub estimate: Option<FrameEstimate>,
    /// Pointer position to render: this frame's projection, or the
    /// retained previous one on a no-face frame
    pub pointer: Option<ScreenPoint>,
    /// Index of the selected region, if the pointer is inside one
    pub selected_region: Option<usize>,
}

/// Drives the per-frame pipeline: landmark source, orientation
/// estimation, region selection.
///
/// Single-threaded and frame-synchronous: each frame is fully processed
/// before the next one is read. The caller decides when to stop by
/// exhausting the source.
pub struct PointerApp {
    estimator: OrientationEstimator,
    catalog: RegionCatalog,
    source: Box<dyn LandmarkSource>,
    last_pointer: Option<ScreenPoint>,
}

impl PointerApp {
    /// Create the application from configuration and a landmark source
    #[must_use]
    pub fn new(config: &Config, source: Box<dyn LandmarkSource>) -> Self {
        let estimator = OrientationEstimator::new(
            config.screen,
            config.calibration.horizontal_ratio,
            config.calibration.vertical_ratio,
            config.debug_overlay,
        );
        Self {
            estimator,
            catalog: config.regions.clone(),
            source,
            last_pointer: None,
        }
    }

    /// Process one frame's landmark sets.
    ///
    /// On a no-face frame the estimator state is untouched and the
    /// previously projected pointer is retained for rendering.
    pub fn process_frame(&mut self, sets: &[LandmarkSet]) -> FrameOutput {
        let estimate = self.estimator.process(sets);
        if let Some(est) = &estimate {
            self.last_pointer = Some(est.screen);
        }

        let pointer = self.last_pointer;
        let selected_region = pointer.as_ref().and_then(|point| self.catalog.select(point));

        FrameOutput {
            estimate,
            pointer,
            selected_region,
        }
    }

    /// Run the loop until the landmark source is exhausted, returning
    /// the number of frames processed.
    ///
    /// # Errors
    ///
    /// Returns an error if the landmark source fails.
    pub fn run(&mut self) -> Result<usize> {
        let mut frame_count = 0usize;
        while let Some(sets) = self.source.next_frame()? {
            let output = self.process_frame(&sets);
            frame_count += 1;

            match (&output.pointer, output.selected_region) {
                (Some(point), Some(index)) => {
                    let lines = self
                        .catalog
                        .get(index)
                        .map(|region| region.lines.join(" | "))
                        .unwrap_or_default();
                    info!(
                        "frame {frame_count}: pointer ({:.1}, {:.1}) selects region {index}: {lines}",
                        point.x, point.y
                    );
                }
                (Some(point), None) => {
                    trace!("frame {frame_count}: pointer ({:.1}, {:.1}), no region", point.x, point.y);
                }
                (None, _) => trace!("frame {frame_count}: no face yet"),
            }
        }
        info!("Processed {frame_count} frames");
        Ok(frame_count)
    }

    /// The catalog this app selects from
    #[must_use]
    pub const fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }
}
