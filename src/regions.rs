//! Selectable screen regions and their catalog text.

use crate::{projection::ScreenPoint, Error, Result};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangular screen area with its catalog text lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Left edge of the rectangle
    pub left: f64,
    /// Top edge of the rectangle
    pub top: f64,
    /// Right edge of the rectangle
    pub right: f64,
    /// Bottom edge of the rectangle
    pub bottom: f64,
    /// Ordered catalog text lines shown when the region is selected
    pub lines: Vec<String>,
}

impl Region {
    /// Whether the point lies strictly inside the rectangle.
    ///
    /// All four comparisons are strict, so a point exactly on an edge is
    /// not contained.
    #[must_use]
    pub fn contains(&self, point: &ScreenPoint) -> bool {
        self.left < point.x && point.x < self.right && self.top < point.y && point.y < self.bottom
    }
}

/// The fixed, ordered set of selectable regions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCatalog {
    regions: Vec<Region>,
}

impl RegionCatalog {
    /// Build a catalog from an ordered region list
    #[must_use]
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// Index of the first region containing the point, in list order
    #[must_use]
    pub fn select(&self, point: &ScreenPoint) -> Option<usize> {
        self.regions.iter().position(|region| region.contains(point))
    }

    /// Region at the given index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    /// Number of regions in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the catalog has no regions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Check that every region's corners are properly ordered
    ///
    /// # Errors
    ///
    /// Returns an error if any region has a non-positive width or height.
    pub fn validate(&self) -> Result<()> {
        for (i, region) in self.regions.iter().enumerate() {
            if region.left >= region.right || region.top >= region.bottom {
                return Err(Error::ConfigError(format!(
                    "Region {i} has inverted or empty bounds: ({}, {}) to ({}, {})",
                    region.left, region.top, region.right, region.bottom
                )));
            }
        }
        Ok(())
    }
}

impl Default for RegionCatalog {
    /// The original four-item clothing catalog
    fn default() -> Self {
        let text = |lines: &[&str]| lines.iter().map(ToString::to_string).collect();
        Self::new(vec![
            Region {
                left: 75.0,
                top: 150.0,
                right: 250.0,
                bottom: 637.0,
                lines: text(&["Shirt:2000YEN", "Pants:4000YEN", "Slim fit for you"]),
            },
            Region {
                left: 275.0,
                top: 150.0,
                right: 412.0,
                bottom: 637.0,
                lines: text(&[
                    "Shirt:2000YEN",
                    "Sweater: 4000YEN",
                    "Pants:4000YEN",
                    "Make you look slimmer",
                ]),
            },
            Region {
                left: 512.0,
                top: 150.0,
                right: 662.0,
                bottom: 637.0,
                lines: text(&[
                    "Shirt:2000YEN",
                    "Jacket:6000YEN",
                    "Pants: 4000YEN",
                    "Style for all seasons",
                ]),
            },
            Region {
                left: 712.0,
                top: 150.0,
                right: 856.0,
                bottom: 637.0,
                lines: text(&["Shirt:2000YEN", "Pants:4000YEN", "Make your legs look longer"]),
            },
        ])
    }
}
