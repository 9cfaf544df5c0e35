//! Landmark input seam.
//!
//! Face detection and landmark fitting are external collaborators. This
//! module defines the boundary they feed frames through, plus a recorded
//! playback source so the pipeline can run from captured landmark data
//! without a camera.

use crate::{landmarks::LandmarkSet, Error, Result};
use log::info;
use nalgebra::Point2;
use std::collections::VecDeque;
use std::path::Path;

/// Supplies one frame of landmark sets at a time.
///
/// `Ok(Some(sets))` is a frame (possibly with zero faces), `Ok(None)` is
/// end of stream.
pub trait LandmarkSource {
    /// Produce the next frame's landmark sets
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source fails irrecoverably.
    fn next_frame(&mut self) -> Result<Option<Vec<LandmarkSet>>>;
}

/// Plays back frames of landmark sets recorded to a YAML file.
///
/// File format: a list of frames; each frame is a list of faces; each
/// face is a list of exactly 68 `[x, y]` pairs.
#[derive(Debug)]
pub struct RecordedSource {
    frames: VecDeque<Vec<LandmarkSet>>,
}

impl RecordedSource {
    /// Load a recording from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML,
    /// or any face does not have exactly 68 points.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let source = Self::from_yaml(&content)?;
        info!(
            "Loaded {} recorded frames from {}",
            source.frames.len(),
            path.as_ref().display()
        );
        Ok(source)
    }

    /// Parse a recording from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error on malformed YAML or a wrong landmark count.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let raw: Vec<Vec<Vec<[f64; 2]>>> =
            serde_yaml::from_str(content).map_err(|e| Error::SourceError(format!("Failed to parse frames: {e}")))?;

        let mut frames = VecDeque::with_capacity(raw.len());
        for (frame_index, frame) in raw.into_iter().enumerate() {
            let mut sets = Vec::with_capacity(frame.len());
            for face in frame {
                let points = face.into_iter().map(|[x, y]| Point2::new(x, y)).collect();
                let set = LandmarkSet::from_points(points)
                    .map_err(|e| Error::SourceError(format!("Frame {frame_index}: {e}")))?;
                sets.push(set);
            }
            frames.push_back(sets);
        }

        Ok(Self { frames })
    }

    /// Build a source directly from in-memory frames
    #[must_use]
    pub fn from_frames(frames: Vec<Vec<LandmarkSet>>) -> Self {
        Self {
            frames: frames.into(),
        }
    }

    /// Number of frames remaining
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl LandmarkSource for RecordedSource {
    fn next_frame(&mut self) -> Result<Option<Vec<LandmarkSet>>> {
        Ok(self.frames.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NUM_FACIAL_LANDMARKS;

    fn face_yaml() -> String {
        let point_list = (0..NUM_FACIAL_LANDMARKS)
            .map(|i| format!("[{}.0, {}.0]", i, i * 2))
            .collect::<Vec<_>>()
            .join(", ");
        format!("- - [{point_list}]\n- []\n")
    }

    #[test]
    fn parses_frames_with_and_without_faces() {
        let mut source = RecordedSource::from_yaml(&face_yaml()).unwrap();
        assert_eq!(source.remaining(), 2);

        let first = source.next_frame().unwrap().unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].nose_tip(), Point2::new(30.0, 60.0));

        let second = source.next_frame().unwrap().unwrap();
        assert!(second.is_empty());

        assert!(source.next_frame().unwrap().is_none());
    }

    #[test]
    fn rejects_wrong_landmark_count() {
        let result = RecordedSource::from_yaml("- - [[1.0, 2.0], [3.0, 4.0]]\n");
        assert!(matches!(result, Err(Error::SourceError(_))));
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(RecordedSource::from_yaml("not: [valid").is_err());
    }

    #[test]
    fn in_memory_frames_play_back_in_order() {
        let face = LandmarkSet::from_points(vec![Point2::new(1.0, 1.0); NUM_FACIAL_LANDMARKS]).unwrap();
        let mut source = RecordedSource::from_frames(vec![vec![face.clone()], vec![]]);
        assert_eq!(source.next_frame().unwrap().unwrap(), vec![face]);
        assert!(source.next_frame().unwrap().unwrap().is_empty());
        assert!(source.next_frame().unwrap().is_none());
    }
}
