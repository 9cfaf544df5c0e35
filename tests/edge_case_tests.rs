//! Edge case tests for degenerate input and boundary conditions

use head_pointer::{
    constants::NUM_FACIAL_LANDMARKS,
    face_selection::most_prominent,
    landmarks::{Landmark, LandmarkSet},
    orientation::OrientationEstimator,
    projection::{ScreenGeometry, ScreenPoint},
    regions::{Region, RegionCatalog},
    source::RecordedSource,
    Error,
};
use nalgebra::Point2;

fn face_with_width(width: f64) -> LandmarkSet {
    let mut points = vec![Point2::new(0.0, 0.0); NUM_FACIAL_LANDMARKS];
    points[Landmark::FaceOutlineRight.index()] = Point2::new(width, 0.0);
    LandmarkSet::from_points(points).unwrap()
}

#[test]
fn empty_frame_is_not_an_error() {
    let mut estimator = OrientationEstimator::new(ScreenGeometry::default(), 1.0, 1.0, false);
    // Repeated empty frames: no estimate, no state change, no panic
    for _ in 0..10 {
        assert!(estimator.process(&[]).is_none());
    }
    assert_eq!(estimator.h_angle(), 0.0);
    assert_eq!(estimator.v_angle(), 0.0);
    assert_eq!(estimator.last_face_vector(), None);
}

#[test]
fn coincident_landmarks_never_poison_state() {
    let mut estimator = OrientationEstimator::new(ScreenGeometry::default(), 1.0, 1.0, false);
    let degenerate = LandmarkSet::from_points(vec![Point2::new(7.0, 7.0); NUM_FACIAL_LANDMARKS]).unwrap();

    // Every derived vector is zero-length; the angle math goes through
    // 0/0 but the smoothed state must stay finite
    for _ in 0..5 {
        let estimate = estimator.process(std::slice::from_ref(&degenerate)).unwrap();
        assert!(estimate.h_angle.is_finite());
        assert!(estimate.v_angle.is_finite());
    }
    assert_eq!(estimator.h_angle(), 0.0);
    assert_eq!(estimator.v_angle(), 0.0);
}

#[test]
fn prominence_ties_are_stable_across_orderings() {
    let a = face_with_width(120.0);
    let b = face_with_width(120.0);
    let c = face_with_width(60.0);

    assert_eq!(most_prominent(&[a.clone(), b.clone(), c.clone()]), Some(0));
    assert_eq!(most_prominent(&[c, a, b]), Some(1));
}

#[test]
fn region_edges_are_exclusive_end_to_end() {
    let catalog = RegionCatalog::new(vec![Region {
        left: 100.0,
        top: 150.0,
        right: 300.0,
        bottom: 400.0,
        lines: vec![],
    }]);

    // Just inside vs exactly on the boundary
    assert_eq!(catalog.select(&ScreenPoint { x: 100.001, y: 150.001 }), Some(0));
    assert_eq!(catalog.select(&ScreenPoint { x: 100.0, y: 200.0 }), None);
    assert_eq!(catalog.select(&ScreenPoint { x: 300.0, y: 200.0 }), None);
    assert_eq!(catalog.select(&ScreenPoint { x: 200.0, y: 150.0 }), None);
    assert_eq!(catalog.select(&ScreenPoint { x: 200.0, y: 400.0 }), None);
}

#[test]
fn empty_catalog_selects_nothing() {
    let catalog = RegionCatalog::new(vec![]);
    assert!(catalog.is_empty());
    assert_eq!(catalog.select(&ScreenPoint { x: 500.0, y: 359.0 }), None);
}

#[test]
fn truncated_face_in_recording_is_reported() {
    // 67 points instead of 68
    let pairs: Vec<String> = (0..NUM_FACIAL_LANDMARKS - 1).map(|i| format!("[{i}, {i}]")).collect();
    let yaml = format!("- - [{}]\n", pairs.join(", "));
    match RecordedSource::from_yaml(&yaml) {
        Err(Error::SourceError(message)) => assert!(message.contains("Frame 0")),
        other => panic!("Expected a source error, got {other:?}"),
    }
}

#[test]
fn landmark_set_count_validation_message_names_expectation() {
    let result = LandmarkSet::from_points(vec![Point2::new(0.0, 0.0); 10]);
    match result {
        Err(Error::InvalidInput(message)) => {
            assert!(message.contains("68"));
            assert!(message.contains("10"));
        }
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}
