use crate::*;

use nodepath::algorithms::fit::{find_path, DEFAULT_CURVATURE};
use nodepath::algorithms::insert::insert_point;
use nodepath::algorithms::length::{length, segment_lengths, segmented_length, SampleType};
use nodepath::algorithms::sample::{locate, point as sample_point, points};
use nodepath::algorithms::PathError;
use nodepath::geom::DEFAULT_CURVE_SAMPLES;
use nodepath::path::{PathCommand, PathElement};

const TS: [f64; 9] = [0.0, 0.05, 0.2, 0.33, 0.5, 0.61, 0.75, 0.9, 1.0];

#[test]
fn single_line_length_and_ends() {
    init_logger();

    let lines = [
        (point(0.0, 0.0), point(100.0, 0.0)),
        (point(-3.0, 7.0), point(12.0, -1.0)),
        (point(1.5, 1.5), point(1.5, 1.5)),
    ];

    for &(a, b) in &lines {
        let path = Path::from_points(&[a, b]);

        let expected = (b - a).length();
        let measured = length(&path, DEFAULT_CURVE_SAMPLES).unwrap();
        assert!((measured - expected).abs() < 1e-9);

        assert_eq!(sample_point(&path, 0.0, None).unwrap().position(), a);
        assert_approx_eq(sample_point(&path, 1.0, None).unwrap().position(), b, 1e-9);
    }
}

#[test]
fn relative_lengths_sum_to_one() {
    init_logger();

    for path in test_paths() {
        let relative = segmented_length(&path, DEFAULT_CURVE_SAMPLES).unwrap();
        assert_eq!(relative.len(), path.len() - 1);

        let sum: f64 = relative.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "{:?} sums to {}", path, sum);
        assert!(relative.iter().all(|&l| l >= 0.0));
    }

    let degenerate = Path::from_points(&[(3.0, 3.0), (3.0, 3.0), (3.0, 3.0)]);
    assert_eq!(
        segment_lengths(&degenerate, SampleType::Normalized, DEFAULT_CURVE_SAMPLES),
        Ok(vec![0.0, 0.0])
    );
}

#[test]
fn sampling_a_straight_line_is_monotonic() {
    let path = Path::from_points(&[(10.0, 5.0), (90.0, 5.0)]);

    let positions = sample_positions(&path, 57);
    assert_eq!(positions.len(), 57);
    for pair in positions.windows(2) {
        assert!(pair[0].x <= pair[1].x);
        assert!((pair[1].y - 5.0).abs() < 1e-9);
    }

    let mut previous = 0.0;
    for i in 0..=100 {
        let t = i as f64 / 100.0;
        let location = locate(&path, t, None).unwrap();
        assert!(location.t >= previous);
        previous = location.t;
    }
}

#[test]
fn insert_point_preserves_shape() {
    init_logger();

    for path in test_paths() {
        let reference = sample_positions(&path, 4000);

        for &t in &TS {
            let expected = sample_point(&path, t, None).unwrap().position();
            let location = locate(&path, t, None).unwrap();
            let result = insert_point(&path, t).unwrap();

            assert_eq!(result.len(), path.len() + 1);

            // The new anchor is exactly at the inserted position.
            let anchor = result[location.index].point().unwrap();
            assert_approx_eq(anchor, expected, 1e-9);

            // Elements before and after the split segment are untouched.
            assert_eq!(
                &result.elements()[..location.index],
                &path.elements()[..location.index]
            );
            assert_eq!(
                &result.elements()[location.index + 2..],
                &path.elements()[location.index + 1..]
            );

            // The refined path traces the same shape.
            for p in sample_positions(&result, 500) {
                let d = distance_to_polyline(p, &reference);
                assert!(d < 0.5, "{:?} is {} away from {:?}", p, d, path);
            }
        }
    }
}

#[test]
fn find_path_edge_cases() {
    let p0 = point(10.0, 20.0);
    let p1 = point(30.0, 40.0);
    let p2 = point(50.0, 20.0);

    assert!(find_path(Vec::<Point>::new(), DEFAULT_CURVATURE).is_empty());
    assert_eq!(
        find_path(&[p0], DEFAULT_CURVATURE).elements(),
        &[PathElement::MoveTo(p0)]
    );
    assert_eq!(
        find_path(&[p0, p1], DEFAULT_CURVATURE).elements(),
        &[PathElement::MoveTo(p0), PathElement::LineTo(p1)]
    );

    let polyline = find_path(&[p0, p1, p2], 0.0);
    assert_eq!(polyline[0], PathElement::MoveTo(p0));
    assert_eq!(
        &polyline.elements()[1..],
        &[
            PathElement::LineTo(p0),
            PathElement::LineTo(p1),
            PathElement::LineTo(p2),
        ]
    );
    assert!(polyline
        .elements()
        .iter()
        .all(|e| e.command() != PathCommand::CurveTo));
}

#[test]
fn find_path_interpolates_and_can_be_sampled() {
    let input = [(0.0, 0.0), (30.0, 60.0), (80.0, 10.0), (120.0, 70.0), (160.0, 0.0)];

    for &curvature in &[1.0, 0.75, 0.3, 0.01] {
        let path = find_path(&input, curvature);
        assert_eq!(path.len(), input.len());

        for (element, &(x, y)) in path.elements().iter().zip(input.iter()) {
            assert_eq!(element.point(), Some(point(x, y)));
        }

        let samples = sample_positions(&path, 20);
        assert_eq!(samples.len(), 20);
        assert_eq!(samples[0], point(0.0, 0.0));
        assert_approx_eq(samples[19], point(160.0, 0.0), 1e-9);
    }
}

#[test]
fn corner_measurements() {
    let path = corner();

    assert_eq!(length(&path, DEFAULT_CURVE_SAMPLES), Ok(200.0));
    assert_eq!(segmented_length(&path, DEFAULT_CURVE_SAMPLES), Ok(vec![0.5, 0.5]));
}

#[test]
fn points_include_both_ends() {
    let path = Path::from_points(&[(0.0, 0.0), (100.0, 0.0)]);

    let xs: Vec<f64> = sample_positions(&path, 4).iter().map(|p| p.x).collect();
    assert_eq!(xs.len(), 4);
    assert_eq!(xs[0], 0.0);
    assert!((xs[1] - 33.333333333).abs() < 1e-6);
    assert!((xs[2] - 66.666666667).abs() < 1e-6);
    assert_eq!(xs[3], 100.0);

    // A single sample is at the start of the path.
    assert_eq!(sample_positions(&path, 1), vec![point(0.0, 0.0)]);
}

#[test]
fn contour_counts() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0));
    path.line_to(point(100.0, 100.0));
    assert_eq!(path.contours().count(), 1);

    path.move_to(point(50.0, 50.0));
    path.curve_to(point(150.0, 150.0), point(50.0, 250.0), point(80.0, 95.0));
    assert_eq!(path.contours().count(), 2);

    // Move-tos with nothing drawn after them don't produce contours.
    path.move_to(point(50.0, 50.0));
    path.move_to(point(50.0, 50.0));
    assert_eq!(path.contours().count(), 2);

    path.close();
    assert_eq!(path.contours().count(), 2);

    let mut redundant = Path::new();
    redundant.move_to(point(0.0, 0.0));
    redundant.move_to(point(0.0, 0.0));
    redundant.line_to(point(10.0, 0.0));
    redundant.move_to(point(20.0, 0.0));
    redundant.line_to(point(30.0, 0.0));
    let contours: Vec<Path> = redundant.contours().collect();
    assert_eq!(contours.len(), 2);
    assert!(contours.iter().all(|c| c.len() == 2));

    let total: usize = mixed().contours().map(|c| c.len()).sum();
    assert_eq!(total, mixed().len());
}

#[test]
fn memoized_and_explicit_lengths_agree() {
    for path in test_paths() {
        let segments = segmented_length(&path, DEFAULT_CURVE_SAMPLES).unwrap();
        let fresh = Path::from_elements(path.elements().to_vec());

        for &t in &TS {
            assert_eq!(
                sample_point(&path, t, Some(&segments[..])),
                sample_point(&fresh, t, None)
            );
        }
    }
}

#[test]
fn empty_path_errors() {
    let empty = Path::new();
    let single = Path::from_points(&[(1.0, 1.0)]);

    assert_eq!(length(&empty, DEFAULT_CURVE_SAMPLES), Err(PathError::Empty));
    assert_eq!(sample_point(&empty, 0.5, None), Err(PathError::Empty));
    assert_eq!(sample_point(&single, 0.5, None), Err(PathError::Empty));
    assert_eq!(insert_point(&single, 0.5), Err(PathError::Empty));
    assert!(points(&empty, 10).is_err());
}

#[test]
#[should_panic(expected = "can't sample")]
fn sampling_helper_reports_errors() {
    sample_positions(&Path::from_points(&[(1.0, 1.0)]), 3);
}
