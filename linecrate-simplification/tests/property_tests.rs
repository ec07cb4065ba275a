//! Structural properties of simplification over seeded random walks

use linecrate_core::{Point2d, Point3d};
use linecrate_simplification::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_walk(rng: &mut StdRng, len: usize) -> Vec<Point2d> {
    let mut x = 0.0;
    let mut y = 0.0;
    (0..len)
        .map(|_| {
            x += rng.gen_range(-2.0..2.0);
            y += rng.gen_range(-2.0..2.0);
            Point2d::new(x, y)
        })
        .collect()
}

fn is_strictly_increasing(indices: &[usize]) -> bool {
    indices.windows(2).all(|w| w[0] < w[1])
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_output_is_ordered_subsequence_with_endpoints() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let len = rng.gen_range(3..300);
        let points = random_walk(&mut rng, len);
        let tolerance = rng.gen_range(0.0..5.0);

        for high_quality in [false, true] {
            let kept = simplify_indices(&points, tolerance, high_quality).unwrap();
            assert!(is_strictly_increasing(&kept));
            assert_eq!(kept.first(), Some(&0));
            assert_eq!(kept.last(), Some(&(len - 1)));
            assert!(kept.len() <= len);
        }
    }
}

#[test]
fn test_short_inputs_unchanged() {
    let mut rng = StdRng::seed_from_u64(3);

    for len in 0..=2 {
        let points = random_walk(&mut rng, len);
        for tolerance in [0.0, 1.0, 1000.0] {
            for high_quality in [false, true] {
                let kept = simplify(&points, tolerance, high_quality).unwrap();
                assert_eq!(kept, points.iter().collect::<Vec<_>>());
            }
        }
    }
}

#[test]
fn test_douglas_peucker_is_monotonic_in_tolerance() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let points = random_walk(&mut rng, 200);
        let mut previous = usize::MAX;
        for step in 0..30 {
            let tolerance = step as f64 * 0.25;
            let kept = simplify_indices(&points, tolerance, true).unwrap();
            assert!(kept.len() <= previous, "tolerance = {tolerance}");
            previous = kept.len();
        }
    }
}

#[test]
fn test_high_quality_never_beats_tolerance() {
    // Every dropped point lies within tolerance of the chord that replaced it
    let mut rng = StdRng::seed_from_u64(11);
    let points = random_walk(&mut rng, 500);
    let tolerance = 1.5;

    let kept = simplify_indices(&points, tolerance, true).unwrap();
    for pair in kept.windows(2) {
        let (first, last) = (pair[0], pair[1]);
        for point in &points[first + 1..last] {
            let d = linecrate_core::segment_square_distance(point, &points[first], &points[last]);
            assert!(d <= tolerance * tolerance);
        }
    }
}

#[test]
fn test_radial_keeps_spacing() {
    let mut rng = StdRng::seed_from_u64(19);
    let points = random_walk(&mut rng, 400);
    let sq_tolerance = 4.0;

    let kept = simplify_radial_distance_indices(&points, sq_tolerance);
    // All but the trailing point are at least the tolerance apart
    for pair in kept[..kept.len() - 1].windows(2) {
        let d = linecrate_core::square_distance(&points[pair[0]], &points[pair[1]]);
        assert!(d >= sq_tolerance);
    }
    assert_eq!(kept.last(), Some(&(points.len() - 1)));
}

#[test]
fn test_2d_and_lifted_3d_agree() {
    let mut rng = StdRng::seed_from_u64(23);
    let points = random_walk(&mut rng, 250);
    let lifted: Vec<Point3d> = points.iter().map(linecrate_core::lift).collect();

    for tolerance in [0.2, 1.0, 3.0] {
        for high_quality in [false, true] {
            assert_eq!(
                simplify_indices(&points, tolerance, high_quality).unwrap(),
                simplify_indices(&lifted, tolerance, high_quality).unwrap()
            );
        }
    }
}
