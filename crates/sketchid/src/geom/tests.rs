use super::*;
use nalgebra::Vector2;

fn v(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

#[test]
fn envelope_of_points_and_empty_set() {
    let env = Envelope::from_points(&[v(1.0, -2.0), v(-3.0, 4.0), v(0.5, 0.5)]);
    assert_eq!(env.x_min, -3.0);
    assert_eq!(env.y_min, -2.0);
    assert_eq!(env.x_max, 1.0);
    assert_eq!(env.y_max, 4.0);
    assert_eq!(env.longer_side(), 6.0);
    assert_eq!(env.shorter_side(), 4.0);

    assert_eq!(Envelope::from_points(&[]), Envelope::default());
}

#[test]
fn angle_right_straight_and_degenerate() {
    let right = angle_deg(v(0.0, 1.0), v(0.0, 0.0), v(1.0, 0.0));
    assert!((right - 90.0).abs() < 1e-9);

    let straight = angle_deg(v(-1.0, 0.0), v(0.0, 0.0), v(1.0, 0.0));
    assert!((straight - 180.0).abs() < 1e-9);

    let sharp = angle_deg(v(1.0, 1.0), v(0.0, 0.0), v(1.0, 0.0));
    assert!((sharp - 45.0).abs() < 1e-9);

    // Duplicate point -> zero-length arm -> NaN, never a corner.
    let nan = angle_deg(v(0.0, 0.0), v(0.0, 0.0), v(1.0, 0.0));
    assert!(nan.is_nan());
}

#[test]
fn chord_slope_vertical_sentinel() {
    assert_eq!(chord_slope(v(2.0, 0.0), v(2.0, 5.0)), f64::INFINITY);
    assert!((chord_slope(v(0.0, 0.0), v(2.0, 1.0)) - 0.5).abs() < 1e-12);
}

#[test]
fn slopes_agree_dual_test() {
    // Shallow pair: raw spread decides.
    assert!(slopes_agree(0.0, 0.5, 1.0));
    // Steep pair: reciprocal spread decides even though raw spread is huge.
    assert!(slopes_agree(10.0, 100.0, 1.0));
    // Two verticals agree through reciprocals.
    assert!(slopes_agree(f64::INFINITY, f64::INFINITY, 1.0));
    // Horizontal vs vertical agree under neither test.
    assert!(!slopes_agree(0.0, f64::INFINITY, 1.0));
    assert!(!slopes_agree(0.0, 3.0, 1.0));
}

#[test]
fn intersection_of_crossing_chords() {
    let cfg = GeomCfg::default();
    let p = segment_intersect(v(0.0, 0.0), v(10.0, 10.0), v(0.0, 10.0), v(10.0, 0.0), &cfg)
        .expect("diagonals cross");
    assert!((p - v(5.0, 5.0)).norm() < 1e-9);
}

#[test]
fn intersection_rejects_parallel_and_out_of_range() {
    let cfg = GeomCfg::default();
    // Parallel, non-overlapping.
    assert!(segment_intersect(v(0.0, 0.0), v(10.0, 0.0), v(0.0, 1.0), v(10.0, 1.0), &cfg).is_none());
    // Lines cross at (1.5, 1.5), outside the first chord.
    assert!(segment_intersect(v(0.0, 0.0), v(1.0, 1.0), v(3.0, 0.0), v(0.0, 3.0), &cfg).is_none());
}

#[test]
fn intersection_endpoint_touch_is_inclusive() {
    let cfg = GeomCfg::default();
    // Chords meeting exactly at a shared endpoint: inclusive bounds keep it.
    let p = segment_intersect(v(0.0, 0.0), v(5.0, 0.0), v(5.0, -1.0), v(5.0, 1.0), &cfg)
        .expect("touching chords intersect");
    assert!((p - v(5.0, 0.0)).norm() < 1e-9);
}

#[test]
fn points_coincide_respects_tolerance() {
    assert!(points_coincide(v(1.0, 1.0), v(1.00005, 0.99995), 1e-4));
    assert!(!points_coincide(v(1.0, 1.0), v(1.0002, 1.0), 1e-4));
}

mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Two chords built through a common point recover it within epsilon.
        #[test]
        fn chords_through_a_common_point_intersect_there(
            px in -5.0f64..5.0,
            py in -5.0f64..5.0,
            theta in 0.2f64..1.3,
        ) {
            let cfg = GeomCfg::default();
            let p = v(px, py);
            let d1 = v(1.0, 0.0);
            let d2 = v(theta.cos(), theta.sin());
            let hit = segment_intersect(p - d1 * 3.0, p + d1 * 3.0, p - d2 * 3.0, p + d2 * 3.0, &cfg);
            prop_assert!(hit.is_some());
            prop_assert!((hit.unwrap() - p).norm() < 1e-9);
        }
    }
}
