// File: crates/scatter-core/tests/scale.rs
// Purpose: Validate linear/log mappings, inverses and nice tick generation.

use scatter_core::grid::ticks;
use scatter_core::{ChartBuilder, ChartConfig, LinearScale, LogScale, Scale, ScaleError};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn linear_round_trip_over_domain() {
    let s = LinearScale::new([0.0, 100.0], [0.0, 100.0]);
    for i in 0..=200 {
        let v = i as f64 * 0.5;
        assert!(close(s.invert(s.forward(v)), v), "v={v}");
    }
}

#[test]
fn linear_extrapolates_without_clamping() {
    let s = LinearScale::new([0.0, 10.0], [0.0, 100.0]);
    assert!(close(s.forward(-1.0), -10.0));
    assert!(close(s.forward(20.0), 200.0));
}

#[test]
fn linear_degenerate_domain_maps_to_range_midpoint() {
    let s = LinearScale::new([5.0, 5.0], [0.0, 10.0]);
    assert_eq!(s.forward(123.0), 5.0);
}

#[test]
fn log_forward_after_invert_is_identity() {
    let builder = ChartBuilder::new(ChartConfig::from_viewport(1600, 900)).expect("scales");
    let y = builder.y_scale();
    let height = builder.config().height();
    for i in 0..=100 {
        let v = 1.0 + (height - 1.0) * i as f64 / 100.0;
        assert!(close(y.forward(y.invert(v)), v), "v={v}");
    }
}

#[test]
fn log_maps_domain_endpoints_to_range_endpoints() {
    let s = LogScale::new(2.0, [1.0, 64.0], [1.0, 300.0]).unwrap();
    assert!(close(s.forward(1.0), 1.0));
    assert!(close(s.forward(64.0), 300.0));
    // halfway in log space
    assert!(close(s.forward(8.0), 150.5));
    assert!(close(s.invert(150.5), 8.0));
}

#[test]
fn log_non_positive_value_is_not_finite() {
    let s = LogScale::new(2.0, [1.0, 64.0], [1.0, 300.0]).unwrap();
    assert!(s.forward(-1.0).is_nan());
    assert!(!s.forward(0.0).is_finite());
}

#[test]
fn log_rejects_bad_configuration() {
    assert_eq!(LogScale::new(2.0, [0.0, 10.0], [0.0, 1.0]), Err(ScaleError::NonPositiveLogDomain(0.0, 10.0)));
    assert_eq!(LogScale::new(2.0, [-1.0, 10.0], [0.0, 1.0]), Err(ScaleError::NonPositiveLogDomain(-1.0, 10.0)));
    assert_eq!(LogScale::new(1.0, [1.0, 10.0], [0.0, 1.0]), Err(ScaleError::InvalidBase(1.0)));
    assert_eq!(LogScale::new(-2.0, [1.0, 10.0], [0.0, 1.0]), Err(ScaleError::InvalidBase(-2.0)));
}

#[test]
fn ticks_are_round_and_exact() {
    let want = vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
    assert_eq!(ticks(0.0, 1.0, 10.0), want);
    let mut rev = want.clone();
    rev.reverse();
    assert_eq!(ticks(1.0, 0.0, 10.0), rev);
}

#[test]
fn ticks_edge_cases() {
    assert!(ticks(0.0, 1.0, 0.0).is_empty());
    assert!(ticks(0.0, 1.0, f64::NAN).is_empty());
    assert!(ticks(f64::NAN, 1.0, 10.0).is_empty());
    assert_eq!(ticks(3.0, 3.0, 10.0), vec![3.0]);
    assert_eq!(ticks(0.0, 10.0, 2.0), vec![0.0, 5.0, 10.0]);
    assert_eq!(ticks(-10.0, 10.0, 4.0), vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
}

#[test]
fn linear_x_scale_ticks_every_unit() {
    let s = LinearScale::new([0.0, 100.0], [0.0, 100.0]);
    let t = s.ticks(100);
    assert_eq!(t.len(), 101);
    assert_eq!(t.first(), Some(&0.0));
    assert_eq!(t.last(), Some(&100.0));
    assert!(t.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn log_ticks_fall_back_to_linear_when_powers_are_sparse() {
    // 1..56.25 holds only six powers of two; far fewer than half of 100.
    let s = LogScale::new(2.0, [1.0, 56.25], [1.0, 300.0]).unwrap();
    let t = s.ticks(100);
    assert_eq!(t, ticks(1.0, 56.25, 100.0));
    assert_eq!(&t[..3], &[1.0, 1.5, 2.0]);
    assert_eq!(t.len(), 111);
}

#[test]
fn log_ticks_use_powers_of_the_base() {
    let s = LogScale::new(2.0, [1.0, 1024.0], [0.0, 1.0]).unwrap();
    let want: Vec<f64> = (0..=10).map(|e| 2f64.powi(e)).collect();
    assert_eq!(s.ticks(20), want);

    let s = LogScale::new(10.0, [1.0, 1000.0], [0.0, 1.0]).unwrap();
    assert_eq!(s.ticks(5), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0, 1000.0]);
}

#[test]
fn log_ticks_on_wide_domain_are_spaced_powers() {
    let s = LogScale::new(2.0, [1.0, 2f64.powi(20)], [0.0, 1.0]).unwrap();
    let t = s.ticks(5);
    assert_eq!(t, vec![1.0, 32.0, 1024.0, 32768.0, 1048576.0]);
}

#[test]
fn log_ticks_follow_reversed_domain() {
    let s = LogScale::new(2.0, [1024.0, 1.0], [0.0, 1.0]).unwrap();
    let t = s.ticks(20);
    assert_eq!(t.first(), Some(&1024.0));
    assert_eq!(t.last(), Some(&1.0));
}
