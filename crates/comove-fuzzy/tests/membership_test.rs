//! Membership ramp properties over the full magnitude range.

use comove_fuzzy::membership::{degrees, high, low, medium};
use proptest::prelude::*;

#[test]
fn anchor_points() {
    let at25 = degrees(25.0);
    assert_eq!((at25.low, at25.medium, at25.high), (1.0, 0.0, 0.0));

    assert!((medium(50.0) - 1.0).abs() < 1e-12);
    assert_eq!(high(75.0), 1.0);
}

#[test]
fn boundaries_use_closed_upper_ends() {
    // 33 still belongs to the low fall-off range, so medium has not started.
    assert_eq!(medium(33.0), 0.0);
    // 50 is the last point of the medium rise.
    assert!(medium(50.0) > medium(50.0 + 1e-9));
    // 66 closes the medium fall-off; high starts just above it.
    assert_eq!(high(66.0), 0.0);
    assert!(high(66.1) > 0.0);
}

#[test]
fn gaps_between_buckets_have_no_membership() {
    // The low fall-off reaches zero before 33 and the medium fall-off before 66.
    let d = degrees(31.0);
    assert_eq!((d.low, d.medium, d.high), (0.0, 0.0, 0.0));
    let d = degrees(62.0);
    assert_eq!((d.low, d.medium, d.high), (0.0, 0.0, 0.0));
}

proptest! {
    #[test]
    fn degrees_stay_in_unit_interval(x in 0.0f64..=200.0) {
        let d = degrees(x);
        for v in [d.low, d.medium, d.high] {
            prop_assert!((0.0..=1.0).contains(&v));
        }
        prop_assert!(d.low + d.medium + d.high >= 0.0);
    }

    #[test]
    fn buckets_do_not_overlap(x in 0.0f64..=200.0) {
        let positive = [low(x), medium(x), high(x)].iter().filter(|v| **v > 0.0).count();
        prop_assert!(positive <= 1);
    }
}
