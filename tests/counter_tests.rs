// Host-side tests for the count-up state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod counter {
    include!("../src/core/counter.rs");
}

use counter::*;

#[test]
fn ease_out_expo_endpoints() {
    assert_eq!(ease_out_expo(0.0), 0.0);
    assert_eq!(ease_out_expo(1.0), 1.0);
    assert_eq!(ease_out_expo(2.0), 1.0);
}

#[test]
fn ease_out_expo_is_monotonic() {
    let mut prev = ease_out_expo(0.0);
    for i in 1..=100 {
        let eased = ease_out_expo(i as f64 / 100.0);
        assert!(eased >= prev, "easing decreased at step {i}");
        prev = eased;
    }
}

#[test]
fn display_matches_reference_at_halfway() {
    let mut count = CountUp::new(1200, 2000.0);
    assert!(count.trigger());
    // At 1000 of 2000 ms: eased = 1 - 2^-5 = 0.96875, 0.96875 * 1200 = 1162.5
    assert_eq!(count.advance(1000.0), Some(1162));
}

#[test]
fn display_is_exactly_the_target_at_completion() {
    let mut count = CountUp::new(1200, 2000.0);
    count.trigger();
    assert_eq!(count.advance(2000.0), Some(1200));
    assert!(!count.is_running());
    assert_eq!(count.advance(16.0), None, "idle counter advanced");
    assert_eq!(count.display(), 1200);
}

#[test]
fn overshooting_the_duration_still_lands_on_target() {
    let mut count = CountUp::new(997, 2000.0);
    count.trigger();
    assert_eq!(count.advance(5000.0), Some(997));
}

#[test]
fn display_is_monotonic_over_the_animation() {
    let mut count = CountUp::new(1200, 2000.0);
    count.trigger();
    let mut prev = 0;
    while let Some(value) = count.advance(16.0) {
        assert!(value >= prev, "display decreased: {prev} -> {value}");
        prev = value;
    }
    assert_eq!(prev, 1200);
}

#[test]
fn second_trigger_without_reset_is_a_noop() {
    let mut count = CountUp::new(500, 1000.0);
    assert!(count.trigger());
    while count.advance(16.0).is_some() {}
    assert_eq!(count.display(), 500);

    assert!(!count.trigger());
    assert_eq!(count.advance(16.0), None);
    assert_eq!(count.display(), 500);
}

#[test]
fn trigger_while_running_does_not_restart() {
    let mut count = CountUp::new(500, 1000.0);
    assert!(count.trigger());
    let halfway = count.advance(500.0).unwrap();
    assert!(!count.trigger());
    let later = count.advance(100.0).unwrap();
    assert!(later >= halfway, "animation restarted");
}

#[test]
fn reset_rearms_and_clears_the_display() {
    let mut count = CountUp::new(500, 1000.0);
    count.trigger();
    while count.advance(16.0).is_some() {}

    count.reset();
    assert_eq!(count.display(), 0);
    assert!(count.trigger());
    assert_eq!(count.advance(1000.0), Some(500));
}

#[test]
fn default_duration_is_two_seconds() {
    let mut count = CountUp::with_default_duration(100);
    count.trigger();
    assert_eq!(count.advance(1999.0), Some(99));
    assert_eq!(count.advance(1.0), Some(100));
}

#[test]
fn zero_target_completes_at_zero() {
    let mut count = CountUp::new(0, 2000.0);
    count.trigger();
    assert_eq!(count.advance(2000.0), Some(0));
}
