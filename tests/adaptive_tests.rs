// Host-side tests for adaptive resolution.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod adaptive {
    include!("../src/core/adaptive.rs");
}

use adaptive::*;

const FAST: f32 = 1.0 / 60.0;
const SLOW: f32 = 0.05;

#[test]
fn starts_at_full_scale() {
    let a = AdaptivePerformance::default();
    assert_eq!(a.factor(), 1.0);
    assert!(!a.is_regressed());
    assert!(a.events_enabled());
}

#[test]
fn steady_fast_frames_never_regress() {
    let mut a = AdaptivePerformance::default();
    for _ in 0..600 {
        assert!(!a.record_frame(FAST));
    }
    assert_eq!(a.factor(), 1.0);
}

#[test]
fn isolated_slow_frames_are_tolerated() {
    let mut a = AdaptivePerformance::default();
    for _ in 0..10 {
        assert!(!a.record_frame(SLOW));
        assert!(!a.record_frame(SLOW));
        assert!(!a.record_frame(FAST));
    }
    assert!(!a.is_regressed());
}

#[test]
fn three_slow_frames_regress() {
    let mut a = AdaptivePerformance::default();
    assert!(!a.record_frame(SLOW));
    assert!(!a.record_frame(SLOW));
    assert!(a.record_frame(SLOW));
    assert_eq!(a.factor(), constants::PERFORMANCE_MIN);
    assert!(!a.events_enabled());
    // staying slow is not another change
    for _ in 0..6 {
        assert!(!a.record_frame(SLOW));
    }
}

#[test]
fn recovers_after_debounce() {
    let mut a = AdaptivePerformance::default();
    for _ in 0..3 {
        a.record_frame(SLOW);
    }
    // 0.03 s frames: six fit inside the 0.2 s window, the seventh crosses it
    for _ in 0..6 {
        assert!(!a.record_frame(0.03));
        assert!(a.is_regressed());
    }
    assert!(a.record_frame(0.03));
    assert_eq!(a.factor(), 1.0);
    assert!(a.events_enabled());
}

#[test]
fn slow_frame_restarts_recovery_window() {
    let mut a = AdaptivePerformance::default();
    for _ in 0..3 {
        a.record_frame(SLOW);
    }
    for _ in 0..5 {
        assert!(!a.record_frame(0.03));
    }
    assert!(!a.record_frame(SLOW));
    // 0.06 s since the last slow frame is not enough
    for _ in 0..2 {
        assert!(!a.record_frame(0.03));
    }
    assert!(a.is_regressed());
    // the full 0.2 s window has to pass again
    for _ in 0..4 {
        assert!(!a.record_frame(0.03));
        assert!(a.is_regressed());
    }
    assert!(a.record_frame(0.03));
    assert_eq!(a.factor(), 1.0);
}

#[test]
fn pixel_ratio_clamped_and_scaled() {
    assert_eq!(clamp_dpr(0.5), 1.0);
    assert_eq!(clamp_dpr(1.5), 1.5);
    assert_eq!(clamp_dpr(3.0), 2.0);
    assert_eq!(clamp_dpr(f64::NAN), 1.0);
    assert_eq!(clamp_dpr(f64::INFINITY), 1.0);

    let mut a = AdaptivePerformance::default();
    assert_eq!(a.pixel_ratio(3.0), 2.0);
    for _ in 0..3 {
        a.record_frame(SLOW);
    }
    assert_eq!(a.pixel_ratio(3.0), 1.0);
    assert_eq!(a.pixel_ratio(1.0), 0.5);
}
