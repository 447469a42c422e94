// Host-side tests for the splash flag and the tick throttle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod splash {
    include!("../src/core/splash.rs");
}
mod throttle {
    include!("../src/core/throttle.rs");
}

use splash::*;
use throttle::*;

#[test]
fn splash_is_loading_at_mount() {
    let s = Splash::new(1000.0);
    assert!(s.is_loading());
    assert_eq!(s.delay_ms(), constants::SPLASH_DELAY_MS);
}

#[test]
fn splash_stays_up_before_delay() {
    let mut s = Splash::new(0.0);
    for t in [0.0, 100.0, 1000.0, 2499.0] {
        assert_eq!(s.poll(t), None);
        assert!(s.is_loading());
    }
    assert_eq!(s.remaining_ms(2000.0), 500.0);
}

#[test]
fn splash_dismisses_exactly_once() {
    let mut s = Splash::new(0.0);
    assert_eq!(s.poll(2500.0), Some(SplashEvent::Dismissed));
    assert!(!s.is_loading());
    // never flips back, never reports twice
    for t in [2501.0, 5000.0, 0.0] {
        assert_eq!(s.poll(t), None);
        assert!(!s.is_loading());
    }
}

#[test]
fn splash_late_poll_still_dismisses() {
    let mut s = Splash::new(500.0);
    assert_eq!(s.poll(10_000.0), Some(SplashEvent::Dismissed));
    assert_eq!(s.remaining_ms(10_000.0), 0.0);
}

#[test]
fn splash_custom_delay_clamps_negative() {
    let mut s = Splash::with_delay(0.0, -5.0);
    assert_eq!(s.delay_ms(), 0.0);
    assert_eq!(s.poll(0.0), Some(SplashEvent::Dismissed));
}

#[test]
fn throttle_first_event_fires() {
    let mut t = Throttle::default();
    assert_eq!(t.last_fire_ms(), None);
    assert!(t.try_fire(123.0));
    assert_eq!(t.last_fire_ms(), Some(123.0));
}

#[test]
fn throttle_burst_fires_once() {
    let mut t = Throttle::default();
    let fired = (0..10).filter(|i| t.try_fire(*i as f64)).count();
    assert_eq!(fired, 1);
}

#[test]
fn throttle_spaced_events_all_fire() {
    let mut t = Throttle::default();
    let fired = (0..10).filter(|i| t.try_fire(*i as f64 * 60.0)).count();
    assert_eq!(fired, 10);
}

#[test]
fn throttle_boundary_is_strict() {
    let mut t = Throttle::new(50.0);
    assert!(t.try_fire(0.0));
    assert!(!t.try_fire(50.0));
    assert!(t.try_fire(50.5));
    // suppressed events do not push the window forward
    assert!(!t.try_fire(80.0));
    assert!(t.try_fire(101.0));
}
