// Loading splash state.
//
// The splash is shown from mount until a fixed delay has elapsed. The flag
// only ever goes from loading to loaded; `poll` reports that edge once.

use crate::constants::SPLASH_DELAY_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashEvent {
    Dismissed,
}

#[derive(Clone, Debug)]
pub struct Splash {
    mounted_at_ms: f64,
    delay_ms: f64,
    loading: bool,
}

impl Splash {
    pub fn new(mounted_at_ms: f64) -> Self {
        Self::with_delay(mounted_at_ms, SPLASH_DELAY_MS)
    }

    pub fn with_delay(mounted_at_ms: f64, delay_ms: f64) -> Self {
        Self {
            mounted_at_ms,
            delay_ms: delay_ms.max(0.0),
            loading: true,
        }
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// Time left before the splash may be dismissed; 0 once it is due.
    pub fn remaining_ms(&self, now_ms: f64) -> f64 {
        (self.mounted_at_ms + self.delay_ms - now_ms).max(0.0)
    }

    /// Advance the flag against a wall-clock reading.
    ///
    /// Returns `Some(SplashEvent::Dismissed)` on the single call where the
    /// flag flips; every later call returns `None`.
    pub fn poll(&mut self, now_ms: f64) -> Option<SplashEvent> {
        if !self.loading {
            return None;
        }
        if now_ms - self.mounted_at_ms >= self.delay_ms {
            self.loading = false;
            return Some(SplashEvent::Dismissed);
        }
        None
    }
}
