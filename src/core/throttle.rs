use crate::constants::TICK_THROTTLE_MS;

/// Wall-clock rate limiter for the global tick sound.
///
/// Fires on the first call, then only when strictly more than `interval_ms`
/// has passed since the last accepted call.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms: f64,
    last_fire_ms: Option<f64>,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(TICK_THROTTLE_MS)
    }
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_fire_ms: None,
        }
    }

    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        let ready = match self.last_fire_ms {
            None => true,
            Some(last) => now_ms - last > self.interval_ms,
        };
        if ready {
            self.last_fire_ms = Some(now_ms);
        }
        ready
    }

    pub fn last_fire_ms(&self) -> Option<f64> {
        self.last_fire_ms
    }
}
