// Adaptive resolution and pointer-event gating.
//
// A run of slow frames drops the render scale to the performance floor and
// suspends pointer-driven scene updates. Once frames have stayed within
// budget for the debounce window the scale returns to full.

use crate::constants::{
    DPR_MAX, DPR_MIN, FRAME_BUDGET_SEC, PERFORMANCE_MIN, REGRESS_DEBOUNCE_SEC,
    SLOW_FRAMES_TO_REGRESS,
};

#[derive(Clone, Debug)]
pub struct AdaptivePerformance {
    factor: f64,
    slow_frames: u32,
    // seconds left before recovery; None while at full scale
    recover_in: Option<f32>,
}

impl Default for AdaptivePerformance {
    fn default() -> Self {
        Self {
            factor: 1.0,
            slow_frames: 0,
            recover_in: None,
        }
    }
}

impl AdaptivePerformance {
    /// Record one frame's duration. Returns true when the render scale changed.
    pub fn record_frame(&mut self, dt_sec: f32) -> bool {
        let slow = dt_sec > FRAME_BUDGET_SEC;
        if slow {
            self.slow_frames += 1;
        } else {
            self.slow_frames = 0;
        }

        if self.slow_frames >= SLOW_FRAMES_TO_REGRESS {
            self.slow_frames = 0;
            let changed = self.recover_in.is_none();
            self.factor = PERFORMANCE_MIN;
            self.recover_in = Some(REGRESS_DEBOUNCE_SEC);
            return changed;
        }

        if let Some(left) = self.recover_in {
            if slow {
                // recovery needs a full window with no slow frames
                self.recover_in = Some(REGRESS_DEBOUNCE_SEC);
                return false;
            }
            let left = left - dt_sec.max(0.0);
            if left <= 0.0 {
                self.recover_in = None;
                self.factor = 1.0;
                return true;
            }
            self.recover_in = Some(left);
        }
        false
    }

    #[inline]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    #[inline]
    pub fn is_regressed(&self) -> bool {
        self.recover_in.is_some()
    }

    /// Pointer events reach the scene only at full scale.
    #[inline]
    pub fn events_enabled(&self) -> bool {
        !self.is_regressed()
    }

    /// Effective backing-store pixel ratio for a device ratio.
    pub fn pixel_ratio(&self, device_pixel_ratio: f64) -> f64 {
        clamp_dpr(device_pixel_ratio) * self.factor
    }
}

#[inline]
pub fn clamp_dpr(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() {
        device_pixel_ratio.clamp(DPR_MIN, DPR_MAX)
    } else {
        DPR_MIN
    }
}
