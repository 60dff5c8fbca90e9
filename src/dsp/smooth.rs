/*
Click-Free Parameter Ramps
==========================

Changing a gain or a frequency by assignment while audio is running produces
a discontinuity in the output signal - heard as a click or "zipper" noise.
The fix is the same one every live synthesis system uses: never jump a
parameter, always ramp it from its current value to the new target over a
short window starting *now*.

    value
      new ┤           ________
          │          /
          │         /
      old ┤________/
          └────────┬───────┬──→ time
              change    settled
              arrives

We use LINEAR ramps over a fixed window (RAMP_SECONDS, 20 ms):

  - Short enough that a retune feels immediate to the listener.
  - Long enough that the slope stays well below audibility as a transient.
  - Linear keeps the math to one addition per sample; an exponential
    approach never quite lands on the target, which complicates testing.

A fresh parameter starts *settled at its initial value* - graph construction
applies the starting frequencies and gain atomically, with no fade-in.
*/

/// Seconds a retarget takes to settle.
const RAMP_SECONDS: f32 = 0.02;

/// A scalar parameter that moves toward its target in per-sample steps.
#[derive(Debug, Clone, Copy)]
pub struct SmoothedParam {
    current: f32,
    target: f32,
    /// Per-sample increment while ramping; sign points at the target.
    step: f32,
}

impl SmoothedParam {
    /// Create a parameter already settled at `value`.
    pub fn new(value: f32) -> Self {
        Self {
            current: value,
            target: value,
            step: 0.0,
        }
    }

    /// Schedule a ramp from the current value to `target`, starting now.
    pub fn set_target(&mut self, target: f32, sample_rate: f32) {
        self.target = target;
        let ramp_samples = (RAMP_SECONDS * sample_rate).max(1.0);
        self.step = (target - self.current) / ramp_samples;
    }

    /// Jump straight to `value` with no ramp. Only safe while no audio is
    /// being rendered (graph construction, tests).
    pub fn snap_to(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.step = 0.0;
    }

    /// Advance one sample and return the parameter value to use for it.
    #[inline]
    pub fn next(&mut self) -> f32 {
        if self.step != 0.0 {
            self.current += self.step;
            // Terminate the ramp exactly on target, never past it.
            if (self.step > 0.0 && self.current >= self.target)
                || (self.step < 0.0 && self.current <= self.target)
            {
                self.current = self.target;
                self.step = 0.0;
            }
        }
        self.current
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.step == 0.0
    }
}
