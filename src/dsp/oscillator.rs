/*
Sine Tone Source
================

A binaural generator needs exactly one kind of oscillator: a pure sine tone
with no harmonics. The perceived "beat" comes from the difference between two
such tones, one per ear - any harmonic content would smear the effect.

Phase Accumulation
------------------

The oscillator keeps a single state variable: phase in [0, 1), the fraction
of the current cycle completed. Each sample advances it by

    phase += frequency / sample_rate

and wraps at 1.0. The output sample is sin(2pi * phase).

Why track phase instead of computing sin(2pi * f * t) from a sample counter?
Because frequency changes mid-stream. With a sample counter, changing f
jumps the argument of sin() discontinuously - an audible click. With an
accumulator, a frequency change only alters the *rate* at which phase
advances; the waveform stays continuous through the change. This is what
makes live retuning glitch-free at the source level (the ramping in
`smooth.rs` handles the rest).

Precision note: phase is wrapped every sample, so it never grows large
enough for f32 resolution loss, even over hours of playback. A raw
`t = n / sample_rate` accumulator would degrade after a few minutes.
*/

/// Pure sine oscillator with a wrapped phase accumulator.
///
/// Frequency is supplied per sample so a ramped frequency (see
/// [`super::smooth::SmoothedParam`]) passes straight through without clicks.
pub struct SineOscillator {
    phase: f32,
}

impl SineOscillator {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }

    /// Advance one sample at `frequency_hz` and return the output in [-1, 1].
    #[inline]
    pub fn next(&mut self, frequency_hz: f32, sample_rate: f32) -> f32 {
        let out = (std::f32::consts::TAU * self.phase).sin();
        self.phase += frequency_hz / sample_rate;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }
        out
    }

    /// Reset phase to the start of a cycle.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

impl Default for SineOscillator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    const SAMPLE_RATE: f32 = 48_000.0;

    #[test]
    fn matches_closed_form_sine() {
        let mut osc = SineOscillator::new();
        let freq = 440.0;

        // sample n should be sin(2pi f n / sr) while frequency is constant
        for n in 0..256 {
            let actual = osc.next(freq, SAMPLE_RATE);
            let expected = (TAU * freq * n as f32 / SAMPLE_RATE).sin();
            assert!(
                (actual - expected).abs() < 1e-4,
                "sample {n}: expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn stays_continuous_through_frequency_change() {
        let mut osc = SineOscillator::new();

        let mut previous = osc.next(200.0, SAMPLE_RATE);
        for _ in 0..100 {
            previous = osc.next(200.0, SAMPLE_RATE);
        }

        // Jumping the frequency must not jump the waveform: adjacent samples
        // can differ by at most 2pi * f_max / sr in the worst case.
        let next = osc.next(450.0, SAMPLE_RATE);
        let max_step = TAU * 450.0 / SAMPLE_RATE;
        assert!(
            (next - previous).abs() <= max_step + 1e-4,
            "discontinuity after retune: {previous} -> {next}"
        );
    }

    #[test]
    fn phase_wraps_instead_of_growing() {
        let mut osc = SineOscillator::new();
        // Hours of samples compressed: high frequency, many iterations.
        for _ in 0..1_000_000 {
            let s = osc.next(19_000.0, SAMPLE_RATE);
            assert!(s.is_finite() && s.abs() <= 1.0 + 1e-6);
        }
    }
}
