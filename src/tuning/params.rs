use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tuning::{Band, Preset, BASELINE_CARRIER_HZ};
use crate::MIN_TONE_HZ;

/// The current playback parameters: one mutable instance, owned by the
/// playback engine, updated by user input or band/preset selection.
///
/// Channel derivation splits the beat symmetrically around the carrier:
/// left = carrier - beat/2, right = carrier + beat/2. A beat wider than
/// twice the carrier would push the left channel non-positive, so the
/// derived frequencies are floored at 0.1 Hz.
///
/// All setters clamp at this boundary; out-of-range input is corrected,
/// never rejected.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneParams {
    carrier_hz: f32,
    beat_hz: f32,
    volume_percent: f32,
}

impl ToneParams {
    pub fn new(carrier_hz: f32, beat_hz: f32, volume_percent: f32) -> Self {
        let mut params = Self {
            carrier_hz: MIN_TONE_HZ,
            beat_hz: 0.0,
            volume_percent: 0.0,
        };
        params.set_carrier(carrier_hz);
        params.set_beat(beat_hz);
        params.set_volume(volume_percent);
        params
    }

    pub fn from_preset(preset: &Preset) -> Self {
        Self::new(preset.carrier_hz, preset.beat_hz, preset.volume_percent)
    }

    /// Selecting a band sets the beat to the band default and resets the
    /// carrier to the 400 Hz baseline - the carrier is always overridden.
    pub fn apply_band(&mut self, band: Band) {
        self.set_carrier(BASELINE_CARRIER_HZ);
        self.set_beat(band.definition().default_beat_hz);
    }

    pub fn set_carrier(&mut self, hz: f32) {
        let clamped = if hz.is_finite() { hz.max(MIN_TONE_HZ) } else { MIN_TONE_HZ };
        if clamped != hz {
            debug!("carrier clamped: {hz} -> {clamped}");
        }
        self.carrier_hz = clamped;
    }

    pub fn set_beat(&mut self, hz: f32) {
        let clamped = if hz.is_finite() { hz.max(0.0) } else { 0.0 };
        if clamped != hz {
            debug!("beat clamped: {hz} -> {clamped}");
        }
        self.beat_hz = clamped;
    }

    pub fn set_volume(&mut self, percent: f32) {
        let clamped = if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        };
        if clamped != percent {
            debug!("volume clamped: {percent} -> {clamped}");
        }
        self.volume_percent = clamped;
    }

    pub fn carrier_hz(&self) -> f32 {
        self.carrier_hz
    }

    pub fn beat_hz(&self) -> f32 {
        self.beat_hz
    }

    pub fn volume_percent(&self) -> f32 {
        self.volume_percent
    }

    /// Derive (left, right) channel frequencies, floored at 0.1 Hz.
    pub fn channel_frequencies(&self) -> (f32, f32) {
        let half_beat = self.beat_hz / 2.0;
        let left = (self.carrier_hz - half_beat).max(MIN_TONE_HZ);
        let right = (self.carrier_hz + half_beat).max(MIN_TONE_HZ);
        if left == MIN_TONE_HZ {
            debug!(
                "left channel floored: carrier {} beat {}",
                self.carrier_hz, self.beat_hz
            );
        }
        (left, right)
    }
}

impl Default for ToneParams {
    /// Alpha-band starting point: 400 Hz carrier, 10 Hz beat, half volume.
    fn default() -> Self {
        Self::new(BASELINE_CARRIER_HZ, 10.0, 50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_preserves_sum_and_difference() {
        // For beat <= 2 * carrier: left + right = 2 * carrier and
        // right - left = beat.
        let cases = [(400.0, 10.0), (250.0, 3.0), (100.0, 150.0), (40.0, 0.0)];
        for (carrier, beat) in cases {
            let params = ToneParams::new(carrier, beat, 50.0);
            let (left, right) = params.channel_frequencies();
            assert!((left + right - 2.0 * carrier).abs() < 1e-3, "sum for {carrier}/{beat}");
            assert!((right - left - beat).abs() < 1e-3, "difference for {carrier}/{beat}");
        }
    }

    #[test]
    fn oversized_beat_floors_the_left_channel() {
        let params = ToneParams::new(100.0, 300.0, 50.0);
        let (left, right) = params.channel_frequencies();
        assert_eq!(left, 0.1);
        assert!(right > 0.0);
    }

    #[test]
    fn band_selection_overrides_the_carrier() {
        let mut params = ToneParams::new(873.0, 3.3, 70.0);
        params.apply_band(Band::Alpha);
        assert_eq!(params.carrier_hz(), 400.0);
        assert_eq!(params.beat_hz(), 10.0);
        // Volume is untouched by band selection.
        assert_eq!(params.volume_percent(), 70.0);
    }

    #[test]
    fn volume_clamps_at_the_model_boundary() {
        let mut params = ToneParams::default();
        params.set_volume(140.0);
        assert_eq!(params.volume_percent(), 100.0);
        params.set_volume(-5.0);
        assert_eq!(params.volume_percent(), 0.0);
        params.set_volume(f32::NAN);
        assert_eq!(params.volume_percent(), 0.0);
    }

    #[test]
    fn carrier_and_beat_reject_nonsense() {
        let mut params = ToneParams::default();
        params.set_carrier(-20.0);
        assert_eq!(params.carrier_hz(), 0.1);
        params.set_beat(-4.0);
        assert_eq!(params.beat_hz(), 0.0);
    }

    #[test]
    fn preset_roundtrip() {
        let p = Preset::find("meditation").unwrap();
        let params = ToneParams::from_preset(p);
        assert_eq!(params.carrier_hz(), 400.0);
        assert_eq!(params.beat_hz(), 6.0);
        assert_eq!(params.volume_percent(), 40.0);
    }
}
