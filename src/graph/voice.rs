use crate::dsp::{SineOscillator, SmoothedParam};
use crate::graph::command::{CommandReceiver, VoiceCommand};
use crate::graph::node::{RenderCtx, StereoNode};

/*
The Binaural Voice
==================

Two pure tones, one per ear, offset symmetrically around a carrier:

    left  = carrier - beat/2        right = carrier + beat/2

The listener's auditory system perceives the difference as a rhythmic beat
at `right - left` Hz even though neither ear receives it.

Graph shape (fixed for the life of a session):

    left tone ──→ left gain ──→ hard left  ┐
                                           ├──→ master gain ──→ sink
    right tone ─→ right gain ─→ hard right ┘

The routing is hard-panned: the left tone never reaches the right channel
and vice versa. Any crosstalk would turn the binaural beat into an acoustic
(monaural) beat and defeat the point.

All five controls - two frequencies, two channel gains, the master gain -
are SmoothedParams, so a retune ramps instead of jumping. Construction
snaps them to their initial values: sources start atomically, in phase,
with no fade-in.

Sources are single-use. Stopping a session drops the voice; a later start
builds a fresh pair. There is no way to restart a stopped voice.
*/

/// Target values for one scheduled update, derived by the engine from the
/// current playback parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceParams {
    pub left_hz: f32,
    pub right_hz: f32,
    /// Master gain in [0, 1].
    pub gain: f32,
}

/// The live stereo voice of a playback session.
pub struct BinauralVoice {
    left: SineOscillator,
    right: SineOscillator,
    left_hz: SmoothedParam,
    right_hz: SmoothedParam,
    left_gain: SmoothedParam,
    right_gain: SmoothedParam,
    master: SmoothedParam,
}

impl BinauralVoice {
    /// Build the graph with all parameters settled at their starting values.
    pub fn new(params: VoiceParams) -> Self {
        Self {
            left: SineOscillator::new(),
            right: SineOscillator::new(),
            left_hz: SmoothedParam::new(params.left_hz),
            right_hz: SmoothedParam::new(params.right_hz),
            left_gain: SmoothedParam::new(1.0),
            right_gain: SmoothedParam::new(1.0),
            master: SmoothedParam::new(params.gain),
        }
    }

    /// Schedule a ramped update at the current clock instant.
    pub fn retune(&mut self, params: VoiceParams, sample_rate: f32) {
        self.left_hz.set_target(params.left_hz, sample_rate);
        self.right_hz.set_target(params.right_hz, sample_rate);
        self.master.set_target(params.gain, sample_rate);
    }

    /// Drain pending commands before rendering a block.
    pub fn apply_commands<R: CommandReceiver>(&mut self, rx: &mut R, sample_rate: f32) {
        while let Some(cmd) = rx.pop() {
            match cmd {
                VoiceCommand::Retune(params) => self.retune(params, sample_rate),
            }
        }
    }

    /// Current (possibly mid-ramp) target parameters.
    pub fn params(&self) -> VoiceParams {
        VoiceParams {
            left_hz: self.left_hz.target(),
            right_hz: self.right_hz.target(),
            gain: self.master.target(),
        }
    }
}

impl StereoNode for BinauralVoice {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        debug_assert_eq!(out.len() % 2, 0);

        for frame in out.chunks_exact_mut(2) {
            let lf = self.left_hz.next();
            let rf = self.right_hz.next();
            let master = self.master.next();

            let l = self.left.next(lf, ctx.sample_rate) * self.left_gain.next();
            let r = self.right.next(rf, ctx.sample_rate) * self.right_gain.next();

            frame[0] = l * master;
            frame[1] = r * master;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    const SAMPLE_RATE: f32 = 48_000.0;

    fn render(voice: &mut BinauralVoice, frames: usize) -> Vec<f32> {
        let mut buffer = vec![0.0f32; frames * 2];
        let ctx = RenderCtx::new(SAMPLE_RATE);
        voice.render_block(&mut buffer, &ctx);
        buffer
    }

    #[test]
    fn channels_carry_their_own_frequencies() {
        let params = VoiceParams {
            left_hz: 395.0,
            right_hz: 405.0,
            gain: 1.0,
        };
        let mut voice = BinauralVoice::new(params);
        let buffer = render(&mut voice, 128);

        // No ramp on a fresh voice: each channel is exactly its sine.
        for n in 0..128 {
            let expected_l = (TAU * 395.0 * n as f32 / SAMPLE_RATE).sin();
            let expected_r = (TAU * 405.0 * n as f32 / SAMPLE_RATE).sin();
            assert!(
                (buffer[2 * n] - expected_l).abs() < 1e-3,
                "left frame {n}: expected {expected_l}, got {}",
                buffer[2 * n]
            );
            assert!(
                (buffer[2 * n + 1] - expected_r).abs() < 1e-3,
                "right frame {n}: expected {expected_r}, got {}",
                buffer[2 * n + 1]
            );
        }
    }

    #[test]
    fn master_gain_scales_output() {
        let mut loud = BinauralVoice::new(VoiceParams {
            left_hz: 400.0,
            right_hz: 410.0,
            gain: 1.0,
        });
        let mut quiet = BinauralVoice::new(VoiceParams {
            left_hz: 400.0,
            right_hz: 410.0,
            gain: 0.25,
        });

        let a = render(&mut loud, 64);
        let b = render(&mut quiet, 64);
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x * 0.25 - y).abs() < 1e-6);
        }
    }

    #[test]
    fn retune_ramps_without_discontinuity() {
        let mut voice = BinauralVoice::new(VoiceParams {
            left_hz: 200.0,
            right_hz: 210.0,
            gain: 0.8,
        });
        let before = render(&mut voice, 64);

        voice.retune(
            VoiceParams {
                left_hz: 430.0,
                right_hz: 450.0,
                gain: 0.2,
            },
            SAMPLE_RATE,
        );
        let after = render(&mut voice, 2048);

        // Continuity at the seam: worst-case slope of a 450 Hz sine.
        let last = before[before.len() - 2];
        let first = after[0];
        let max_step = TAU * 450.0 / SAMPLE_RATE;
        assert!(
            (first - last).abs() <= max_step + 1e-3,
            "click at retune boundary: {last} -> {first}"
        );

        // And the ramp settles on the new targets.
        assert_eq!(voice.params().left_hz, 430.0);
        assert_eq!(voice.params().gain, 0.2);
    }

    #[test]
    fn commands_apply_through_the_receiver() {
        struct OneShot(Option<VoiceCommand>);
        impl CommandReceiver for OneShot {
            fn pop(&mut self) -> Option<VoiceCommand> {
                self.0.take()
            }
        }

        let mut voice = BinauralVoice::new(VoiceParams {
            left_hz: 100.0,
            right_hz: 110.0,
            gain: 0.5,
        });
        let update = VoiceParams {
            left_hz: 300.0,
            right_hz: 308.0,
            gain: 0.9,
        };
        let mut rx = OneShot(Some(VoiceCommand::Retune(update)));

        voice.apply_commands(&mut rx, SAMPLE_RATE);
        assert_eq!(voice.params(), update);
    }
}
