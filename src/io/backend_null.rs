//! Headless audio backend.
//!
//! Renders the real voice graph into an internal scratch buffer with a
//! manually advanced clock. Used by the integration tests to exercise every
//! engine path without audio hardware, and usable as a silent sink wherever
//! no output device exists.

use crate::graph::{BinauralVoice, RenderCtx, StereoNode, VoiceParams};
use crate::io::{AudioBackend, BackendError};
use crate::MAX_BLOCK_SIZE;

pub struct NullBackend {
    sample_rate: f32,
    frames: u64,
    voice: Option<BinauralVoice>,
    suspended: bool,
    fail_resume: bool,
    scratch: Vec<f32>,
}

impl NullBackend {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            frames: 0,
            voice: None,
            suspended: false,
            fail_resume: false,
            scratch: vec![0.0; MAX_BLOCK_SIZE * 2],
        }
    }

    /// Render `seconds` of audio, advancing the engine clock. While the
    /// backend is suspended or idle no frames are produced, so the clock
    /// stays put - matching how a real sink's clock freezes under
    /// suspension.
    pub fn advance_seconds(&mut self, seconds: f64) {
        let Some(voice) = self.voice.as_mut() else {
            return;
        };
        if self.suspended {
            return;
        }

        let ctx = RenderCtx::new(self.sample_rate);
        let mut remaining = (seconds * self.sample_rate as f64).round() as u64;
        while remaining > 0 {
            let frames = remaining.min(MAX_BLOCK_SIZE as u64) as usize;
            voice.render_block(&mut self.scratch[..frames * 2], &ctx);
            self.frames += frames as u64;
            remaining -= frames as u64;
        }
    }

    /// Simulate a platform-level suspension notification.
    pub fn set_suspended(&mut self, suspended: bool) {
        self.suspended = suspended;
    }

    /// Make the next `resume` fail, as on platforms that revoke audio
    /// processing entirely.
    pub fn fail_next_resume(&mut self, fail: bool) {
        self.fail_resume = fail;
    }

    /// Tear down the graph behind the engine's back, as mobile backgrounding
    /// does. The engine's running flag is now stale until it reconciles.
    pub fn kill_nodes(&mut self) {
        self.voice = None;
    }

    /// Most recent samples rendered into the scratch buffer.
    pub fn scratch(&self) -> &[f32] {
        &self.scratch
    }

    /// Parameters the live voice is currently targeting.
    pub fn voice_params(&self) -> Option<VoiceParams> {
        self.voice.as_ref().map(|v| v.params())
    }
}

impl AudioBackend for NullBackend {
    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn clock_seconds(&self) -> f64 {
        self.frames as f64 / self.sample_rate as f64
    }

    fn start(&mut self, params: VoiceParams) -> Result<(), BackendError> {
        self.voice = Some(BinauralVoice::new(params));
        self.suspended = false;
        Ok(())
    }

    fn retune(&mut self, params: VoiceParams) -> Result<(), BackendError> {
        match self.voice.as_mut() {
            Some(voice) => {
                voice.retune(params, self.sample_rate);
                Ok(())
            }
            None => Err(BackendError::NotActive),
        }
    }

    fn stop(&mut self) {
        self.voice = None;
        self.suspended = false;
    }

    fn resume(&mut self) -> Result<(), BackendError> {
        if self.voice.is_none() {
            return Err(BackendError::NotActive);
        }
        if self.fail_resume {
            return Err(BackendError::Resume("platform revoked audio".into()));
        }
        self.suspended = false;
        Ok(())
    }

    fn is_live(&self) -> bool {
        self.voice.is_some()
    }
}
