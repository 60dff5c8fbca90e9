//! The playback engine: a two-state machine (Idle, Running) over an
//! injected audio sink.
//!
//! One control thread owns the engine. Rendering happens on the sink's own
//! realtime thread, reached only through scheduled parameter changes, so
//! every method here is an ordinary synchronous call: by the time `start`
//! returns, the graph is either fully connected and rendering or fully
//! rolled back.
//!
//! Pause and stop are the same transition. Both tear the graph down
//! completely - tone sources are single-use, and a later start builds a
//! fresh pair from the current parameters. The only difference is the
//! elapsed readout: stop resets it, pause freezes it.

pub mod error;
pub mod lifecycle;
pub mod timer;

pub use error::EngineError;
pub use lifecycle::{LifecycleState, Notice, Severity, Visibility};
pub use timer::ElapsedTimer;

use log::{info, warn};

use crate::graph::VoiceParams;
use crate::io::{AudioBackend, WakeLock};
use crate::tuning::{Band, Preset, ToneParams};

/// Constructor-injected policy. No file-based persistence; hosts build one
/// and hand it to [`PlaybackEngine::new`].
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Initial value of the background-mode flag.
    pub background_mode: bool,
    /// Whether this platform forcibly suspends audio on backgrounding
    /// regardless of application intent (mobile OS affinity group).
    pub platform_suspends_in_background: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            background_mode: true,
            platform_suspends_in_background: cfg!(any(
                target_os = "ios",
                target_os = "android"
            )),
        }
    }
}

/// Bookkeeping for one Running period. Exists only while audio is active;
/// the graph handles themselves live behind the backend and die with it.
struct PlaybackSession {
    started_at: f64,
}

pub struct PlaybackEngine<B: AudioBackend> {
    backend: B,
    wake: Box<dyn WakeLock>,
    config: EngineConfig,
    params: ToneParams,
    session: Option<PlaybackSession>,
    timer: ElapsedTimer,
    lifecycle: LifecycleState,
    notice: Option<Notice>,
}

impl<B: AudioBackend> PlaybackEngine<B> {
    pub fn new(backend: B, wake: Box<dyn WakeLock>, config: EngineConfig) -> Self {
        Self {
            backend,
            wake,
            params: ToneParams::default(),
            session: None,
            timer: ElapsedTimer::new(),
            lifecycle: LifecycleState {
                background_mode: config.background_mode,
                suspended: false,
            },
            notice: None,
            config,
        }
    }

    // --- state machine ---

    /// Idle -> Running. Builds the stereo graph from the current parameters
    /// and starts it against the engine clock.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.session.is_some() {
            return Err(EngineError::AlreadyRunning);
        }

        if let Err(err) = self.backend.start(self.voice_params()) {
            self.push_notice(Notice::error(
                "audio output unavailable - check your output device and retry",
            ));
            return Err(EngineError::AudioUnavailable(err));
        }

        let started_at = self.backend.clock_seconds();
        self.session = Some(PlaybackSession { started_at });
        self.timer.start(started_at);
        self.lifecycle.suspended = false;

        if let Err(err) = self.wake.acquire() {
            // Optional capability: degraded, never fatal.
            warn!("{err}");
        }

        let (left, right) = self.params.channel_frequencies();
        info!("playback started: left {left:.2} Hz, right {right:.2} Hz");
        Ok(())
    }

    /// Running -> Idle with a full teardown and a readout reset. No-op while
    /// Idle.
    pub fn stop(&mut self) {
        let clock = self.backend.clock_seconds();
        if let Some(session) = self.teardown() {
            self.timer.stop();
            info!("playback stopped after {:.1} s", clock - session.started_at);
        }
    }

    /// Running -> Idle with a full teardown, keeping the elapsed readout
    /// frozen and the parameters intact for the next start. No-op while
    /// Idle.
    pub fn pause(&mut self) {
        let clock = self.backend.clock_seconds();
        if let Some(session) = self.teardown() {
            self.timer.pause(clock);
            info!("playback paused at {:.1} s", clock - session.started_at);
        }
    }

    /// Pause when Running, start when Idle.
    pub fn toggle_playback(&mut self) -> Result<(), EngineError> {
        if self.is_running() {
            self.pause();
            Ok(())
        } else {
            self.start()
        }
    }

    /// Shared Running -> Idle path. Returns the session being torn down,
    /// None when already Idle.
    fn teardown(&mut self) -> Option<PlaybackSession> {
        let session = self.session.take()?;
        self.backend.stop();
        self.wake.release();
        self.lifecycle.suspended = false;
        Some(session)
    }

    // --- parameter updates (live retune while Running, silent while Idle) ---

    pub fn set_carrier(&mut self, hz: f32) {
        self.params.set_carrier(hz);
        self.push_retune();
    }

    pub fn set_beat(&mut self, hz: f32) {
        self.params.set_beat(hz);
        self.push_retune();
    }

    pub fn set_volume(&mut self, percent: f32) {
        self.params.set_volume(percent);
        self.push_retune();
    }

    pub fn set_band(&mut self, band: Band) {
        self.params.apply_band(band);
        self.push_retune();
    }

    /// Unknown names leave the parameters unchanged.
    pub fn set_preset(&mut self, name: &str) -> Result<(), EngineError> {
        let preset =
            Preset::find(name).ok_or_else(|| EngineError::UnknownPreset(name.to_string()))?;
        self.params = ToneParams::from_preset(preset);
        self.push_retune();
        Ok(())
    }

    fn push_retune(&mut self) {
        if self.session.is_none() {
            return;
        }
        if let Err(err) = self.backend.retune(self.voice_params()) {
            // Fire-and-forget by contract; the session keeps its old values.
            warn!("retune failed: {err}");
        }
    }

    fn voice_params(&self) -> VoiceParams {
        let (left_hz, right_hz) = self.params.channel_frequencies();
        VoiceParams {
            left_hz,
            right_hz,
            gain: self.params.volume_percent() / 100.0,
        }
    }

    // --- lifecycle ---

    pub fn set_background_mode(&mut self, enabled: bool) {
        self.lifecycle.background_mode = enabled;
    }

    pub fn background_mode(&self) -> bool {
        self.lifecycle.background_mode
    }

    /// Explicit suspension notification from the platform while the session
    /// is (intended to be) running: try to pick the context back up.
    pub fn handle_suspension(&mut self) {
        self.lifecycle.suspended = true;
        if self.session.is_some() {
            self.try_resume();
        }
    }

    pub fn handle_visibility(&mut self, visibility: Visibility) {
        match visibility {
            Visibility::Background => {
                if self.is_running()
                    && self.lifecycle.background_mode
                    && self.config.platform_suspends_in_background
                {
                    // Nothing to do but tell the user: the platform revokes
                    // audio processing regardless of application intent.
                    self.push_notice(Notice::warning(
                        "this platform pauses audio in the background; playback will stop",
                    ));
                }
            }
            Visibility::Foreground => {
                if self.session.is_none() {
                    return;
                }
                // Never trust the running flag blindly: the platform may
                // have torn the nodes down while we were backgrounded.
                if !self.backend.is_live() {
                    self.force_idle("playback was stopped while in the background");
                } else if self.lifecycle.suspended {
                    self.try_resume();
                }
            }
        }
    }

    fn try_resume(&mut self) {
        match self.backend.resume() {
            Ok(()) => {
                // Nodes were never destroyed; frequencies and volume carry on.
                self.lifecycle.suspended = false;
                info!("audio resumed after suspension");
                self.push_notice(Notice::info("audio resumed"));
            }
            Err(err) => {
                warn!("resume failed: {err}");
                self.force_idle("audio could not be resumed - press play to restart");
            }
        }
    }

    /// Reconcile a stale running flag with reality: land in Idle, release
    /// everything, tell the user.
    fn force_idle(&mut self, message: &str) {
        self.teardown();
        self.timer.stop();
        self.push_notice(Notice::warning(message));
    }

    // --- read accessors ---

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    pub fn params(&self) -> ToneParams {
        self.params
    }

    pub fn channel_frequencies(&self) -> (f32, f32) {
        self.params.channel_frequencies()
    }

    pub fn elapsed_display(&self) -> String {
        self.timer.display(self.backend.clock_seconds())
    }

    pub fn clock_seconds(&self) -> f64 {
        self.backend.clock_seconds()
    }

    /// Latest pending notification, if any. Taking it clears the slot.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    fn push_notice(&mut self, notice: Notice) {
        // Single slot, latest wins; these are transient banners, not a log.
        self.notice = Some(notice);
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
