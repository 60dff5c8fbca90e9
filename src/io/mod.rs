//! External interfaces: the audio output sink and optional platform
//! capabilities.
//!
//! The engine talks to the platform only through these traits, so tests run
//! against [`backend_null::NullBackend`] with no audio hardware at all.

#[cfg(feature = "rtrb")]
pub mod backend_cpal;
pub mod backend_null;
pub mod wake;

use thiserror::Error;

use crate::graph::VoiceParams;

pub use wake::{NoopWakeLock, WakeLock, WakeLockError};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("no audio output device available")]
    NoOutputDevice,
    #[error("failed to open output stream: {0}")]
    StreamBuild(String),
    #[error("failed to start output stream: {0}")]
    StreamPlay(String),
    #[error("output stream cannot be resumed: {0}")]
    Resume(String),
    #[error("no active session on the backend")]
    NotActive,
}

/// The audio output sink abstraction.
///
/// Provides the three things the engine needs from a platform: an engine
/// clock, graph construction/teardown, and scheduled parameter changes.
///
/// The clock is the sink's own monotonically increasing render time - it
/// advances only while audio is actually being produced, so anything derived
/// from it (the elapsed readout) drifts consistently with real suspension
/// rather than with wall-clock time.
///
/// Callers serialize operations on one control thread: no `retune` or `stop`
/// is issued while a `start` or `resume` is still pending.
pub trait AudioBackend {
    fn sample_rate(&self) -> f32;

    /// Engine clock in seconds.
    fn clock_seconds(&self) -> f64;

    /// Construct the stereo graph for `params` and start rendering
    /// atomically. On failure nothing is left connected to the sink.
    fn start(&mut self, params: VoiceParams) -> Result<(), BackendError>;

    /// Schedule a glitch-free parameter change on the live graph at the
    /// current clock instant.
    fn retune(&mut self, params: VoiceParams) -> Result<(), BackendError>;

    /// Tear down the graph as a unit. Idempotent.
    fn stop(&mut self);

    /// Attempt to resume rendering after a platform suspension. On success
    /// the graph is intact and playback continues with unchanged parameters.
    fn resume(&mut self) -> Result<(), BackendError>;

    /// Whether the rendering graph still exists. Lifecycle reconciliation
    /// checks this instead of trusting the engine's running flag.
    fn is_live(&self) -> bool;
}
