use thiserror::Error;

use crate::io::BackendError;

/// Engine-level failures.
///
/// Invalid parameter values never appear here - the tuning layer clamps
/// them. Wake-lock failures are logged and swallowed. Every variant leaves
/// the engine in a well-defined state (Idle for `AudioUnavailable`,
/// unchanged otherwise) ready for the user to retry.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The output sink could not be created or resumed. Recoverable by
    /// retrying after user interaction.
    #[error("audio output unavailable: {0}")]
    AudioUnavailable(#[from] BackendError),

    /// `start` while a session is already running. The existing session is
    /// untouched.
    #[error("playback is already running")]
    AlreadyRunning,

    /// Unknown preset name; parameters are left unchanged.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}
