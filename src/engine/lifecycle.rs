//! Lifecycle policy: visibility transitions and suspension recovery.
//!
//! Platforms can silently take audio away from a running session - a
//! backgrounded tab gets throttled, a mobile OS revokes audio processing
//! outright. The engine reacts to two signals from its host: visibility
//! transitions and explicit suspension notifications. The policy lives in
//! `PlaybackEngine::handle_visibility` / `handle_suspension`; this module
//! holds the vocabulary.

/// Foreground/background transition reported by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Foreground,
    Background,
}

/// Mutable lifecycle flags.
#[derive(Debug, Clone, Copy)]
pub struct LifecycleState {
    /// Whether the engine should try to keep or resume audio when the host
    /// loses foreground focus.
    pub background_mode: bool,
    /// Set on a suspension notification, cleared by a successful resume.
    pub suspended: bool,
}

/// Transient, auto-dismissing user notification. The UI polls
/// `PlaybackEngine::take_notice` and renders the latest one; nothing in the
/// core ever blocks on user acknowledgement.
#[derive(Debug, Clone)]
pub struct Notice {
    pub severity: Severity,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }
}
