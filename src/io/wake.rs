//! Optional display wake-lock capability.
//!
//! Best-effort by contract: acquisition failure is logged by the caller and
//! never surfaced as a playback error. The platform may revoke a held lock
//! at any time (e.g. when the window is backgrounded); `release` on a
//! revoked lock must succeed silently, and holders do not re-acquire
//! automatically.

use thiserror::Error;

#[derive(Debug, Error)]
#[error("wake lock unavailable: {0}")]
pub struct WakeLockError(pub String);

pub trait WakeLock {
    fn acquire(&mut self) -> Result<(), WakeLockError>;
    fn release(&mut self);
}

/// Stand-in for platforms without the capability. Acquire succeeds and does
/// nothing, so the engine's happy path is identical either way.
pub struct NoopWakeLock;

impl WakeLock for NoopWakeLock {
    fn acquire(&mut self) -> Result<(), WakeLockError> {
        Ok(())
    }

    fn release(&mut self) {}
}
