//! Low-level DSP primitives used by the stereo voice.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! run inside the audio callback. They intentionally stay focused on the
//! signal-processing math so the graph layer can layer on routing and the
//! command protocol.

/// Phase-accumulating sine tone source.
pub mod oscillator;
/// Click-free parameter ramps for live retuning.
pub mod smooth;

pub use oscillator::SineOscillator;
pub use smooth::SmoothedParam;
