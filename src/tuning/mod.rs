//! The frequency model: pure, stateless data and derivation rules.
//!
//! Everything here is plain math on plain values - no audio state. The
//! playback engine snapshots a [`ToneParams`] when it builds a session and
//! re-derives channel frequencies on every update.

pub mod band;
pub mod params;
pub mod preset;

pub use band::{Band, BandDefinition};
pub use params::ToneParams;
pub use preset::Preset;

/// Carrier every band selection resets to.
pub const BASELINE_CARRIER_HZ: f32 = 400.0;
