//! The live audio graph.
//!
//! A running session owns exactly one [`voice::BinauralVoice`]: two sine tone
//! sources routed hard-left and hard-right through per-channel gains into a
//! master gain. The engine never touches the voice directly once it is
//! rendering - live updates travel through the [`command`] protocol and are
//! applied at block boundaries as short ramps.

pub mod command;
pub mod node;
pub mod voice;

pub use command::{CommandReceiver, VoiceCommand};
pub use node::{RenderCtx, StereoNode};
pub use voice::{BinauralVoice, VoiceParams};
