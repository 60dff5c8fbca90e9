//! Control-thread to audio-thread messaging.
//!
//! Commands are `Copy` and travel over a wait-free ring buffer. The audio
//! callback drains the queue at the top of every block, so a command takes
//! effect at the next block boundary and ramps from there.

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::graph::voice::VoiceParams;

#[derive(Debug, Copy, Clone)]
pub enum VoiceCommand {
    /// Schedule a ramped update of both tone frequencies and the master gain
    /// at the current engine-clock instant.
    Retune(VoiceParams),
}

pub trait CommandReceiver: Send {
    fn pop(&mut self) -> Option<VoiceCommand>;
}

#[cfg(feature = "rtrb")]
impl CommandReceiver for Consumer<VoiceCommand> {
    fn pop(&mut self) -> Option<VoiceCommand> {
        Consumer::pop(self).ok()
    }
}
