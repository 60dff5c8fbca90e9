//! entrain - terminal binaural beat generator
//!
//! Run with: cargo run

mod app;
mod ui;

use app::App;
use color_eyre::eyre::Result as EyreResult;
use rtrb::RingBuffer;

use entrain_dsp::io::backend_cpal::CpalBackend;
use entrain_dsp::io::NoopWakeLock;
use entrain_dsp::{EngineConfig, PlaybackEngine};

fn main() -> EyreResult<()> {
    env_logger::init();
    color_eyre::install()?;

    // Audio -> UI visualization ring; the callback drops samples when full.
    let (tap_tx, tap_rx) = RingBuffer::<f32>::new(ui::VIS_BUFFER_SIZE * ui::AUDIO_RING_BLOCKS);

    let backend = CpalBackend::new()?.with_tap(tap_tx);
    let engine = PlaybackEngine::new(backend, Box::new(NoopWakeLock), EngineConfig::default());

    let terminal = ratatui::init();
    let res = App::new(engine, tap_rx).run(terminal);
    ratatui::restore();
    res
}
