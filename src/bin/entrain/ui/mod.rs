//! TUI widgets for entrain.
//!
//! Pure presentation: widgets read a [`View`] snapshot assembled by the app
//! each frame and never touch the engine.

pub mod bands;
pub mod transport;
pub mod waveform;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use entrain_dsp::engine::{Notice, Severity};
use entrain_dsp::tuning::Band;

/// Visualization window size (≈21 ms @ 48 kHz per refill).
pub const VIS_BUFFER_SIZE: usize = 1024;
/// Capacity in windows for the audio->UI ring.
pub const AUDIO_RING_BLOCKS: usize = 16;

/// Per-frame snapshot of everything the widgets draw.
pub struct View<'a> {
    pub running: bool,
    pub carrier_hz: f32,
    pub beat_hz: f32,
    pub left_hz: f32,
    pub right_hz: f32,
    pub volume_percent: f32,
    pub elapsed: String,
    pub background_mode: bool,
    pub active_band: Option<Band>,
    pub notice: Option<&'a Notice>,
    pub samples: &'a [f32],
}

pub fn render(frame: &mut Frame, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Transport bar
            Constraint::Min(8),    // Bands and presets
            Constraint::Length(8), // Waveform
            Constraint::Length(1), // Help / notice bar
        ])
        .split(frame.area());

    transport::render_transport(frame, chunks[0], view);
    bands::render_bands(frame, chunks[1], view);
    waveform::render_waveform(frame, chunks[2], view);

    // The bottom line doubles as the transient notice banner.
    let bottom = match view.notice {
        Some(notice) => {
            let color = match notice.severity {
                Severity::Info => Color::Cyan,
                Severity::Warning => Color::Yellow,
                Severity::Error => Color::Red,
            };
            Paragraph::new(format!(" {}", notice.text)).style(Style::default().fg(color))
        }
        None => Paragraph::new(
            " [Space] Play/Pause  [X] Stop  [↑↓] Carrier  [←→] Beat  [+/-] Volume  \
             [1-5] Band  [M/F/L/C] Preset  [B] Background  [Q] Quit",
        )
        .style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(bottom, chunks[3]);
}
