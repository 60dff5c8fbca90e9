//! Application event loop.
//!
//! Owns the engine on the control thread: polls the audio tap for the
//! oscilloscope, forwards key input to the engine API, and maps terminal
//! focus changes onto the engine's visibility handling.

use std::io::stdout;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;
use rtrb::Consumer;

use entrain_dsp::engine::{Notice, Visibility};
use entrain_dsp::io::backend_cpal::CpalBackend;
use entrain_dsp::tuning::Band;
use entrain_dsp::PlaybackEngine;

use crate::ui;

/// How long a notice banner stays on screen.
const NOTICE_SECONDS: u64 = 4;

const CARRIER_STEP_HZ: f32 = 10.0;
const BEAT_STEP_HZ: f32 = 0.5;
const VOLUME_STEP: f32 = 5.0;

pub struct App {
    engine: PlaybackEngine<CpalBackend>,
    audio_rx: Consumer<f32>,
    vis_buffer: Vec<f32>,
    notice: Option<(Notice, Instant)>,
    should_quit: bool,
}

impl App {
    pub fn new(engine: PlaybackEngine<CpalBackend>, audio_rx: Consumer<f32>) -> Self {
        Self {
            engine,
            audio_rx,
            vis_buffer: vec![0.0; ui::VIS_BUFFER_SIZE],
            notice: None,
            should_quit: false,
        }
    }

    /// Run the UI event loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> EyreResult<()> {
        execute!(stdout(), EnableFocusChange)?;

        let res = self.event_loop(&mut terminal);

        execute!(stdout(), DisableFocusChange)?;
        res
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_audio();
            self.poll_notice();

            let params = self.engine.params();
            let (left_hz, right_hz) = self.engine.channel_frequencies();
            let view = ui::View {
                running: self.engine.is_running(),
                carrier_hz: params.carrier_hz(),
                beat_hz: params.beat_hz(),
                left_hz,
                right_hz,
                volume_percent: params.volume_percent(),
                elapsed: self.engine.elapsed_display(),
                background_mode: self.engine.background_mode(),
                active_band: Band::containing(params.beat_hz()),
                notice: self.notice.as_ref().map(|(n, _)| n),
                samples: &self.vis_buffer,
            };
            terminal.draw(|frame| ui::render(frame, &view))?;

            // Non-blocking input, ~60fps
            if event::poll(Duration::from_millis(16))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key.code);
                    }
                    Event::FocusGained => self.engine.handle_visibility(Visibility::Foreground),
                    Event::FocusLost => self.engine.handle_visibility(Visibility::Background),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Pull new samples from the tap, keeping the last window. An idle
    /// engine renders a quiescent trace instead of stale waveform data.
    fn poll_audio(&mut self) {
        if !self.engine.is_running() {
            while self.audio_rx.pop().is_ok() {}
            self.vis_buffer.fill(0.0);
            return;
        }

        let mut new_samples = Vec::new();
        while let Ok(sample) = self.audio_rx.pop() {
            new_samples.push(sample);
        }

        if !new_samples.is_empty() {
            self.vis_buffer.extend(new_samples);
            if self.vis_buffer.len() > ui::VIS_BUFFER_SIZE {
                let excess = self.vis_buffer.len() - ui::VIS_BUFFER_SIZE;
                self.vis_buffer.drain(0..excess);
            }
        }
    }

    /// Promote fresh engine notices to the banner, expire stale ones.
    fn poll_notice(&mut self) {
        if let Some(notice) = self.engine.take_notice() {
            self.notice = Some((notice, Instant::now()));
        }
        if let Some((_, since)) = &self.notice {
            if since.elapsed() > Duration::from_secs(NOTICE_SECONDS) {
                self.notice = None;
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        let params = self.engine.params();
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                if let Err(err) = self.engine.toggle_playback() {
                    // The engine already surfaced a notice for this.
                    log::debug!("toggle rejected: {err}");
                }
            }
            KeyCode::Char('x') | KeyCode::Char('X') => self.engine.stop(),
            KeyCode::Up => self.engine.set_carrier(params.carrier_hz() + CARRIER_STEP_HZ),
            KeyCode::Down => self.engine.set_carrier(params.carrier_hz() - CARRIER_STEP_HZ),
            KeyCode::Right => self.engine.set_beat(params.beat_hz() + BEAT_STEP_HZ),
            KeyCode::Left => self.engine.set_beat(params.beat_hz() - BEAT_STEP_HZ),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.engine.set_volume(params.volume_percent() + VOLUME_STEP)
            }
            KeyCode::Char('-') => self.engine.set_volume(params.volume_percent() - VOLUME_STEP),
            KeyCode::Char('1') => self.engine.set_band(Band::Delta),
            KeyCode::Char('2') => self.engine.set_band(Band::Theta),
            KeyCode::Char('3') => self.engine.set_band(Band::Alpha),
            KeyCode::Char('4') => self.engine.set_band(Band::Beta),
            KeyCode::Char('5') => self.engine.set_band(Band::Gamma),
            KeyCode::Char('m') | KeyCode::Char('M') => self.select_preset("meditation"),
            KeyCode::Char('f') | KeyCode::Char('F') => self.select_preset("focus"),
            KeyCode::Char('l') | KeyCode::Char('L') => self.select_preset("sleep"),
            KeyCode::Char('c') | KeyCode::Char('C') => self.select_preset("creativity"),
            KeyCode::Char('b') | KeyCode::Char('B') => {
                let enabled = !self.engine.background_mode();
                self.engine.set_background_mode(enabled);
            }
            _ => {}
        }
    }

    fn select_preset(&mut self, name: &str) {
        // Unknown names are a defined no-op; nothing to report.
        if let Err(err) = self.engine.set_preset(name) {
            log::debug!("{err}");
        }
    }
}
