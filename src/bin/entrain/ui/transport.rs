//! Transport bar widget - play state, tuning readout, volume, elapsed time.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::View;

pub fn render_transport(frame: &mut Frame, area: Rect, view: &View) {
    let block = Block::default().title(" entrain ").borders(Borders::ALL);

    let play_symbol = if view.running { "▶" } else { "⏸" };
    let play_state = if view.running { "Playing" } else { "Stopped" };

    let band_label = view
        .active_band
        .map(|b| b.name())
        .unwrap_or("custom");

    let line = Line::from(vec![
        Span::styled(
            format!(" {} {}  ", play_symbol, play_state),
            Style::default().fg(if view.running {
                Color::Green
            } else {
                Color::Yellow
            }),
        ),
        Span::styled(
            format!("Carrier {:.0} Hz  ", view.carrier_hz),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("Beat {:.1} Hz ({})  ", view.beat_hz, band_label),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("L {:.1} / R {:.1}  ", view.left_hz, view.right_hz),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Vol {:.0}%  ", view.volume_percent),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(
            format!("{}  ", view.elapsed),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            if view.background_mode {
                "bg:on"
            } else {
                "bg:off"
            },
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
