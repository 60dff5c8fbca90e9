//! Band and preset panel.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use entrain_dsp::tuning::{preset::PRESETS, Band};

use super::View;

pub fn render_bands(frame: &mut Frame, area: Rect, view: &View) {
    let block = Block::default()
        .title(" Bands & Presets ")
        .borders(Borders::ALL);

    let mut lines: Vec<Line> = Vec::with_capacity(Band::ALL.len() + 2);

    for (index, band) in Band::ALL.into_iter().enumerate() {
        let def = band.definition();
        let active = view.active_band == Some(band);
        let style = if active {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if active { "●" } else { " " };
        lines.push(Line::from(Span::styled(
            format!(
                " {marker} [{}] {:<6} {:>5.1}-{:<5.1} Hz   default {:>4.1} Hz",
                index + 1,
                def.name,
                def.min_hz,
                def.max_hz,
                def.default_beat_hz
            ),
            style,
        )));
    }

    lines.push(Line::default());

    let presets = PRESETS
        .iter()
        .map(|p| format!("{} ({:.0}/{:.0})", p.name, p.carrier_hz, p.beat_hz))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(Line::from(Span::styled(
        format!(" presets: {presets}"),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
