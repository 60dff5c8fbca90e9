//! Waveform oscilloscope widget.
//!
//! Purely decorative: draws the summed L+R signal from the audio tap, whose
//! envelope visibly pulses at the beat frequency. No analysis happens here.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use super::View;

pub fn render_waveform(frame: &mut Frame, area: Rect, view: &View) {
    let title = if view.running {
        format!(" Waveform · beating at {:.1} Hz ", view.beat_hz)
    } else {
        " Waveform · idle ".to_string()
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let data: Vec<(f64, f64)> = view
        .samples
        .iter()
        .enumerate()
        .map(|(i, &sample)| {
            let x = i as f64 / view.samples.len().max(1) as f64;
            (x, sample as f64)
        })
        .collect();

    let color = if view.running {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-1.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
