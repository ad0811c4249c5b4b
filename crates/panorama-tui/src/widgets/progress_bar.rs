use panorama_core::scroll::progress::ordinal_label;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Thin progress track with an ordinal readout on each side
pub struct ProgressBarWidget;

impl ProgressBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let count = app.sections().len();
        let progress = app.progress();

        let current = format!(" {} ", ordinal_label(progress, count));
        let total = format!(" {:02} ", count);
        let track_width = area
            .width
            .saturating_sub(current.len() as u16 + total.len() as u16) as usize;
        let (filled, empty) = split_track(progress, track_width);

        let label_style = Style::default().fg(theme.grey1).add_modifier(Modifier::BOLD);
        let line = Line::from(vec![
            Span::styled(current, label_style),
            Span::styled("━".repeat(filled), Style::default().fg(theme.accent)),
            Span::styled("─".repeat(empty), Style::default().fg(theme.track)),
            Span::styled(total, label_style),
        ]);

        let paragraph = Paragraph::new(line).style(Style::default().bg(theme.bg0));
        frame.render_widget(paragraph, area);
    }
}

/// Split a track of `width` cells into filled and empty parts
fn split_track(progress: f64, width: usize) -> (usize, usize) {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    (filled, width - filled)
}
