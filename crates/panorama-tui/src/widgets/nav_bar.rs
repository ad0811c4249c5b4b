use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Brand mark plus one entry per section; the active section is highlighted
pub struct NavBarWidget;

impl NavBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let active = app.active_index();

        let mut spans = vec![
            Span::styled(
                " STIFF",
                Style::default()
                    .fg(theme.fg0)
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            ),
            Span::styled(".", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
            Span::raw("   "),
        ];

        for (index, section) in app.sections().iter().enumerate() {
            let style = if Some(index) == active {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.grey1)
            };
            spans.push(Span::styled(
                format!("{} {}", index + 1, section.title.to_uppercase()),
                style,
            ));
            spans.push(Span::raw("  "));
        }

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg1));
        frame.render_widget(paragraph, area);
    }
}
