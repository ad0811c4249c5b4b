use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Left margin inside each panel: divider plus padding
const PANEL_GUTTER: u16 = 3;

/// The visible window onto the horizontal strip of section panels
pub struct StripWidget;

impl StripWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let surface = app.surface();
        let first = surface.first_column();
        let window_end = first + area.width as u32;
        let active = app.active_index();

        frame.render_widget(
            Paragraph::new("").style(Style::default().bg(theme.bg0)),
            area,
        );

        for (index, start) in surface.visible_panels() {
            let Some(section) = app.sections().get(index) else {
                continue;
            };
            let end = start + section.width as u32;
            let left = start.max(first);
            let right = end.min(window_end);
            if right <= left {
                continue;
            }

            let panel_area = Rect {
                x: area.x + (left - first) as u16,
                y: area.y,
                width: (right - left) as u16,
                height: area.height,
            };

            let title_style = if Some(index) == active {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD)
            };
            let divider = Span::styled("│  ", Style::default().fg(theme.grey0));
            let text_width = section.width.saturating_sub(PANEL_GUTTER + 2) as usize;

            let mut lines = vec![Line::from(divider.clone()), Line::from(divider.clone())];
            lines.push(Line::from(vec![
                divider.clone(),
                Span::styled(format!("{:02} / ", index + 1), Style::default().fg(theme.grey1)),
                Span::styled(section.title.to_uppercase(), title_style),
            ]));
            lines.push(Line::from(divider.clone()));
            for text in wrap_text(&section.body, text_width) {
                lines.push(Line::from(vec![
                    divider.clone(),
                    Span::styled(text, Style::default().fg(theme.fg1)),
                ]));
            }
            while lines.len() < area.height as usize {
                lines.push(Line::from(divider.clone()));
            }

            // Panels cut off on the left are shifted rather than squeezed
            let paragraph = Paragraph::new(lines)
                .style(Style::default().bg(theme.bg0))
                .scroll((0, (left - start) as u16));
            frame.render_widget(paragraph, panel_area);
        }
    }
}

/// Greedy word wrap to `width` display columns
///
/// Words longer than the width are placed on their own line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
