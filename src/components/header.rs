// Branding line: app name on the left, key hints on the right.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::components::Component;
use crate::theme::Theme;

pub const APP_TITLE: &str = "Jamaat";

#[derive(Default)]
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }
}

impl Component for Header {
    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(32)]).areas(inner);

        let title = Line::from(vec![
            Span::raw(" 🕌 "),
            Span::styled(
                APP_TITLE,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), left);

        let hints = Line::from(vec![
            Span::styled("a", Style::default().fg(theme.accent)),
            Span::styled(" About  ", theme.dim()),
            Span::styled("?", Style::default().fg(theme.accent)),
            Span::styled(" Help  ", theme.dim()),
            Span::styled("q", Style::default().fg(theme.accent)),
            Span::styled(" Quit ", theme.dim()),
        ])
        .right_aligned();
        frame.render_widget(Paragraph::new(hints), right);
    }
}
