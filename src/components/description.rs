// Static description block: locality, tagline and the "submit a request" prompt.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::components::Component;
use crate::theme::Theme;

pub const LOCALITY: &str = "Scarborough - Canada";
pub const TAGLINE: &str = "All of our neighborhood mosques in one place";
pub const CALL_TO_ACTION: &str = "To add your mosque to the list:";
pub const BUTTON_LABEL: &str = "Submit a request";

/// Rows needed to draw the block.
pub const HEIGHT: u16 = 6;

#[derive(Default)]
pub struct Description;

impl Description {
    pub fn new() -> Self {
        Self
    }
}

impl Component for Description {
    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                LOCALITY.to_uppercase(),
                Style::default().fg(theme.accent),
            )),
            Line::from(Span::styled(
                TAGLINE,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(CALL_TO_ACTION, theme.dim())),
            Line::from(Span::styled(
                format!(" {BUTTON_LABEL} "),
                Style::default().fg(theme.button_fg).bg(theme.button_bg),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).centered(), area);
    }
}
