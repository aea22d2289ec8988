// About dialog (press `a` to open, any key to close).

use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::components::header::APP_TITLE;
use crate::components::{centered_overlay, Component};
use crate::theme::Theme;

const ABOUT_TEXT: &[&str] = &[
    "Jamaat collects the prayer times of the neighbourhood mosques in one place, \
     so there is no need to visit each mosque's own site.",
    "",
    "Each card lists when every prayer begins, when the congregation (jamaat) \
     starts, and whether that congregation is still ahead of you today.",
    "",
    "Thank you for using Jamaat!",
];

#[derive(Default)]
pub struct AboutModal {
    action_tx: Option<UnboundedSender<Action>>,
    visible: bool,
}

impl AboutModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

impl Component for AboutModal {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        let _ = key;
        if !self.visible {
            return Ok(false);
        }
        match &self.action_tx {
            Some(tx) => tx.send(Action::HideAbout)?,
            None => self.hide(),
        }
        Ok(true)
    }

    fn update(&mut self, action: &Action) -> anyhow::Result<Vec<Action>> {
        match action {
            Action::ShowAbout => self.show(),
            Action::HideAbout => self.hide(),
            _ => {}
        }
        Ok(vec![])
    }

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.visible {
            return;
        }

        let width = (area.width * 3 / 5).max(40);
        let overlay_area = centered_overlay(area, width, 14);
        frame.render_widget(Clear, overlay_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" About {APP_TITLE} "))
            .title_style(
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            );

        let mut lines: Vec<Line> = ABOUT_TEXT
            .iter()
            .map(|text| Line::from(Span::styled(*text, Style::default().fg(theme.text))))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Press any key to close", theme.dim())));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, overlay_area);
    }
}
