// Layout and rendering: stacks header, description and schedule grid, draws the
// status line, and composites overlays (about dialog, help).

use chrono::NaiveDateTime;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::components::about_modal::AboutModal;
use crate::components::description::{self, Description};
use crate::components::header::Header;
use crate::components::schedule_grid::ScheduleGrid;
use crate::components::{centered_overlay, Component};
use crate::theme::Theme;

pub struct DrawState<'a> {
    pub header: &'a Header,
    pub description: &'a Description,
    pub schedule: &'a ScheduleGrid,
    pub about: &'a AboutModal,
    pub theme: &'a Theme,
    pub now: NaiveDateTime,
    pub fetching: bool,
    pub show_help: bool,
}

pub fn draw(frame: &mut Frame, state: &DrawState) {
    let [header_area, description_area, schedule_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(description::HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    state.header.draw(frame, header_area, state.theme);
    state.description.draw(frame, description_area, state.theme);
    state.schedule.draw(frame, schedule_area, state.theme);
    draw_status_line(frame, status_area, state);

    if state.about.is_visible() {
        state.about.draw(frame, frame.area(), state.theme);
    }

    if state.show_help {
        draw_help_overlay(frame, state.theme);
    }
}

fn draw_status_line(frame: &mut Frame, area: ratatui::layout::Rect, state: &DrawState) {
    let theme = state.theme;
    let mut spans = vec![
        Span::styled(" Now ", theme.dim()),
        Span::styled(
            state.now.format("%-I:%M %p").to_string(),
            Style::default().fg(theme.text),
        ),
    ];
    if state.fetching {
        spans.push(Span::styled("  · refreshing…", Style::default().fg(theme.accent)));
    }
    spans.push(Span::styled("  · r refresh · j/k scroll", theme.dim()));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_help_overlay(frame: &mut Frame, theme: &Theme) {
    let keybindings = [
        ("q", "Quit"),
        ("j / Down", "Scroll down"),
        ("k / Up", "Scroll up"),
        ("g / Home", "Back to top"),
        ("r", "Refresh prayer times"),
        ("a", "About"),
        ("?", "Toggle this help overlay"),
    ];

    let overlay_area = centered_overlay(frame.area(), 44, keybindings.len() as u16 + 6);
    frame.render_widget(Clear, overlay_area);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " Keybindings ",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (key, desc) in &keybindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:12}", key), Style::default().fg(theme.accent)),
            Span::raw(*desc),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        theme.dim(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .title_alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}
