// Schedule grid: one bordered card per mosque, laid out in as many columns as
// the terminal width allows and scrolled by card row.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::components::{Component, BRAILLE_SPINNER};
use crate::presenter::{MosqueCard, ScheduleView, SlotRow};
use crate::theme::Theme;

/// Minimum width of one card, borders included.
pub const CARD_MIN_WIDTH: u16 = 46;
/// Borders, address, table heading, eight slot rows and the footer.
pub const CARD_HEIGHT: u16 = 13;

const STATUS_MARKER: &str = "●";

/// Columns and card rows that fit the area of the last draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridLayout {
    columns: usize,
    visible_rows: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 1,
            visible_rows: 1,
        }
    }
}

#[derive(Default)]
pub struct ScheduleGrid {
    action_tx: Option<UnboundedSender<Action>>,
    view: ScheduleView,
    /// Index of the first visible card row.
    pub scroll: usize,
    frame_count: u64,
    layout: std::cell::Cell<GridLayout>,
}

impl ScheduleGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ScheduleView {
        &self.view
    }

    /// Replace the derived view. The scroll offset survives as long as the
    /// cards still reach that far.
    pub fn set_view(&mut self, view: ScheduleView) {
        self.view = view;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Card rows needed for the current view at the last drawn width.
    pub fn total_rows(&self) -> usize {
        self.view.cards().len().div_ceil(self.layout.get().columns)
    }

    /// Largest scroll offset that still changes what is on screen.
    pub fn max_scroll(&self) -> usize {
        self.total_rows().saturating_sub(self.layout.get().visible_rows)
    }

    pub fn scroll_down(&mut self) {
        if self.scroll < self.max_scroll() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Card columns that fit in `width`.
    pub fn columns_for(width: u16, cards: usize) -> usize {
        let fit = usize::from((width / CARD_MIN_WIDTH).max(1));
        fit.min(cards.max(1))
    }

    fn draw_cards(&self, frame: &mut Frame, area: Rect, cards: &[MosqueCard], theme: &Theme) {
        if cards.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No mosques listed yet.",
                theme.dim(),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let columns = Self::columns_for(area.width, cards.len());
        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
        self.layout.set(GridLayout {
            columns,
            visible_rows,
        });
        let first_row = self.scroll.min(self.max_scroll());

        let row_areas = Layout::vertical(
            std::iter::repeat(Constraint::Length(CARD_HEIGHT)).take(visible_rows),
        )
        .split(area);

        for (slot_idx, row_area) in row_areas.iter().enumerate() {
            let start = (first_row + slot_idx) * columns;
            if start >= cards.len() {
                break;
            }
            let col_areas = Layout::horizontal(
                std::iter::repeat(Constraint::Ratio(1, columns as u32)).take(columns),
            )
            .split(*row_area);

            for (card, card_area) in cards[start..].iter().zip(col_areas.iter()) {
                draw_card(frame, *card_area, card, theme);
            }
        }
    }
}

fn draw_card(frame: &mut Frame, area: Rect, card: &MosqueCard, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Line::from(Span::styled(
            format!(" {} ", card.name),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [address_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let address = Line::from(vec![
        Span::styled("📍 ", Style::default().fg(theme.error)),
        Span::styled(card.address.as_str(), theme.dim()),
    ])
    .centered();
    frame.render_widget(Paragraph::new(address), address_area);

    let heading = Row::new([
        Cell::from("Prayer"),
        Cell::from(Line::from("Begins").right_aligned()),
        Cell::from(Line::from("Jamaat").right_aligned()),
        Cell::from(Line::from("Status").right_aligned()),
    ])
    .style(theme.heading());

    let rows = card.rows.iter().map(|row| slot_row(row, theme));
    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(8),
            Constraint::Min(8),
            Constraint::Length(12),
        ],
    )
    .header(heading)
    .column_spacing(1);
    frame.render_widget(table, table_area);

    let footer = Line::from(Span::styled(
        format!("Updated At: {}", card.updated_at),
        theme.dim().add_modifier(Modifier::ITALIC),
    ))
    .centered();
    frame.render_widget(Paragraph::new(footer), footer_area);
}

fn slot_row<'a>(row: &'a SlotRow, theme: &Theme) -> Row<'a> {
    let status = Line::from(vec![
        Span::styled(
            STATUS_MARKER,
            Style::default().fg(theme.status_color(row.status)),
        ),
        Span::raw(" "),
        Span::styled(row.status.label(), Style::default().fg(theme.text)),
    ])
    .right_aligned();

    Row::new([
        Cell::from(row.label),
        Cell::from(Line::from(row.begins.as_str()).right_aligned()),
        Cell::from(Line::from(row.jamaat.as_str()).right_aligned()),
        Cell::from(status),
    ])
}

impl Component for ScheduleGrid {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        let action = match key.code {
            KeyCode::Down | KeyCode::Char('j') => Action::ScrollDown,
            KeyCode::Up | KeyCode::Char('k') => Action::ScrollUp,
            KeyCode::Home | KeyCode::Char('g') => Action::ScrollTop,
            _ => return Ok(false),
        };
        match &self.action_tx {
            Some(tx) => tx.send(action)?,
            None => {
                self.update(&action)?;
            }
        }
        Ok(true)
    }

    fn update(&mut self, action: &Action) -> anyhow::Result<Vec<Action>> {
        match action {
            Action::Tick => self.frame_count = self.frame_count.wrapping_add(1),
            Action::ScrollDown => self.scroll_down(),
            Action::ScrollUp => self.scroll_up(),
            Action::ScrollTop => self.scroll = 0,
            _ => {}
        }
        Ok(vec![])
    }

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        match &self.view {
            ScheduleView::Loading => {
                let idx = (self.frame_count / 3) as usize % BRAILLE_SPINNER.len();
                let spinner = Paragraph::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", BRAILLE_SPINNER[idx]),
                        Style::default().fg(theme.primary),
                    ),
                    Span::styled("Loading prayer times...", theme.dim()),
                ]))
                .alignment(Alignment::Center);
                frame.render_widget(spinner, area);
            }
            ScheduleView::Error { notice } => {
                let alert = Paragraph::new(Line::from(vec![
                    Span::styled(" ⚠ ", Style::default().fg(theme.error)),
                    Span::styled(*notice, Style::default().fg(theme.error)),
                    Span::styled("  (press r)", theme.dim()),
                ]))
                .alignment(Alignment::Center);
                frame.render_widget(alert, area);
            }
            ScheduleView::Cards(cards) => self.draw_cards(frame, area, cards, theme),
        }
    }
}
