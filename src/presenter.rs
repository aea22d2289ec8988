// Pure derivation of what the schedule grid shows from the two inputs that can
// change: the source state and the current clock time.

use chrono::NaiveDateTime;

use crate::api::models::{PrayerRecord, Slot};
use crate::format::{format_time, format_updated_at};
use crate::source::SourceState;
use crate::status::{evaluate, parse_time_of_day, Status};

pub const LOAD_ERROR_NOTICE: &str = "Failed to load. Try refreshing";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScheduleView {
    #[default]
    Loading,
    Error { notice: &'static str },
    Cards(Vec<MosqueCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MosqueCard {
    pub name: String,
    pub address: String,
    pub rows: Vec<SlotRow>,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotRow {
    pub slot: Slot,
    pub label: &'static str,
    pub begins: String,
    pub jamaat: String,
    pub status: Status,
}

impl ScheduleView {
    pub fn cards(&self) -> &[MosqueCard] {
        match self {
            ScheduleView::Cards(cards) => cards,
            _ => &[],
        }
    }

    /// Total table rows across all cards.
    pub fn row_count(&self) -> usize {
        self.cards().iter().map(|c| c.rows.len()).sum()
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ScheduleView::Error { .. })
    }
}

pub fn present(state: &SourceState, now: NaiveDateTime) -> ScheduleView {
    match state {
        SourceState::Loading => ScheduleView::Loading,
        SourceState::Error(_) => ScheduleView::Error {
            notice: LOAD_ERROR_NOTICE,
        },
        SourceState::Success(records) => {
            ScheduleView::Cards(records.iter().map(|r| present_card(r, now)).collect())
        }
    }
}

pub fn present_card(record: &PrayerRecord, now: NaiveDateTime) -> MosqueCard {
    let block = &record.prayer_times;
    let rows = Slot::all()
        .map(|slot| {
            let fields = slot.fields();
            log_unreadable(&record.name, fields.start, block.start(slot));
            log_unreadable(&record.name, fields.iqamah, block.iqamah(slot));

            let iqamah = block.iqamah(slot);
            SlotRow {
                slot,
                label: slot.label(),
                begins: format_time(block.start(slot)),
                jamaat: format_time(iqamah),
                status: evaluate(iqamah, now),
            }
        })
        .collect();

    MosqueCard {
        name: record.name.clone(),
        address: record.address.clone(),
        rows,
        updated_at: format_updated_at(block.updated_at.as_deref()),
    }
}

/// Unreadable times render as "None"; leave a trace of which field it was.
fn log_unreadable(mosque: &str, field: &'static str, raw: Option<&str>) {
    if let Some(raw) = raw {
        if parse_time_of_day(raw).is_none() {
            tracing::debug!(mosque, field, raw, "unreadable time of day");
        }
    }
}
