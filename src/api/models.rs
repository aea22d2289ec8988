// Wire types for the prayer-times endpoint, plus the closed set of prayer
// slots and the slot → field-name table used to read a schedule block.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

// ── Slots ──

/// One of the eight fixed prayer identifiers: the five daily prayers followed
/// by the three alternate Friday congregations. Declaration order is display
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Slot {
    Fajr,
    Zuhr,
    Asr,
    Maghrib,
    Isha,
    Jummah1,
    Jummah2,
    Jummah3,
}

/// Names of the two schedule-block fields that belong to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotFields {
    pub start: &'static str,
    pub iqamah: &'static str,
}

impl Slot {
    /// All slots in display order.
    pub fn all() -> impl Iterator<Item = Slot> {
        Slot::iter()
    }

    /// Lowercase identifier, e.g. `"jummah1"`.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Capitalized label shown in the first table column.
    pub fn label(self) -> &'static str {
        match self {
            Slot::Fajr => "Fajr",
            Slot::Zuhr => "Zuhr",
            Slot::Asr => "Asr",
            Slot::Maghrib => "Maghrib",
            Slot::Isha => "Isha",
            Slot::Jummah1 => "Jummah1",
            Slot::Jummah2 => "Jummah2",
            Slot::Jummah3 => "Jummah3",
        }
    }

    /// Wire names of the slot's two `ScheduleBlock` fields. This is the
    /// contract [`ScheduleBlock::start`] and [`ScheduleBlock::iqamah`] are
    /// tested against, and the name reported when a value is unreadable.
    pub const fn fields(self) -> SlotFields {
        match self {
            Slot::Fajr => SlotFields { start: "fajr_start", iqamah: "fajr_iqamah" },
            Slot::Zuhr => SlotFields { start: "zuhr_start", iqamah: "zuhr_iqamah" },
            Slot::Asr => SlotFields { start: "asr_start", iqamah: "asr_iqamah" },
            Slot::Maghrib => SlotFields { start: "maghrib_start", iqamah: "maghrib_iqamah" },
            Slot::Isha => SlotFields { start: "isha_start", iqamah: "isha_iqamah" },
            Slot::Jummah1 => SlotFields { start: "jummah1_start", iqamah: "jummah1_iqamah" },
            Slot::Jummah2 => SlotFields { start: "jummah2_start", iqamah: "jummah2_iqamah" },
            Slot::Jummah3 => SlotFields { start: "jummah3_start", iqamah: "jummah3_iqamah" },
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Records ──

/// One mosque as returned by `GET /prayer-times`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrayerRecord {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub website: String,
    pub prayer_times: ScheduleBlock,
}

/// Per-slot start and iqamah times for one mosque. Every time is an optional
/// time-of-day string exactly as the server sent it; parsing happens at
/// display time so a malformed value only affects its own cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleBlock {
    #[serde(default)]
    pub mosque_name: String,
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub fajr_start: Option<String>,
    #[serde(default)]
    pub fajr_iqamah: Option<String>,
    #[serde(default)]
    pub zuhr_start: Option<String>,
    #[serde(default)]
    pub zuhr_iqamah: Option<String>,
    #[serde(default)]
    pub asr_start: Option<String>,
    #[serde(default)]
    pub asr_iqamah: Option<String>,
    #[serde(default)]
    pub maghrib_start: Option<String>,
    #[serde(default)]
    pub maghrib_iqamah: Option<String>,
    #[serde(default)]
    pub isha_start: Option<String>,
    #[serde(default)]
    pub isha_iqamah: Option<String>,
    #[serde(default)]
    pub jummah1_start: Option<String>,
    #[serde(default)]
    pub jummah1_iqamah: Option<String>,
    #[serde(default)]
    pub jummah2_start: Option<String>,
    #[serde(default)]
    pub jummah2_iqamah: Option<String>,
    #[serde(default)]
    pub jummah3_start: Option<String>,
    #[serde(default)]
    pub jummah3_iqamah: Option<String>,

    /// Single timestamp for the whole block, not per slot.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ScheduleBlock {
    /// The slot's start (earliest permissible) time, if scheduled.
    pub fn start(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::Fajr => self.fajr_start.as_deref(),
            Slot::Zuhr => self.zuhr_start.as_deref(),
            Slot::Asr => self.asr_start.as_deref(),
            Slot::Maghrib => self.maghrib_start.as_deref(),
            Slot::Isha => self.isha_start.as_deref(),
            Slot::Jummah1 => self.jummah1_start.as_deref(),
            Slot::Jummah2 => self.jummah2_start.as_deref(),
            Slot::Jummah3 => self.jummah3_start.as_deref(),
        }
    }

    /// The slot's congregation (iqamah) time, if scheduled.
    pub fn iqamah(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::Fajr => self.fajr_iqamah.as_deref(),
            Slot::Zuhr => self.zuhr_iqamah.as_deref(),
            Slot::Asr => self.asr_iqamah.as_deref(),
            Slot::Maghrib => self.maghrib_iqamah.as_deref(),
            Slot::Isha => self.isha_iqamah.as_deref(),
            Slot::Jummah1 => self.jummah1_iqamah.as_deref(),
            Slot::Jummah2 => self.jummah2_iqamah.as_deref(),
            Slot::Jummah3 => self.jummah3_iqamah.as_deref(),
        }
    }
}
