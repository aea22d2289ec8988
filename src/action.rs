// Every user interaction, async result, and internal event is represented as an
// Action variant. The App event loop dispatches these to component handlers.

use chrono::NaiveDateTime;

use crate::api::models::PrayerRecord;
use crate::error::FetchError;

/// All events flowing through the app: user input, async results and
/// internal signals. The [`App`](crate::app::App) event loop dispatches
/// each variant to the appropriate handler.
#[derive(Debug, Clone)]
pub enum Action {
    Quit,

    /// Request the schedule, served from cache while it is fresh.
    LoadSchedule,
    /// User-initiated refetch that ignores the freshness window.
    RefreshSchedule,
    ScheduleResolved {
        request_id: u64,
        result: Result<Vec<PrayerRecord>, FetchError>,
    },

    /// Wall-clock update from the [`Clock`](crate::clock::Clock).
    ClockTicked(NaiveDateTime),

    ScrollDown,
    ScrollUp,
    ScrollTop,

    ShowAbout,
    HideAbout,
    ShowHelp,
    HideHelp,

    /// Frame tick from the terminal backend; drives the spinner.
    Tick,
}
