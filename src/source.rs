// Schedule source state: loading / error / success, plus short-lived
// memoization of the last successful fetch.
//
// The source never performs I/O itself. The App asks `begin_request` whether a
// network fetch is needed, spawns it, and feeds the outcome back through
// `resolve`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::api::models::PrayerRecord;
use crate::error::FetchError;

/// How long a successful result is served without re-fetching.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(5 * 60);
/// How long an untouched cache entry is kept before it is discarded.
pub const RETENTION_WINDOW: Duration = Duration::from_secs(10 * 60);

/// What the presenter sees.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceState {
    Loading,
    Error(FetchError),
    Success(Arc<Vec<PrayerRecord>>),
}

#[derive(Debug)]
struct CacheEntry {
    records: Arc<Vec<PrayerRecord>>,
    fetched_at: Instant,
    last_used: Instant,
}

#[derive(Debug)]
pub struct ScheduleSource {
    fresh_for: Duration,
    retain_for: Duration,
    entry: Option<CacheEntry>,
    state: SourceState,
    next_request_id: u64,
    in_flight: Option<u64>,
    latest_resolved: Option<u64>,
}

impl Default for ScheduleSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleSource {
    pub fn new() -> Self {
        Self::with_windows(FRESHNESS_WINDOW, RETENTION_WINDOW)
    }

    pub fn with_windows(fresh_for: Duration, retain_for: Duration) -> Self {
        Self {
            fresh_for,
            retain_for,
            entry: None,
            state: SourceState::Loading,
            next_request_id: 0,
            in_flight: None,
            latest_resolved: None,
        }
    }

    pub fn state(&self) -> &SourceState {
        &self.state
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The last fetch failed and nothing has replaced it yet.
    pub fn is_error(&self) -> bool {
        matches!(self.state, SourceState::Error(_))
    }

    pub fn has_cached(&self) -> bool {
        self.entry.is_some()
    }

    /// Decide whether a request needs the network. Returns the id to tag the
    /// fetch with, or `None` when the cache is fresh or (unless `force`) a
    /// fetch is already under way.
    pub fn begin_request(&mut self, now: Instant, force: bool) -> Option<u64> {
        self.evict_expired(now);

        if let Some(entry) = self.entry.as_mut() {
            entry.last_used = now;
            if !force && now.saturating_duration_since(entry.fetched_at) < self.fresh_for {
                tracing::trace!("serving prayer times from cache");
                return None;
            }
        }

        if !force && self.in_flight.is_some() {
            return None;
        }

        // Stale data stays on screen while it is revalidated.
        if self.entry.is_none() {
            self.state = SourceState::Loading;
        }

        let id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(id);
        tracing::debug!(request_id = id, force, "prayer times request started");
        Some(id)
    }

    /// Apply a fetch outcome. Returns `false` when the result was dropped
    /// because a later request already resolved.
    pub fn resolve(
        &mut self,
        request_id: u64,
        result: Result<Vec<PrayerRecord>, FetchError>,
        now: Instant,
    ) -> bool {
        if self.in_flight == Some(request_id) {
            self.in_flight = None;
        }
        if self.latest_resolved.is_some_and(|latest| request_id < latest) {
            tracing::debug!(request_id, "dropping out-of-order prayer times result");
            return false;
        }
        self.latest_resolved = Some(request_id);

        match result {
            Ok(records) => {
                tracing::info!(request_id, mosques = records.len(), "prayer times updated");
                let records = Arc::new(records);
                self.entry = Some(CacheEntry {
                    records: Arc::clone(&records),
                    fetched_at: now,
                    last_used: now,
                });
                self.state = SourceState::Success(records);
            }
            Err(err) => {
                tracing::warn!(request_id, error = %err, "prayer times fetch failed");
                self.state = SourceState::Error(err);
            }
        }
        true
    }

    /// Discard the cache entry once it has gone unused for the retention window.
    pub fn evict_expired(&mut self, now: Instant) {
        let expired = self
            .entry
            .as_ref()
            .is_some_and(|e| now.saturating_duration_since(e.last_used) >= self.retain_for);
        if expired {
            tracing::debug!("evicting cached prayer times");
            self.entry = None;
            if matches!(self.state, SourceState::Success(_)) {
                self.state = SourceState::Loading;
            }
        }
    }
}
