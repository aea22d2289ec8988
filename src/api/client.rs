// HTTP client for the prayer-times endpoint.

use crate::api::models::PrayerRecord;
use crate::error::FetchError;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/prayer-times";

#[derive(Clone)]
pub struct ScheduleClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ScheduleClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the full list of mosques with their schedules.
    pub async fn fetch(&self) -> Result<Vec<PrayerRecord>, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching prayer times");

        let resp = self.http.get(&self.endpoint).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        // Decode separately from the transport so a bad body is reported as such.
        let body = resp.bytes().await?;
        let records: Vec<PrayerRecord> = serde_json::from_slice(&body)?;

        tracing::debug!(count = records.len(), "prayer times fetched");
        Ok(records)
    }
}
