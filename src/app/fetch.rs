// Data fetching: asks the schedule source whether the network is needed and,
// if so, spawns the fetch on the App's JoinSet.

use crate::action::Action;
use crate::app::App;

impl App {
    /// Request the schedule. A fresh cache entry (or, unless `force`, a fetch
    /// already in flight) means nothing is spawned.
    pub(super) fn request_schedule(&mut self, force: bool) {
        let Some(request_id) = self.source.begin_request(std::time::Instant::now(), force) else {
            return;
        };

        let client = self.client.clone();
        let tx = self.action_tx.clone();
        self.fetches.spawn(async move {
            let result = client.fetch().await;
            // The receiver is gone only during teardown.
            tx.send(Action::ScheduleResolved { request_id, result }).ok();
        });
    }

    /// Drop handles of fetch tasks that have already finished.
    pub(super) fn reap_fetches(&mut self) {
        while let Some(joined) = self.fetches.try_join_next() {
            if let Err(err) = joined {
                if err.is_panic() {
                    tracing::error!("prayer times fetch task panicked: {err}");
                }
            }
        }
    }
}
