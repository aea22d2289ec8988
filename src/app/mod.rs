// Central coordinator: owns the components, the schedule source and the clock.
// Runs the event loop (key/tick → Action → handle_action → view update → draw).

mod fetch;
mod input;

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDateTime;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::action::Action;
use crate::api::client::ScheduleClient;
use crate::clock::{Clock, LocalTime, TimeSource};
use crate::components::about_modal::AboutModal;
use crate::components::description::Description;
use crate::components::header::Header;
use crate::components::schedule_grid::ScheduleGrid;
use crate::components::Component;
use crate::config::Config;
use crate::presenter;
use crate::source::ScheduleSource;
use crate::theme::Theme;
use crate::tui::{Tui, TuiEvent};
use crate::ui;

/// Top-level coordinator and the single writer of display state. Fetch tasks
/// and the clock only ever talk to it by posting actions.
pub struct App {
    running: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    // Components
    pub header: Header,
    pub description: Description,
    pub schedule: ScheduleGrid,
    pub about: AboutModal,

    // State
    pub(crate) client: ScheduleClient,
    pub source: ScheduleSource,
    pub(crate) config: Config,
    time_source: Arc<dyn TimeSource>,
    pub now: NaiveDateTime,
    pub show_help: bool,
    theme: Theme,
    fetches: JoinSet<()>,
    clock: Option<Clock>,
}

impl App {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        Self::with_time_source(config, Arc::new(LocalTime))
    }

    pub fn with_time_source(config: Config, time_source: Arc<dyn TimeSource>) -> anyhow::Result<Self> {
        config.validate()?;
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let mut header = Header::new();
        let mut description = Description::new();
        let mut schedule = ScheduleGrid::new();
        let mut about = AboutModal::new();

        for component in [
            &mut header as &mut dyn Component,
            &mut description,
            &mut schedule,
            &mut about,
        ] {
            component.register_action_handler(action_tx.clone());
        }

        let client = ScheduleClient::new(config.source.endpoint.clone());
        let now = time_source.now();

        Ok(Self {
            running: true,
            action_tx,
            action_rx,
            header,
            description,
            schedule,
            about,
            client,
            source: ScheduleSource::new(),
            config,
            time_source,
            now,
            show_help: false,
            theme: Theme::default(),
            fetches: JoinSet::new(),
            clock: None,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut tui = Tui::new(self.config.general.frame_rate)?;
        tui.enter()?;
        tracing::info!(endpoint = %self.client.endpoint(), "jamaat started");

        self.start_clock();
        self.action_tx.send(Action::LoadSchedule)?;

        while self.running {
            let state = ui::DrawState {
                header: &self.header,
                description: &self.description,
                schedule: &self.schedule,
                about: &self.about,
                theme: &self.theme,
                now: self.now,
                fetching: self.source.is_fetching(),
                show_help: self.show_help,
            };
            tui.draw(|frame| ui::draw(frame, &state))?;

            tokio::select! {
                Some(event) = tui.event_rx.recv() => {
                    match event {
                        TuiEvent::Key(key) => self.handle_key(key)?,
                        TuiEvent::Resize => {} // ratatui redraws at correct size automatically
                        TuiEvent::Tick => { self.action_tx.send(Action::Tick)?; }
                    }
                }
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action)?;
                }
            }
        }

        self.shutdown();
        tui.exit()?;
        tracing::info!("jamaat stopped");
        Ok(())
    }

    /// Start (or restart) the wall-clock ticker.
    pub fn start_clock(&mut self) {
        self.clock = Some(Clock::spawn(
            self.config.clock.tick_interval(),
            Arc::clone(&self.time_source),
            self.action_tx.clone(),
        ));
    }

    pub fn clock_running(&self) -> bool {
        self.clock.as_ref().is_some_and(Clock::is_running)
    }

    /// Cancel the clock timer and any in-flight fetch.
    pub fn shutdown(&mut self) {
        self.clock = None;
        self.fetches.abort_all();
    }

    pub fn handle_action(&mut self, action: Action) -> anyhow::Result<()> {
        match action {
            // Lifecycle
            Action::Quit => {
                self.running = false;
            }

            // Data loading
            Action::LoadSchedule => {
                self.request_schedule(false);
                self.refresh_view();
            }
            Action::RefreshSchedule => {
                self.request_schedule(true);
                self.refresh_view();
            }
            Action::ScheduleResolved { request_id, result } => {
                self.reap_fetches();
                self.source.resolve(request_id, result, Instant::now());
                self.refresh_view();
            }

            // Clock
            Action::ClockTicked(now) => {
                self.now = now;
                self.source.evict_expired(Instant::now());
                // Ticks revalidate loaded data only. A failed load stays on
                // screen until the user refreshes.
                if !self.source.is_error() {
                    self.request_schedule(false);
                }
                self.refresh_view();
            }

            // Overlays
            Action::ShowHelp => self.show_help = true,
            Action::HideHelp => self.show_help = false,
            Action::ShowAbout | Action::HideAbout => {
                self.about.update(&action)?;
            }

            // Forward anything unhandled to components
            ref action => {
                self.schedule.update(action)?;
            }
        }
        Ok(())
    }

    /// Recompute the derived view from the latest source state and clock time.
    fn refresh_view(&mut self) {
        self.schedule
            .set_view(presenter::present(self.source.state(), self.now));
    }

    #[allow(dead_code)] // used by integration tests
    pub fn flush_actions(&mut self) -> anyhow::Result<()> {
        while let Ok(action) = self.action_rx.try_recv() {
            self.handle_action(action)?;
        }
        Ok(())
    }

    /// Wait for the next queued action and dispatch it.
    #[allow(dead_code)] // used by integration tests
    pub async fn process_next_action(&mut self) -> anyhow::Result<()> {
        if let Some(action) = self.action_rx.recv().await {
            self.handle_action(action)?;
        }
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}
