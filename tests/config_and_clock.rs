// Configuration loading/validation and the wall-clock ticker.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use jamaat::action::Action;
use jamaat::api::client::DEFAULT_ENDPOINT;
use jamaat::clock::{until_next_boundary, Clock, FixedTime, DEFAULT_TICK_INTERVAL};
use jamaat::config::Config;
use tokio::sync::mpsc;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn time(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ── Config ───────────────────────────────────────────────────────────────────

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.source.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.clock.tick_interval(), DEFAULT_TICK_INTERVAL);
    assert_eq!(config.clock.tick_interval_ms, 60_000);
    assert!((config.general.frame_rate - 30.0).abs() < f64::EPSILON);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_app_dir() {
    let path = Config::config_path();
    assert!(path.ends_with("jamaat/config.toml"));
}

#[test]
fn test_load_from_missing_file_gives_defaults() {
    let config = Config::load_from(Path::new("/nonexistent/jamaat/config.toml")).unwrap();
    assert_eq!(config.source.endpoint, DEFAULT_ENDPOINT);
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
[general]
frame_rate = 15.0

[source]
endpoint = "https://mosques.example.org/prayer-times"

[clock]
tick_interval_ms = 1000
"#,
    );
    let config = Config::load_from(file.path()).unwrap();
    assert!((config.general.frame_rate - 15.0).abs() < f64::EPSILON);
    assert_eq!(config.source.endpoint, "https://mosques.example.org/prayer-times");
    assert_eq!(config.clock.tick_interval(), Duration::from_secs(1));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = write_config("[clock]\ntick_interval_ms = 5000\n");
    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.clock.tick_interval_ms, 5000);
    assert_eq!(config.source.endpoint, DEFAULT_ENDPOINT);
    assert!((config.general.frame_rate - 30.0).abs() < f64::EPSILON);
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("[clock\ntick_interval_ms = ");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Parsing"));
}

#[test]
fn test_open_reports_malformed_file() {
    let file = write_config("[source]\nendpoint = 42\n");
    let err = Config::open(Some(file.path())).unwrap_err();
    assert!(format!("{err:#}").contains("Parsing"));
}

#[test]
fn test_open_missing_explicit_file_gives_defaults() {
    let config = Config::open(Some(Path::new("/nonexistent/jamaat/config.toml"))).unwrap();
    assert_eq!(config.clock.tick_interval(), DEFAULT_TICK_INTERVAL);
}

#[test]
fn test_open_reads_explicit_file() {
    let file = write_config("[clock]\ntick_interval_ms = 2000\n");
    let config = Config::open(Some(file.path())).unwrap();
    assert_eq!(config.clock.tick_interval(), Duration::from_secs(2));
}

#[test]
fn test_overrides_replace_file_values() {
    let mut config = Config::default();
    config.apply_overrides(Some("http://10.0.0.2:5000/prayer-times".to_string()), Some(250));
    assert_eq!(config.source.endpoint, "http://10.0.0.2:5000/prayer-times");
    assert_eq!(config.clock.tick_interval(), Duration::from_millis(250));

    config.apply_overrides(None, None);
    assert_eq!(config.clock.tick_interval_ms, 250);
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = Config::default();
    config.source.endpoint = "::not-a-url".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.clock.tick_interval_ms = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.general.frame_rate = 0.0;
    assert!(config.validate().is_err());
}

// ── Boundary alignment ───────────────────────────────────────────────────────

#[test]
fn test_boundary_mid_minute() {
    assert_eq!(
        until_next_boundary(time(4, 0, 30), Duration::from_secs(60)),
        Duration::from_secs(30)
    );
}

#[test]
fn test_boundary_exactly_on_the_minute_waits_full_interval() {
    assert_eq!(
        until_next_boundary(time(4, 0, 0), Duration::from_secs(60)),
        Duration::from_secs(60)
    );
    assert_eq!(
        until_next_boundary(time(0, 0, 0), Duration::from_secs(60)),
        Duration::from_secs(60)
    );
}

#[test]
fn test_boundary_counts_milliseconds() {
    let t = NaiveTime::from_hms_milli_opt(4, 0, 59, 500).unwrap();
    assert_eq!(
        until_next_boundary(t, Duration::from_secs(60)),
        Duration::from_millis(500)
    );
}

#[test]
fn test_boundary_for_longer_intervals() {
    assert_eq!(
        until_next_boundary(time(4, 3, 0), Duration::from_secs(5 * 60)),
        Duration::from_secs(2 * 60)
    );
    assert_eq!(
        until_next_boundary(time(23, 59, 0), Duration::from_secs(60 * 60)),
        Duration::from_secs(60)
    );
}

#[test]
fn test_boundary_zero_interval() {
    assert_eq!(until_next_boundary(time(4, 0, 30), Duration::ZERO), Duration::ZERO);
}

// ── Clock ────────────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_clock_ticks_immediately_then_on_boundaries() {
    let now = NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(4, 0, 30)
        .unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let start = tokio::time::Instant::now();
    let _clock = Clock::spawn(Duration::from_secs(60), Arc::new(FixedTime(now)), tx);

    match rx.recv().await {
        Some(Action::ClockTicked(t)) => assert_eq!(t, now),
        other => panic!("expected clock tick, got {other:?}"),
    }
    assert!(start.elapsed() < Duration::from_secs(1));

    // 04:00:30 → next minute boundary is 30s away.
    assert!(matches!(rx.recv().await, Some(Action::ClockTicked(_))));
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(30) && elapsed < Duration::from_secs(31));

    assert!(matches!(rx.recv().await, Some(Action::ClockTicked(_))));
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(90) && elapsed < Duration::from_secs(91));
}

#[tokio::test(start_paused = true)]
async fn test_dropping_clock_stops_ticks() {
    let now = NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(4, 0, 0)
        .unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let clock = Clock::spawn(Duration::from_secs(60), Arc::new(FixedTime(now)), tx);
    assert!(rx.recv().await.is_some());

    drop(clock);
    let drained = tokio::time::timeout(Duration::from_secs(600), async {
        let mut leftover = 0;
        while rx.recv().await.is_some() {
            leftover += 1;
        }
        leftover
    })
    .await
    .expect("channel should close once the clock is dropped");
    assert_eq!(drained, 0);
}

#[tokio::test(start_paused = true)]
async fn test_stopped_clock_is_not_running() {
    let now = NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(4, 0, 0)
        .unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let clock = Clock::spawn(Duration::from_secs(60), Arc::new(FixedTime(now)), tx);
    assert!(rx.recv().await.is_some());
    assert!(clock.is_running());

    clock.stop();
    assert!(rx.recv().await.is_none());
    assert!(!clock.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_clock_stops_when_receiver_is_gone() {
    let now = NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(4, 0, 0)
        .unwrap();
    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);
    let clock = Clock::spawn(Duration::from_secs(60), Arc::new(FixedTime(now)), tx);

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(!clock.is_running());
}
