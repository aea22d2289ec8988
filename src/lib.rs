// Library root: exposes every module so integration tests can `use jamaat::*`.

pub mod action;
pub mod api;
pub mod app;
pub mod clock;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod presenter;
pub mod source;
pub mod status;
pub mod theme;
pub mod tui;
pub mod ui;
