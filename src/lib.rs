//! sysident - a terminal browser for device identity and status facts
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod panels;
pub mod prelude;
pub mod selection;
pub mod terminal;
pub mod traits;
pub mod ui;
