//! Core library surface for the immigration statistics viewer.
//!
//! The binary only wires these pieces together; keeping them in a library lets
//! the integration tests drive the data access and the UI without a terminal.
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod ui;

pub use config::Config;
pub use db::{fetch_all, load_records, open_connection, StatsQuery};
pub use error::{ConfigError, DataAccessError};
pub use models::ImmigrationRecord;
pub use ui::{run_app, App};
