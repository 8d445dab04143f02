//! Persistence module split across logical submodules.

mod connection;
mod stats;

pub use connection::open_connection;
pub use stats::{fetch_all, load_records, try_load_records, StatsQuery};
