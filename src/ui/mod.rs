//! Terminal presentation: the two projections, the toggle between them, and
//! the event loop that drives the whole thing.

mod app;
pub mod chart;
mod helpers;
pub mod table;
mod terminal;
pub mod view;

pub use app::App;
pub use terminal::run_app;
