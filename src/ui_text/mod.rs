//! Terminal presentation: month grid, legend and event list, plus the
//! interactive navigation loop.

mod app;
pub mod views;

pub use app::{AppCommand, CalendarApp};
