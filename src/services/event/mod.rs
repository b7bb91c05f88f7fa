//! School event service entry point.
//! Normalizes raw calendar records into per-day events and answers the
//! date and month queries the views need.

pub mod normalize;
pub mod queries;
mod shared;

pub use normalize::{load_events, normalize_events};
pub use queries::{events_by_date, events_on_date, month_summary};
