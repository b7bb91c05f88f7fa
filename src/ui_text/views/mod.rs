mod event_list;
mod month_day_cell;
mod month_view;
mod palette;

pub use event_list::render_event_list;
pub use month_view::MonthView;
