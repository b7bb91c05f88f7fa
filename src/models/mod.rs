// Module exports for models

pub mod calendar_day;
pub mod category;
pub mod event;
pub mod settings;
pub mod view_month;
