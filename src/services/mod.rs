// Service module exports

pub mod calendar_data;
pub mod event;
pub mod grid;
pub mod settings;
