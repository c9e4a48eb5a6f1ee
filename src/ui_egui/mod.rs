mod app;
pub mod display;
pub mod event_dialog;
mod views;

pub use app::CalendarApp;
