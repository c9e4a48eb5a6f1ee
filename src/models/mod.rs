// Models module
// Data structures shared across services and the UI

pub mod date_key;
pub mod event;
pub mod settings;
