// Service module exports
// Event persistence, month layout and the controller tying them to a UI

pub mod calendar;
pub mod event_store;
pub mod grid;
pub mod selection;
pub mod settings;
pub mod storage;
