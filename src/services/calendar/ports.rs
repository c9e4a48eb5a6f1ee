//! Collaborators driven by the calendar controller.

use chrono::NaiveDate;

use crate::models::date_key::DateKey;
use crate::models::event::{Event, FormPrefill};
use crate::services::grid::MonthGrid;
use crate::services::selection::Refresh;

/// Everything the display needs for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    /// e.g. "February 2024"
    pub month_label: String,
    pub grid: MonthGrid,
    pub selected_date: NaiveDate,
    pub selected_key: DateKey,
    /// e.g. "Thursday, February 29, 2024"
    pub selected_label: String,
    /// Events of the selected date, sorted by time
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Short user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Delete awaiting explicit user confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub date_key: DateKey,
    pub event_id: String,
    pub event_title: String,
}

impl DeleteConfirmation {
    pub fn title(&self) -> &'static str {
        "Delete Event"
    }

    pub fn message(&self) -> &'static str {
        "Are you sure you want to delete this event?"
    }
}

/// Rendering surface for the month grid and the selected day's events
#[cfg_attr(test, mockall::automock)]
pub trait Display {
    fn render(&mut self, view: &CalendarView, refresh: Refresh);

    fn show_message(&mut self, notice: Notice);

    /// Answered later with `Intent::DeleteConfirmed` or `Intent::DeleteCancelled`
    fn request_confirmation(&mut self, request: &DeleteConfirmation);
}

/// Modal form collecting event fields
#[cfg_attr(test, mockall::automock)]
pub trait EventForm {
    /// Answered later with `Intent::FormSubmitted` or `Intent::FormCancelled`
    fn open(&mut self, prefill: FormPrefill);

    fn close(&mut self);

    /// Validation failure; the form stays open
    fn show_error(&mut self, message: &str);
}
