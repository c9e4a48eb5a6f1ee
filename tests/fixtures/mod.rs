// Test fixtures - reusable test data
// Provides consistent dates, events and UI fakes across test files

#![allow(dead_code)]

use chrono::NaiveDate;
use month_calendar::models::event::{FormPrefill, FormSubmission};
use month_calendar::services::calendar::{
    CalendarView, DeleteConfirmation, Display, EventForm, Notice,
};
use month_calendar::services::selection::Refresh;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Dec 15, 2024
    pub fn mid_december_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 15).unwrap()
    }

    /// Jan 3, 2025
    pub fn jan_3_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()
    }
}

/// Form values as a user would type them
pub mod forms {
    use month_calendar::models::date_key::DateKey;

    use super::*;

    pub fn new_event(date: NaiveDate, title: &str, time: &str, description: &str) -> FormSubmission {
        FormSubmission {
            title: title.to_string(),
            time: time.to_string(),
            description: description.to_string(),
            date_key: DateKey::from_date(date),
            id: String::new(),
        }
    }
}

/// Display that keeps everything it was asked to show
#[derive(Default)]
pub struct RecordingDisplay {
    pub renders: Vec<(CalendarView, Refresh)>,
    pub notices: Vec<Notice>,
    pub confirmations: Vec<DeleteConfirmation>,
}

impl RecordingDisplay {
    pub fn last_view(&self) -> &CalendarView {
        &self.renders.last().expect("nothing rendered").0
    }
}

impl Display for RecordingDisplay {
    fn render(&mut self, view: &CalendarView, refresh: Refresh) {
        self.renders.push((view.clone(), refresh));
    }

    fn show_message(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn request_confirmation(&mut self, request: &DeleteConfirmation) {
        self.confirmations.push(request.clone());
    }
}

/// Event form that remembers whether it is open and the last prefill
#[derive(Default)]
pub struct RecordingForm {
    pub prefill: Option<FormPrefill>,
    pub is_open: bool,
    pub errors: Vec<String>,
}

impl EventForm for RecordingForm {
    fn open(&mut self, prefill: FormPrefill) {
        self.prefill = Some(prefill);
        self.is_open = true;
    }

    fn close(&mut self) {
        self.is_open = false;
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
