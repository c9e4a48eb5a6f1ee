use chrono::NaiveDate;

use crate::models::event::FormSubmission;

/// User-driven intents raised by the display and the event form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    PreviousMonth,
    NextMonth,
    /// Jump back to today's month and select today
    Today,
    DayClicked(NaiveDate),
    /// Open the form for a new event on the selected date
    AddClicked,
    EditClicked(String),
    /// Ask for confirmation before deleting
    DeleteClicked(String),
    DeleteConfirmed,
    DeleteCancelled,
    FormSubmitted(FormSubmission),
    FormCancelled,
}
