//! Selection controller.
//!
//! Tracks the displayed month and the selected date. The selection is a full
//! date and survives navigation: moving to another month never clears it.

use chrono::{Datelike, NaiveDate};

use crate::models::date_key::DateKey;
use crate::utils::date::{first_of_month, is_same_month, shift_month};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// How much of the display a selection change invalidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Only the selection highlight and the event list changed
    Selection,
    /// The displayed month changed; regenerate the whole grid
    Grid,
}

/// Calendar view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionController {
    current_year: i32,
    current_month0: u32,
    selected_date: NaiveDate,
}

impl SelectionController {
    /// Show today's month with today selected
    pub fn new(today: NaiveDate) -> Self {
        Self {
            current_year: today.year(),
            current_month0: today.month0(),
            selected_date: today,
        }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Displayed month, 0-11
    pub fn current_month0(&self) -> u32 {
        self.current_month0
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn selected_key(&self) -> DateKey {
        DateKey::from_date(self.selected_date)
    }

    /// Select `date`, following it to its month if it is not displayed
    pub fn select_date(&mut self, date: NaiveDate) -> Refresh {
        self.selected_date = date;

        if is_same_month(date, self.current_year, self.current_month0) {
            Refresh::Selection
        } else {
            self.current_year = date.year();
            self.current_month0 = date.month0();
            Refresh::Grid
        }
    }

    /// Move the displayed month by `delta`; the selection is left alone
    pub fn navigate_month(&mut self, delta: i32) -> Refresh {
        let (year, month0) = shift_month(self.current_year, self.current_month0, delta);

        // Stay put rather than display a month chrono cannot represent
        if first_of_month(year, month0).is_some() {
            self.current_year = year;
            self.current_month0 = month0;
        } else {
            log::warn!("Refusing to navigate outside the supported date range");
        }
        Refresh::Grid
    }

    pub fn go_to_today(&mut self, today: NaiveDate) -> Refresh {
        self.select_date(today)
    }

    /// e.g. "February 2024"
    pub fn month_label(&self) -> String {
        format!(
            "{} {}",
            MONTH_NAMES[self.current_month0 as usize % 12],
            self.current_year
        )
    }

    /// e.g. "Thursday, February 29, 2024"
    pub fn selected_label(&self) -> String {
        self.selected_date.format("%A, %B %-d, %Y").to_string()
    }
}
