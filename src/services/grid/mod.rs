//! Month grid generation.
//!
//! Produces the Sunday-first cell layout of a month: leading blank cells up to
//! the weekday of the 1st, then one annotated cell per day. The grid is
//! stateless and cheap, so it is rebuilt on every navigation, selection and
//! mutation instead of being patched.

use chrono::NaiveDate;

use crate::models::date_key::DateKey;
use crate::services::event_store::EventStore;
use crate::services::storage::BlobStore;
use crate::utils::date::{days_in_month, first_weekday};

/// A day cell of the month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub date_key: DateKey,
    pub is_today: bool,
    pub is_selected: bool,
    pub has_events: bool,
}

/// One grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellDescriptor {
    /// Padding before the first day of the month
    Empty,
    Day(DayCell),
}

impl CellDescriptor {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            CellDescriptor::Empty => None,
            CellDescriptor::Day(cell) => Some(cell),
        }
    }
}

/// Laid-out month, consumed once per render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month0: u32,
    pub cells: Vec<CellDescriptor>,
}

impl MonthGrid {
    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| matches!(cell, CellDescriptor::Empty))
            .count()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(CellDescriptor::as_day)
    }

    /// Cells split into Sunday-first weeks; the last week may be short
    pub fn weeks(&self) -> impl Iterator<Item = &[CellDescriptor]> {
        self.cells.chunks(7)
    }
}

pub struct GridGenerator;

impl GridGenerator {
    /// Build the grid for (`year`, `month0`).
    ///
    /// Returns an empty grid for a month chrono cannot represent.
    pub fn generate<S: BlobStore>(
        year: i32,
        month0: u32,
        today: NaiveDate,
        selected_date: NaiveDate,
        store: &EventStore<S>,
    ) -> MonthGrid {
        let leading = first_weekday(year, month0) as usize;
        let day_count = days_in_month(year, month0);
        let mut cells = Vec::with_capacity(leading + day_count as usize);

        if day_count > 0 {
            cells.resize(leading, CellDescriptor::Empty);
        }

        for day in 1..=day_count {
            let Some(date) = NaiveDate::from_ymd_opt(year, month0 + 1, day) else {
                continue;
            };
            let date_key = DateKey::encode(year, month0, day);
            cells.push(CellDescriptor::Day(DayCell {
                day,
                date,
                is_today: date == today,
                is_selected: date == selected_date,
                has_events: store.has_events(&date_key),
                date_key,
            }));
        }

        MonthGrid {
            year,
            month0,
            cells,
        }
    }
}
