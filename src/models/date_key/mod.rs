// DateKey module
// Canonical YYYY-MM-DD key indexing the event store

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical `YYYY-MM-DD` identifier of a calendar day.
///
/// Two dates are the same entity in the event store iff their keys are equal.
/// Keys are only compared and looked up, never decomposed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Encode a (year, 0-based month, day) triple.
    ///
    /// # Examples
    /// ```
    /// use month_calendar::models::date_key::DateKey;
    ///
    /// assert_eq!(DateKey::encode(2024, 1, 9).as_str(), "2024-02-09");
    /// ```
    pub fn encode(year: i32, month0: u32, day: u32) -> Self {
        Self(format!("{}-{:02}-{:02}", year, month0 + 1, day))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::encode(date.year(), date.month0(), date.day())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
