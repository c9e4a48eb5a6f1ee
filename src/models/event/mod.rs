// Event module
// Date-keyed calendar event and the values exchanged with the event form

use serde::{Deserialize, Serialize};

use super::date_key::DateKey;

/// Time label for events without a start time.
///
/// Sorts after every `HH:MM` value, so all-day events list last.
pub const ALL_DAY: &str = "All Day";

/// Calendar event attached to a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Store-wide unique id; empty until the event store assigns one
    pub id: String,
    pub title: String,
    /// `HH:MM` or [`ALL_DAY`]; only ever compared and displayed
    pub time: String,
    pub description: String,
}

impl Event {
    /// Create a new, not yet stored event
    ///
    /// # Arguments
    /// * `title` - Event title (required, non-empty)
    /// * `time` - `HH:MM` label; empty input becomes [`ALL_DAY`]
    /// * `description` - Free text
    ///
    /// # Examples
    /// ```
    /// use month_calendar::models::event::{Event, ALL_DAY};
    ///
    /// let event = Event::new("Dentist", "", "Bring forms").unwrap();
    /// assert_eq!(event.time, ALL_DAY);
    /// assert!(event.id.is_empty());
    /// ```
    pub fn new(
        title: impl Into<String>,
        time: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, String> {
        let event = Self {
            id: String::new(),
            title: title.into(),
            time: normalize_time(time.into()),
            description: description.into(),
        };
        event.validate()?;
        Ok(event)
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        validate_title(&self.title)
    }

    pub fn is_all_day(&self) -> bool {
        self.time == ALL_DAY
    }

    /// Time as shown in the form: blank for all-day events
    pub fn form_time(&self) -> &str {
        if self.is_all_day() {
            ""
        } else {
            &self.time
        }
    }
}

pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Event title is required!".to_string());
    }
    Ok(())
}

/// Accepts blank input or a 24-hour `HH:MM` label
pub fn validate_time_input(time: &str) -> Result<(), String> {
    let time = time.trim();
    if time.is_empty() {
        return Ok(());
    }

    let valid = match time.split_once(':') {
        Some((h, m))
            if h.len() == 2
                && m.len() == 2
                && h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) =>
        {
            matches!((h.parse::<u32>(), m.parse::<u32>()), (Ok(h), Ok(m)) if h < 24 && m < 60)
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err("Time must be HH:MM (24-hour) or left blank for all day".to_string())
    }
}

/// Blank time input stands for an all-day event
pub fn normalize_time(time: String) -> String {
    match time.trim() {
        "" => ALL_DAY.to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Values used to populate the event form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPrefill {
    pub title: String,
    /// Blank for new events and all-day events
    pub time: String,
    pub description: String,
    pub date_key: DateKey,
    /// Empty when creating
    pub id: String,
}

impl FormPrefill {
    pub fn for_new_event(date_key: DateKey) -> Self {
        Self {
            title: String::new(),
            time: String::new(),
            description: String::new(),
            date_key,
            id: String::new(),
        }
    }

    pub fn for_existing(date_key: DateKey, event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            time: event.form_time().to_string(),
            description: event.description.clone(),
            date_key,
            id: event.id.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        !self.id.is_empty()
    }

    /// Submit the form values unchanged
    pub fn into_submission(self) -> FormSubmission {
        FormSubmission {
            title: self.title,
            time: self.time,
            description: self.description,
            date_key: self.date_key,
            id: self.id,
        }
    }
}

/// Field values yielded by the event form on submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub title: String,
    pub time: String,
    pub description: String,
    pub date_key: DateKey,
    /// Empty for a new event, otherwise the id of the event being edited
    pub id: String,
}

impl FormSubmission {
    /// Validate and convert into an event carrying the submitted id
    pub fn into_event(self) -> Result<(DateKey, Event), String> {
        let mut event = Event::new(self.title, self.time, self.description)?;
        event.id = self.id;
        Ok((self.date_key, event))
    }
}
