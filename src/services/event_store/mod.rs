//! Date-keyed event store.
//! Owns the in-memory mapping from [`DateKey`] to events, the event CRUD
//! operations, and synchronization with the backing [`BlobStore`].

use std::collections::BTreeMap;

use crate::models::date_key::DateKey;
use crate::models::event::Event;
use crate::services::storage::{BlobStore, StorageError};

mod id;

pub use id::IdGenerator;

/// Persisted shape: DateKey -> events in insertion order
pub type EventMap = BTreeMap<DateKey, Vec<Event>>;

/// Result of [`EventStore::upsert`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new event was appended under this id
    Created(String),
    /// The event with this id was replaced in place
    Updated(String),
    /// The id was not found under the given date; nothing changed
    NotFound,
}

/// In-memory event mapping synchronized with a blob store.
///
/// A date present in the mapping always has at least one event.
pub struct EventStore<S: BlobStore> {
    events: EventMap,
    ids: IdGenerator,
    backend: S,
}

impl<S: BlobStore> EventStore<S> {
    /// Load the mapping from `backend`.
    ///
    /// An absent or unreadable blob yields an empty store; read failures are
    /// logged and never surfaced.
    pub fn load(backend: S) -> Self {
        let events = match backend.get() {
            Ok(Some(value)) => match serde_json::from_value::<EventMap>(value) {
                Ok(events) => events,
                Err(e) => {
                    log::warn!("Stored events are not a valid event map, starting empty: {}", e);
                    EventMap::new()
                }
            },
            Ok(None) => {
                log::info!("No stored events found, starting empty");
                EventMap::new()
            }
            Err(e) => {
                log::warn!("Failed to read stored events, starting empty: {}", e);
                EventMap::new()
            }
        };

        Self::from_events(events, backend)
    }

    fn from_events(mut events: EventMap, backend: S) -> Self {
        // Older data may contain empty dates
        events.retain(|_, day| !day.is_empty());

        let ids = IdGenerator::seeded(events.values().flatten().map(|e| e.id.as_str()));

        log::info!(
            "Loaded {} events across {} dates",
            events.values().map(Vec::len).sum::<usize>(),
            events.len()
        );

        Self {
            events,
            ids,
            backend,
        }
    }

    /// Events for `date_key`, sorted by time label.
    ///
    /// `HH:MM` labels sort chronologically and "All Day" sorts after them.
    pub fn list(&self, date_key: &DateKey) -> Vec<Event> {
        let mut events = self.events.get(date_key).cloned().unwrap_or_default();
        events.sort_by(|a, b| a.time.cmp(&b.time));
        events
    }

    pub fn find(&self, date_key: &DateKey, id: &str) -> Option<&Event> {
        self.events
            .get(date_key)
            .and_then(|day| day.iter().find(|event| event.id == id))
    }

    pub fn has_events(&self, date_key: &DateKey) -> bool {
        self.events.get(date_key).is_some_and(|day| !day.is_empty())
    }

    /// Create or replace an event under `date_key`.
    ///
    /// An empty `event.id` creates a new event with a fresh id. A non-empty id
    /// replaces the matching event in place; an unknown id is a no-op.
    pub fn upsert(&mut self, date_key: &DateKey, mut event: Event) -> UpsertOutcome {
        if event.id.is_empty() {
            event.id = self.ids.next_id();
            let id = event.id.clone();
            self.events.entry(date_key.clone()).or_default().push(event);
            log::debug!("Created event {} on {}", id, date_key);
            return UpsertOutcome::Created(id);
        }

        let existing = self
            .events
            .get_mut(date_key)
            .and_then(|day| day.iter_mut().find(|existing| existing.id == event.id));

        match existing {
            Some(existing) => {
                let id = event.id.clone();
                *existing = event;
                log::debug!("Updated event {} on {}", id, date_key);
                UpsertOutcome::Updated(id)
            }
            None => {
                log::debug!("No event {} on {}, ignoring update", event.id, date_key);
                UpsertOutcome::NotFound
            }
        }
    }

    /// Remove an event; the date disappears once its last event is removed.
    ///
    /// Returns `false` when nothing matched.
    pub fn remove(&mut self, date_key: &DateKey, id: &str) -> bool {
        let Some(day) = self.events.get_mut(date_key) else {
            log::debug!("No events on {}, ignoring delete of {}", date_key, id);
            return false;
        };

        let before = day.len();
        day.retain(|event| event.id != id);
        let removed = day.len() != before;

        if day.is_empty() {
            self.events.remove(date_key);
        }

        if removed {
            log::debug!("Removed event {} from {}", id, date_key);
        } else {
            log::debug!("No event {} on {}, ignoring delete", id, date_key);
        }
        removed
    }

    /// Replace the stored blob with the full current mapping.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        let value = serde_json::to_value(&self.events)?;
        self.backend.set(value)?;
        log::debug!("Persisted {} dates", self.events.len());
        Ok(())
    }

    pub fn events(&self) -> &EventMap {
        &self.events
    }

    pub fn date_count(&self) -> usize {
        self.events.len()
    }

    pub fn event_count(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }
}
