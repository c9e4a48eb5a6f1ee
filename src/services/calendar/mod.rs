//! Calendar controller.
//! Dispatches user intents to the selection controller and the event store,
//! flushes persistence after every mutation and then refreshes the display.

use chrono::NaiveDate;

use crate::models::event::{FormPrefill, FormSubmission};
use crate::services::event_store::{EventStore, UpsertOutcome};
use crate::services::grid::GridGenerator;
use crate::services::selection::{Refresh, SelectionController};
use crate::services::storage::BlobStore;

mod intent;
mod ports;

pub use intent::Intent;
pub use ports::{
    CalendarView, DeleteConfirmation, Display, EventForm, Notice, NoticeLevel,
};
#[cfg(test)]
pub use ports::{MockDisplay, MockEventForm};

/// Orchestrates one calendar session.
///
/// Intents are handled to completion one at a time, so the event store is
/// never observed half-mutated.
pub struct CalendarController<S: BlobStore, D: Display, F: EventForm> {
    store: EventStore<S>,
    selection: SelectionController,
    today: NaiveDate,
    pending_delete: Option<DeleteConfirmation>,
    display: D,
    form: F,
}

impl<S: BlobStore, D: Display, F: EventForm> CalendarController<S, D, F> {
    /// Start on today's month with today selected and render once
    pub fn new(store: EventStore<S>, display: D, form: F, today: NaiveDate) -> Self {
        let mut controller = Self {
            store,
            selection: SelectionController::new(today),
            today,
            pending_delete: None,
            display,
            form,
        };
        controller.refresh(Refresh::Grid);
        controller
    }

    pub fn handle(&mut self, intent: Intent) {
        log::debug!("Handling intent {:?}", intent);

        match intent {
            Intent::PreviousMonth => {
                let refresh = self.selection.navigate_month(-1);
                self.refresh(refresh);
            }
            Intent::NextMonth => {
                let refresh = self.selection.navigate_month(1);
                self.refresh(refresh);
            }
            Intent::Today => {
                let refresh = self.selection.go_to_today(self.today);
                self.refresh(refresh);
            }
            Intent::DayClicked(date) => {
                let refresh = self.selection.select_date(date);
                self.refresh(refresh);
            }
            Intent::AddClicked => {
                self.form
                    .open(FormPrefill::for_new_event(self.selection.selected_key()));
            }
            Intent::EditClicked(id) => self.begin_edit(&id),
            Intent::DeleteClicked(id) => self.request_delete(&id),
            Intent::DeleteConfirmed => self.confirm_delete(),
            Intent::DeleteCancelled => {
                self.pending_delete = None;
            }
            Intent::FormSubmitted(submission) => self.submit(submission),
            Intent::FormCancelled => self.form.close(),
        }
    }

    /// Track the local date; re-renders when the day rolls over
    pub fn set_today(&mut self, today: NaiveDate) {
        if today != self.today {
            log::info!("Date changed to {}", today);
            self.today = today;
            self.refresh(Refresh::Grid);
        }
    }

    /// Current grid and selected-day listing
    pub fn view(&self) -> CalendarView {
        let selected_key = self.selection.selected_key();
        CalendarView {
            month_label: self.selection.month_label(),
            grid: GridGenerator::generate(
                self.selection.current_year(),
                self.selection.current_month0(),
                self.today,
                self.selection.selected_date(),
                &self.store,
            ),
            selected_date: self.selection.selected_date(),
            selected_label: self.selection.selected_label(),
            events: self.store.list(&selected_key),
            selected_key,
        }
    }

    fn refresh(&mut self, refresh: Refresh) {
        let view = self.view();
        self.display.render(&view, refresh);
    }

    fn begin_edit(&mut self, id: &str) {
        let date_key = self.selection.selected_key();
        match self.store.find(&date_key, id) {
            Some(event) => {
                let prefill = FormPrefill::for_existing(date_key, event);
                self.form.open(prefill);
            }
            None => log::debug!("Edit requested for unknown event {}", id),
        }
    }

    fn request_delete(&mut self, id: &str) {
        let date_key = self.selection.selected_key();
        let Some(event) = self.store.find(&date_key, id) else {
            log::debug!("Delete requested for unknown event {}", id);
            return;
        };

        let request = DeleteConfirmation {
            event_title: event.title.clone(),
            event_id: event.id.clone(),
            date_key,
        };
        self.display.request_confirmation(&request);
        self.pending_delete = Some(request);
    }

    fn confirm_delete(&mut self) {
        let Some(request) = self.pending_delete.take() else {
            log::debug!("Delete confirmed with nothing pending");
            return;
        };

        self.store.remove(&request.date_key, &request.event_id);
        self.flush();
        self.refresh(Refresh::Grid);
    }

    fn submit(&mut self, submission: FormSubmission) {
        let (date_key, event) = match submission.into_event() {
            Ok(parts) => parts,
            Err(message) => {
                log::debug!("Rejected event form: {}", message);
                self.form.show_error(&message);
                return;
            }
        };

        let outcome = self.store.upsert(&date_key, event);
        self.form.close();

        if outcome != UpsertOutcome::NotFound {
            self.flush();
        }
        self.refresh(Refresh::Grid);
    }

    /// Write the store through; failures leave the in-memory change in place
    fn flush(&mut self) {
        if let Err(e) = self.store.persist() {
            log::error!("Failed to save events: {}", e);
            self.display
                .show_message(Notice::error(format!("Failed to save events: {}", e)));
        }
    }

    pub fn store(&self) -> &EventStore<S> {
        &self.store
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn pending_delete(&self) -> Option<&DeleteConfirmation> {
        self.pending_delete.as_ref()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }
}
