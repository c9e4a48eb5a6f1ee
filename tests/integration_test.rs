// Integration tests for the calendar controller driven through intents
// with events persisted to a JSON file

mod fixtures;

use chrono::NaiveDate;
use fixtures::{dates, forms, RecordingDisplay, RecordingForm};
use month_calendar::models::date_key::DateKey;
use month_calendar::models::event::ALL_DAY;
use month_calendar::services::calendar::{CalendarController, Intent, NoticeLevel};
use month_calendar::services::event_store::EventStore;
use month_calendar::services::selection::Refresh;
use month_calendar::services::storage::{JsonFileStore, MemoryBlobStore};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

type FileController = CalendarController<JsonFileStore, RecordingDisplay, RecordingForm>;

fn controller_in(dir: &TempDir, today: NaiveDate) -> FileController {
    let store = EventStore::load(JsonFileStore::new(dir.path().join("calendar_events.json")));
    CalendarController::new(store, RecordingDisplay::default(), RecordingForm::default(), today)
}

fn add_event(controller: &mut FileController, title: &str, time: &str, description: &str) {
    let date = controller.selection().selected_date();
    controller.handle(Intent::AddClicked);
    controller.handle(Intent::FormSubmitted(forms::new_event(
        date,
        title,
        time,
        description,
    )));
}

#[test]
fn test_startup_on_leap_day() {
    let dir = TempDir::new().unwrap();
    let controller = controller_in(&dir, dates::leap_day_2024());

    let view = controller.display().last_view();
    assert_eq!(view.month_label, "February 2024");
    assert_eq!(view.selected_label, "Thursday, February 29, 2024");
    assert_eq!(view.grid.leading_blanks(), 4);
    assert_eq!(view.grid.days().count(), 29);

    let last = view.grid.days().last().unwrap();
    assert_eq!(last.date_key.as_str(), "2024-02-29");
    assert!(last.is_today);
    assert!(last.is_selected);
    assert!(view.events.is_empty());
}

#[test]
fn test_create_persists_and_reloads() {
    let dir = TempDir::new().unwrap();
    let mut controller = controller_in(&dir, dates::leap_day_2024());

    add_event(&mut controller, "Leap party", "19:30", "Bring cake");

    assert!(!controller.form().is_open);
    let view = controller.display().last_view();
    assert_eq!(view.events.len(), 1);
    assert_eq!(view.events[0].title, "Leap party");
    assert!(view.grid.days().last().unwrap().has_events);
    drop(controller);

    let reloaded = controller_in(&dir, dates::leap_day_2024());
    let events = reloaded.store().list(&DateKey::encode(2024, 1, 29));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].time, "19:30");
    assert_eq!(events[0].description, "Bring cake");
}

#[test]
fn test_blank_time_is_all_day_and_sorts_after_timed() {
    let dir = TempDir::new().unwrap();
    let mut controller = controller_in(&dir, dates::leap_day_2024());

    add_event(&mut controller, "Holiday", "", "");
    add_event(&mut controller, "Standup", "09:00", "");

    let view = controller.display().last_view();
    let titles: Vec<&str> = view.events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Standup", "Holiday"]);
    assert_eq!(view.events[1].time, ALL_DAY);

    // All-day events reopen with a blank time field
    let holiday_id = view.events[1].id.clone();
    controller.handle(Intent::EditClicked(holiday_id));
    assert_eq!(controller.form().prefill.as_ref().unwrap().time, "");
}

#[test]
fn test_edit_updates_in_place() {
    let dir = TempDir::new().unwrap();
    let mut controller = controller_in(&dir, dates::leap_day_2024());
    add_event(&mut controller, "Dentist", "08:00", "");
    let id = controller.display().last_view().events[0].id.clone();

    controller.handle(Intent::EditClicked(id.clone()));
    let prefill = controller.form().prefill.clone().unwrap();
    assert!(prefill.is_edit());
    assert_eq!(prefill.title, "Dentist");

    let mut submission = prefill.into_submission();
    submission.title = "Dentist (moved)".to_string();
    submission.time = "10:15".to_string();
    controller.handle(Intent::FormSubmitted(submission));

    let events = controller.display().last_view().events.clone();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, id);
    assert_eq!(events[0].title, "Dentist (moved)");
    assert_eq!(events[0].time, "10:15");
}

#[test]
fn test_delete_after_confirmation_drops_date() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calendar_events.json");
    let mut controller = controller_in(&dir, dates::leap_day_2024());
    add_event(&mut controller, "Only event", "", "");
    let id = controller.display().last_view().events[0].id.clone();

    controller.handle(Intent::DeleteClicked(id.clone()));
    let request = controller.display().confirmations.last().unwrap().clone();
    assert_eq!(request.event_id, id);
    assert_eq!(request.message(), "Are you sure you want to delete this event?");
    assert_eq!(controller.store().event_count(), 1);

    controller.handle(Intent::DeleteConfirmed);
    assert!(controller.display().last_view().events.is_empty());
    assert!(!controller.store().has_events(&DateKey::encode(2024, 1, 29)));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(saved, serde_json::json!({}));
}

#[test]
fn test_cancelled_delete_keeps_event() {
    let dir = TempDir::new().unwrap();
    let mut controller = controller_in(&dir, dates::leap_day_2024());
    add_event(&mut controller, "Keep me", "", "");
    let id = controller.display().last_view().events[0].id.clone();

    controller.handle(Intent::DeleteClicked(id));
    controller.handle(Intent::DeleteCancelled);
    controller.handle(Intent::DeleteConfirmed);

    assert_eq!(controller.store().event_count(), 1);
    assert!(controller.pending_delete().is_none());
}

#[test]
fn test_missing_title_keeps_form_open() {
    let dir = TempDir::new().unwrap();
    let mut controller = controller_in(&dir, dates::leap_day_2024());

    add_event(&mut controller, "   ", "12:00", "No title");

    assert!(controller.form().is_open);
    assert_eq!(controller.form().errors, vec!["Event title is required!".to_string()]);
    assert_eq!(controller.store().event_count(), 0);
    assert!(!dir.path().join("calendar_events.json").exists());
}

#[test]
fn test_navigation_across_year_keeps_selection() {
    let dir = TempDir::new().unwrap();
    let mut controller = controller_in(&dir, dates::mid_december_2024());

    controller.handle(Intent::NextMonth);
    let (view, refresh) = controller.display().renders.last().unwrap();
    assert_eq!(view.month_label, "January 2025");
    assert_eq!(*refresh, Refresh::Grid);
    assert_eq!(view.selected_date, dates::mid_december_2024());
    assert!(view.grid.days().all(|cell| !cell.is_selected));

    controller.handle(Intent::DayClicked(dates::jan_3_2025()));
    let (view, refresh) = controller.display().renders.last().unwrap();
    assert_eq!(*refresh, Refresh::Selection);
    assert_eq!(view.selected_key.as_str(), "2025-01-03");

    controller.handle(Intent::Today);
    let view = controller.display().last_view();
    assert_eq!(view.month_label, "December 2024");
    assert_eq!(view.selected_date, dates::mid_december_2024());
}

#[test]
fn test_corrupt_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("calendar_events.json"), "{ not json").unwrap();

    let controller = controller_in(&dir, dates::leap_day_2024());
    assert_eq!(controller.store().event_count(), 0);
    assert!(controller.display().notices.is_empty());
}

#[test]
fn test_day_rollover_rerenders() {
    let store = EventStore::load(MemoryBlobStore::new());
    let mut controller = CalendarController::new(
        store,
        RecordingDisplay::default(),
        RecordingForm::default(),
        dates::leap_day_2024(),
    );
    let renders = controller.display().renders.len();

    controller.set_today(dates::leap_day_2024());
    assert_eq!(controller.display().renders.len(), renders);

    let march_first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    controller.set_today(march_first);
    assert_eq!(controller.display().renders.len(), renders + 1);
    assert!(controller
        .display()
        .last_view()
        .grid
        .days()
        .all(|cell| !cell.is_today));
    assert!(controller.display().notices.iter().all(|n| n.level != NoticeLevel::Error));
}
