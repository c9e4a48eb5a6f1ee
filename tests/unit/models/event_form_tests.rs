// Unit tests for event form input handling
// Covers time validation, all-day normalization and form round trips

use month_calendar::models::date_key::DateKey;
use month_calendar::models::event::{
    normalize_time, validate_time_input, validate_title, Event, FormPrefill, ALL_DAY,
};
use test_case::test_case;

#[test_case("" ; "blank")]
#[test_case("   " ; "whitespace")]
#[test_case("00:00" ; "midnight")]
#[test_case("09:30" ; "morning")]
#[test_case(" 23:59 " ; "padded")]
fn test_time_input_accepted(input: &str) {
    assert!(validate_time_input(input).is_ok());
}

#[test_case("9:30" ; "single digit hour")]
#[test_case("24:00" ; "hour out of range")]
#[test_case("12:60" ; "minute out of range")]
#[test_case("+1:30" ; "sign")]
#[test_case("noon" ; "words")]
#[test_case("1230" ; "no separator")]
fn test_time_input_rejected(input: &str) {
    assert_eq!(
        validate_time_input(input),
        Err("Time must be HH:MM (24-hour) or left blank for all day".to_string())
    );
}

#[test_case("", ALL_DAY ; "blank becomes all day")]
#[test_case("  ", ALL_DAY ; "whitespace becomes all day")]
#[test_case(" 07:45", "07:45" ; "trimmed")]
fn test_normalize_time(input: &str, expected: &str) {
    assert_eq!(normalize_time(input.to_string()), expected);
}

#[test]
fn test_title_required() {
    assert_eq!(
        validate_title(" \t"),
        Err("Event title is required!".to_string())
    );
    assert!(validate_title("Gym").is_ok());
}

#[test]
fn test_existing_all_day_event_round_trips_through_form() {
    let key = DateKey::encode(2025, 6, 4);
    let mut event = Event::new("Parade", "", "Main street").unwrap();
    event.id = "1720051200000".to_string();

    let prefill = FormPrefill::for_existing(key.clone(), &event);
    assert_eq!(prefill.time, "");
    assert!(prefill.is_edit());

    let (date_key, resubmitted) = prefill.into_submission().into_event().unwrap();
    assert_eq!(date_key, key);
    assert_eq!(resubmitted, event);
}
