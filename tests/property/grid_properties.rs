// Property-based tests for month grid generation and date keys
// Checks layout invariants over arbitrary months and selections

use chrono::{Datelike, NaiveDate};
use month_calendar::models::date_key::DateKey;
use month_calendar::services::event_store::EventStore;
use month_calendar::services::grid::{CellDescriptor, GridGenerator};
use month_calendar::services::storage::MemoryBlobStore;
use month_calendar::utils::date::days_in_month;
use proptest::prelude::*;

fn empty_store() -> EventStore<MemoryBlobStore> {
    EventStore::load(MemoryBlobStore::new())
}

proptest! {
    /// Property: blanks then one cell per day, numbered 1..=N in order
    #[test]
    fn prop_grid_layout_matches_calendar(
        year in 1900..2200i32,
        month0 in 0..12u32,
    ) {
        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap();
        let grid = GridGenerator::generate(year, month0, first, first, &empty_store());
        let day_count = days_in_month(year, month0) as usize;

        prop_assert!(grid.leading_blanks() <= 6);
        prop_assert_eq!(grid.leading_blanks(), first.weekday().num_days_from_sunday() as usize);
        prop_assert_eq!(grid.cells.len(), grid.leading_blanks() + day_count);
        prop_assert!((28..=31).contains(&day_count));

        for (index, cell) in grid.days().enumerate() {
            prop_assert_eq!(cell.day as usize, index + 1);
            prop_assert_eq!(cell.date_key.clone(), DateKey::encode(year, month0, cell.day));
        }
        prop_assert!(grid.cells[..grid.leading_blanks()]
            .iter()
            .all(|cell| *cell == CellDescriptor::Empty));
    }

    /// Property: exactly one selected cell when the selection is in the month
    #[test]
    fn prop_single_selected_cell(
        year in 1970..2100i32,
        month0 in 0..12u32,
        day in 1..=28u32,
    ) {
        let selected = NaiveDate::from_ymd_opt(year, month0 + 1, day).unwrap();
        let today = NaiveDate::from_ymd_opt(1969, 7, 20).unwrap();
        let grid = GridGenerator::generate(year, month0, today, selected, &empty_store());

        prop_assert_eq!(grid.days().filter(|cell| cell.is_selected).count(), 1);
        prop_assert_eq!(grid.days().filter(|cell| cell.is_today).count(), 0);
    }

    /// Property: distinct dates never share a key
    #[test]
    fn prop_date_keys_are_unique(
        a in 0..200_000i64,
        b in 0..200_000i64,
    ) {
        let epoch = NaiveDate::from_ymd_opt(1800, 1, 1).unwrap();
        let first = epoch + chrono::Duration::days(a);
        let second = epoch + chrono::Duration::days(b);

        prop_assert_eq!(
            DateKey::from_date(first) == DateKey::from_date(second),
            first == second
        );
    }
}
