mod event_list;
mod month_view;
mod palette;

pub use event_list::EventListView;
pub use month_view::MonthView;
