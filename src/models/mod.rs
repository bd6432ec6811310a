pub mod date_range;
pub mod event;
pub mod event_type;
pub mod granularity;
pub mod summary_row;
