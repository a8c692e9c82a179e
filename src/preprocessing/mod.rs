/// Модуль предобработки данных

pub mod aggregation;
pub mod dates;

pub use aggregation::{group_by_date, round_to, DayGroup, TaskStats};
pub use dates::{format_event_time, format_record_date, parse_event_time, parse_record_date};
