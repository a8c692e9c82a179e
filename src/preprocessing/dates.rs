//! Разбор и форматирование дат и времени

use chrono::{NaiveDate, NaiveTime};

/// Формат даты в файле истории: 3/14/2024 и 03/14/2024 одинаково валидны
pub const RECORD_DATE_FORMAT: &str = "%m/%d/%Y";

/// Время события, 24 часа
pub const EVENT_TIME_FORMAT: &str = "%H:%M";

/// Строго month/day/year: месяц и день 1-2 цифры, год ровно 4 цифры, без пробелов
pub fn parse_record_date(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return None;
    };
    let digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !digits(*month, 1, 2) || !digits(*day, 1, 2) || !digits(*year, 4, 4) {
        return None;
    }

    NaiveDate::parse_from_str(value, RECORD_DATE_FORMAT).ok()
}

pub fn format_record_date(date: NaiveDate) -> String {
    date.format(RECORD_DATE_FORMAT).to_string()
}

pub fn parse_event_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, EVENT_TIME_FORMAT).ok()
}

pub fn format_event_time(time: NaiveTime) -> String {
    time.format(EVENT_TIME_FORMAT).to_string()
}
