//! Рекомендуемое время начала

use chrono::Duration;

use crate::preprocessing::{format_event_time, parse_event_time};

/// Время события минус `total_minutes`, с переходом через полночь.
/// Нераспознанное время возвращается как есть.
pub fn get_start_time(event_time: &str, total_minutes: f64) -> String {
    let Some(event) = parse_event_time(event_time) else {
        return event_time.to_string();
    };
    if !total_minutes.is_finite() {
        return event_time.to_string();
    }

    // Дробные минуты считаем с точностью до микросекунды, секунды отбрасываются при выводе
    let offset = Duration::microseconds((total_minutes * 60_000_000.0).round() as i64);
    let (start, _) = event.overflowing_sub_signed(offset);

    format_event_time(start)
}
