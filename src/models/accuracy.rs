//! Ряд точности: насколько хорошо мы предсказали бы каждый день,
//! зная только предыдущие дни

use crate::preprocessing::{group_by_date, round_to, TaskStats};
use crate::types::{AccuracyPoint, HistoricalRecord};

pub struct AccuracyTracker;

impl AccuracyTracker {
    pub fn series(records: &[HistoricalRecord]) -> Vec<AccuracyPoint> {
        let mut running = TaskStats::new();
        let mut series = Vec::new();

        for day in group_by_date(records) {
            // Прогноз дня строится только по предыдущим дням
            let predicted_total: f64 = day
                .entries
                .iter()
                .map(|(task, _)| running.mean(task).unwrap_or(0.0))
                .sum();
            let actual_total = day.actual_total();

            let accuracy = if running.is_empty() {
                0.0
            } else {
                day_accuracy(predicted_total, actual_total)
            };

            series.push(AccuracyPoint {
                date: day.date,
                accuracy,
            });

            for (task, duration) in &day.entries {
                running.add(task, *duration);
            }
        }

        series
    }
}

/// 1 - |pred - actual| / actual; ноль при нулевом факте
fn day_accuracy(predicted: f64, actual: f64) -> f64 {
    if actual > 0.0 {
        let diff = (predicted - actual).abs();
        round_to(1.0 - diff / actual, 3)
    } else {
        0.0
    }
}
