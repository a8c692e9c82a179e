//! Прогноз длительности задач по историческим средним

use crate::preprocessing::{round_to, TaskStats};
use crate::types::{HistoricalRecord, TaskAverage};

/// Простое среднее по всей истории, без весов и затухания
pub struct DurationForecaster {
    stats: TaskStats,
}

impl DurationForecaster {
    pub fn fit(records: &[HistoricalRecord]) -> Self {
        Self {
            stats: TaskStats::from_records(records),
        }
    }

    /// Средние в порядке запроса; неизвестная задача даёт 0.0
    pub fn predict(&self, tasks: &[String]) -> Vec<TaskAverage> {
        tasks
            .iter()
            .map(|task| TaskAverage {
                task: task.clone(),
                avg: round_to(self.stats.mean(task).unwrap_or(0.0), 2),
            })
            .collect()
    }
}

/// Суммарная оценка по уже округлённым средним
pub fn total_estimate(averages: &[TaskAverage]) -> f64 {
    averages.iter().fold(0.0, |acc, a| acc + a.avg)
}
