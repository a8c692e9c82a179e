//! Агрегация истории: суммы по задачам и группировка по дням

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::types::HistoricalRecord;

/// Накопленные сумма и количество длительностей по каждой задаче
#[derive(Debug, Default, Clone)]
pub struct TaskStats {
    totals: HashMap<String, (f64, u32)>, // (sum, count)
}

impl TaskStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[HistoricalRecord]) -> Self {
        let mut stats = Self::new();
        for record in records {
            stats.add(&record.task, record.duration);
        }
        stats
    }

    pub fn add(&mut self, task: &str, duration: f64) {
        let (sum, count) = self.totals.entry(task.to_string()).or_insert((0.0, 0));
        *sum += duration;
        *count += 1;
    }

    /// Среднее по задаче; None, если задача ещё не встречалась
    pub fn mean(&self, task: &str) -> Option<f64> {
        self.totals
            .get(task)
            .filter(|(_, count)| *count > 0)
            .map(|(sum, count)| sum / *count as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Записи одного дня в порядке загрузки
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub entries: Vec<(String, f64)>,
}

impl DayGroup {
    pub fn actual_total(&self) -> f64 {
        self.entries.iter().map(|(_, duration)| duration).sum()
    }
}

/// Группировка по календарному дню, дни по возрастанию
pub fn group_by_date(records: &[HistoricalRecord]) -> Vec<DayGroup> {
    let mut by_date: BTreeMap<NaiveDate, Vec<(String, f64)>> = BTreeMap::new();
    for record in records {
        by_date
            .entry(record.date)
            .or_default()
            .push((record.task.clone(), record.duration));
    }

    by_date
        .into_iter()
        .map(|(date, entries)| DayGroup { date, entries })
        .collect()
}

/// Округление до `decimals` знаков (половина — от нуля, как f64::round)
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
