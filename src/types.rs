/// Типы данных предсказателя

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Одна запись истории: сколько минут заняла задача в конкретный день
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub date: NaiveDate,
    pub task: String,
    pub duration: f64, // минуты
}

/// Запись для дозаписи в историю
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskLog {
    pub task: String,
    pub duration: f64,
    /// month/day/year; без даты (или с битой датой) пишется сегодняшняя
    #[serde(default)]
    pub date: Option<String>,
}

impl TaskLog {
    pub fn new(task: impl Into<String>, duration: f64) -> Self {
        Self {
            task: task.into(),
            duration,
            date: None,
        }
    }

    pub fn on(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAverage {
    pub task: String,
    pub avg: f64, // 2 знака
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyPoint {
    #[serde(rename = "ts")]
    pub date: NaiveDate,
    pub accuracy: f64, // 3 знака, не ограничена снизу
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_duration: f64,
    pub recommended_start: String, // HH:MM
    pub task_avgs: Vec<TaskAverage>,
    pub accuracy: Vec<AccuracyPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub event_time: String,
    #[serde(default)]
    pub selected_tasks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AveragesRequest {
    #[serde(default)]
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRequest {
    pub logs: Vec<TaskLog>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogResponse {
    pub appended: usize,
}
