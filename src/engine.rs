//! Движок предсказаний: загрузка истории, средние, ряд точности, время начала
//!
//! Кэша нет: каждый запрос перечитывает историю и пересчитывает всё заново.

use std::path::PathBuf;

use crate::error::Result;
use crate::models::{get_start_time, total_estimate, AccuracyTracker, DurationForecaster};
use crate::preprocessing::round_to;
use crate::storage::TaskLogStore;
use crate::types::{AccuracyPoint, HistoricalRecord, PredictionResult, TaskAverage, TaskLog};

pub struct PredictionEngine {
    store: TaskLogStore,
}

impl PredictionEngine {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            store: TaskLogStore::new(data_path),
        }
    }

    pub fn store(&self) -> &TaskLogStore {
        &self.store
    }

    pub fn load_data(&self) -> Result<Vec<HistoricalRecord>> {
        self.store.load_data()
    }

    pub fn append_records(&self, logs: &[TaskLog]) -> Result<usize> {
        self.store.append_records(logs)
    }

    pub fn predict_duration(&self, tasks: &[String]) -> Result<Vec<TaskAverage>> {
        let records = self.store.load_data()?;
        Ok(DurationForecaster::fit(&records).predict(tasks))
    }

    pub fn compute_accuracy_series(&self) -> Result<Vec<AccuracyPoint>> {
        let records = self.store.load_data()?;
        Ok(AccuracyTracker::series(&records))
    }

    pub fn get_prediction(
        &self,
        event_time: &str,
        selected_tasks: &[String],
    ) -> Result<PredictionResult> {
        let task_avgs = self.predict_duration(selected_tasks)?;
        let total_est = total_estimate(&task_avgs);
        let recommended_start = get_start_time(event_time, total_est);
        let accuracy = self.compute_accuracy_series()?;

        tracing::info!(
            "Prediction for {} tasks: {:.2} min, start at {}",
            selected_tasks.len(),
            total_est,
            recommended_start
        );

        Ok(PredictionResult {
            predicted_duration: round_to(total_est, 2),
            recommended_start,
            task_avgs,
            accuracy,
        })
    }
}
