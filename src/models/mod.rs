/// Модели предсказания

pub mod accuracy;
pub mod forecasting;
pub mod scheduling;

pub use accuracy::AccuracyTracker;
pub use forecasting::{total_estimate, DurationForecaster};
pub use scheduling::get_start_time;
