//! Task Predictor - оценка длительности задач по истории и время начала

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod preprocessing;
pub mod storage;
pub mod types;

pub use config::PredictorConfig;
pub use engine::PredictionEngine;
pub use error::{ConfigError, PredictorError, Result};
pub use storage::TaskLogStore;
pub use types::*;
