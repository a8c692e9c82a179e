//! Конфигурация сервиса
//!
//! Переменные окружения:
//! - `TASK_PREDICTOR_DATA_PATH` — путь к CSV с историей (по умолчанию `data/task_data.csv`)
//! - `TASK_PREDICTOR_ADDR` — адрес сервера (по умолчанию `0.0.0.0:8000`)

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DATA_PATH_ENV: &str = "TASK_PREDICTOR_DATA_PATH";
pub const ADDR_ENV: &str = "TASK_PREDICTOR_ADDR";

#[derive(Debug, Clone, PartialEq)]
pub struct PredictorConfig {
    pub data_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data").join("task_data.csv"),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}

impl PredictorConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(DATA_PATH_ENV) {
            if path.trim().is_empty() {
                return Err(ConfigError::Empty(DATA_PATH_ENV));
            }
            config.data_path = PathBuf::from(path);
        }

        if let Some(addr) = lookup(ADDR_ENV) {
            config.bind_addr = addr
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidAddr { value: addr.clone(), source })?;
        }

        Ok(config)
    }
}
