/// API сервер предсказателя длительности задач

use anyhow::Context;

use task_predictor::{api, PredictionEngine, PredictorConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Инициализация логирования
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = PredictorConfig::from_env().context("Failed to load configuration")?;
    tracing::info!("Task history at {}", config.data_path.display());

    let app = api::router(PredictionEngine::new(config.data_path.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
