mod analyzer;
mod api;
mod collector;
mod middleware;
mod scheduler;

use std::sync::Arc;

use stylepulse_sentiment::LexiconModel;
use stylepulse_twitter::TwitterClient;
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    scheduler::Pipeline,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = stylepulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(env = %config.env, bind_addr = %config.bind_addr, "starting stylepulse");

    let pool_config = stylepulse_db::PoolConfig::from_app_config(&config);
    let pool = stylepulse_db::connect_pool(&config.database_url, pool_config).await?;
    let applied = stylepulse_db::run_migrations(&pool).await?;
    tracing::info!(applied, "database migrations up to date");

    let twitter = TwitterClient::new(
        &config.twitter,
        &config.twitter_api_base_url,
        config.twitter_timeout_secs,
    )?;

    let state = AppState {
        pool: pool.clone(),
        twitter: Arc::new(twitter),
        model: Arc::new(LexiconModel),
    };

    let pipeline = Pipeline::new(state.clone());
    pipeline.run_exclusive().await;
    let mut scheduler =
        scheduler::build_scheduler(pipeline, config.collect_interval_secs).await?;

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Err(e) = scheduler.shutdown().await {
        tracing::warn!(error = %e, "scheduler did not shut down cleanly");
    }
    pool.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
