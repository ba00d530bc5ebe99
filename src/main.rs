use anyhow::Result;
use axum::{ServiceExt, body::Body};
use folio_core::application::articles::ArticleService;
use folio_core::config::{AppConfig, StoreConfig};
use folio_core::domain::article::ArticleStore;
use folio_core::infrastructure::{
    database,
    repositories::{InMemoryArticleStore, PostgresArticleStore, PostgrestArticleStore},
};
use folio_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let store = connect_store(config.store()).await?;
    let articles = Arc::new(ArticleService::new(store));

    let app = build_router(HttpState::new(articles));
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn connect_store(config: &StoreConfig) -> Result<Arc<dyn ArticleStore>> {
    let store: Arc<dyn ArticleStore> = match config {
        StoreConfig::Rest { url, api_key } => {
            tracing::info!(%url, "using hosted REST article store");
            Arc::new(PostgrestArticleStore::new(url, api_key.clone()))
        }
        StoreConfig::Postgres { database_url } => {
            let pool = database::init_pool(database_url).await?;
            database::run_migrations(&pool).await?;
            tracing::info!("using Postgres article store");
            Arc::new(PostgresArticleStore::new(pool))
        }
        StoreConfig::Memory => {
            tracing::warn!("using in-memory article store; data is lost on exit");
            Arc::new(InMemoryArticleStore::new())
        }
    };
    Ok(store)
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
