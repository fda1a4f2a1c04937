//! TeamHub backend binary entrypoint wiring the REST API and storage layers.

use std::{env, net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "mongo-store")]
use teamhub_back::dao::directory_store::mongodb::{MongoConfig, MongoDirectoryStore};
use teamhub_back::{
    config::AppConfig,
    dao::directory_store::{DirectoryStore, memory::MemoryDirectoryStore},
    routes,
    services::storage_supervisor,
    state::{AppState, SharedState},
};

/// Environment variable selecting the storage backend.
const STORE_ENV: &str = "TEAMHUB_STORE";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let app_state = AppState::new(config);

    spawn_degraded_watcher(app_state.clone());
    spawn_storage_supervisor(app_state.clone())?;

    let app = build_router(app_state);

    let port = env::var("PORT")
        .or_else(|_| env::var("SERVER_PORT"))
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    let service = app.into_make_service();
    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Start the storage supervisor for the backend selected through `TEAMHUB_STORE`.
fn spawn_storage_supervisor(state: SharedState) -> anyhow::Result<()> {
    let backend = env::var(STORE_ENV).unwrap_or_else(|_| "mongodb".into());

    match backend.as_str() {
        "memory" => {
            info!("using the in-process memory store; data will not survive restarts");
            tokio::spawn(storage_supervisor::run(state, || async {
                Ok(Arc::new(MemoryDirectoryStore::new()) as Arc<dyn DirectoryStore>)
            }));
            Ok(())
        }
        #[cfg(feature = "mongo-store")]
        "mongodb" => {
            let uri =
                env::var("MONGO_URI").unwrap_or_else(|_| "mongodb://localhost:27017".into());
            let db_name = env::var("MONGO_DB").ok();

            tokio::spawn(async move {
                let config = match MongoConfig::from_uri(&uri, db_name.as_deref()).await {
                    Ok(config) => config,
                    Err(err) => {
                        error!(error = %err, "invalid MongoDB configuration; staying degraded");
                        return;
                    }
                };

                storage_supervisor::run(state, move || {
                    let config = config.clone();
                    async move {
                        let store = MongoDirectoryStore::connect(config).await?;
                        Ok(Arc::new(store) as Arc<dyn DirectoryStore>)
                    }
                })
                .await;
            });
            Ok(())
        }
        other => anyhow::bail!("unsupported {STORE_ENV} value `{other}`"),
    }
}

/// Log degraded-mode transitions as the supervisor broadcasts them.
fn spawn_degraded_watcher(state: SharedState) {
    let mut watcher = state.degraded_watcher();
    tokio::spawn(async move {
        while watcher.changed().await.is_ok() {
            let degraded = *watcher.borrow_and_update();
            if degraded {
                warn!("storage unavailable; serving in degraded mode");
            } else {
                info!("storage available again");
            }
        }
    });
}

/// Build the top-level router and attach cross-cutting middleware layers.
fn build_router(state: SharedState) -> Router<()> {
    routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
