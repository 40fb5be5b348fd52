#![forbid(unsafe_code)]

use pentrack_server::{
    build_router, validate_startup_config_contract, ApiConfig, AppState, Error, MemoryStore,
};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_duration_ms(name: &str, default_ms: u64) -> Duration {
    Duration::from_millis(env_u64(name, default_ms))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("PENTRACK_LOG_JSON", true) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> pentrack_server::Result<()> {
    init_tracing();

    let bind_addr = env::var("PENTRACK_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let api = ApiConfig {
        max_body_bytes: env_usize("PENTRACK_MAX_BODY_BYTES", 16 * 1024),
        shutdown_drain: env_duration_ms("PENTRACK_SHUTDOWN_DRAIN_MS", 3000),
    };
    validate_startup_config_contract(&api).map_err(Error::Config)?;
    let shutdown_drain = api.shutdown_drain;

    let state = AppState::with_config(Arc::new(MemoryStore::seeded()), api);
    let app = build_router(state);

    let addr: std::net::SocketAddr = bind_addr.parse().map_err(|source| Error::BindAddr {
        addr: bind_addr.clone(),
        source,
    })?;
    let listener = TcpListener::bind(addr).await?;
    info!("pentrack-server listening on {bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            info!("shutdown signal received; draining in-flight requests");
            tokio::time::sleep(shutdown_drain).await;
        })
        .await?;
    Ok(())
}
