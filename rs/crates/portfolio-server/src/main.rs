use std::sync::Arc;

use portfolio_server::{router, AppState, ServerConfig, TracingSink};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[portfolio-server] {}", e);
            std::process::exit(2);
        }
    };

    init_tracing(config.log_json);

    let addr = config.bind_addr();
    let destination = config.destination.clone();
    let state = Arc::new(AppState::new(config, Arc::new(TracingSink)));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!(%addr, version = env!("CARGO_PKG_VERSION"), "portfolio-server listening");
    info!(%destination, "contact submissions are logged, not emailed");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .expect("server error");

    info!("portfolio-server stopped");
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        fmt.json().init();
    } else {
        fmt.compact().init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = tokio::signal::ctrl_c() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
