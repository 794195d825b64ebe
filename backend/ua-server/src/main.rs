use ua_server::error::Result as ServerErrorResult;
use ua_server::{AppState, RequestLogger, build_router, logger};

use ua_db::UserRepository;

use std::process::ExitCode;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal: {}", e);
            eprintln!("ua-server: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ServerErrorResult<()> {
    // A missing .env is not an error
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("ua-server: ignoring unreadable .env file: {e}");
    }

    // Load and validate configuration
    let config = ua_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.logging.file_path();
    if let Some(parent) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    let logger = logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ua-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = ua_db::connect(&config.database).await?;

    let app_state = AppState::new(
        Arc::new(UserRepository::new(pool.clone())),
        config.handler.timeout(),
        RequestLogger::new(config.logging.slow_request_threshold()),
    );

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Closing database pool");
    pool.close().await;

    info!("Shutdown complete");
    logger.shutdown();

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown");
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
