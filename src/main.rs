//! Tendency Calculator server.
//!
//! Loads configuration, loads the model once, then serves the questionnaire
//! until Ctrl+C or SIGTERM.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tendency_calculator::adapters::http::{app_router, AssessmentAppState};
use tendency_calculator::adapters::FsModelSource;
use tendency_calculator::application::initialize_model;
use tendency_calculator::config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    init_tracing(&config);

    let source = FsModelSource::new(&config.model.artifact_path, &config.model.metadata_path);
    let handle = match initialize_model(&source, &config.model.positive_class).await {
        Ok(handle) => handle,
        Err(e) => {
            error!("Model initialization failed: {}", e);
            eprintln!(
                "Erro ao carregar o sistema. Verifique se os arquivos do modelo estão presentes: {}",
                e
            );
            return ExitCode::FAILURE;
        }
    };
    info!(model = %handle.metadata.model_name, "Model loaded");

    let app = app_router(AssessmentAppState::from_handle(&handle), &config.server);

    // validate() already checked the address
    let addr = match config.server.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };
    info!("Server is running on http://{}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Server stopped");
    ExitCode::SUCCESS
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
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

    info!("Shutdown signal received");
}
