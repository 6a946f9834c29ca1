//! Mock bill.com API server binary.
//!
//! Starts the mock on `0.0.0.0` and serves until interrupted.

use std::env;
use std::process::ExitCode;

use billmock::cli::Cli;
use billmock::MockServer;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let server = MockServer::new("0.0.0.0", cli.port);
    if let Err(err) = server.start().await {
        error!(error = %err, "failed to start mock server");
        return ExitCode::FAILURE;
    }
    info!("mock bill.com server at http://0.0.0.0:{}/api/v2", cli.port);

    shutdown_signal().await;
    info!("termination signal received, shutting down");
    server.shutdown().await;

    ExitCode::SUCCESS
}

/// Resolve on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to install ctrl-c handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to install SIGTERM handler");
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
