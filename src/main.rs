#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # math-api
//!
//! Minimal HTTP service exposing basic arithmetic as JSON endpoints, meant for
//! demos, tutorials and smoke-test backends.
//!
//! ## API surface
//!
//! | Method | Path            | Body                 | Description                  |
//! |--------|-----------------|----------------------|------------------------------|
//! | GET    | `/`             | none                 | Welcome message              |
//! | GET    | `/api/health`   | none                 | Liveness probe               |
//! | POST   | `/add`          | `{"a": .., "b": ..}` | `a + b`                      |
//! | POST   | `/multiply`     | `{"a": .., "b": ..}` | `a * b`                      |
//! | POST   | `/subtract`     | `{"a": .., "b": ..}` | `a - b`                      |
//! | POST   | `/divide`       | `{"a": .., "b": ..}` | `a / b` (real)               |
//! | POST   | `/exponentiate` | `{"a": .., "b": ..}` | `a ^ b`                      |
//! | POST   | `/average`      | `{"numbers": [..]}`  | Arithmetic mean              |
//! | POST   | `/factorial`    | `{"a": .., "b": ..}` | `a!` (`b` ignored)           |
//! | POST   | `/new_function` | `{"a": .., "b": ..}` | Placeholder, `a - b`         |
//!
//! Every arithmetic route answers `{"result": ...}`.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};

use math_api::{routes, AppState, Config};

/// Minimal arithmetic HTTP service.
#[derive(Parser)]
#[command(name = "math-api", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Path to TOML config file.
    #[arg(long, global = true)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default when no subcommand given).
    Serve,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(cli.config.as_deref()).await,
    }
}

async fn run_server(config_path: Option<&str>) -> ExitCode {
    let config = match Config::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            // Tracing is not up yet.
            eprintln!("math-api: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.level.clone());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    info!("math-api v{} starting", env!("CARGO_PKG_VERSION"));
    info!("Listening on {}", config.server.listen);

    let listener = match TcpListener::bind(&config.server.listen).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {e}", config.server.listen);
            return ExitCode::FAILURE;
        }
    };

    let app = routes::router(AppState::new(config));

    info!("Server ready");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        return ExitCode::FAILURE;
    }

    info!("Goodbye");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("Received SIGINT"),
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                }
            }
            Err(e) => {
                error!("Failed to register SIGTERM handler: {e}");
                ctrl_c.await.ok();
                info!("Received SIGINT");
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received SIGINT");
    }
}
