#![forbid(unsafe_code)]

//! `mcp-scaffold` server binary.
//!
//! Resolves configuration (TOML file plus `MCP_TRANSPORT`/`PORT` environment
//! overrides), registers the sample handlers, and serves the selected MCP
//! transport until interrupted.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use mcp_scaffold::config::ServerConfig;
use mcp_scaffold::sample;
use mcp_scaffold::server::{self, AppState};
use mcp_scaffold::{AppError, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "mcp-scaffold", about = "Scaffold MCP server", version, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Optional; environment variables
    /// alone are enough to configure the server.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format)?;
    info!("mcp-scaffold server bootstrap");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args))
}

async fn run(args: Cli) -> Result<()> {
    // Fail fast on an unrecognized transport or malformed port.
    let config = Arc::new(ServerConfig::resolve(args.config.as_deref())?);
    info!(transport = %config.transport, "configuration loaded");

    let registries = sample::default_registries(&config)?;
    info!(
        tools = registries.tools.len(),
        prompts = registries.prompts.len(),
        resources = registries.resources.len(),
        "handler registries built"
    );

    let state = Arc::new(AppState::new(Arc::clone(&config), registries));

    let ct = CancellationToken::new();
    let serve_ct = ct.clone();
    let mut serve_handle = tokio::spawn(server::serve(Arc::clone(&state), serve_ct));

    info!("MCP server ready");

    tokio::select! {
        _ = shutdown_signal() => {
            info!("shutdown signal received");
            ct.cancel();
            match serve_handle.await {
                Ok(result) => result?,
                Err(err) => return Err(AppError::Mcp(format!("transport task panicked: {err}"))),
            }
        }
        joined = &mut serve_handle => {
            match joined {
                Ok(result) => result?,
                Err(err) => return Err(AppError::Mcp(format!("transport task panicked: {err}"))),
            }
        }
    }

    info!("mcp-scaffold shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(err) => {
                tracing::warn!(%err, "failed to register SIGTERM handler, using ctrl-c only");
                let _ = ctrl_c.await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = ctrl_c.await {
            tracing::error!(%err, "ctrl-c signal handler failed");
        }
    }
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt().with_env_filter(env_filter);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
