//! Jobify Web - shell server binary
//!
//! Serves the HTML shell and static metadata for the Jobify console.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use jobify_web::server;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;

#[derive(Parser, Debug)]
#[command(name = "jobify-web")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bind address for the HTTP server (e.g., "0.0.0.0:3000")
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    bind: String,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: LogLevel,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(val: LogLevel) -> Self {
        match val {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    fmt().with_max_level(args.log_level).init();

    let addr: SocketAddr = args
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address: {}", args.bind))?;

    info!("Bind address: {}", addr);
    info!("Request timeout: {}s", args.timeout);

    server::run_with_config(addr, args.timeout)
        .await
        .context("Failed to start server")?;

    Ok(())
}
