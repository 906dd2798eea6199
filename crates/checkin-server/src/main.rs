//! Check-in JSON-RPC Server
//!
//! Serves the guided wellness check-in API over newline-delimited
//! JSON-RPC 2.0.
//!
//! # Transport
//!
//! - stdio: Standard input/output (default)
//! - tcp: TCP socket transport for networked deployments
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (stdio transport)
//! checkin-server
//!
//! # Run with custom config
//! checkin-server --config /path/to/config.toml
//!
//! # Run with TCP transport on a custom port
//! checkin-server --transport tcp --port 4000
//!
//! # Environment variable override (used if CLI not specified)
//! CHECKIN_TRANSPORT=tcp checkin-server
//!
//! # Run in debug mode
//! RUST_LOG=debug checkin-server
//! ```
//!
//! # Argument priority
//!
//! CLI arguments > Environment variables > Config file > Defaults
//! - `--transport` overrides `CHECKIN_TRANSPORT`, `config.server.transport`
//! - `--port` overrides `CHECKIN_TCP_PORT`, `config.server.tcp_port`
//! - `--bind` overrides `CHECKIN_BIND_ADDRESS`, `config.server.bind_address`

mod handlers;
mod protocol;
mod server;
mod session;

use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use checkin_core::config::Config;
use server::{CheckinServer, TransportMode};

/// Parsed CLI arguments.
struct CliArgs {
    /// Path to configuration file
    config_path: Option<PathBuf>,
    /// Transport mode override (--transport)
    transport: Option<String>,
    /// TCP port override (--port)
    port: Option<u16>,
    /// TCP bind address override (--bind)
    bind_address: Option<String>,
    /// Show help
    help: bool,
}

impl CliArgs {
    fn parse() -> Self {
        let mut args = CliArgs {
            config_path: None,
            transport: None,
            port: None,
            bind_address: None,
            help: false,
        };

        let mut iter = env::args().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--config" => args.config_path = iter.next().map(PathBuf::from),
                "--transport" => args.transport = iter.next(),
                "--port" => args.port = iter.next().and_then(|p| p.parse().ok()),
                "--bind" => args.bind_address = iter.next(),
                "--help" | "-h" => args.help = true,
                other => {
                    eprintln!("Unknown argument: {}", other);
                }
            }
        }

        args
    }
}

fn print_help() {
    println!("checkin-server - guided wellness check-in JSON-RPC server");
    println!();
    println!("USAGE:");
    println!("    checkin-server [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --config <PATH>       Path to a TOML configuration file");
    println!("    --transport <MODE>    Transport mode: stdio (default) or tcp");
    println!("    --port <PORT>         TCP port (tcp transport only)");
    println!("    --bind <ADDRESS>      TCP bind address (tcp transport only)");
    println!("    -h, --help            Show this help");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first so --help works without any setup.
    let cli = CliArgs::parse();

    if cli.help {
        print_help();
        return Ok(());
    }

    // Load configuration before logging init so the configured default
    // level can seed the filter.
    let mut config = if let Some(ref path) = cli.config_path {
        Config::from_file(path)?
    } else {
        Config::load()?
    };

    // stdout carries protocol frames on the stdio transport; logs go to
    // stderr only.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Check-in server starting...");

    // Apply overrides: CLI > environment > config file.
    if let Ok(transport) = env::var("CHECKIN_TRANSPORT") {
        config.server.transport = transport;
    }
    if let Ok(port) = env::var("CHECKIN_TCP_PORT") {
        if let Ok(port) = port.parse() {
            config.server.tcp_port = port;
        }
    }
    if let Ok(bind) = env::var("CHECKIN_BIND_ADDRESS") {
        config.server.bind_address = bind;
    }
    if let Some(transport) = cli.transport {
        config.server.transport = transport;
    }
    if let Some(port) = cli.port {
        config.server.tcp_port = port;
    }
    if let Some(bind) = cli.bind_address {
        config.server.bind_address = bind;
    }

    let Some(mode) = TransportMode::parse(&config.server.transport) else {
        error!(
            "Invalid transport '{}': expected 'stdio' or 'tcp'",
            config.server.transport
        );
        std::process::exit(1);
    };

    let server = CheckinServer::new(config);
    match mode {
        TransportMode::Stdio => server.run_stdio().await,
        TransportMode::Tcp => server.run_tcp().await,
    }
}
