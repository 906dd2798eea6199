//! Check-in server implementation.
//!
//! Speaks newline-delimited JSON-RPC 2.0 over stdio or TCP. The stdio
//! transport keeps stdout strictly for protocol frames; all logging goes
//! to stderr.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use checkin_core::config::Config;
use checkin_core::traits::CheckinStore;
use checkin_storage::InMemoryCheckinStore;

use crate::handlers::Handlers;
use crate::protocol::{error_codes, JsonRpcRequest, JsonRpcResponse};
use crate::session::SessionRegistry;

/// Transport the server listens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Stdio,
    Tcp,
}

impl TransportMode {
    /// Parse a transport name from config, env, or CLI.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "stdio" => Some(TransportMode::Stdio),
            "tcp" => Some(TransportMode::Tcp),
            _ => None,
        }
    }
}

/// JSON-RPC server for the check-in API.
pub struct CheckinServer {
    config: Config,
    handlers: Arc<Handlers>,
}

impl CheckinServer {
    /// Create a server over the configured storage backend.
    pub fn new(config: Config) -> Self {
        // "memory" is the only backend; config.validate() has already
        // rejected anything else.
        let store: Arc<dyn CheckinStore> = Arc::new(InMemoryCheckinStore::new());
        let sessions = Arc::new(SessionRegistry::new());
        let handlers = Arc::new(Handlers::new(store, sessions));
        info!("Check-in server initialized (in-memory store)");

        Self { config, handlers }
    }

    /// Run the server on stdio, reading requests line by line.
    pub async fn run_stdio(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut stdout = stdout.lock();

        info!("Server ready on stdio, waiting for requests...");

        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    error!("Error reading stdin: {}", e);
                    break;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            debug!("Received: {}", line);
            let Some(response) = Self::handle_line(&self.handlers, &line).await else {
                debug!("Notification handled, no response needed");
                continue;
            };

            let response_json = serde_json::to_string(&response)?;
            debug!("Sending: {}", response_json);
            writeln!(stdout, "{}", response_json)?;
            stdout.flush()?;
        }

        info!("Server shutting down...");
        Ok(())
    }

    /// Run the server on a TCP listener with line-delimited JSON frames.
    pub async fn run_tcp(&self) -> Result<()> {
        let addr = format!(
            "{}:{}",
            self.config.server.bind_address, self.config.server.tcp_port
        );
        let listener = TcpListener::bind(&addr).await?;
        info!("Server ready on tcp://{}", addr);

        loop {
            let (socket, peer) = listener.accept().await?;
            debug!("Connection from {}", peer);
            let handlers = Arc::clone(&self.handlers);

            tokio::spawn(async move {
                let (reader, mut writer) = socket.into_split();
                let mut lines = BufReader::new(reader).lines();

                while let Ok(Some(line)) = lines.next_line().await {
                    if line.trim().is_empty() {
                        continue;
                    }

                    let Some(response) = Self::handle_line(&handlers, &line).await else {
                        continue;
                    };

                    let response_json = match serde_json::to_string(&response) {
                        Ok(json) => json,
                        Err(e) => {
                            error!("Failed to serialize response: {}", e);
                            continue;
                        }
                    };
                    if let Err(e) = writer.write_all(response_json.as_bytes()).await {
                        warn!("Write to {} failed: {}", peer, e);
                        break;
                    }
                    if let Err(e) = writer.write_all(b"\n").await {
                        warn!("Write to {} failed: {}", peer, e);
                        break;
                    }
                }
                debug!("Connection from {} closed", peer);
            });
        }
    }

    /// Handle one request line.
    ///
    /// Returns None for notifications (requests without an id), which get
    /// no response per JSON-RPC 2.0.
    async fn handle_line(handlers: &Handlers, input: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(input) {
            Ok(r) => r,
            Err(e) => {
                warn!("Failed to parse request: {}", e);
                return Some(JsonRpcResponse::error(
                    None,
                    error_codes::PARSE_ERROR,
                    format!("Parse error: {}", e),
                ));
            }
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                request.id,
                error_codes::INVALID_REQUEST,
                "Invalid JSON-RPC version",
            ));
        }

        let is_notification = request.id.is_none();
        let response = handlers.dispatch(request).await;
        if is_notification {
            None
        } else {
            Some(response)
        }
    }
}
