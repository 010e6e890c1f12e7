use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{Config, ServerMode};
use crate::http::connection::Connection;

/// A bound listening socket plus the configuration it serves.
pub struct Listener {
    inner: TcpListener,
    cfg: Arc<Config>,
}

impl Listener {
    /// Bind the configured listen address. Failure here is fatal.
    pub async fn bind(cfg: Config) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(&cfg.server.listen_addr)
            .await
            .with_context(|| format!("Failed to bind {}", cfg.server.listen_addr))?;
        info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            inner: listener,
            cfg: Arc::new(cfg),
        })
    }

    /// The address actually bound (useful when the port was 0).
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.inner.local_addr()
    }

    /// Accept and handle connections forever, in the configured mode.
    pub async fn serve(self) -> anyhow::Result<()> {
        match self.cfg.server.mode {
            ServerMode::Single => self.serve_single().await,
            ServerMode::Spawning => self.serve_spawning().await,
        }
    }

    /// One connection at a time: the accept loop fully processes each
    /// connection before taking the next. A failed accept ends the
    /// server.
    async fn serve_single(self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = self.inner.accept().await.context("Accept failed")?;
            info!("Accepted connection from {}", peer);

            let conn = Connection::new(socket, peer, Arc::clone(&self.cfg));
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        }
    }

    /// One task per connection: accepted sockets are handed off and
    /// never awaited, so a stalled client or a looping CGI script only
    /// ties up its own task. A failed accept is logged and the loop
    /// keeps going.
    async fn serve_spawning(self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = match self.inner.accept().await {
                Ok(pair) => pair,
                Err(e) => {
                    tracing::warn!("Accept failed: {}", e);
                    continue;
                }
            };
            info!("Accepted connection from {}", peer);

            let cfg = Arc::clone(&self.cfg);
            tokio::spawn(async move {
                let conn = Connection::new(socket, peer, cfg);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}

/// Bind and serve until the process is shut down.
pub async fn run(cfg: Config) -> anyhow::Result<()> {
    Listener::bind(cfg).await?.serve().await
}
