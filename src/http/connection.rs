use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncWriteExt, BufStream};
use tokio::net::TcpStream;

use crate::config::Config;
use crate::handler;
use crate::http::parser;
use crate::http::response::Status;

/// One accepted connection, owning its socket for exactly one
/// HTTP/1.0 request/response cycle.
pub struct Connection {
    stream: BufStream<TcpStream>,
    peer: SocketAddr,
    cfg: Arc<Config>,
}

impl Connection {
    pub fn new(socket: TcpStream, peer: SocketAddr, cfg: Arc<Config>) -> Self {
        Self {
            stream: BufStream::new(socket),
            peer,
            cfg,
        }
    }

    /// Run the request lifecycle: parse, dispatch, shut the stream down.
    ///
    /// Parse failures answer 400 and close; everything past the parse is
    /// the dispatcher's job. The socket is shut down on every exit path
    /// and dropped with `self`, so it is closed exactly once.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let local = self.stream.get_ref().local_addr()?;

        let mut request = match parser::parse_request(&mut self.stream).await {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(peer = %self.peer, error = ?e, "Malformed request");
                handler::error(&mut self.stream, Status::BadRequest).await?;
                self.stream.shutdown().await?;
                return Ok(());
            }
        };

        let status =
            match handler::dispatch(&mut request, &mut self.stream, self.peer, local, &self.cfg)
                .await
            {
                Ok(status) => status,
                Err(e) => {
                    // Socket failed mid-write; still shut down before bailing
                    let _ = self.stream.shutdown().await;
                    return Err(e);
                }
            };

        tracing::info!(
            peer = %self.peer,
            method = %request.method,
            uri = %request.uri,
            status = status.as_u16(),
            "Request complete"
        );

        self.stream.shutdown().await?;
        Ok(())
    }
}
