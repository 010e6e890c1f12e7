//! Request handlers.
//!
//! The dispatcher resolves the request URI to a canonical path inside
//! the document root, classifies what it found, and routes to one of
//! three strategies:
//!
//! - **`browse`**: directories become an HTML listing
//! - **`cgi`**: anything with an execute bit runs as a CGI program
//! - **`static_file`**: regular files are streamed with their mime type
//!
//! Every strategy finishes its fallible setup before writing a single
//! byte, so a non-OK status always reaches the error page on a clean
//! stream and the client never sees two header blocks.

pub mod browse;
pub mod cgi;
pub mod path;
pub mod static_file;

use std::net::SocketAddr;

use tokio::io::AsyncWrite;

use crate::config::Config;
use crate::http::request::Request;
use crate::http::response::{Response, Status};
use crate::http::writer;

/// Resolve the request path, classify it, and run the matching handler.
///
/// Returns the terminal status of the cycle. `Err` means the socket
/// itself failed mid-write; no error page is attempted in that case.
pub async fn dispatch<S>(
    request: &mut Request,
    stream: &mut S,
    peer: SocketAddr,
    local: SocketAddr,
    cfg: &Config,
) -> anyhow::Result<Status>
where
    S: AsyncWrite + Unpin,
{
    let Some(resolved) = path::resolve(&cfg.content.root, &request.uri).await else {
        return error(stream, Status::NotFound).await;
    };
    tracing::debug!(path = %resolved.display(), "Resolved request path");
    request.resolved_path = Some(resolved.clone());

    let meta = match tokio::fs::metadata(&resolved).await {
        Ok(meta) => meta,
        Err(_) => return error(stream, Status::NotFound).await,
    };

    let status = if meta.is_dir() {
        browse::handle(request, &resolved, stream).await?
    } else if is_executable(&meta) {
        cgi::handle(request, &resolved, stream, peer, local, cfg).await?
    } else if meta.is_file() {
        static_file::handle(&resolved, stream, cfg).await?
    } else {
        // Devices, sockets, pipes
        Status::BadRequest
    };

    if status != Status::Ok {
        return error(stream, status).await;
    }

    Ok(status)
}

/// Emit the HTML error page for a non-OK status.
pub async fn error<S>(stream: &mut S, status: Status) -> anyhow::Result<Status>
where
    S: AsyncWrite + Unpin,
{
    let resp = Response::error_page(status);
    writer::write_response(stream, &resp).await?;
    Ok(status)
}

/// Execute permission decides CGI before the regular-file test, so an
/// executable regular file is never served as static content.
fn is_executable(meta: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}
