use std::net::SocketAddr;
use std::path::Path;
use std::process::Stdio;

use tokio::io::AsyncWrite;
use tokio::process::Command;

use crate::config::Config;
use crate::http::request::Request;
use crate::http::response::Status;
use crate::http::writer;

/// Run the resolved path as a CGI program and copy its standard output
/// to the client verbatim, line by line.
///
/// The script is responsible for the entire response, headers included;
/// nothing is injected or rewritten on its behalf. Request metadata
/// travels in the environment of the child process only, so concurrent
/// workers never see each other's variables. A spawn failure answers
/// 500 before anything is written.
pub async fn handle<S>(
    request: &Request,
    script: &Path,
    stream: &mut S,
    peer: SocketAddr,
    local: SocketAddr,
    cfg: &Config,
) -> anyhow::Result<Status>
where
    S: AsyncWrite + Unpin,
{
    let mut command = Command::new(script);
    command
        .env("QUERY_STRING", &request.query)
        .env("REQUEST_METHOD", &request.method)
        .env("REQUEST_URI", &request.uri)
        .env("SCRIPT_FILENAME", script)
        .env("DOCUMENT_ROOT", &cfg.content.root)
        .env("REMOTE_ADDR", peer.ip().to_string())
        .env("REMOTE_PORT", peer.port().to_string())
        .env("SERVER_PORT", local.port().to_string())
        .env("HTTP_USER_AGENT", request.header("User-Agent").unwrap_or(""))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .kill_on_drop(true);

    if let Some(host) = request.header("Host") {
        command.env("HTTP_HOST", host);
    }

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) => {
            tracing::warn!(
                script = %script.display(),
                error = %e,
                "Failed to spawn CGI script"
            );
            return Ok(Status::InternalServerError);
        }
    };

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow::anyhow!("CGI stdout was not captured"))?;

    writer::copy_lines(stream, stdout).await?;

    let _ = child.wait().await;
    Ok(Status::Ok)
}
