use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncWrite;

use crate::config::Config;
use crate::http::mime;
use crate::http::response::{ResponseBuilder, Status};
use crate::http::writer;

/// Stream a regular file to the client with its resolved content type.
///
/// The file is opened and stat'ed before any byte goes out: open
/// failure answers 404, stat failure 500, both on a clean stream. The
/// body is copied in fixed-size chunks; the handle closes on every exit
/// path when it drops.
pub async fn handle<S>(path: &Path, stream: &mut S, cfg: &Config) -> anyhow::Result<Status>
where
    S: AsyncWrite + Unpin,
{
    let mut file = match File::open(path).await {
        Ok(file) => file,
        Err(_) => return Ok(Status::NotFound),
    };

    let meta = match file.metadata().await {
        Ok(meta) => meta,
        Err(_) => return Ok(Status::InternalServerError),
    };

    let mimetype = mime::resolve(path, &cfg.content).await;

    let head = ResponseBuilder::new(Status::Ok)
        .header("Content-Type", mimetype)
        .header("Content-Length", meta.len().to_string())
        .build();

    writer::write_head(stream, &head).await?;
    writer::copy_chunks(stream, &mut file).await?;

    Ok(Status::Ok)
}
