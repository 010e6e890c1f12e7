use crate::http::response::Response;
use bytes::BytesMut;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};

const HTTP_VERSION: &str = "HTTP/1.0";

/// Chunk size for streaming file bodies.
const BUFFER_SIZE: usize = 8192;

fn serialize_head(resp: &Response) -> BytesMut {
    let mut buf = BytesMut::with_capacity(256);

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers, in insertion order
    for (name, value) in &resp.headers {
        buf.extend_from_slice(name.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(value.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Write a fully buffered response: status line, headers, blank line, body.
pub async fn write_response<W>(stream: &mut W, resp: &Response) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut buf = serialize_head(resp);
    buf.extend_from_slice(&resp.body);
    stream.write_all(&buf).await?;
    stream.flush().await
}

/// Write only the status line and headers. The caller streams the body
/// afterwards with `copy_chunks` or `copy_lines`.
pub async fn write_head<W>(stream: &mut W, resp: &Response) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    stream.write_all(&serialize_head(resp)).await?;
    stream.flush().await
}

/// Copy a body source to the client in fixed-size chunks until EOF.
pub async fn copy_chunks<W, R>(stream: &mut W, source: &mut R) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
    R: AsyncRead + Unpin,
{
    let mut buf = [0u8; BUFFER_SIZE];
    loop {
        let n = source.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        stream.write_all(&buf[..n]).await?;
    }
    stream.flush().await
}

/// Copy a body source to the client line by line, verbatim. Used for
/// CGI output, which the script emits as complete HTTP response text.
pub async fn copy_lines<W, R>(stream: &mut W, source: R) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(source);
    let mut line = Vec::new();
    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line).await?;
        if n == 0 {
            break;
        }
        stream.write_all(&line).await?;
    }
    stream.flush().await
}
