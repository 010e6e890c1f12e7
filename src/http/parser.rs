use crate::http::request::Request;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug)]
pub enum ParseError {
    /// Stream closed or empty before a request line arrived
    MissingRequestLine,
    /// Request line had a method but no target
    MissingTarget,
    /// Header line without a `:` separator
    MalformedHeader,
    /// Header block ended before any header was collected
    MissingHeaders,
    /// The socket failed mid-read
    Io(std::io::Error),
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::Io(e)
    }
}

/// Parse one HTTP/1.0 request from a line-oriented stream.
///
/// Requests come in the form
///
/// ```text
/// <METHOD> <URI>[?QUERY] HTTP/<VERSION>
/// <NAME>: <VALUE>
/// ...
/// ```
///
/// terminated by a blank line. The target is split at the first `?`
/// only; the URI keeps any later `?` characters. At least one header is
/// required. The stream is left positioned just past the header block.
pub async fn parse_request<R>(reader: &mut R) -> Result<Request, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Err(ParseError::MissingRequestLine);
    }

    let mut tokens = line.split_whitespace();
    let method = tokens.next().ok_or(ParseError::MissingRequestLine)?;
    let target = tokens.next().ok_or(ParseError::MissingTarget)?;

    let (uri, query) = match target.split_once('?') {
        Some((uri, query)) => (uri, query),
        None => (target, ""),
    };

    let request = Request {
        method: method.to_string(),
        uri: uri.to_string(),
        query: query.to_string(),
        headers: parse_headers(reader).await?,
        resolved_path: None,
    };

    tracing::debug!(
        method = %request.method,
        uri = %request.uri,
        query = %request.query,
        "Parsed request line"
    );

    Ok(request)
}

/// Read `Name: Value` lines until a blank line (just the terminator) or
/// end of stream. Values get leading whitespace trimmed and trailing
/// CR/LF stripped; names are kept verbatim.
async fn parse_headers<R>(reader: &mut R) -> Result<Vec<(String, String)>, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut headers = Vec::new();
    let mut line = String::new();

    loop {
        line.clear();
        let n = reader.read_line(&mut line).await?;
        // A line of length <= 2 is just the terminator
        if n == 0 || line.len() <= 2 {
            break;
        }

        let (name, value) = line.split_once(':').ok_or(ParseError::MalformedHeader)?;
        headers.push((
            name.to_string(),
            value.trim_start().trim_end_matches(['\r', '\n']).to_string(),
        ));
    }

    if headers.is_empty() {
        return Err(ParseError::MissingHeaders);
    }

    Ok(headers)
}
