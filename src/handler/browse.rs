use std::path::Path;

use tokio::io::AsyncWrite;

use crate::http::request::Request;
use crate::http::response::{Response, Status};
use crate::http::writer;

/// List a directory as an HTML page of links.
///
/// Entries come out lexicographically sorted. Links join the request
/// URI with the entry name; at the root URI the join skips the extra
/// slash so hrefs never start with `//`. A failed scan answers 404
/// before anything is written.
pub async fn handle<S>(request: &Request, dir: &Path, stream: &mut S) -> anyhow::Result<Status>
where
    S: AsyncWrite + Unpin,
{
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(_) => return Ok(Status::NotFound),
    };

    let mut names = Vec::new();
    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => names.push(entry.file_name().to_string_lossy().into_owned()),
            Ok(None) => break,
            Err(_) => return Ok(Status::NotFound),
        }
    }
    names.sort();

    let mut body = String::from("<ul>\n");
    for name in &names {
        let href = if request.uri == "/" {
            format!("/{name}")
        } else {
            format!("{}/{}", request.uri, name)
        };
        body.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape(&href),
            escape(name)
        ));
    }
    body.push_str("</ul>\n");

    let resp = Response::html(Status::Ok, body);
    writer::write_response(stream, &resp).await?;

    Ok(Status::Ok)
}

/// Escape HTML metacharacters so entry names cannot break the markup.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
