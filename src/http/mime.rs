use crate::config::ContentConfig;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Determine the content type for `path` by scanning the mime rules
/// file. Never fails: a missing extension, an unreadable rules file, or
/// no matching rule all fall back to the configured default.
///
/// The rules file (typically /etc/mime.types) consists of lines in the
/// form
///
/// ```text
/// <MIMETYPE>      <EXT1> <EXT2> ...
/// ```
///
/// with `#` comments and blank lines ignored. Only the first extension
/// token of each line is consulted; the first line whose extension
/// matches exactly wins.
pub async fn resolve(path: &Path, content: &ContentConfig) -> String {
    let Some(ext) = extension(path) else {
        return content.default_mime_type.clone();
    };

    let file = match File::open(&content.mime_types).await {
        Ok(f) => f,
        Err(e) => {
            tracing::debug!(
                rules = %content.mime_types.display(),
                error = %e,
                "Could not open mime rules file"
            );
            return content.default_mime_type.clone();
        }
    };

    let mut lines = BufReader::new(file).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let Some(mimetype) = tokens.next() else {
            continue;
        };
        if tokens.next() == Some(ext) {
            return mimetype.to_string();
        }
    }

    content.default_mime_type.clone()
}

/// The substring after the last `.` of the final path component, if any.
fn extension(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    let (_, ext) = name.rsplit_once('.')?;
    (!ext.is_empty()).then_some(ext)
}
