use std::path::{Path, PathBuf};

/// Map a request URI onto the filesystem below `root`.
///
/// The root must already be canonical (`Config::load` guarantees this).
/// The joined path is canonicalized against the real filesystem, so
/// `.`, `..`, and symlinks are all resolved before the containment
/// check. Returns `None` when the target does not exist or when the
/// canonical result escapes the root; the caller cannot tell the two
/// apart, which keeps the filesystem layout from leaking.
pub async fn resolve(root: &Path, uri: &str) -> Option<PathBuf> {
    let joined = format!("{}{}", root.display(), uri);

    let canonical = tokio::fs::canonicalize(&joined).await.ok()?;

    canonical.starts_with(root).then_some(canonical)
}
