//! Shared filesystem fixtures for the integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_ID: AtomicU32 = AtomicU32::new(0);

/// A unique scratch directory, removed on drop.
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(tag: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "spindle-{}-{}-{}",
            tag,
            std::process::id(),
            NEXT_ID.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    /// The canonical path of the directory, as a document root needs.
    pub fn path(&self) -> PathBuf {
        std::fs::canonicalize(&self.path).unwrap()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let file = self.path.join(name);
        std::fs::write(&file, contents).unwrap();
        file
    }

    /// Write a file and set its execute bits, as a CGI script needs.
    pub fn write_executable(&self, name: &str, contents: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let file = self.write(name, contents);
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o755)).unwrap();
        file
    }

    /// Create a named pipe, for exercising the unusable-path-kind branch.
    pub fn mkfifo(&self, name: &str) -> PathBuf {
        let fifo = self.path.join(name);
        let status = std::process::Command::new("mkfifo")
            .arg(&fifo)
            .status()
            .unwrap();
        assert!(status.success());
        fifo
    }

    pub fn mkdir(&self, name: &str) -> PathBuf {
        let dir = self.path.join(name);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// A mime rules file mapping a few common extensions, plus a multi
/// extension line to pin down the second-token-only lookup.
pub const MIME_RULES: &str = "\
# MIME type mappings
text/html\thtml htm
text/css\tcss
application/gzip\tgz tgz
image/png\tpng
";

pub fn write_mime_rules(dir: &TempDir) -> PathBuf {
    dir.write("mime.types", MIME_RULES)
}
