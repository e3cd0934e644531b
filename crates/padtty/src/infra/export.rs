use std::io;
use std::path::PathBuf;

/// Produces a downloadable artifact for an exported entry.
///
/// The browser build backs this with a blob download; the demo binary writes
/// into a directory instead.
#[cfg_attr(test, mockall::automock)]
pub trait ExportSink: Send + Sync {
    /// Exports `content` under the artifact name `path`.
    ///
    /// # Errors
    /// Returns an error when the artifact cannot be produced.
    fn export(&self, path: &str, content: &str) -> io::Result<()>;
}

/// [`ExportSink`] that writes artifacts into a directory on disk.
pub struct DownloadDirExport {
    dir: PathBuf,
}

impl DownloadDirExport {
    /// Creates a sink writing into `dir`.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Creates a sink targeting the platform download directory, falling back
    /// to the current directory when none is configured.
    pub fn to_download_dir() -> Self {
        let dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));

        Self::new(dir)
    }
}

impl ExportSink for DownloadDirExport {
    fn export(&self, path: &str, content: &str) -> io::Result<()> {
        let target = self.dir.join(path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(target, content)
    }
}
