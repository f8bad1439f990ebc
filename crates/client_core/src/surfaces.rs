//! Output surfaces the session projects into: clipboard, preview, downloads.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::error::ClientError;

pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClientError>;
}

/// Isolated rendering surface; assigning a document replaces the previous one.
pub trait PreviewSurface {
    fn load_document(&mut self, document: &str) -> Result<(), ClientError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub mime_type: &'static str,
    pub contents: Vec<u8>,
}

pub trait DownloadSink {
    fn deliver(&mut self, download: &Download) -> Result<(), ClientError>;
}

/// Preview surface backed by a single HTML file, rewritten on every load.
#[derive(Debug, Clone)]
pub struct FilePreviewSurface {
    path: PathBuf,
}

impl FilePreviewSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreviewSurface for FilePreviewSurface {
    fn load_document(&mut self, document: &str) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, document)?;
        debug!(path = %self.path.display(), bytes = document.len(), "preview document written");
        Ok(())
    }
}

/// Writes downloads into a directory, replacing files of the same name.
#[derive(Debug, Clone)]
pub struct DirectoryDownloadSink {
    dir: PathBuf,
}

impl DirectoryDownloadSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

impl DownloadSink for DirectoryDownloadSink {
    fn deliver(&mut self, download: &Download) -> Result<(), ClientError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(&download.filename);
        fs::write(&path, &download.contents)?;
        debug!(
            path = %path.display(),
            mime_type = download.mime_type,
            bytes = download.contents.len(),
            "download written"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/surfaces_tests.rs"]
mod tests;
