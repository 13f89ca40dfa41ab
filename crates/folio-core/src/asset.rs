//! # Protected Asset
//!
//! Descriptor for the single file behind the gate. Reading the file is the
//! app's job; this module only knows where it lives and how the download
//! is presented.

use std::path::{Path, PathBuf};

/// Default location of the protected file, relative to the working directory.
pub const DEFAULT_ASSET_PATH: &str = "private/resume.pdf";

/// Filename presented to the browser for the download.
pub const RESUME_FILENAME: &str = "Kanav_wadhawan_resume.pdf";

/// Content type of the protected file.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// The file handed out to access-token holders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedAsset {
    path: PathBuf,
    filename: String,
    content_type: String,
}

impl Default for ProtectedAsset {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_PATH)
    }
}

impl ProtectedAsset {
    /// The résumé PDF at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            filename: RESUME_FILENAME.to_string(),
            content_type: PDF_CONTENT_TYPE.to_string(),
        }
    }

    /// Use `path` when given, otherwise the default location.
    pub fn from_override(path: Option<PathBuf>) -> Self {
        path.map(Self::new).unwrap_or_default()
    }

    /// Location on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Presented download name.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// MIME type for `Content-Type`.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// `Content-Disposition` value forcing a download under the presented name.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}
