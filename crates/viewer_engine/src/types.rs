use std::path::PathBuf;

use crate::UploadError;

pub type UploadId = u64;

/// A file to send. The bytes are read when the upload starts, not before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub path: PathBuf,
    pub file_name: String,
}

impl UploadRequest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.pdf".to_string());
        Self { path, file_name }
    }
}

/// Bytes of the request body handed to the transport so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    pub loaded: u64,
    pub total: u64,
}

impl UploadProgress {
    /// Fraction in `0.0..=1.0`; `None` while the total is unknown.
    pub fn ratio(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.loaded.min(self.total) as f64 / self.total as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutput {
    /// `html_content` from the response body. Absent when the server sent no
    /// such string field.
    pub html_content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCompleted {
    pub upload_id: UploadId,
    pub result: Result<UploadOutput, UploadError>,
}
