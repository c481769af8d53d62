//! Viewer engine: uploads files to the conversion server off the UI thread.
mod engine;
mod error;
mod progress;
mod types;
mod upload;

pub use engine::UploadHandle;
pub use error::{UploadError, SERVER_ERROR_FALLBACK, UNREACHABLE_MESSAGE};
pub use progress::{progress_channel, ChannelProgressSink, ProgressSink, ProgressStream};
pub use types::{UploadCompleted, UploadId, UploadOutput, UploadProgress, UploadRequest};
pub use upload::{ReqwestUploader, UploadSettings, Uploader, DEFAULT_BASE_URL, UPLOAD_PATH};
