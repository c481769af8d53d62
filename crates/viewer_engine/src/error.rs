use thiserror::Error;

pub const UNREACHABLE_MESSAGE: &str = "Upload failed. Server is not reachable.";
pub const SERVER_ERROR_FALLBACK: &str = "Server error";

/// Why an upload failed. The `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request went out but no response came back.
    #[error("Upload failed. Server is not reachable.")]
    Unreachable { cause: String },
    /// Failed before the request was dispatched.
    #[error("{0}")]
    Local(String),
}

impl UploadError {
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
