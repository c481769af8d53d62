use crate::{FontSizeDirection, SanitizedHtml, SelectedFile, UploadId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User closed the file picker. `None` means the picker was cancelled.
    FileSelected(Option<SelectedFile>),
    /// Byte progress of the in-flight upload.
    UploadProgress {
        upload_id: UploadId,
        loaded: u64,
        total: u64,
    },
    /// The upload resolved. `Ok(None)` is a response without converted content.
    UploadFinished {
        upload_id: UploadId,
        result: Result<Option<SanitizedHtml>, String>,
    },
    /// User clicked A+ / A-.
    FontSizeAdjusted(FontSizeDirection),
    /// User picked a theme. `None` restores the default light theme.
    ThemeSelected(Option<String>),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
