use crate::{SelectedFile, UploadId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the file to the conversion server. The file is moved into the
    /// request and not kept by the page state.
    StartUpload {
        upload_id: UploadId,
        file: SelectedFile,
    },
}
