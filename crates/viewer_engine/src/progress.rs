use std::sync::{mpsc, Mutex};

use crate::UploadProgress;

pub trait ProgressSink: Send + Sync {
    fn emit(&self, progress: UploadProgress);
}

/// Sending half of a [`ProgressStream`]. Closing or dropping it ends the stream.
pub struct ChannelProgressSink {
    tx: Mutex<Option<mpsc::Sender<UploadProgress>>>,
}

impl ChannelProgressSink {
    /// Ends the stream even if the transport still holds a reference to the sink.
    pub fn close(&self) {
        if let Ok(mut tx) = self.tx.lock() {
            tx.take();
        }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, progress: UploadProgress) {
        if let Ok(tx) = self.tx.lock() {
            if let Some(tx) = tx.as_ref() {
                let _ = tx.send(progress);
            }
        }
    }
}

/// Progress of one upload, in order, ending when the upload resolves.
///
/// The stream is finite and cannot be restarted: once `next` returns `None`
/// it keeps returning `None`.
pub struct ProgressStream {
    rx: mpsc::Receiver<UploadProgress>,
}

impl ProgressStream {
    /// Returns the next progress without blocking, if one is ready.
    pub fn try_next(&self) -> Option<UploadProgress> {
        self.rx.try_recv().ok()
    }
}

impl Iterator for ProgressStream {
    type Item = UploadProgress;

    fn next(&mut self) -> Option<Self::Item> {
        self.rx.recv().ok()
    }
}

pub fn progress_channel() -> (ChannelProgressSink, ProgressStream) {
    let (tx, rx) = mpsc::channel();
    (
        ChannelProgressSink {
            tx: Mutex::new(Some(tx)),
        },
        ProgressStream { rx },
    )
}
