use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use crate::progress::{progress_channel, ChannelProgressSink};
use crate::upload::{ReqwestUploader, UploadSettings, Uploader};
use crate::{ProgressStream, UploadCompleted, UploadId, UploadRequest};

enum UploadCommand {
    Start {
        upload_id: UploadId,
        request: UploadRequest,
        sink: ChannelProgressSink,
    },
}

/// Runs uploads on a background thread with its own tokio runtime.
pub struct UploadHandle {
    cmd_tx: mpsc::Sender<UploadCommand>,
    event_rx: mpsc::Receiver<UploadCompleted>,
}

impl UploadHandle {
    pub fn new(settings: UploadSettings) -> Self {
        Self::with_uploader(Arc::new(ReqwestUploader::new(settings)))
    }

    pub fn with_uploader(uploader: Arc<dyn Uploader>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let uploader = uploader.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(uploader.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Starts an upload. The returned stream reports its progress and ends
    /// when the upload resolves; the result arrives through [`Self::try_recv`].
    pub fn start(&self, upload_id: UploadId, request: UploadRequest) -> ProgressStream {
        let (sink, stream) = progress_channel();
        let _ = self.cmd_tx.send(UploadCommand::Start {
            upload_id,
            request,
            sink,
        });
        stream
    }

    pub fn try_recv(&self) -> Option<UploadCompleted> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<UploadCompleted> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    uploader: &dyn Uploader,
    command: UploadCommand,
    event_tx: mpsc::Sender<UploadCompleted>,
) {
    match command {
        UploadCommand::Start {
            upload_id,
            request,
            sink,
        } => {
            let sink = Arc::new(sink);
            let result = uploader.upload(upload_id, request, sink.clone()).await;
            sink.close();
            let _ = event_tx.send(UploadCompleted { upload_id, result });
        }
    }
}
