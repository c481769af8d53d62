use std::sync::mpsc;
use std::thread;

use viewer_core::{Effect, Msg, SanitizedHtml};
use viewer_engine::{ProgressStream, UploadCompleted, UploadHandle, UploadRequest};
use viewer_logging::{viewer_debug, viewer_info, viewer_warn};

pub struct EffectRunner {
    uploads: UploadHandle,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(uploads: UploadHandle, msg_tx: mpsc::Sender<Msg>) -> Self {
        Self { uploads, msg_tx }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartUpload { upload_id, file } => {
                    viewer_info!(
                        "StartUpload upload_id={} file={}",
                        upload_id,
                        file.path().display()
                    );
                    let request = UploadRequest::new(file.into_path());
                    let progress = self.uploads.start(upload_id, request);
                    self.forward_progress(upload_id, progress);
                }
            }
        }
    }

    /// Drains finished uploads into page messages.
    pub fn poll(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(completed) = self.uploads.try_recv() {
            msgs.push(completion_msg(completed));
        }
        msgs
    }

    fn forward_progress(&self, upload_id: u64, progress: ProgressStream) {
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || {
            for step in progress {
                if let Some(ratio) = step.ratio() {
                    viewer_debug!("Upload Progress: {}%", (ratio * 100.0).round());
                }
                let msg = Msg::UploadProgress {
                    upload_id,
                    loaded: step.loaded,
                    total: step.total,
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            }
        });
    }
}

/// Converts an engine result into a page message. Markup is only trusted
/// here, where it is known to come from the conversion server.
fn completion_msg(completed: UploadCompleted) -> Msg {
    let UploadCompleted { upload_id, result } = completed;
    let result = match result {
        Ok(output) => Ok(output
            .html_content
            .map(SanitizedHtml::trust_server_sanitized)),
        Err(err) => {
            viewer_warn!("Upload {} failed: {:?}", upload_id, err);
            Err(err.user_message())
        }
    };
    Msg::UploadFinished { upload_id, result }
}
