use std::sync::Arc;

use bytes::Bytes;
use futures_util::StreamExt;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use url::Url;
use viewer_logging::{viewer_debug, viewer_error, viewer_info};

use crate::{
    ProgressSink, UploadError, UploadId, UploadOutput, UploadProgress, UploadRequest,
    SERVER_ERROR_FALLBACK,
};

/// Address of the conversion server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const UPLOAD_PATH: &str = "/upload";

const PDF_MIME: &str = "application/pdf";
const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub base_url: String,
    /// Size of the body chunks handed to the transport; one progress event
    /// is reported per chunk.
    pub chunk_size: usize,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            chunk_size: 64 * 1024,
        }
    }
}

impl UploadSettings {
    pub fn endpoint(&self) -> Result<Url, UploadError> {
        let raw = format!("{}{}", self.base_url.trim_end_matches('/'), UPLOAD_PATH);
        Url::parse(&raw).map_err(|err| UploadError::Local(format!("invalid server url {raw}: {err}")))
    }
}

#[async_trait::async_trait]
pub trait Uploader: Send + Sync {
    /// Sends one file and resolves exactly once. No retry and no timeout.
    async fn upload(
        &self,
        upload_id: UploadId,
        request: UploadRequest,
        sink: Arc<dyn ProgressSink>,
    ) -> Result<UploadOutput, UploadError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestUploader {
    settings: UploadSettings,
}

impl ReqwestUploader {
    pub fn new(settings: UploadSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, UploadError> {
        reqwest::Client::builder()
            .build()
            .map_err(|err| UploadError::Local(err.to_string()))
    }

    async fn send(
        &self,
        upload_id: UploadId,
        request: UploadRequest,
        sink: Arc<dyn ProgressSink>,
    ) -> Result<UploadOutput, UploadError> {
        let endpoint = self.settings.endpoint()?;
        let content = tokio::fs::read(&request.path)
            .await
            .map_err(|err| UploadError::Local(err.to_string()))?;
        let total = content.len() as u64;
        viewer_info!(
            "Upload {} start file={} bytes={} endpoint={}",
            upload_id,
            request.file_name,
            total,
            endpoint
        );

        let body = progress_body(Bytes::from(content), self.settings.chunk_size, sink);
        let part = Part::stream_with_length(body, total)
            .file_name(request.file_name.clone())
            .mime_str(mime_for(&request.file_name))
            .map_err(|err| UploadError::Local(err.to_string()))?;
        let form = Form::new().part("file", part);

        let client = self.build_client()?;
        let response = client
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        let body = response.bytes().await;
        viewer_debug!("Upload {} response status={}", upload_id, status);

        if !status.is_success() {
            let message = body
                .ok()
                .and_then(|bytes| server_detail(&bytes))
                .unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string());
            return Err(UploadError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body = body.map_err(|err| UploadError::Unreachable {
            cause: err.to_string(),
        })?;
        Ok(UploadOutput {
            html_content: html_content(&body),
        })
    }
}

#[async_trait::async_trait]
impl Uploader for ReqwestUploader {
    async fn upload(
        &self,
        upload_id: UploadId,
        request: UploadRequest,
        sink: Arc<dyn ProgressSink>,
    ) -> Result<UploadOutput, UploadError> {
        let result = self.send(upload_id, request, sink).await;
        match &result {
            Ok(output) => viewer_info!(
                "Upload {} done html_len={:?}",
                upload_id,
                output.html_content.as_ref().map(String::len)
            ),
            Err(UploadError::Unreachable { cause }) => {
                viewer_error!("Upload {} failed: server unreachable: {}", upload_id, cause)
            }
            Err(err) => viewer_error!("Upload {} failed: {:?}", upload_id, err),
        }
        result
    }
}

/// Splits the file into chunks and reports progress as the transport pulls them.
fn progress_body(content: Bytes, chunk_size: usize, sink: Arc<dyn ProgressSink>) -> reqwest::Body {
    let total = content.len() as u64;
    let chunk_size = chunk_size.max(1);
    let chunks: Vec<Bytes> = (0..content.len())
        .step_by(chunk_size)
        .map(|start| content.slice(start..(start + chunk_size).min(content.len())))
        .collect();

    let mut loaded = 0u64;
    let stream = futures_util::stream::iter(chunks).map(move |chunk| {
        loaded += chunk.len() as u64;
        sink.emit(UploadProgress { loaded, total });
        Ok::<Bytes, std::io::Error>(chunk)
    });
    reqwest::Body::wrap_stream(stream)
}

/// The picker only suggests PDFs; anything else goes out as opaque bytes and
/// the server decides.
fn mime_for(file_name: &str) -> &'static str {
    let is_pdf = file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("pdf"));
    if is_pdf {
        PDF_MIME
    } else {
        FALLBACK_MIME
    }
}

fn map_send_error(err: reqwest::Error) -> UploadError {
    if err.is_builder() {
        return UploadError::Local(err.to_string());
    }
    UploadError::Unreachable {
        cause: err.to_string(),
    }
}

#[derive(Debug, Deserialize)]
struct ConvertedBody {
    #[serde(default)]
    html_content: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

fn html_content(body: &[u8]) -> Option<String> {
    let parsed: ConvertedBody = serde_json::from_slice(body).ok()?;
    parsed
        .html_content
        .and_then(|value| value.as_str().map(ToOwned::to_owned))
}

fn server_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    parsed
        .detail
        .and_then(|value| value.as_str().map(ToOwned::to_owned))
        .filter(|detail| !detail.is_empty())
}
