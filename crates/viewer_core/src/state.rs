use std::path::{Path, PathBuf};

use crate::view_model::{AppViewModel, ContentView};
use crate::{FontSizeDirection, PresentationSettings, SanitizedHtml};

pub type UploadId = u64;

/// A file chosen in the picker. Opaque to the page; only the upload reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
    name: String,
}

impl SelectedFile {
    /// Returns `None` for an empty path, which is what a dismissed picker yields.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return None;
        }
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Some(Self { path, name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// What the main area shows. Exactly one mode holds at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageMode {
    #[default]
    Idle,
    Loading {
        upload_id: UploadId,
        progress: Option<(u64, u64)>,
    },
    Error {
        message: String,
    },
    Displaying {
        content: SanitizedHtml,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    mode: PageMode,
    presentation: PresentationSettings,
    last_upload_id: UploadId,
    dirty: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &PageMode {
        &self.mode
    }

    pub fn presentation(&self) -> &PresentationSettings {
        &self.presentation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.mode, PageMode::Loading { .. })
    }

    pub fn view(&self) -> AppViewModel {
        let content = match &self.mode {
            PageMode::Idle => ContentView::Prompt,
            PageMode::Loading { progress, .. } => ContentView::Loading {
                percent: progress.and_then(|(loaded, total)| percent(loaded, total)),
            },
            PageMode::Error { message } => ContentView::Error {
                message: message.clone(),
            },
            PageMode::Displaying { content } => ContentView::Document(content.clone()),
        };

        AppViewModel {
            content,
            file_input_enabled: !self.is_loading(),
            presentation: self.presentation.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn begin_upload(&mut self) -> UploadId {
        self.last_upload_id += 1;
        self.mode = PageMode::Loading {
            upload_id: self.last_upload_id,
            progress: None,
        };
        self.dirty = true;
        self.last_upload_id
    }

    pub(crate) fn active_upload(&self) -> Option<UploadId> {
        match self.mode {
            PageMode::Loading { upload_id, .. } => Some(upload_id),
            _ => None,
        }
    }

    pub(crate) fn apply_progress(&mut self, loaded: u64, total: u64) {
        if let PageMode::Loading { progress, .. } = &mut self.mode {
            let next = Some((loaded, total));
            if *progress != next {
                *progress = next;
                self.dirty = true;
            }
        }
    }

    pub(crate) fn finish_with(&mut self, mode: PageMode) {
        self.mode = mode;
        self.dirty = true;
    }

    pub(crate) fn adjust_font_size(&mut self, direction: FontSizeDirection) {
        self.presentation.adjust_font_size(direction);
        self.dirty = true;
    }

    pub(crate) fn set_theme(&mut self, theme: Option<&str>) {
        self.presentation.set_theme(theme);
        self.dirty = true;
    }
}

fn percent(loaded: u64, total: u64) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let ratio = (loaded.min(total) as f64 / total as f64) * 100.0;
    Some(ratio.round() as u8)
}
