use crate::{Effect, Msg, PageMode, PageState};

/// Shown when an upload fails without a usable message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to convert the file.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileSelected(None) => Vec::new(),
        Msg::FileSelected(Some(file)) => {
            // The file input is disabled while loading; a selection that still
            // arrives is dropped rather than queued.
            if state.is_loading() {
                return (state, Vec::new());
            }
            let upload_id = state.begin_upload();
            vec![Effect::StartUpload { upload_id, file }]
        }
        Msg::UploadProgress {
            upload_id,
            loaded,
            total,
        } => {
            if state.active_upload() == Some(upload_id) {
                state.apply_progress(loaded, total);
            }
            Vec::new()
        }
        Msg::UploadFinished { upload_id, result } => {
            if state.active_upload() != Some(upload_id) {
                return (state, Vec::new());
            }
            let mode = match result {
                Ok(Some(content)) if !content.is_empty() => PageMode::Displaying { content },
                Ok(_) => PageMode::Idle,
                Err(message) if message.is_empty() => PageMode::Error {
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                },
                Err(message) => PageMode::Error { message },
            };
            state.finish_with(mode);
            Vec::new()
        }
        Msg::FontSizeAdjusted(direction) => {
            state.adjust_font_size(direction);
            Vec::new()
        }
        Msg::ThemeSelected(theme) => {
            state.set_theme(theme.as_deref());
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
