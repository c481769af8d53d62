//! Viewer core: pure page state machine and view-model helpers.
mod content;
mod effect;
mod msg;
mod presentation;
mod state;
mod update;
mod view_model;

pub use content::SanitizedHtml;
pub use effect::Effect;
pub use msg::Msg;
pub use presentation::{
    FontSizeDirection, PresentationSettings, DEFAULT_FONT_SIZE_PX, FONT_SIZE_PROPERTY,
};
pub use state::{PageMode, PageState, SelectedFile, UploadId};
pub use update::{update, GENERIC_FAILURE_MESSAGE};
pub use view_model::{AppViewModel, ContentView};
