use crate::{PresentationSettings, SanitizedHtml};

/// What the main area of the page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    /// Nothing uploaded yet, or the last response carried no content.
    Prompt,
    /// Upload in flight. `percent` is known once the first progress arrives.
    Loading { percent: Option<u8> },
    Error { message: String },
    Document(SanitizedHtml),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub content: ContentView,
    /// The picker is disabled while an upload is in flight.
    pub file_input_enabled: bool,
    pub presentation: PresentationSettings,
    pub dirty: bool,
}
