pub const PAGE_TITLE: &str = "PDF Web Viewer";

pub const INPUT_FILE: &str = "pdf-file";
pub const BUTTON_FONT_DECREASE: &str = "font-decrease";
pub const BUTTON_FONT_INCREASE: &str = "font-increase";
pub const BUTTON_THEME_LIGHT: &str = "theme-light";
pub const BUTTON_THEME_DARK: &str = "theme-dark";
pub const BUTTON_THEME_SEPIA: &str = "theme-sepia";
pub const PANEL_STYLE: &str = "style-panel";
pub const PANEL_UPLOAD: &str = "upload-panel";

pub const ACCEPTED_MIME: &str = "application/pdf";

pub const TEXT_PROMPT: &str = "Please upload a PDF file";
pub const TEXT_LOADING: &str = "Converting...";
pub const TEXT_ERROR_PREFIX: &str = "Error: ";
