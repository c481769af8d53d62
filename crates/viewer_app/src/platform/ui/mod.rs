pub mod constants;
pub mod content;
pub mod layout;
pub mod render;
