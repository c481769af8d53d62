//! Font size and theme settings applied to the whole page.

/// CSS custom property carrying the body font size.
pub const FONT_SIZE_PROPERTY: &str = "--main-font-size";
pub const DEFAULT_FONT_SIZE_PX: i32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSizeDirection {
    Increase,
    Decrease,
}

/// Page-wide display settings, owned by the page state and handed to the
/// renderer. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationSettings {
    font_size_px: i32,
    theme: Option<String>,
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            font_size_px: DEFAULT_FONT_SIZE_PX,
            theme: None,
        }
    }
}

impl PresentationSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_size_px(&self) -> i32 {
        self.font_size_px
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Moves the font size one pixel. Not clamped: zero and negative sizes
    /// are reachable and left to the stylesheet.
    pub fn adjust_font_size(&mut self, direction: FontSizeDirection) {
        match direction {
            FontSizeDirection::Increase => self.font_size_px += 1,
            FontSizeDirection::Decrease => self.font_size_px -= 1,
        }
    }

    /// Replaces the theme. `None` or an empty name selects the default theme.
    /// Names are not checked against the stylesheet.
    pub fn set_theme(&mut self, theme: Option<&str>) {
        self.theme = theme
            .filter(|name| !name.is_empty())
            .map(ToOwned::to_owned);
    }

    /// The full body class list: empty for the default theme, otherwise a
    /// single `theme-{name}` class.
    pub fn body_class(&self) -> Option<String> {
        self.theme.as_ref().map(|name| format!("theme-{name}"))
    }

    pub fn font_size_declaration(&self) -> String {
        format!("{FONT_SIZE_PROPERTY}: {}px", self.font_size_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_eighteen_pixels_and_no_theme() {
        let settings = PresentationSettings::new();
        assert_eq!(settings.font_size_px(), 18);
        assert_eq!(settings.body_class(), None);
        assert_eq!(settings.font_size_declaration(), "--main-font-size: 18px");
    }

    #[test]
    fn empty_theme_name_selects_default() {
        let mut settings = PresentationSettings::new();
        settings.set_theme(Some("sepia"));
        settings.set_theme(Some(""));
        assert_eq!(settings.theme(), None);
    }
}
