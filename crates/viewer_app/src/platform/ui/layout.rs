use viewer_core::{PresentationSettings, FONT_SIZE_PROPERTY};

use super::constants::*;

/// Stylesheet consumed by the page. Theme classes other than these render
/// unstyled.
pub fn stylesheet(settings: &PresentationSettings) -> String {
    format!(
        r#":root {{ {declaration}; }}
body {{ font-size: var({FONT_SIZE_PROPERTY}); line-height: 1.7; margin: 0; background: #fff; color: #222; }}
body.theme-dark {{ background: #1e1e1e; color: #ddd; }}
body.theme-sepia {{ background: #f4ecd8; color: #5b4636; }}
.centered {{ text-align: center; }}
.panel {{ padding: 10px; border-bottom: 1px solid #ccc; text-align: center; }}
.error {{ color: red; }}
.prompt {{ color: #888; margin-top: 50px; }}
.html-content-wrapper {{ max-width: 800px; margin: 0 auto; padding: 20px; }}"#,
        declaration = settings.font_size_declaration(),
    )
}

pub fn style_panel() -> String {
    format!(
        r#"<div id="{PANEL_STYLE}" class="panel">
<strong>Design:</strong>
<button id="{BUTTON_FONT_DECREASE}">A-</button>
<button id="{BUTTON_FONT_INCREASE}">A+</button>
<button id="{BUTTON_THEME_LIGHT}">Light</button>
<button id="{BUTTON_THEME_DARK}">Dark</button>
<button id="{BUTTON_THEME_SEPIA}">Sepia</button>
</div>"#
    )
}

pub fn file_input(enabled: bool) -> String {
    let disabled = if enabled { "" } else { " disabled" };
    format!(
        r#"<div id="{PANEL_UPLOAD}" class="panel"><input type="file" id="{INPUT_FILE}" accept="{ACCEPTED_MIME}"{disabled}></div>"#
    )
}

/// Escapes text placed into markup. Converted content never goes through here.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewer_core::FontSizeDirection;

    #[test]
    fn stylesheet_carries_current_font_size() {
        let mut settings = PresentationSettings::new();
        settings.adjust_font_size(FontSizeDirection::Increase);

        let css = stylesheet(&settings);

        assert!(css.contains(":root { --main-font-size: 19px; }"));
        assert!(css.contains("body.theme-dark"));
        assert!(css.contains("body.theme-sepia"));
    }

    #[test]
    fn file_input_is_disabled_on_request() {
        assert!(file_input(false).contains(" disabled>"));
        assert!(!file_input(true).contains("disabled"));
        assert!(file_input(true).contains(r#"accept="application/pdf""#));
    }

    #[test]
    fn escape_text_covers_markup_characters() {
        assert_eq!(
            escape_text(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }
}
