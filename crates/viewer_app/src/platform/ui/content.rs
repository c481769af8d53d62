use viewer_core::SanitizedHtml;

/// Injects converted markup into the page as-is.
///
/// Nothing is escaped here; see [`SanitizedHtml`] for where that guarantee
/// comes from. Malformed markup is left for the browser to repair.
pub fn render_content(content: &SanitizedHtml) -> String {
    format!(
        r#"<div class="html-content-wrapper"><div>{}</div></div>"#,
        content.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_is_injected_without_escaping() {
        let content = SanitizedHtml::trust_server_sanitized("<p>a &amp; <b>b</b></p>");
        assert_eq!(
            render_content(&content),
            r#"<div class="html-content-wrapper"><div><p>a &amp; <b>b</b></p></div></div>"#
        );
    }

    #[test]
    fn malformed_markup_passes_through() {
        let content = SanitizedHtml::trust_server_sanitized("<div><p>unclosed");
        assert!(render_content(&content).contains("<div><p>unclosed</div></div>"));
    }
}
