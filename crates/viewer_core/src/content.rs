/// Converted markup that is injected into the page without escaping.
///
/// The client never sanitizes. The conversion server strips script tags and
/// other execution vectors before responding, and this type records that the
/// markup came through that path. Markup from anywhere else must not be
/// wrapped in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedHtml(String);

impl SanitizedHtml {
    /// Wraps markup returned by the conversion server.
    ///
    /// Callers assert that the server upheld its sanitization contract. If it
    /// did not, rendering this value is a cross-site scripting exposure.
    pub fn trust_server_sanitized(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
