use viewer_core::{AppViewModel, ContentView};

use super::constants::*;
use super::content::render_content;
use super::layout::{escape_text, file_input, style_panel, stylesheet};

/// Renders the whole page for the current view.
pub fn render_page(view: &AppViewModel) -> String {
    let body_class = match view.presentation.body_class() {
        Some(class) => format!(r#" class="{}""#, escape_text(&class)),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{PAGE_TITLE}</title>
<style>
{css}
</style>
</head>
<body{body_class}>
<header>
{panel}
{input}
</header>
<main>
{main}
</main>
</body>
</html>
"#,
        css = stylesheet(&view.presentation),
        panel = style_panel(),
        input = file_input(view.file_input_enabled),
        main = render_main(&view.content),
    )
}

fn render_main(content: &ContentView) -> String {
    match content {
        ContentView::Prompt => {
            format!(r#"<p class="centered prompt">{TEXT_PROMPT}</p>"#)
        }
        ContentView::Loading { percent } => {
            let progress = percent.map(|p| format!(" {p}%")).unwrap_or_default();
            format!(r#"<p class="centered">{TEXT_LOADING}{progress}</p>"#)
        }
        ContentView::Error { message } => format!(
            r#"<p class="centered error">{TEXT_ERROR_PREFIX}{}</p>"#,
            escape_text(message)
        ),
        ContentView::Document(html) => render_content(html),
    }
}

/// One-line summary of the page for the terminal.
pub fn status_line(view: &AppViewModel) -> String {
    let theme = view.presentation.theme().unwrap_or("light");
    let main = match &view.content {
        ContentView::Prompt => TEXT_PROMPT.to_string(),
        ContentView::Loading { percent: Some(p) } => format!("{TEXT_LOADING} {p}%"),
        ContentView::Loading { percent: None } => TEXT_LOADING.to_string(),
        ContentView::Error { message } => format!("{TEXT_ERROR_PREFIX}{message}"),
        ContentView::Document(html) => format!("Document ready ({} bytes)", html.as_str().len()),
    };
    format!(
        "{main} | font {}px | theme {theme}",
        view.presentation.font_size_px()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use viewer_core::{update, Msg, PageState, SanitizedHtml, SelectedFile};

    fn loading_state() -> PageState {
        let (state, _) = update(
            PageState::new(),
            Msg::FileSelected(SelectedFile::from_path("/docs/a.pdf")),
        );
        state
    }

    #[test]
    fn idle_page_shows_prompt_and_enabled_input() {
        let page = render_page(&PageState::new().view());

        assert!(page.contains("<title>PDF Web Viewer</title>"));
        assert!(page.contains("<body>\n"));
        assert!(page.contains(TEXT_PROMPT));
        assert!(!page.contains("disabled"));
    }

    #[test]
    fn loading_page_disables_input_and_hides_content() {
        let page = render_page(&loading_state().view());

        assert!(page.contains(" disabled>"));
        assert!(page.contains(TEXT_LOADING));
        assert!(!page.contains(TEXT_PROMPT));
        assert!(!page.contains("html-content-wrapper\">"));
    }

    #[test]
    fn error_message_is_escaped() {
        let (state, _) = update(
            loading_state(),
            Msg::UploadFinished {
                upload_id: 1,
                result: Err("<b>bad</b>".to_string()),
            },
        );

        let page = render_page(&state.view());

        assert!(page.contains("Error: &lt;b&gt;bad&lt;/b&gt;"));
        assert!(!page.contains(TEXT_LOADING));
    }

    #[test]
    fn document_is_rendered_with_theme_class() {
        let (state, _) = update(
            loading_state(),
            Msg::UploadFinished {
                upload_id: 1,
                result: Ok(Some(SanitizedHtml::trust_server_sanitized("<p>hi</p>"))),
            },
        );
        let (state, _) = update(state, Msg::ThemeSelected(Some("dark".to_string())));

        let page = render_page(&state.view());

        assert!(page.contains(r#"<body class="theme-dark">"#));
        assert!(page.contains("<div><p>hi</p></div>"));
        assert!(!page.contains(TEXT_PROMPT));
    }

    #[test]
    fn status_line_summarizes_view() {
        let (state, _) = update(
            loading_state(),
            Msg::UploadProgress {
                upload_id: 1,
                loaded: 1,
                total: 2,
            },
        );

        assert_eq!(
            status_line(&state.view()),
            "Converting... 50% | font 18px | theme light"
        );
    }
}
