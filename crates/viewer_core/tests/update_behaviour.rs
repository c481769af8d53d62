use std::sync::Once;

use pretty_assertions::assert_eq;
use viewer_core::{
    update, ContentView, Effect, Msg, PageMode, PageState, SanitizedHtml, SelectedFile,
    GENERIC_FAILURE_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(viewer_logging::initialize_for_tests);
}

fn pick(state: PageState, path: &str) -> (PageState, Vec<Effect>) {
    update(state, Msg::FileSelected(SelectedFile::from_path(path)))
}

fn finish(
    state: PageState,
    upload_id: u64,
    result: Result<Option<&str>, &str>,
) -> (PageState, Vec<Effect>) {
    let result = result
        .map(|html| html.map(SanitizedHtml::trust_server_sanitized))
        .map_err(ToOwned::to_owned);
    update(state, Msg::UploadFinished { upload_id, result })
}

#[test]
fn file_selection_starts_upload_and_disables_input() {
    init_logging();
    let state = PageState::new();

    let (mut next, effects) = pick(state, "/docs/paper.pdf");
    let view = next.view();

    assert_eq!(view.content, ContentView::Loading { percent: None });
    assert!(!view.file_input_enabled);
    assert!(next.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::StartUpload {
            upload_id: 1,
            file: SelectedFile::from_path("/docs/paper.pdf").unwrap(),
        }]
    );
}

#[test]
fn cancelled_picker_leaves_state_unchanged() {
    init_logging();
    let (state, _) = pick(PageState::new(), "/docs/paper.pdf");
    let (mut state, _) = finish(state, 1, Err("too large"));
    assert!(state.consume_dirty());
    let before = state.clone();

    let (mut next, effects) = update(state, Msg::FileSelected(None));

    assert_eq!(next, before);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn success_displays_returned_markup_exactly() {
    init_logging();
    let (state, _) = pick(PageState::new(), "/docs/paper.pdf");

    let (next, effects) = finish(state, 1, Ok(Some("<p>hi</p>")));
    let view = next.view();

    assert!(effects.is_empty());
    assert!(view.file_input_enabled);
    match view.content {
        ContentView::Document(content) => assert_eq!(content.as_str(), "<p>hi</p>"),
        other => panic!("expected document, got {other:?}"),
    }
}

#[test]
fn server_detail_becomes_error_message() {
    init_logging();
    let (state, _) = pick(PageState::new(), "/docs/huge.pdf");

    let (next, _) = finish(state, 1, Err("too large"));

    assert_eq!(
        next.mode(),
        &PageMode::Error {
            message: "too large".to_string()
        }
    );
    assert!(next.view().file_input_enabled);
}

#[test]
fn empty_failure_message_falls_back_to_generic_text() {
    init_logging();
    let (state, _) = pick(PageState::new(), "/docs/paper.pdf");

    let (next, _) = finish(state, 1, Err(""));

    assert_eq!(
        next.view().content,
        ContentView::Error {
            message: GENERIC_FAILURE_MESSAGE.to_string()
        }
    );
}

#[test]
fn response_without_content_returns_to_prompt() {
    init_logging();
    let (state, _) = pick(PageState::new(), "/docs/paper.pdf");
    let (state, _) = finish(state, 1, Ok(None));
    assert_eq!(state.view().content, ContentView::Prompt);

    let (state, _) = pick(state, "/docs/paper.pdf");
    let (state, _) = finish(state, 2, Ok(Some("")));
    assert_eq!(state.view().content, ContentView::Prompt);
}

#[test]
fn new_selection_after_error_or_display_restarts_loading() {
    init_logging();
    let (state, _) = pick(PageState::new(), "/docs/a.pdf");
    let (state, _) = finish(state, 1, Err("boom"));

    let (state, effects) = pick(state, "/docs/b.pdf");
    assert!(state.is_loading());
    assert_eq!(effects.len(), 1);

    let (state, _) = finish(state, 2, Ok(Some("<h1>b</h1>")));
    let (state, effects) = pick(state, "/docs/c.pdf");

    // Prior content is cleared as soon as loading starts.
    assert_eq!(state.view().content, ContentView::Loading { percent: None });
    assert_eq!(
        effects,
        vec![Effect::StartUpload {
            upload_id: 3,
            file: SelectedFile::from_path("/docs/c.pdf").unwrap(),
        }]
    );
}

#[test]
fn selection_while_loading_is_ignored() {
    init_logging();
    let (state, _) = pick(PageState::new(), "/docs/a.pdf");
    let before = state.clone();

    let (next, effects) = pick(state, "/docs/b.pdf");

    assert_eq!(next, before);
    assert!(effects.is_empty());
}

#[test]
fn progress_updates_loading_percent() {
    init_logging();
    let (mut state, _) = pick(PageState::new(), "/docs/a.pdf");
    state.consume_dirty();

    let (mut state, _) = update(
        state,
        Msg::UploadProgress {
            upload_id: 1,
            loaded: 512,
            total: 2048,
        },
    );

    assert_eq!(state.view().content, ContentView::Loading { percent: Some(25) });
    assert!(state.consume_dirty());
}

#[test]
fn stale_upload_results_are_ignored() {
    init_logging();
    let (state, _) = pick(PageState::new(), "/docs/a.pdf");
    let (state, _) = finish(state, 1, Err("boom"));
    let (state, _) = pick(state, "/docs/b.pdf");
    let before = state.clone();

    let (state, _) = finish(state, 1, Ok(Some("<p>late</p>")));
    let (state, _) = update(
        state,
        Msg::UploadProgress {
            upload_id: 1,
            loaded: 1,
            total: 2,
        },
    );

    assert_eq!(state, before);
}

#[test]
fn result_without_upload_in_flight_is_ignored() {
    init_logging();
    let state = PageState::new();

    let (next, _) = finish(state.clone(), 1, Ok(Some("<p>x</p>")));

    assert_eq!(next, state);
}
