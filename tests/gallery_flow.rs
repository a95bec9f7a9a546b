//! Whole-flow scenarios driven through the public event API.

use zallery::api::{FetchKind, RequestTicket};
use zallery::app::state::END_OF_RESULTS;
use zallery::{handle_event, initialize, Action, AppState, Config, Event};

fn gallery(per_page: u32) -> AppState {
    initialize(&Config {
        access_key: Some("test-key".into()),
        api_base_url: "https://api.example.test".into(),
        per_page,
        ..Config::default()
    })
}

fn only_fetch(actions: &[Action]) -> (String, RequestTicket) {
    let fetches: Vec<_> = actions
        .iter()
        .filter_map(|a| match a {
            Action::Fetch(request) => Some(request),
            _ => None,
        })
        .collect();
    assert_eq!(fetches.len(), 1, "expected exactly one fetch in {actions:?}");
    let ticket = RequestTicket::from_context(&fetches[0].context).expect("ticket in context");
    (fetches[0].url.clone(), ticket)
}

fn page_body(page: u32, per_page: u32, total_pages: u32) -> Vec<u8> {
    let results: Vec<serde_json::Value> = (0..per_page)
        .map(|i| {
            let id = format!("p{page}-{i}");
            serde_json::json!({
                "id": id,
                "width": 4000,
                "height": 3000,
                "likes": i,
                "color": "#a0b0c0",
                "alt_description": format!("a cat on page {page}"),
                "urls": { "small": format!("https://img.test/{id}/small"), "regular": format!("https://img.test/{id}/regular") },
                "user": { "name": "Ada", "username": "ada" }
            })
        })
        .collect();
    serde_json::to_vec(&serde_json::json!({
        "total": u64::from(total_pages * per_page),
        "total_pages": total_pages,
        "results": results,
    }))
    .unwrap()
}

fn complete(state: &mut AppState, ticket: RequestTicket, status: u16, body: Vec<u8>) {
    handle_event(state, &Event::FetchCompleted { ticket, status, body }).unwrap();
}

fn end_message_shown(state: &AppState) -> bool {
    state
        .compute_viewmodel(40, 120)
        .status
        .end_of_results
        .is_some_and(|text| text == END_OF_RESULTS)
}

#[test]
fn cats_are_paged_until_the_end() {
    let mut state = gallery(2);

    let (_, actions) = handle_event(&mut state, &Event::SubmitSearch("cats".into())).unwrap();
    let (url, ticket) = only_fetch(&actions);
    assert_eq!(
        url,
        "https://api.example.test/search/photos?query=cats&page=1&per_page=2"
    );
    complete(&mut state, ticket, 200, page_body(1, 2, 3));

    assert_eq!(state.images.len(), 2);
    assert_eq!(state.page, 1);
    assert!(state.can_load_more());
    assert!(!end_message_shown(&state));

    let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    let (url, ticket) = only_fetch(&actions);
    assert!(url.contains("page=2"));
    complete(&mut state, ticket, 200, page_body(2, 2, 3));

    assert_eq!(state.images.len(), 4);
    assert_eq!(state.page, 2);
    assert!(!end_message_shown(&state));

    let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    let (_, ticket) = only_fetch(&actions);
    complete(&mut state, ticket, 200, page_body(3, 2, 3));

    assert_eq!(state.images.len(), 6);
    assert_eq!(state.page, 3);
    assert!(end_message_shown(&state));
    assert!(!state.can_load_more());
    assert!(state.compute_viewmodel(40, 120).status.load_more.is_none());
    assert_eq!(state.cursor, 5);

    let (render, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
}

#[test]
fn new_search_starts_over() {
    let mut state = gallery(2);
    let (_, actions) = handle_event(&mut state, &Event::SubmitSearch("cats".into())).unwrap();
    complete(&mut state, only_fetch(&actions).1, 200, page_body(1, 2, 3));
    let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    complete(&mut state, only_fetch(&actions).1, 200, page_body(2, 2, 3));
    assert_eq!(state.images.len(), 4);

    let (_, actions) = handle_event(&mut state, &Event::SubmitSearch("red fox".into())).unwrap();
    let (url, ticket) = only_fetch(&actions);
    assert!(url.contains("query=red%20fox&page=1"));
    assert_eq!(state.page, 1);
    assert!(state.images.is_empty());
    assert_eq!(state.total_pages, 0);

    complete(&mut state, ticket, 200, page_body(1, 2, 5));
    assert_eq!(state.images.len(), 2);
    assert_eq!(state.images[0].id, "p1-0");
}

#[test]
fn failed_load_more_can_be_retried() {
    let mut state = gallery(2);
    let (_, actions) = handle_event(&mut state, &Event::SubmitSearch("cats".into())).unwrap();
    complete(&mut state, only_fetch(&actions).1, 200, page_body(1, 2, 3));

    let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    let (_, ticket) = only_fetch(&actions);
    complete(&mut state, ticket, 503, b"upstream unavailable".to_vec());

    assert!(!state.loading);
    assert_eq!(state.page, 1);
    assert_eq!(state.images.len(), 2);
    let message = state.error.clone().expect("error stored");
    assert!(message.contains("503"));
    let vm = state.compute_viewmodel(40, 120);
    assert_eq!(vm.status.error.as_deref(), Some(message.as_str()));
    assert!(vm.toasts.iter().any(|t| t.is_error && t.message == message));

    let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    let (_, retry) = only_fetch(&actions);
    assert_eq!(retry.kind, FetchKind::LoadMore);
    assert_eq!(retry.page, 2);
}

#[test]
fn late_answer_for_an_old_query_is_dropped() {
    let mut state = gallery(2);
    let (_, first) = handle_event(&mut state, &Event::SubmitSearch("cats".into())).unwrap();
    let (_, second) = handle_event(&mut state, &Event::SubmitSearch("dogs".into())).unwrap();

    complete(&mut state, only_fetch(&second).1, 200, page_body(1, 2, 1));
    complete(&mut state, only_fetch(&first).1, 200, page_body(9, 2, 9));

    assert_eq!(state.query, "dogs");
    assert_eq!(state.total_pages, 1);
    assert!(state.images.iter().all(|image| image.id.starts_with("p1-")));
}

#[test]
fn blank_query_never_fetches() {
    let mut state = gallery(2);
    let (_, actions) = handle_event(&mut state, &Event::SubmitSearch(String::new())).unwrap();

    assert!(!actions.iter().any(|a| matches!(a, Action::Fetch(_))));
    let vm = state.compute_viewmodel(40, 120);
    assert!(vm.toasts.iter().any(|t| t.message == "Please enter a search query"));
    assert!(vm.empty_state.is_some());
}

#[test]
fn modal_shows_the_selected_image() {
    let mut state = gallery(2);
    let (_, actions) = handle_event(&mut state, &Event::SubmitSearch("cats".into())).unwrap();
    complete(&mut state, only_fetch(&actions).1, 200, page_body(1, 2, 1));

    handle_event(&mut state, &Event::OpenSelected).unwrap();
    let modal = state.compute_viewmodel(40, 120).modal.expect("modal open");
    assert_eq!(modal.title, "a cat on page 1");
    assert!(modal
        .fields
        .iter()
        .any(|(label, value)| label == "Full size" && value == "https://img.test/p1-1/regular"));

    handle_event(&mut state, &Event::CloseModal).unwrap();
    assert!(state.compute_viewmodel(40, 120).modal.is_none());
}
