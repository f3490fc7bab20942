use super::*;

fn state() -> PanelState {
    PanelState::new(PanelConfig::default())
}

fn page(names: &[&str], has_more: Option<bool>) -> TensorPage {
    TensorPage {
        layers: names
            .iter()
            .map(|name| LayerEntry { name: (*name).to_owned(), ..LayerEntry::default() })
            .collect(),
        has_more,
        ..TensorPage::default()
    }
}

// =============================================================
// Initial load
// =============================================================

#[test]
fn new_state_is_loading_at_cursor_zero() {
    let s = state();
    assert!(s.loading);
    assert_eq!(s.cursor, 0);
    assert_eq!(s.limit(), 5);
    assert!(s.layers.is_empty());
    assert_eq!(s.window(), (0, 4));
}

#[test]
fn load_issues_query_for_current_window() {
    let mut s = state();
    let req = s.load();
    assert_eq!(req.seq, 1);
    assert_eq!(req.query.cursor, 0);
    assert_eq!(req.query.limit, 5);
    assert!(!req.query.no_kernel);
    assert!(req.query.no_bias);
}

#[test]
fn apply_replaces_layers_and_clears_loading() {
    let mut s = state();
    let req = s.load();
    assert!(s.apply(req.seq, Some(page(&["dense", "conv"], None))));
    assert!(!s.loading);
    assert_eq!(s.layers.len(), 2);
    assert_eq!(s.layers[1].name, "conv");
}

#[test]
fn failed_fetch_empties_list_and_hides_loading() {
    let mut s = state();
    let first = s.load();
    s.apply(first.seq, Some(page(&["dense"], None)));

    let req = s.next().expect("next");
    assert!(s.loading);
    assert!(s.apply(req.seq, None));
    assert!(s.layers.is_empty());
    assert!(!s.loading);
}

// =============================================================
// Previous / Next
// =============================================================

#[test]
fn previous_at_cursor_zero_is_noop() {
    let mut s = state();
    s.load();
    assert!(s.previous().is_none());
    assert_eq!(s.cursor, 0);
}

#[test]
fn previous_from_one_window_in_returns_to_zero_with_one_request() {
    let mut s = state();
    s.cursor = 5;
    let before = s.load().seq;
    let req = s.previous().expect("previous");
    assert_eq!(s.cursor, 0);
    assert_eq!(req.seq, before + 1);
    assert_eq!(req.query.cursor, 0);
}

#[test]
fn previous_never_goes_below_zero_for_partial_window() {
    let mut s = state();
    s.cursor = 3;
    assert!(!s.can_go_previous());
    assert!(s.previous().is_none());
    assert_eq!(s.cursor, 3);
}

#[test]
fn next_advances_by_page_size_even_after_short_page() {
    let mut s = state();
    let req = s.load();
    s.apply(req.seq, Some(page(&[], None)));

    let req = s.next().expect("next");
    assert_eq!(s.cursor, 5);
    assert_eq!(req.query.cursor, 5);
    assert_eq!(s.window(), (5, 9));

    let req = s.next().expect("next");
    assert_eq!(req.query.cursor, 10);
}

#[test]
fn next_is_disabled_once_endpoint_reports_last_window() {
    let mut s = state();
    let req = s.load();
    s.apply(req.seq, Some(page(&["dense"], Some(false))));
    assert!(!s.can_go_next());
    assert!(s.next().is_none());
    assert_eq!(s.cursor, 0);
}

#[test]
fn next_stays_enabled_when_endpoint_reports_more() {
    let mut s = state();
    let req = s.load();
    s.apply(req.seq, Some(page(&["dense"], Some(true))));
    assert!(s.can_go_next());
    assert!(s.next().is_some());
}

#[test]
fn huge_page_size_stops_next_instead_of_overflowing() {
    let max = u64::MAX.to_string();
    let config = PanelConfig::from_query(|key| (key == "limit").then(|| max.clone())).expect("config");
    let mut s = PanelState::new(config);
    let req = s.load();
    s.apply(req.seq, Some(page(&["dense"], None)));
    assert_eq!(s.window(), (0, u64::MAX - 1));

    let req = s.next().expect("first window fits");
    assert_eq!(req.query.cursor, u64::MAX);
    assert_eq!(s.window(), (u64::MAX, u64::MAX));
    assert!(!s.can_go_next());
    assert!(s.next().is_none());
    assert_eq!(s.cursor, u64::MAX);
}

// =============================================================
// Sequencing
// =============================================================

#[test]
fn stale_response_is_discarded() {
    let mut s = state();
    let first = s.next().expect("next");
    let second = s.next().expect("next");

    assert!(!s.apply(first.seq, Some(page(&["stale"], None))));
    assert!(s.loading);
    assert!(s.layers.is_empty());

    assert!(s.apply(second.seq, Some(page(&["fresh"], None))));
    assert_eq!(s.layers[0].name, "fresh");
    assert!(!s.loading);
}

#[test]
fn stale_response_after_latest_does_not_overwrite() {
    let mut s = state();
    let first = s.load();
    let second = s.next().expect("next");
    assert!(s.apply(second.seq, Some(page(&["fresh"], None))));
    assert!(!s.apply(first.seq, None));
    assert_eq!(s.layers[0].name, "fresh");
}

// =============================================================
// Kernel / bias toggles
// =============================================================

#[test]
fn toggles_refetch_only_on_change() {
    let mut s = state();
    assert!(s.shows_kernel());
    assert!(!s.shows_bias());

    assert!(s.set_show_kernel(true).is_none());
    let req = s.set_show_bias(true).expect("refetch");
    assert!(!req.query.no_bias);
    assert!(s.shows_bias());

    let req = s.set_show_kernel(false).expect("refetch");
    assert!(req.query.no_kernel);
    assert_eq!(req.query.cursor, 0);
}
