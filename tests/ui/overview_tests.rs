//! Overview screen UI tests

use super::*;
use qcex::api::ChainStatus;
use qcex::app::{Load, OverviewFocus, OverviewView, Screen, MAX_RECENT_SEARCHES};

fn loaded_overview() -> OverviewView {
    OverviewView {
        status: Load::Ready(ChainStatus { tip_height: 1500 }),
        blocks: Load::Ready(vec![mock_block_summary()]),
        supply: Load::Failed("/supply answered with HTTP 404".to_string()),
        focus: OverviewFocus::Search,
        selected_index: 0,
    }
}

#[test]
fn test_overview_shows_title_and_search_bar() {
    let app = create_test_app(Screen::Overview(OverviewView::new()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "████"));
    assert!(buffer_contains(&buffer, "Search"));
    assert!(buffer_contains(&buffer, "http://localhost:8080"));
}

#[test]
fn test_overview_shows_tip_and_latest_block() {
    let app = create_test_app(Screen::Overview(loaded_overview()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Tip height: 1500"));
    assert!(buffer_contains(&buffer, "#1500"));
    assert!(buffer_contains(&buffer, "abc123def4567890…"));
    assert!(!buffer_contains(&buffer, BLOCK_HASH));
    assert!(buffer_contains(&buffer, &local_time(1700000000)));
    assert!(buffer_contains(&buffer, "Latest Blocks (1)"));
}

#[test]
fn test_overview_before_status_shows_placeholder() {
    let app = create_test_app(Screen::Overview(OverviewView::new()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Tip height: —"));
    assert!(buffer_contains(&buffer, "Latest Blocks (0)"));
}

#[test]
fn test_overview_blocks_failure_is_visible() {
    let mut view = loaded_overview();
    view.blocks = Load::Failed("/blocks answered with HTTP 500".to_string());
    let app = create_test_app(Screen::Overview(view));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "✗ /blocks answered with HTTP 500"));
    // Status is unaffected by the list failing
    assert!(buffer_contains(&buffer, "Tip height: 1500"));
}

#[test]
fn test_overview_shows_supply_when_served() {
    let mut view = loaded_overview();
    view.supply = Load::Ready(
        serde_json::from_value(json!({"total": "21000000", "circulating": 19000000})).unwrap(),
    );
    let app = create_test_app(Screen::Overview(view));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "21000000 total / 19000000 circulating"));
}

#[test]
fn test_overview_shows_recent_searches() {
    let mut app = create_test_app(Screen::Overview(loaded_overview()));
    app.recent_searches = vec!["1500".to_string(), "addrX".to_string()];
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Recent Searches"));
    assert!(buffer_contains(&buffer, "addrX"));
}

#[test]
fn test_overview_shows_notice_and_pending_search() {
    let mut app = create_test_app(Screen::Overview(loaded_overview()));
    app.notice = Some("Search query is empty".to_string());
    let buffer = render_to_buffer(&app, 120, 40);
    assert!(buffer_contains(&buffer, "Search query is empty"));

    app.notice = None;
    app.pending_search = Some("abc".to_string());
    let buffer = render_to_buffer(&app, 120, 40);
    assert!(buffer_contains(&buffer, "Searching abc…"));
}

#[test]
fn test_overview_help_follows_focus() {
    let mut view = loaded_overview();
    view.focus = OverviewFocus::Blocks;
    let app = create_test_app(Screen::Overview(view));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Enter open"));
}

#[test]
fn test_history_selection_beyond_panel_is_visible() {
    let mut app = create_test_app(Screen::Overview(loaded_overview()));
    app.recent_searches = (0..8).map(|i| format!("query{i:02}")).collect();
    for _ in 0..7 {
        app.select_history_next();
    }
    let selected = app.get_selected_history_query().unwrap();
    assert_eq!(selected, "query06");

    let buffer = render_to_buffer(&app, 120, 40);
    assert!(buffer_contains(&buffer, "Recent Searches (8)"));
    assert!(buffer_contains(&buffer, &selected));
    // The window slides down, so the first entries scroll out
    assert!(!buffer_contains(&buffer, "query01"));
}

#[test]
fn test_history_shows_every_kept_query_when_walked() {
    let mut app = create_test_app(Screen::Overview(loaded_overview()));
    for i in 0..MAX_RECENT_SEARCHES {
        app.search(format!("query{i:02}"));
    }
    app.pending_search = None;

    for _ in 0..MAX_RECENT_SEARCHES {
        app.select_history_next();
        let selected = app.get_selected_history_query().unwrap();
        let buffer = render_to_buffer(&app, 120, 40);
        assert!(buffer_contains(&buffer, &selected), "{selected} not rendered");
    }
}
