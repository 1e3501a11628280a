//! Address screen UI tests

use super::*;
use qcex::app::{AddressView, Load, Screen};

#[test]
fn test_address_loading_state() {
    let app = create_test_app(Screen::Address(AddressView::new("addrX".to_string())));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "addrX"));
    assert!(buffer_contains(&buffer, "Loading…"));
    assert!(buffer_contains(&buffer, "History (0)"));
}

#[test]
fn test_address_history_rows() {
    let mut view = AddressView::new("addrX".to_string());
    view.history = Load::Ready(mock_address_history());
    let app = create_test_app(Screen::Address(view));
    let buffer = render_to_buffer(&app, 120, 40);
    let content = buffer_to_string(&buffer);

    assert!(buffer_contains(&buffer, "History (1)"));
    let row = content
        .lines()
        .find(|line| line.contains("reward0003"))
        .unwrap();
    assert!(row.contains("—"));
    assert!(row.contains("addrX"));
    assert!(row.contains("#12"));
    assert!(row.contains(&local_time(1700000100)));
}

#[test]
fn test_address_without_transactions() {
    let mut view = AddressView::new("fresh01".to_string());
    view.history = Load::Ready(AddressHistory {
        address: "fresh01".to_string(),
        txs: vec![],
    });
    let app = create_test_app(Screen::Address(view));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "fresh01"));
    assert!(buffer_contains(&buffer, "Transactions: 0"));
}

#[test]
fn test_address_toggle_target_in_title() {
    let mut view = AddressView::new("addrX".to_string());
    view.link_block = true;
    let app = create_test_app(Screen::Address(view));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Enter opens block"));
}

#[test]
fn test_address_failure() {
    let mut view = AddressView::new("addrX".to_string());
    view.history = Load::Failed("/address/addrX answered with HTTP 500".to_string());
    let app = create_test_app(Screen::Address(view));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "✗ /address/addrX answered with HTTP 500"));
}
