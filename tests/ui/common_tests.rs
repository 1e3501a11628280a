//! Common UI tests - layout, navigation help, and rendering edge cases

use super::*;
use qcex::app::{AddressView, BlockView, Load, OverviewView, Screen, TxView};

fn all_screens() -> Vec<Screen> {
    let mut block = BlockView::new("10".to_string());
    block.block = Load::Ready(mock_block_detail());
    let mut tx = TxView::new("transfer0002".to_string());
    tx.tx = Load::Ready(mock_tx_detail());
    let mut address = AddressView::new("addrX".to_string());
    address.history = Load::Ready(mock_address_history());

    vec![
        Screen::Overview(OverviewView::new()),
        Screen::Block(block),
        Screen::Tx(tx),
        Screen::Address(address),
    ]
}

// ==================== Navigation Help Tests ====================

#[test]
fn test_screens_show_navigation_help() {
    for screen in all_screens() {
        let app = create_test_app(screen);
        let buffer = render_to_buffer(&app, 120, 40);

        assert!(
            buffer_contains(&buffer, "Esc quit"),
            "Screen should show navigation help"
        );
    }
}

#[test]
fn test_detail_screens_show_back_and_home() {
    for screen in all_screens().into_iter().skip(1) {
        let app = create_test_app(screen);
        let buffer = render_to_buffer(&app, 120, 40);

        assert!(buffer_contains(&buffer, "b back"));
        assert!(buffer_contains(&buffer, "h home"));
    }
}

// ==================== Layout Tests ====================

#[test]
fn test_small_terminal_does_not_panic() {
    for screen in all_screens() {
        let app = create_test_app(screen);
        let _ = render_to_buffer(&app, 20, 5);
        let _ = render_to_buffer(&app, 1, 1);
    }
}

#[test]
fn test_large_terminal() {
    for screen in all_screens() {
        let app = create_test_app(screen);
        let _ = render_to_buffer(&app, 300, 100);
    }
}

#[test]
fn test_render_is_idempotent() {
    for screen in all_screens() {
        let app = create_test_app(screen);
        let first = render_to_buffer(&app, 120, 40);
        let second = render_to_buffer(&app, 120, 40);
        assert_eq!(first, second);
    }
}

#[test]
fn test_selected_row_scrolls_into_view() {
    let mut block = mock_block_detail();
    block.transactions = (0..60)
        .map(|i| {
            serde_json::from_value(json!({"txid": format!("bulk{i:04}"), "to_addr": "x"}))
                .unwrap()
        })
        .collect();
    let mut view = BlockView::new("10".to_string());
    view.block = Load::Ready(block);
    view.selected_index = 55;

    let app = create_test_app(Screen::Block(view));
    let buffer = render_to_buffer(&app, 120, 40);
    assert!(buffer_contains(&buffer, "bulk0055"));
}
