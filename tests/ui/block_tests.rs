//! Block screen UI tests

use super::*;
use qcex::app::{BlockView, Load, Screen};

fn loaded_block_view() -> BlockView {
    let mut view = BlockView::new("10".to_string());
    view.block = Load::Ready(mock_block_detail());
    view
}

#[test]
fn test_block_loading_state() {
    let app = create_test_app(Screen::Block(BlockView::new("10".to_string())));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Block #10"));
    assert!(buffer_contains(&buffer, "Loading…"));
    // The table is there even before any rows arrive
    assert!(buffer_contains(&buffer, "Transactions (0)"));
    assert!(buffer_contains(&buffer, "TxID"));
}

#[test]
fn test_block_shows_header_fields() {
    let app = create_test_app(Screen::Block(loaded_block_view()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Hash: h10"));
    assert!(buffer_contains(&buffer, "Parent: h9 (#9)"));
    assert!(buffer_contains(&buffer, "Txs: 2"));
    assert!(buffer_contains(&buffer, &local_time(1700000000)));
    assert!(!buffer_contains(&buffer, "Loading…"));
}

#[test]
fn test_block_shows_extra_fields() {
    let app = create_test_app(Screen::Block(loaded_block_view()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "size_bytes: 512"));
}

#[test]
fn test_block_tx_rows() {
    let app = create_test_app(Screen::Block(loaded_block_view()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Transactions (2)"));
    assert!(buffer_contains(&buffer, "coinbase0001"));
    assert!(buffer_contains(&buffer, "transfer0002"));
    assert!(buffer_contains(&buffer, "alice01"));
    assert!(buffer_contains(&buffer, "5000000000"));
    assert!(buffer_contains(&buffer, "1250"));
}

#[test]
fn test_block_coinbase_sender_placeholder() {
    let app = create_test_app(Screen::Block(loaded_block_view()));
    let buffer = render_to_buffer(&app, 120, 40);
    let content = buffer_to_string(&buffer);

    let row = content
        .lines()
        .find(|line| line.contains("coinbase0001"))
        .unwrap();
    assert!(row.contains("—"));
    assert!(row.contains("miner01"));
}

#[test]
fn test_block_not_found() {
    let mut view = BlockView::new("99".to_string());
    view.block = Load::Failed("Block 99 not found".to_string());
    let app = create_test_app(Screen::Block(view));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Block #99"));
    assert!(buffer_contains(&buffer, "✗ Block 99 not found"));
    assert!(!buffer_contains(&buffer, "Loading…"));
}

#[test]
fn test_block_genesis_parent_is_not_a_link() {
    let mut block = mock_block_detail();
    block.height = 0;
    block.parent_hash = String::new();
    let mut view = BlockView::new("0".to_string());
    view.block = Load::Ready(block);
    let app = create_test_app(Screen::Block(view));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Parent:"));
    assert!(!buffer_contains(&buffer, "(#"));
}
