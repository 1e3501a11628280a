//! UI rendering tests for qcex
//!
//! Screens are drawn into a `TestBackend` and the buffer is searched for the
//! text a user would see.
//! Run with: cargo test --test ui_tests

pub mod address_tests;
pub mod block_tests;
pub mod common_tests;
pub mod overview_tests;

use qcex::api::{AddressHistory, BlockDetail, BlockSummary, TransactionDetail, TransactionSummary};
use qcex::app::{App, Screen};
use qcex::ui::draw;

use chrono::{Local, TimeZone};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use serde_json::{json, Value};

// ==================== Test Data Builders ====================

pub const BLOCK_HASH: &str = "abc123def4567890abc123def4567890";

pub fn mock_block_summary() -> BlockSummary {
    BlockSummary {
        height: 1500,
        hash: BLOCK_HASH.to_string(),
        tx_count: 3,
        timestamp: 1700000000,
    }
}

pub fn mock_tx_summaries() -> Vec<TransactionSummary> {
    serde_json::from_value(json!([
        {
            "txid": "coinbase0001",
            "from_addr": null,
            "to_addr": "miner01",
            "amount": "5000000000",
            "fee": "0",
            "block_height": 10,
            "timestamp": 1700000000
        },
        {
            "txid": "transfer0002",
            "from_addr": "alice01",
            "to_addr": "bob01",
            "amount": 1250,
            "fee": 10,
            "block_height": 10,
            "timestamp": 1700000000
        }
    ]))
    .unwrap()
}

pub fn mock_block_detail() -> BlockDetail {
    let mut block: BlockDetail = serde_json::from_value(json!({
        "height": 10,
        "hash": "h10",
        "parent_hash": "h9",
        "tx_count": 2,
        "timestamp": 1700000000,
        "size_bytes": 512
    }))
    .unwrap();
    block.transactions = mock_tx_summaries();
    block
}

pub fn mock_tx_raw() -> Value {
    json!({
        "txid": "transfer0002",
        "from_addr": "alice01",
        "to_addr": "bob01",
        "amount": "1250",
        "fee": "10",
        "block_height": 10,
        "timestamp": 1700000000,
        "memo": "rent for march"
    })
}

pub fn mock_tx_detail() -> TransactionDetail {
    let raw = mock_tx_raw();
    TransactionDetail {
        summary: serde_json::from_value(raw.clone()).unwrap(),
        raw,
    }
}

pub fn mock_address_history() -> AddressHistory {
    AddressHistory {
        address: "addrX".to_string(),
        txs: serde_json::from_value(json!([
            {
                "txid": "reward0003",
                "from_addr": null,
                "to_addr": "addrX",
                "amount": "50",
                "block_height": 12,
                "timestamp": 1700000100
            }
        ]))
        .unwrap(),
    }
}

pub fn create_test_app(screen: Screen) -> App {
    let mut app = App::new("http://localhost:8080".to_string());
    app.screen = screen;
    app
}

pub fn local_time(ts: i64) -> String {
    Local
        .timestamp_opt(ts, 0)
        .single()
        .unwrap()
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

// ==================== Helper Functions ====================

/// Render the app to a buffer and return it
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            draw(frame, app);
        })
        .unwrap();

    terminal.backend().buffer().clone()
}

/// Check if buffer contains a specific string anywhere
pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    buffer_to_string(buffer).contains(needle)
}

/// Convert buffer to a single string for searching
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut content = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            content.push(
                buffer
                    .cell((x, y))
                    .map(|c| c.symbol().chars().next().unwrap_or(' '))
                    .unwrap_or(' '),
            );
        }
        content.push('\n');
    }
    content
}

/// Print buffer for debugging
#[allow(dead_code)]
pub fn print_buffer(buffer: &Buffer) {
    for line in buffer_to_string(buffer).lines() {
        println!("{}", line.trim_end());
    }
}
