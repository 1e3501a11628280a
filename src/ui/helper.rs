use chrono::{Local, TimeZone};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::api::{BlockSummary, Quantity, TransactionSummary};

/// Shown wherever a value is absent or not loaded yet
pub const PLACEHOLDER: &str = "—";

pub const LOADING: &str = "Loading…";

// Fixed prefix lengths for identifiers in tables
pub const BLOCK_HASH_PREFIX: usize = 16;
pub const BLOCK_TXID_PREFIX: usize = 20;
pub const ADDRESS_TXID_PREFIX: usize = 18;

// ============================================================================
// Helper Functions
// ============================================================================

/// First `len` characters of `id`, with `…` appended when something was cut
pub fn truncate_id(id: &str, len: usize) -> String {
    if id.chars().count() > len {
        let prefix: String = id.chars().take(len).collect();
        format!("{prefix}…")
    } else {
        id.to_string()
    }
}

/// Unix seconds rendered in local time
pub fn format_timestamp(ts: i64) -> String {
    match Local.timestamp_opt(ts, 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_optional_timestamp(ts: Option<i64>) -> String {
    ts.map(format_timestamp)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_addr(addr: Option<&str>) -> String {
    addr.unwrap_or(PLACEHOLDER).to_string()
}

pub fn format_quantity(q: Option<&Quantity>) -> String {
    q.map(Quantity::to_string)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_height(height: Option<u64>) -> String {
    height
        .map(|h| format!("#{h}"))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Left-aligned fixed-width cell; longer text is cut with `…`
fn cell(text: &str, width: usize) -> String {
    let text = if text.chars().count() > width {
        truncate_id(text, width.saturating_sub(1))
    } else {
        text.to_string()
    };
    format!("{text:<width$}")
}

fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().bg(Color::Cyan).fg(Color::Black)
    } else {
        Style::default()
    }
}

fn header_item<'a>(columns: &[(&str, usize)]) -> ListItem<'a> {
    let spans: Vec<Span> = columns
        .iter()
        .map(|(name, width)| {
            Span::styled(
                format!("{} ", cell(name, *width)),
                Style::default().fg(Color::DarkGray),
            )
        })
        .collect();
    ListItem::new(Line::from(spans))
}

const OVERVIEW_COLUMNS: [(&str, usize); 4] =
    [("Height", 10), ("Hash", 18), ("Txs", 6), ("Time", 19)];

pub fn format_block_list_header<'a>() -> ListItem<'a> {
    header_item(&OVERVIEW_COLUMNS)
}

pub fn format_block_list_item<'a>(block: &BlockSummary, selected: bool) -> ListItem<'a> {
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", cell(&format!("#{}", block.height), 10)),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!(
                "{} ",
                cell(&truncate_id(&block.hash, BLOCK_HASH_PREFIX), 18)
            ),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("{} ", cell(&block.tx_count.to_string(), 6)),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format_timestamp(block.timestamp),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    ListItem::new(line).style(row_style(selected))
}

const BLOCK_TX_COLUMNS: [(&str, usize); 6] = [
    ("#", 4),
    ("TxID", 22),
    ("From", 22),
    ("To", 22),
    ("Amount", 14),
    ("Fee", 10),
];

pub fn format_block_tx_header<'a>() -> ListItem<'a> {
    header_item(&BLOCK_TX_COLUMNS)
}

/// Row of a block's transaction table; `index` is the render position
pub fn format_block_tx_item<'a>(
    index: usize,
    tx: &TransactionSummary,
    selected: bool,
) -> ListItem<'a> {
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", cell(&index.to_string(), 4)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{} ", cell(&truncate_id(&tx.txid, BLOCK_TXID_PREFIX), 22)),
            Style::default().fg(Color::Cyan),
        ),
        addr_span(tx.sender(), 22),
        addr_span(tx.receiver(), 22),
        Span::styled(
            format!("{} ", cell(&format_quantity(tx.amount.as_ref()), 14)),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            cell(&format_quantity(tx.fee.as_ref()), 10),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    ListItem::new(line).style(row_style(selected))
}

const ADDRESS_TX_COLUMNS: [(&str, usize); 6] = [
    ("Time", 19),
    ("TxID", 20),
    ("Block", 10),
    ("From", 22),
    ("To", 22),
    ("Amount", 14),
];

pub fn format_address_tx_header<'a>() -> ListItem<'a> {
    header_item(&ADDRESS_TX_COLUMNS)
}

pub fn format_address_tx_item<'a>(tx: &TransactionSummary, selected: bool) -> ListItem<'a> {
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", cell(&format_optional_timestamp(tx.timestamp), 19)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!(
                "{} ",
                cell(&truncate_id(&tx.txid, ADDRESS_TXID_PREFIX), 20)
            ),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{} ", cell(&format_height(tx.block_height), 10)),
            Style::default().fg(Color::Cyan),
        ),
        addr_span(tx.sender(), 22),
        addr_span(tx.receiver(), 22),
        Span::styled(
            cell(&format_quantity(tx.amount.as_ref()), 14),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    ListItem::new(line).style(row_style(selected))
}

fn addr_span<'a>(addr: Option<&str>, width: usize) -> Span<'a> {
    let style = if addr.is_some() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!("{} ", cell(&format_addr(addr), width)), style)
}

pub fn format_kv(key: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

pub fn format_kv_link(key: &str, value: &str, selected: bool) -> Line<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED)
    };

    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), style),
    ])
}

pub fn format_failure(msg: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("✗ {msg}"),
        Style::default().fg(Color::Red),
    )])
}

pub fn centered_rect(percent_x: u16, area: Rect) -> Rect {
    let popup_layout = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(area);

    popup_layout[1]
}

pub fn padded_rect(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y + padding,
        width: area.width.saturating_sub(padding * 2),
        height: area.height.saturating_sub(padding * 2),
    }
}
