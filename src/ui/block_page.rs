use super::helper::*;

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use serde_json::Value;

use crate::api::BlockDetail;
use crate::app::{BlockView, Load};
use crate::ui::NAV_HELP;

pub fn draw_block_result(frame: &mut Frame, view: &BlockView) {
    let area = frame.area();
    let padded = padded_rect(area, 1);

    let header_lines = header_lines(view);
    let header_height = (header_lines.len() as u16 + 2).min(padded.height / 2);

    let chunks = Layout::vertical([
        Constraint::Length(header_height), // Block header
        Constraint::Min(3),                // Transaction list
        Constraint::Length(1),             // Nav help
    ])
    .split(padded);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" 📦 Block #{} ", view.height));

    frame.render_widget(Paragraph::new(header_lines).block(block), chunks[0]);

    // The table is drawn in every state; it is simply empty until the block arrives
    let txs = view.transactions();
    let tx_title = if view.list_mode {
        format!(" Transactions ({}) [selected] ", txs.len())
    } else {
        format!(" Transactions ({}) [Tab to select] ", txs.len())
    };

    let tx_block = Block::default()
        .borders(Borders::ALL)
        .border_style(if view.list_mode {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        })
        .title(tx_title);

    let visible_count = chunks[1].height.saturating_sub(3) as usize; // -2 borders, -1 header
    let start = view.selected_index.saturating_sub(visible_count / 2);

    let mut items: Vec<ListItem> = vec![format_block_tx_header()];
    items.extend(
        txs.iter()
            .enumerate()
            .skip(start)
            .take(visible_count)
            .map(|(i, tx)| {
                let is_selected = view.list_mode && i == view.selected_index;
                format_block_tx_item(i, tx, is_selected)
            }),
    );

    frame.render_widget(List::new(items).block(tx_block), chunks[1]);

    let help = Paragraph::new(NAV_HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn header_lines(view: &BlockView) -> Vec<Line<'static>> {
    match &view.block {
        Load::Loading => vec![Line::from(LOADING)],
        Load::Failed(msg) => vec![format_failure(msg)],
        Load::Ready(block) => block_lines(block, !view.list_mode),
    }
}

fn block_lines(block: &BlockDetail, parent_selected: bool) -> Vec<Line<'static>> {
    let mut lines = vec![format_kv("Hash", &block.hash)];

    match block.parent_height() {
        Some(parent) => lines.push(format_kv_link(
            "Parent",
            &format!("{} (#{parent})", block.parent_hash),
            parent_selected,
        )),
        None => lines.push(format_kv("Parent", &block.parent_hash)),
    }

    lines.push(format_kv("Time", &format_timestamp(block.timestamp)));
    lines.push(format_kv("Txs", &block.tx_count.to_string()));

    // Whatever else the indexer reports, shown as received
    for (key, value) in &block.extra {
        let shown = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        lines.push(format_kv(key, &shown));
    }

    lines
}
