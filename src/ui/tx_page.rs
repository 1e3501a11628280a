use super::helper::*;
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::TransactionDetail;
use crate::app::{Load, TxView};
use crate::ui::NAV_HELP_TX;

pub fn draw_tx_result(frame: &mut Frame, view: &TxView) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(9), // Tx fields
        Constraint::Min(3),    // Raw record
        Constraint::Length(1), // Nav help
    ])
    .split(padded_rect(area, 1));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" 📄 Transaction ");

    let lines = match &view.tx {
        Load::Loading => vec![format_kv("TxID", &view.txid), Line::from(LOADING)],
        Load::Failed(msg) => vec![format_kv("TxID", &view.txid), format_failure(msg)],
        Load::Ready(detail) => tx_lines(detail, view.selected_link),
    };
    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    let dump_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Raw ");

    let dump = Paragraph::new(view.dump_text())
        .block(dump_block)
        .style(Style::default().fg(Color::Gray))
        .scroll((view.dump_scroll, 0));
    frame.render_widget(dump, chunks[1]);

    let help = Paragraph::new(NAV_HELP_TX)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn tx_lines(detail: &TransactionDetail, selected_link: usize) -> Vec<Line<'static>> {
    let tx = &detail.summary;
    let mut link_idx = 0;
    let mut lines = vec![format_kv("TxID", &tx.txid)];

    // Block (link 0 when present)
    match tx.block_height {
        Some(height) => {
            lines.push(format_kv_link(
                "Block",
                &format!("#{height}"),
                selected_link == link_idx,
            ));
            link_idx += 1;
        }
        None => lines.push(format_kv("Block", PLACEHOLDER)),
    }

    lines.push(format_kv("Time", &format_optional_timestamp(tx.timestamp)));

    for (key, addr) in [("From", tx.sender()), ("To", tx.receiver())] {
        match addr {
            Some(addr) => {
                lines.push(format_kv_link(key, addr, selected_link == link_idx));
                link_idx += 1;
            }
            None => lines.push(format_kv(key, PLACEHOLDER)),
        }
    }

    lines.push(format_kv("Amount", &format_quantity(tx.amount.as_ref())));
    lines.push(format_kv("Fee", &format_quantity(tx.fee.as_ref())));

    lines
}
