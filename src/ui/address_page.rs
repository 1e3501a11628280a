use super::helper::*;
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{AddressView, Load};
use crate::ui::NAV_HELP;

pub fn draw_address_result(frame: &mut Frame, view: &AddressView) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(4), // Address header
        Constraint::Min(3),    // Transaction history
        Constraint::Length(1), // Nav help
    ])
    .split(padded_rect(area, 1));

    let address = view
        .history
        .ready()
        .map(|h| h.address.as_str())
        .unwrap_or(&view.address);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" 👤 Address ");

    let status = match &view.history {
        Load::Loading => Line::from(LOADING),
        Load::Failed(msg) => format_failure(msg),
        Load::Ready(history) => format_kv("Transactions", &history.txs.len().to_string()),
    };

    let lines = vec![
        Line::from(vec![Span::styled(
            address.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )]),
        status,
    ];
    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    let txs = view.transactions();
    let target = if view.link_block { "block" } else { "tx" };
    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" History ({}) [Enter opens {target}] ", txs.len()));

    let visible_count = chunks[1].height.saturating_sub(3) as usize; // -2 borders, -1 header
    let start = view.selected_index.saturating_sub(visible_count / 2);

    let mut items: Vec<ListItem> = vec![format_address_tx_header()];
    items.extend(
        txs.iter()
            .enumerate()
            .skip(start)
            .take(visible_count)
            .map(|(i, tx)| format_address_tx_item(tx, i == view.selected_index)),
    );

    frame.render_widget(List::new(items).block(list_block), chunks[1]);

    let help = Paragraph::new(NAV_HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}
