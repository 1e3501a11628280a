mod address_page;
mod block_page;
mod helper;
mod tx_page;

use address_page::draw_address_result;
use block_page::draw_block_result;
use helper::*;
use tx_page::draw_tx_result;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, Load, OverviewFocus, OverviewView, Screen};

const TITLE_ART: &str = r#"
 ██████╗  ██████╗███████╗██╗  ██╗
██╔═══██╗██╔════╝██╔════╝╚██╗██╔╝
██║   ██║██║     █████╗   ╚███╔╝
██║▄▄ ██║██║     ██╔══╝   ██╔██╗
╚██████╔╝╚██████╗███████╗██╔╝ ██╗
 ╚══▀▀═╝  ╚═════╝╚══════╝╚═╝  ╚═╝
"#;

/// Rows of the recent-searches panel; longer histories scroll
const HISTORY_ROWS: usize = 5;

const NAV_HELP: &str =
    "↑↓ navigate • Enter select • Tab toggle • b back • h home • r reload • Esc quit";
const NAV_HELP_TX: &str =
    "↑↓ navigate • Enter select • PgUp/PgDn scroll • b back • h home • r reload • Esc quit";

pub fn draw(frame: &mut Frame, app: &App) {
    match &app.screen {
        Screen::Overview(view) => draw_overview(frame, app, view),
        Screen::Block(view) => draw_block_result(frame, view),
        Screen::Tx(view) => draw_tx_result(frame, view),
        Screen::Address(view) => draw_address_result(frame, view),
    }
}

fn draw_overview(frame: &mut Frame, app: &App, view: &OverviewView) {
    let area = frame.area();
    let recent_searches = &app.recent_searches;
    let has_history = !recent_searches.is_empty();

    // History section height (visible rows + 2 for border)
    let history_height = if has_history {
        (recent_searches.len().min(HISTORY_ROWS) + 2) as u16
    } else {
        0
    };

    let chunks = Layout::vertical([
        Constraint::Length(8),              // Title
        Constraint::Length(1),              // Subtitle
        Constraint::Length(1),              // Spacing
        Constraint::Length(3),              // Search bar
        Constraint::Length(1),              // Search notice
        Constraint::Length(history_height), // History
        Constraint::Length(1),              // Chain status
        Constraint::Length(1),              // Help
        Constraint::Min(0),                 // Latest blocks
    ])
    .split(area);

    // Title
    let title = Paragraph::new(TITLE_ART)
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let subtitle = Paragraph::new(Line::from(vec![
        Span::styled("Block Explorer • API: ", Style::default().fg(Color::Gray)),
        Span::styled(&app.api_url, Style::default().fg(Color::Green)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[1]);

    // Search bar
    let search_area = centered_rect(60, chunks[3]);
    let search_selected =
        view.focus == OverviewFocus::Search && app.selected_history_index.is_none();
    draw_search_bar(frame, app, search_area, search_selected);

    let notice = if let Some(query) = &app.pending_search {
        Line::from(format!("Searching {query}…")).fg(Color::Yellow)
    } else if let Some(msg) = &app.notice {
        Line::from(msg.clone()).fg(Color::Red)
    } else {
        Line::from("")
    };
    frame.render_widget(
        Paragraph::new(notice).alignment(Alignment::Center),
        chunks[4],
    );

    // History section
    if has_history {
        let history_area = centered_rect(60, chunks[5]);
        draw_history_list(frame, app, history_area);
    }

    frame.render_widget(
        Paragraph::new(chain_status_line(view)).alignment(Alignment::Center),
        chunks[6],
    );

    let help_text = match view.focus {
        OverviewFocus::Search if has_history => {
            "Enter search • ↑↓ history • Del remove • Tab blocks • Esc quit"
        }
        OverviewFocus::Search => "Enter search • Tab blocks • Esc quit",
        OverviewFocus::Blocks => "↑↓ navigate • Enter open • Tab search • r reload • Esc quit",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[7]);

    draw_latest_blocks(frame, view, chunks[8]);
}

fn chain_status_line(view: &OverviewView) -> Line<'static> {
    let tip = view
        .status
        .ready()
        .map(|s| s.tip_height.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let mut spans = vec![
        Span::styled("Tip height: ", Style::default().fg(Color::DarkGray)),
        Span::styled(tip, Style::default().fg(Color::White).bold()),
    ];

    if let Load::Failed(msg) = &view.status {
        spans.push(Span::styled(
            format!(" ({msg})"),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(supply) = view.supply.ready() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Supply: ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("{} total / {} circulating", supply.total, supply.circulating),
            Style::default().fg(Color::White),
        ));
    }

    Line::from(spans)
}

fn draw_latest_blocks(frame: &mut Frame, view: &OverviewView, area: Rect) {
    let list_focused = view.focus == OverviewFocus::Blocks;
    let blocks = view.block_list();

    let title = match &view.blocks {
        Load::Failed(msg) => format!(" Latest Blocks ✗ {msg} "),
        _ => format!(" Latest Blocks ({}) ", blocks.len()),
    };

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(if list_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        })
        .title(title);

    let visible_count = area.height.saturating_sub(2) as usize; // -1 border, -1 header
    let start = view.selected_index.saturating_sub(visible_count / 2);

    let mut items: Vec<ListItem> = vec![format_block_list_header()];
    items.extend(
        blocks
            .iter()
            .enumerate()
            .skip(start)
            .take(visible_count)
            .map(|(i, b)| {
                let is_selected = list_focused && i == view.selected_index;
                format_block_list_item(b, is_selected)
            }),
    );

    let list = List::new(items).block(block);
    frame.render_widget(list, centered_rect(90, area));
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect, selected: bool) {
    let border_color = if selected {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" 🔍 Search ")
        .title_style(Style::default().fg(border_color));

    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = app.search_input.visual_scroll(inner_width);

    let display_text = if app.search_input.value().is_empty() {
        Span::styled(
            "Search height / block hash / txid / address",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(app.search_input.value(), Style::default().fg(Color::White))
    };

    let input = Paragraph::new(display_text)
        .block(block)
        .scroll((0, scroll as u16));

    frame.render_widget(input, area);

    // Only show cursor if search bar is selected
    if selected {
        let cursor_x =
            area.x + 1 + (app.search_input.visual_cursor().saturating_sub(scroll)) as u16;
        let cursor_y = area.y + 1;

        if cursor_x < (area.x + area.width).saturating_sub(1) {
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

fn draw_history_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" Recent Searches ({}) ", app.recent_searches.len()));

    // Keep the selected entry inside the window
    let start = app
        .selected_history_index
        .map_or(0, |i| (i + 1).saturating_sub(HISTORY_ROWS));

    let items: Vec<ListItem> = app
        .recent_searches
        .iter()
        .enumerate()
        .skip(start)
        .take(HISTORY_ROWS)
        .map(|(i, query)| {
            let is_selected = app.selected_history_index == Some(i);
            let style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };

            ListItem::new(format!(" {}", truncate_id(query, 60))).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
