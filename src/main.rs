use qcex::api::ApiClient;
use qcex::app::App;
use qcex::config::Config;
use qcex::fetch::{self, Request, Response};
use qcex::ui;

use anyhow::{Context, Result};
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};
use std::io::stdout;
use tokio::sync::mpsc;
use tui_input::backend::crossterm::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    let api_url = config.resolve_api_url();
    let client = ApiClient::new(&api_url).with_context(|| format!("Bad API address {api_url}"))?;

    init_logging()?;
    log::info!("using API at {}", client.base_url());

    run_tui(client).await?;

    Ok(())
}

/// The terminal belongs to the UI, so log lines go to a file. Nothing is
/// written unless RUST_LOG is set.
fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let path = std::env::temp_dir().join("qcex.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {path:?}"))?;

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}

async fn run_tui(client: ApiClient) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(client.base_url().to_string());

    let (tx, mut rx) = mpsc::channel::<Response>(32);

    dispatch(&client, &tx, app.start());

    let result = run_event_loop(&mut terminal, &mut app, &client, &tx, &mut rx).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

/// Run each request on its own task; responses come back over the channel
/// in whatever order they complete.
fn dispatch(client: &ApiClient, tx: &mpsc::Sender<Response>, requests: Vec<Request>) {
    for request in requests {
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let response = fetch::execute(&client, request).await;
            let _ = tx.send(response).await;
        });
    }
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    client: &ApiClient,
    tx: &mpsc::Sender<Response>,
    rx: &mut mpsc::Receiver<Response>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Check for async results
        while let Ok(response) = rx.try_recv() {
            let follow_up = app.apply(response);
            dispatch(client, tx, follow_up);
        }

        // Poll for input events
        if event::poll(std::time::Duration::from_millis(50))? {
            let ev = event::read()?;

            if let Event::Key(key) = &ev {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global keys
                match key.code {
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    _ => {}
                }

                if app.search_focused() {
                    match key.code {
                        KeyCode::Enter => {
                            // Check if a history item is selected
                            if let Some(query) = app.get_selected_history_query() {
                                app.clear_history_selection();
                                let request = app.search(query);
                                dispatch(client, tx, vec![request]);
                            } else if let Some(request) = app.submit_search() {
                                dispatch(client, tx, vec![request]);
                            }
                        }
                        KeyCode::Up => {
                            app.select_history_prev();
                        }
                        KeyCode::Down => {
                            app.select_history_next();
                        }
                        KeyCode::Delete | KeyCode::Backspace
                            if app.selected_history_index.is_some() =>
                        {
                            app.delete_selected_history();
                        }
                        KeyCode::Tab => {
                            app.toggle_mode();
                        }
                        KeyCode::Esc => {}
                        _ => {
                            // Typing always returns to the search bar
                            app.clear_history_selection();
                            app.search_input.handle_event(&ev);
                        }
                    }
                } else {
                    let requests = match key.code {
                        KeyCode::Up | KeyCode::Char('k') => {
                            app.select_prev();
                            Vec::new()
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            app.select_next();
                            Vec::new()
                        }
                        KeyCode::Tab => {
                            app.toggle_mode();
                            Vec::new()
                        }
                        KeyCode::PageUp => {
                            app.scroll_dump(-10);
                            Vec::new()
                        }
                        KeyCode::PageDown => {
                            app.scroll_dump(10);
                            Vec::new()
                        }
                        KeyCode::Enter => app.follow_selected_link(),
                        KeyCode::Backspace | KeyCode::Char('b') => app.go_back(),
                        KeyCode::Char('h') | KeyCode::Char('/') => app.go_home(),
                        KeyCode::Char('r') => app.reload(),
                        _ => Vec::new(),
                    };
                    dispatch(client, tx, requests);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
