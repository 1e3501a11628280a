use crate::api::{
    AddressHistory, ApiError, BlockDetail, BlockSummary, ChainStatus, SearchResult, Supply,
    TransactionDetail, TransactionSummary,
};
use crate::fetch::{Fetch, Payload, Request, Response, Ticket};
use crate::route::Route;
use crate::search;
use tui_input::Input;

/// Session search history length
pub const MAX_RECENT_SEARCHES: usize = 10;

/// Back-stack depth; the oldest entries fall off first
pub const MAX_BACK_HISTORY: usize = 100;

/// Data for one section of a screen
#[derive(Debug, Clone, PartialEq)]
pub enum Load<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Load<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => {
                log::warn!("{e}");
                Self::Failed(e.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverviewFocus {
    Search,
    Blocks,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewView {
    pub status: Load<ChainStatus>,
    pub blocks: Load<Vec<BlockSummary>>,
    pub supply: Load<Supply>,
    pub focus: OverviewFocus,
    pub selected_index: usize,
}

impl OverviewView {
    pub fn new() -> Self {
        Self {
            status: Load::Loading,
            blocks: Load::Loading,
            supply: Load::Loading,
            focus: OverviewFocus::Search,
            selected_index: 0,
        }
    }

    pub fn block_list(&self) -> &[BlockSummary] {
        self.blocks.ready().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for OverviewView {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockView {
    pub height: String,
    pub block: Load<BlockDetail>,
    pub selected_index: usize,
    pub list_mode: bool, // true = tx list, false = parent link
}

impl BlockView {
    pub fn new(height: String) -> Self {
        Self {
            height,
            block: Load::Loading,
            selected_index: 0,
            list_mode: true,
        }
    }

    /// Embedded transactions, empty until the block arrives
    pub fn transactions(&self) -> &[TransactionSummary] {
        self.block
            .ready()
            .map(|b| b.transactions.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TxView {
    pub txid: String,
    pub tx: Load<TransactionDetail>,
    pub selected_link: usize,
    pub dump_scroll: u16,
}

impl TxView {
    pub fn new(txid: String) -> Self {
        Self {
            txid,
            tx: Load::Loading,
            selected_link: 0,
            dump_scroll: 0,
        }
    }

    /// Navigable links in display order: block, from, to
    pub fn links(&self) -> Vec<Route> {
        let Some(detail) = self.tx.ready() else {
            return Vec::new();
        };
        let tx = &detail.summary;

        let mut links = Vec::new();
        if let Some(height) = tx.block_height {
            links.push(Route::block(height));
        }
        if let Some(from) = tx.sender() {
            links.push(Route::Address(from.to_string()));
        }
        if let Some(to) = tx.receiver() {
            links.push(Route::Address(to.to_string()));
        }
        links
    }

    /// The received record, pretty-printed; empty until it arrives
    pub fn dump_text(&self) -> String {
        match self.tx.ready() {
            Some(detail) => serde_json::to_string_pretty(&detail.raw)
                .unwrap_or_else(|_| detail.raw.to_string()),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddressView {
    pub address: String,
    pub history: Load<AddressHistory>,
    pub selected_index: usize,
    pub link_block: bool, // Enter opens the row's block instead of the tx
}

impl AddressView {
    pub fn new(address: String) -> Self {
        Self {
            address,
            history: Load::Loading,
            selected_index: 0,
            link_block: false,
        }
    }

    pub fn transactions(&self) -> &[TransactionSummary] {
        self.history
            .ready()
            .map(|h| h.txs.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Overview(OverviewView),
    Block(BlockView),
    Tx(TxView),
    Address(AddressView),
}

impl Screen {
    fn loading(route: &Route) -> Self {
        match route {
            Route::Overview => Self::Overview(OverviewView::new()),
            Route::Block(height) => Self::Block(BlockView::new(height.clone())),
            Route::Tx(txid) => Self::Tx(TxView::new(txid.clone())),
            Route::Address(addr) => Self::Address(AddressView::new(addr.clone())),
        }
    }
}

pub struct App {
    pub api_url: String,
    pub route: Route,
    pub screen: Screen,
    pub history: Vec<Route>,
    pub generation: u64,
    pub search_input: Input,
    pub recent_searches: Vec<String>,
    pub selected_history_index: Option<usize>,
    /// Query awaiting classification
    pub pending_search: Option<String>,
    /// One-line message shown on the overview (e.g. a rejected query)
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            route: Route::Overview,
            screen: Screen::Overview(OverviewView::new()),
            history: Vec::new(),
            generation: 0,
            search_input: Input::default(),
            recent_searches: Vec::new(),
            selected_history_index: None,
            pending_search: None,
            notice: None,
            should_quit: false,
        }
    }

    /// Requests for the initial overview
    pub fn start(&mut self) -> Vec<Request> {
        self.enter(Route::Overview)
    }

    pub fn ticket(&self) -> Ticket {
        Ticket {
            generation: self.generation,
            route: self.route.clone(),
        }
    }

    /// A response belongs to the screen on display only if it was issued for
    /// this very navigation.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.generation && ticket.route == self.route
    }

    // ==================== Navigation ====================

    pub fn navigate(&mut self, route: Route) -> Vec<Request> {
        if route != self.route {
            self.history.push(self.route.clone());
            if self.history.len() > MAX_BACK_HISTORY {
                self.history.remove(0);
            }
        }
        self.enter(route)
    }

    pub fn go_back(&mut self) -> Vec<Request> {
        match self.history.pop() {
            Some(prev) => self.enter(prev),
            None => self.go_home(),
        }
    }

    pub fn go_home(&mut self) -> Vec<Request> {
        self.history.clear();
        self.enter(Route::Overview)
    }

    /// Fetch the current screen again
    pub fn reload(&mut self) -> Vec<Request> {
        self.enter(self.route.clone())
    }

    fn enter(&mut self, route: Route) -> Vec<Request> {
        self.generation += 1;
        self.route = route;
        self.screen = Screen::loading(&self.route);
        self.pending_search = None;
        self.notice = None;
        self.selected_history_index = None;

        let fetches = match &self.route {
            Route::Overview => vec![Fetch::Status, Fetch::LatestBlocks, Fetch::Supply],
            Route::Block(height) => vec![Fetch::Block(height.clone())],
            Route::Tx(txid) => vec![Fetch::Tx(txid.clone())],
            Route::Address(addr) => vec![Fetch::Address(addr.clone())],
        };

        let ticket = self.ticket();
        fetches
            .into_iter()
            .map(|fetch| Request {
                ticket: ticket.clone(),
                fetch,
            })
            .collect()
    }

    /// Fold a response into the screen it was issued for. Stale responses are
    /// dropped. A resolved search may navigate, hence the returned requests.
    pub fn apply(&mut self, response: Response) -> Vec<Request> {
        if !self.is_current(&response.ticket) {
            log::debug!(
                "dropping stale response for {} (generation {}, now {})",
                response.ticket.route,
                response.ticket.generation,
                self.generation
            );
            return Vec::new();
        }

        let payload = match response.payload {
            Payload::Search { query, result } => return self.finish_search(query, result),
            other => other,
        };

        match (payload, &mut self.screen) {
            (Payload::Status(result), Screen::Overview(view)) => {
                view.status = Load::from_result(result);
            }
            (Payload::LatestBlocks(result), Screen::Overview(view)) => {
                view.blocks = Load::from_result(result);
            }
            (Payload::Supply(result), Screen::Overview(view)) => {
                // Not every indexer serves /supply; keep quiet about it
                view.supply = match result {
                    Ok(supply) => Load::Ready(supply),
                    Err(e) => {
                        log::debug!("supply unavailable: {e}");
                        Load::Failed(e.to_string())
                    }
                };
            }
            (Payload::Block(result), Screen::Block(view)) => {
                view.block = Load::from_result(result);
            }
            (Payload::Tx(result), Screen::Tx(view)) => {
                view.tx = Load::from_result(result);
            }
            (Payload::Address(result), Screen::Address(view)) => {
                view.history = Load::from_result(result);
            }
            (payload, _) => {
                log::debug!("response does not fit the current screen: {payload:?}");
            }
        }

        Vec::new()
    }

    fn finish_search(
        &mut self,
        query: String,
        result: Result<SearchResult, ApiError>,
    ) -> Vec<Request> {
        if self.pending_search.as_deref() != Some(query.as_str()) {
            log::debug!("dropping superseded search for {query:?}");
            return Vec::new();
        }
        self.pending_search = None;
        let route = search::resolve_outcome(&result, &query);
        log::info!("search {query:?} -> {route}");
        self.navigate(route)
    }

    // ==================== Search ====================

    pub fn submit_search(&mut self) -> Option<Request> {
        let query = self.search_input.value().to_string();
        if let Err(e) = search::validate(&query) {
            self.notice = Some(e.to_string());
            return None;
        }

        self.search_input.reset();
        Some(self.search(query))
    }

    /// Issue a classification request for `query`
    pub fn search(&mut self, query: String) -> Request {
        self.add_recent_search(query.clone());
        self.notice = None;
        self.pending_search = Some(query.clone());
        Request {
            ticket: self.ticket(),
            fetch: Fetch::Search(query),
        }
    }

    fn add_recent_search(&mut self, query: String) {
        self.recent_searches.retain(|s| s != &query);
        self.recent_searches.insert(0, query);
        self.recent_searches.truncate(MAX_RECENT_SEARCHES);
    }

    pub fn select_history_prev(&mut self) {
        if self.recent_searches.is_empty() {
            return;
        }

        self.selected_history_index = match self.selected_history_index {
            None => Some(0),
            Some(0) => None, // Wrap to search input
            Some(i) => Some(i - 1),
        };
    }

    pub fn select_history_next(&mut self) {
        let len = self.recent_searches.len();
        if len == 0 {
            return;
        }

        self.selected_history_index = match self.selected_history_index {
            None => Some(0),
            Some(i) if i >= len - 1 => None, // Wrap to search input
            Some(i) => Some(i + 1),
        };
    }

    pub fn get_selected_history_query(&self) -> Option<String> {
        self.selected_history_index
            .and_then(|i| self.recent_searches.get(i).cloned())
    }

    pub fn clear_history_selection(&mut self) {
        self.selected_history_index = None;
    }

    pub fn delete_selected_history(&mut self) {
        let Some(idx) = self.selected_history_index else {
            return;
        };
        if idx >= self.recent_searches.len() {
            return;
        }

        self.recent_searches.remove(idx);
        if self.recent_searches.is_empty() {
            self.selected_history_index = None;
        } else if idx >= self.recent_searches.len() {
            self.selected_history_index = Some(self.recent_searches.len() - 1);
        }
    }

    // ==================== Screen state ====================

    pub fn is_on_overview(&self) -> bool {
        matches!(self.screen, Screen::Overview(_))
    }

    /// Keystrokes go to the search bar
    pub fn search_focused(&self) -> bool {
        matches!(&self.screen, Screen::Overview(v) if v.focus == OverviewFocus::Search)
    }

    pub fn select_prev(&mut self) {
        match &mut self.screen {
            Screen::Overview(view) => {
                view.selected_index = view.selected_index.saturating_sub(1);
            }
            Screen::Block(view) => {
                if view.list_mode {
                    view.selected_index = view.selected_index.saturating_sub(1);
                }
            }
            Screen::Tx(view) => {
                let max = view.links().len();
                if max > 0 {
                    view.selected_link = if view.selected_link > 0 {
                        view.selected_link - 1
                    } else {
                        max - 1
                    };
                }
            }
            Screen::Address(view) => {
                view.selected_index = view.selected_index.saturating_sub(1);
            }
        }
    }

    pub fn select_next(&mut self) {
        match &mut self.screen {
            Screen::Overview(view) => {
                let len = view.block_list().len();
                if view.selected_index + 1 < len {
                    view.selected_index += 1;
                }
            }
            Screen::Block(view) => {
                let len = view.transactions().len();
                if view.list_mode && view.selected_index + 1 < len {
                    view.selected_index += 1;
                }
            }
            Screen::Tx(view) => {
                let max = view.links().len();
                if max > 0 {
                    view.selected_link = (view.selected_link + 1) % max;
                }
            }
            Screen::Address(view) => {
                let len = view.transactions().len();
                if view.selected_index + 1 < len {
                    view.selected_index += 1;
                }
            }
        }
    }

    /// Tab: search bar <-> block list on the overview, tx list <-> parent link
    /// on a block, tx <-> block target on an address.
    pub fn toggle_mode(&mut self) {
        match &mut self.screen {
            Screen::Overview(view) => {
                view.focus = match view.focus {
                    OverviewFocus::Search => OverviewFocus::Blocks,
                    OverviewFocus::Blocks => OverviewFocus::Search,
                };
                self.selected_history_index = None;
            }
            Screen::Block(view) => {
                view.list_mode = !view.list_mode;
                view.selected_index = 0;
            }
            Screen::Address(view) => {
                view.link_block = !view.link_block;
            }
            Screen::Tx(_) => {}
        }
    }

    /// Scroll the raw record; the last line stays on screen
    pub fn scroll_dump(&mut self, delta: i32) {
        if let Screen::Tx(view) = &mut self.screen {
            let last_line = view.dump_text().lines().count().saturating_sub(1);
            let max = u16::try_from(last_line).unwrap_or(u16::MAX);
            view.dump_scroll = view
                .dump_scroll
                .saturating_add_signed(delta as i16)
                .min(max);
        }
    }

    /// The route the current selection points at
    pub fn get_selected_link(&self) -> Option<Route> {
        match &self.screen {
            Screen::Overview(view) => match view.focus {
                OverviewFocus::Search => None,
                OverviewFocus::Blocks => view
                    .block_list()
                    .get(view.selected_index)
                    .map(|b| Route::block(b.height)),
            },
            Screen::Block(view) => {
                if view.list_mode {
                    view.transactions()
                        .get(view.selected_index)
                        .map(|tx| Route::Tx(tx.txid.clone()))
                } else {
                    view.block
                        .ready()
                        .and_then(BlockDetail::parent_height)
                        .map(Route::block)
                }
            }
            Screen::Tx(view) => view.links().get(view.selected_link).cloned(),
            Screen::Address(view) => {
                let tx = view.transactions().get(view.selected_index)?;
                if view.link_block {
                    tx.block_height.map(Route::block)
                } else {
                    Some(Route::Tx(tx.txid.clone()))
                }
            }
        }
    }

    pub fn follow_selected_link(&mut self) -> Vec<Request> {
        match self.get_selected_link() {
            Some(route) => self.navigate(route),
            None => Vec::new(),
        }
    }
}
