//! Outbound requests and their responses, tagged for the stale-response guard.

use crate::api::{
    AddressHistory, ApiClient, ApiError, BlockDetail, BlockSummary, ChainStatus, SearchResult,
    Supply, TransactionDetail,
};
use crate::route::Route;

/// Identifies the screen a request was issued for: the navigation generation
/// and the route that was active at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    Status,
    LatestBlocks,
    Supply,
    Block(String),
    Tx(String),
    Address(String),
    Search(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub ticket: Ticket,
    pub fetch: Fetch,
}

#[derive(Debug)]
pub enum Payload {
    Status(Result<ChainStatus, ApiError>),
    LatestBlocks(Result<Vec<BlockSummary>, ApiError>),
    Supply(Result<Supply, ApiError>),
    Block(Result<BlockDetail, ApiError>),
    Tx(Result<TransactionDetail, ApiError>),
    Address(Result<AddressHistory, ApiError>),
    Search {
        query: String,
        result: Result<SearchResult, ApiError>,
    },
}

#[derive(Debug)]
pub struct Response {
    pub ticket: Ticket,
    pub payload: Payload,
}

/// Run one request against the API.
pub async fn execute(client: &ApiClient, request: Request) -> Response {
    let payload = match request.fetch {
        Fetch::Status => Payload::Status(client.status().await),
        Fetch::LatestBlocks => Payload::LatestBlocks(client.latest_blocks().await),
        Fetch::Supply => Payload::Supply(client.supply().await),
        Fetch::Block(height) => Payload::Block(client.block(&height).await),
        Fetch::Tx(txid) => Payload::Tx(client.transaction(&txid).await),
        Fetch::Address(addr) => Payload::Address(client.address(&addr).await),
        Fetch::Search(query) => {
            let result = client.search(&query).await;
            Payload::Search { query, result }
        }
    };

    Response {
        ticket: request.ticket,
        payload,
    }
}
