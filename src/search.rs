use crate::api::{ApiError, SearchResult};
use crate::route::Route;
use thiserror::Error;

/// Why a query was not submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Search query is empty")]
    Empty,
}

/// Check a raw query before it is sent for classification.
///
/// Empty and whitespace-only input is rejected here. Anything else goes to the
/// backend untouched, so the address fallback can reuse the exact string.
pub fn validate(input: &str) -> Result<&str, SearchError> {
    if input.trim().is_empty() {
        return Err(SearchError::Empty);
    }
    Ok(input)
}

/// Pick the view for a classified query. Block wins over tx; anything
/// unrecognized is taken to be an address.
pub fn resolve(result: &SearchResult, query: &str) -> Route {
    match result {
        SearchResult::Block { height } => Route::block(*height),
        SearchResult::Tx { txid } => Route::Tx(txid.clone()),
        SearchResult::NoMatch => Route::Address(query.to_string()),
    }
}

/// Like [`resolve`], with a failed classification counted as no match.
pub fn resolve_outcome(outcome: &Result<SearchResult, ApiError>, query: &str) -> Route {
    match outcome {
        Ok(result) => resolve(result, query),
        Err(e) => {
            log::debug!("search for {query:?} failed, treating as address: {e}");
            Route::Address(query.to_string())
        }
    }
}
