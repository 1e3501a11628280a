mod error;
mod types;

pub use error::ApiError;
pub use types::*;

use serde_json::Value;

/// Read-only client for the block indexer API.
///
/// Stateless between calls: every method performs exactly one GET against
/// `base_url + path`. No retries, no timeout beyond the transport default.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let url = reqwest::Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and parse the body as JSON
    pub async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {url}");

        let transport = |source| ApiError::Transport {
            path: path.to_string(),
            source,
        };

        let response = self.http.get(&url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {url} -> {status}");
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        serde_json::from_slice(&body).map_err(|source| {
            log::warn!("GET {url}: body is not JSON ({source})");
            ApiError::Decode {
                path: path.to_string(),
                source,
            }
        })
    }

    pub async fn status(&self) -> Result<ChainStatus, ApiError> {
        let path = "/status";
        parse_status(path, self.get_json(path).await?)
    }

    pub async fn latest_blocks(&self) -> Result<Vec<BlockSummary>, ApiError> {
        let path = "/blocks";
        parse_blocks(path, self.get_json(path).await?)
    }

    /// Block detail by height. The height is passed through as text; the
    /// backend does the parsing.
    pub async fn block(&self, height: &str) -> Result<BlockDetail, ApiError> {
        let path = format!("/block/{}", urlencoding::encode(height));
        parse_block(&path, height, self.get_json(&path).await?)
    }

    pub async fn transaction(&self, txid: &str) -> Result<TransactionDetail, ApiError> {
        let path = format!("/tx/{}", urlencoding::encode(txid));
        parse_transaction(&path, txid, self.get_json(&path).await?)
    }

    pub async fn address(&self, address: &str) -> Result<AddressHistory, ApiError> {
        let path = format!("/address/{}", urlencoding::encode(address));
        parse_address(&path, address, self.get_json(&path).await?)
    }

    /// Ask the backend to classify a free-text query
    pub async fn search(&self, query: &str) -> Result<SearchResult, ApiError> {
        let path = format!("/search/{}", urlencoding::encode(query));
        let value = self.get_json(&path).await?;
        Ok(SearchResult::from_value(&value))
    }

    pub async fn supply(&self) -> Result<Supply, ApiError> {
        let path = "/supply";
        parse_supply(path, self.get_json(path).await?)
    }
}
