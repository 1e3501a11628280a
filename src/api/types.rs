use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::ApiError;

// ============================================================================
// Data Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainStatus {
    pub tip_height: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlockSummary {
    pub height: u64,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub tx_count: u64,
    #[serde(default)]
    pub timestamp: i64,
}

/// Block header as served by `/block/{height}`, with its transactions attached.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlockDetail {
    pub height: u64,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub parent_hash: String,
    #[serde(default)]
    pub tx_count: u64,
    #[serde(default)]
    pub timestamp: i64,
    /// Fields the client does not interpret (size, difficulty, nonce, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    pub transactions: Vec<TransactionSummary>,
}

impl BlockDetail {
    pub fn summary(&self) -> BlockSummary {
        BlockSummary {
            height: self.height,
            hash: self.hash.clone(),
            tx_count: self.tx_count,
            timestamp: self.timestamp,
        }
    }

    /// Height of the parent block, if there is one
    pub fn parent_height(&self) -> Option<u64> {
        self.height.checked_sub(1)
    }
}

/// An amount in minimal units. The indexer sends either a JSON number or a
/// decimal string; both are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionSummary {
    pub txid: String,
    #[serde(default)]
    pub from_addr: Option<String>,
    #[serde(default)]
    pub to_addr: Option<String>,
    #[serde(default)]
    pub amount: Option<Quantity>,
    #[serde(default)]
    pub fee: Option<Quantity>,
    #[serde(default)]
    pub block_height: Option<u64>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl TransactionSummary {
    /// Field-by-field read of a record whose shape does not match. Fields of
    /// an unexpected type are left out; `txid` falls back to the route key.
    pub fn from_record(raw: &Value, txid: &str) -> Self {
        let text = |key: &str| raw.get(key).and_then(Value::as_str).map(str::to_string);
        let quantity = |key: &str| raw.get(key).and_then(|v| Quantity::deserialize(v).ok());

        Self {
            txid: text("txid").unwrap_or_else(|| txid.to_string()),
            from_addr: text("from_addr"),
            to_addr: text("to_addr"),
            amount: quantity("amount"),
            fee: quantity("fee"),
            block_height: raw.get("block_height").and_then(Value::as_u64),
            timestamp: raw.get("timestamp").and_then(Value::as_i64),
        }
    }

    /// Sender address; coinbase-like transactions have none.
    pub fn sender(&self) -> Option<&str> {
        self.from_addr.as_deref().filter(|a| !a.is_empty())
    }

    pub fn receiver(&self) -> Option<&str> {
        self.to_addr.as_deref().filter(|a| !a.is_empty())
    }
}

/// A transaction record: the fields this client reads, plus the complete
/// record exactly as received.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDetail {
    pub summary: TransactionSummary,
    pub raw: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressHistory {
    pub address: String,
    pub txs: Vec<TransactionSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Supply {
    pub total: Quantity,
    pub circulating: Quantity,
}

/// Backend classification of a free-text query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Block { height: u64 },
    Tx { txid: String },
    /// Anything else, including the backend's explicit "address" tag
    NoMatch,
}

impl SearchResult {
    /// Reads `{ type, data }`. A tag whose data lacks the identifier it needs is
    /// treated as no match.
    pub fn from_value(value: &Value) -> Self {
        let data = value.get("data");
        match value.get("type").and_then(Value::as_str) {
            Some("block") => data
                .and_then(|d| d.get("height"))
                .and_then(Value::as_u64)
                .map(|height| Self::Block { height })
                .unwrap_or(Self::NoMatch),
            Some("tx") => data
                .and_then(|d| d.get("txid"))
                .and_then(Value::as_str)
                .map(|txid| Self::Tx {
                    txid: txid.to_string(),
                })
                .unwrap_or(Self::NoMatch),
            _ => Self::NoMatch,
        }
    }
}

// ============================================================================
// Response envelopes
// ============================================================================

#[derive(Deserialize)]
struct BlocksEnvelope {
    #[serde(default)]
    blocks: Vec<BlockSummary>,
}

#[derive(Deserialize)]
struct BlockEnvelope {
    #[serde(default)]
    block: Option<BlockDetail>,
    #[serde(default)]
    transactions: Vec<TransactionSummary>,
}

#[derive(Deserialize)]
struct AddressEnvelope {
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    txs: Vec<TransactionSummary>,
}

fn decode<T: DeserializeOwned>(path: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|source| ApiError::Decode {
        path: path.to_string(),
        source,
    })
}

pub fn parse_status(path: &str, value: Value) -> Result<ChainStatus, ApiError> {
    decode(path, value)
}

pub fn parse_blocks(path: &str, value: Value) -> Result<Vec<BlockSummary>, ApiError> {
    decode::<BlocksEnvelope>(path, value).map(|env| env.blocks)
}

pub fn parse_block(path: &str, height: &str, value: Value) -> Result<BlockDetail, ApiError> {
    let envelope: BlockEnvelope = decode(path, value)?;
    let mut block = envelope.block.ok_or_else(|| ApiError::NotFound {
        what: format!("Block {height}"),
    })?;
    block.transactions = envelope.transactions;
    Ok(block)
}

pub fn parse_transaction(
    path: &str,
    txid: &str,
    value: Value,
) -> Result<TransactionDetail, ApiError> {
    let raw = match value {
        Value::Object(mut map) => map.remove("tx").unwrap_or(Value::Null),
        _ => Value::Null,
    };
    if raw.is_null() {
        return Err(ApiError::NotFound {
            what: format!("Transaction {txid}"),
        });
    }
    let summary = serde_json::from_value(raw.clone()).unwrap_or_else(|e| {
        log::warn!("{path}: unexpected transaction shape ({e}), reading fields one by one");
        TransactionSummary::from_record(&raw, txid)
    });
    Ok(TransactionDetail { summary, raw })
}

pub fn parse_address(path: &str, address: &str, value: Value) -> Result<AddressHistory, ApiError> {
    let envelope: AddressEnvelope = decode(path, value)?;
    Ok(AddressHistory {
        address: envelope
            .address
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| address.to_string()),
        txs: envelope.txs,
    })
}

pub fn parse_supply(path: &str, value: Value) -> Result<Supply, ApiError> {
    decode(path, value)
}
