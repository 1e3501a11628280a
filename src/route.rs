//! Client-facing routes: `/`, `/block/:height`, `/tx/:txid`, `/address/:addr`.
//!
//! Route keys are held decoded. `path()` escapes them and `parse()` undoes it.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Overview,
    /// Height as text; the backend parses it
    Block(String),
    Tx(String),
    Address(String),
}

impl Route {
    pub fn block(height: u64) -> Self {
        Self::Block(height.to_string())
    }

    pub fn path(&self) -> String {
        match self {
            Self::Overview => "/".to_string(),
            Self::Block(height) => format!("/block/{}", urlencoding::encode(height)),
            Self::Tx(txid) => format!("/tx/{}", urlencoding::encode(txid)),
            Self::Address(addr) => format!("/address/{}", urlencoding::encode(addr)),
        }
    }

    /// Parse a route path. Returns `None` for unknown paths or empty keys.
    pub fn parse(path: &str) -> Option<Self> {
        if path.is_empty() || path == "/" {
            return Some(Self::Overview);
        }

        let rest = path.strip_prefix('/')?;
        let (kind, key) = rest.split_once('/')?;
        if key.is_empty() || key.contains('/') {
            return None;
        }
        let key = urlencoding::decode(key).ok()?.into_owned();

        match kind {
            "block" => Some(Self::Block(key)),
            "tx" => Some(Self::Tx(key)),
            "address" => Some(Self::Address(key)),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
