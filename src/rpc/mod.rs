use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CrawlError;

pub mod client;

pub use client::HttpRpcClient;

/// A block as returned by `eth_getBlockByNumber` with full transaction
/// objects. Every field is the node's raw hex-quantity string; decoding
/// happens in the record builder, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBlock {
    pub number: Option<String>,
    pub hash: Option<String>,
    pub timestamp: Option<String>,
    #[serde(default)]
    pub transactions: Vec<RawTransaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    pub hash: Option<String>,
    pub block_hash: Option<String>,
    pub block_number: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub value: Option<String>,
}

/// The node-facing seam. One implementation talks JSON-RPC over HTTP; tests
/// substitute a canned chain.
#[async_trait]
pub trait RpcClient {
    /// Current head height via `eth_blockNumber`.
    async fn head_block_number(&self) -> Result<u64, CrawlError>;

    /// Fetches one block with full transaction detail. `None` means the node
    /// reported no block at that height.
    async fn block_by_number(&self, number: u64) -> Result<Option<RawBlock>, CrawlError>;
}
