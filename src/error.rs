use thiserror::Error;

/// Failure categories for a crawl run. Every one of these is fatal: the run
/// aborts on first occurrence and nothing staged since the last commit is
/// written.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid block range: {0}")]
    InvalidRange(String),

    #[error("rpc request failed: {0}")]
    Rpc(String),

    #[error("unexpected rpc response: {0}")]
    RpcResponse(String),

    #[error("malformed hex field: {0}")]
    MalformedHex(String),
}
