use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::codec;
use crate::error::CrawlError;
use crate::rpc::{RawBlock, RpcClient};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct JsonRpcRequest {
    jsonrpc: &'static str,
    method: &'static str,
    params: Vec<Value>,
    id: u64,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse<T> {
    result: Option<T>,
}

/// JSON-RPC 2.0 client over plain HTTP POST.
#[derive(Debug, Clone)]
pub struct HttpRpcClient {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpRpcClient {
    pub fn new(endpoint: &str) -> Result<Self, CrawlError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CrawlError::Rpc(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            http,
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: Vec<Value>,
    ) -> Result<Option<T>, CrawlError> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: 1,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| CrawlError::Rpc(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::Rpc(format!("{method} returned status {status}")));
        }

        let body: JsonRpcResponse<T> = response
            .json()
            .await
            .map_err(|e| CrawlError::RpcResponse(format!("{method}: {e}")))?;

        Ok(body.result)
    }
}

#[async_trait]
impl RpcClient for HttpRpcClient {
    async fn head_block_number(&self) -> Result<u64, CrawlError> {
        let head: String = self
            .call("eth_blockNumber", vec![])
            .await?
            .ok_or_else(|| CrawlError::RpcResponse("eth_blockNumber: null result".into()))?;

        codec::decode_u64(&head)
    }

    async fn block_by_number(&self, number: u64) -> Result<Option<RawBlock>, CrawlError> {
        self.call(
            "eth_getBlockByNumber",
            vec![json!(format!("{number:#x}")), json!(true)],
        )
        .await
    }
}
