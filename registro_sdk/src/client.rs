use crate::error::{ClientError, Result};
use crate::types::{BlockAck, BlockRecord, NewBlock};
use reqwest::{Client, RequestBuilder};
use tracing::debug;

/// Client for the ledger node's HTTP API.
///
/// The node exposes two endpoints: `POST /add_block` and `GET /chain`.
/// Nothing else is called, and nothing the node returns is validated beyond
/// being well-formed JSON of the expected shape.
#[derive(Clone)]
pub struct LedgerClient {
    base_url: String,
    http: Client,
}

impl LedgerClient {
    /// Create a new client
    pub fn new(node_url: impl Into<String>) -> Self {
        Self {
            base_url: node_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Create a client with a custom reqwest client
    pub fn with_client(node_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: node_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a record. The node stores it and echoes the stored block back.
    pub async fn add_block(&self, record: &NewBlock) -> Result<BlockAck> {
        let url = format!("{}/add_block", self.base_url);
        let body = self.dispatch(self.http.post(&url).json(record)).await?;
        let ack: BlockAck = serde_json::from_str(&body)?;
        debug!(nome = %ack.nome, "record acknowledged by node");
        Ok(ack)
    }

    /// Fetch the full chain, in node order.
    pub async fn chain(&self) -> Result<Vec<BlockRecord>> {
        let url = format!("{}/chain", self.base_url);
        let body = self.dispatch(self.http.get(&url)).await?;
        let chain: Vec<BlockRecord> = serde_json::from_str(&body)?;
        debug!(blocks = chain.len(), "chain fetched");
        Ok(chain)
    }

    // Every call to the node goes through here: one place for the status
    // check and the rejection body. Any success status counts as success.
    async fn dispatch(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.text().await?)
    }
}
