use crate::client::LedgerClient;
use crate::error::Result;
use crate::view::ViewModel;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Pulls the full chain and rebuilds the view from scratch.
///
/// Every call takes a monotonic generation token; a response that arrives
/// after a newer sync has started is dropped, so overlapping refreshes
/// always resolve to the latest one.
pub struct Synchronizer {
    client: LedgerClient,
    generation: AtomicU64,
}

impl Synchronizer {
    pub fn new(client: LedgerClient) -> Self {
        Self {
            client,
            generation: AtomicU64::new(0),
        }
    }

    pub fn client(&self) -> &LedgerClient {
        &self.client
    }

    /// Fetch the chain and derive a fresh view-model.
    ///
    /// `Ok(None)` means this sync was superseded while its fetch was in
    /// flight; the caller keeps whatever it is currently displaying. Errors
    /// from a superseded fetch are swallowed the same way.
    pub async fn sync(&self) -> Result<Option<ViewModel>> {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let chain = match self.client.chain().await {
            Ok(chain) => chain,
            Err(err) => {
                if self.is_stale(token) {
                    debug!(token, "superseded sync failed, dropped");
                    return Ok(None);
                }
                return Err(err);
            }
        };

        if self.is_stale(token) {
            debug!(token, "stale chain response dropped");
            return Ok(None);
        }

        let view = ViewModel::from_chain(&chain);
        debug!(token, blocks = view.len(), "view rebuilt");
        Ok(Some(view))
    }

    fn is_stale(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != token
    }
}
