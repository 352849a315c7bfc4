use crate::domain::ports::QuoteRequestSink;
use crate::domain::quote::QuoteRequest;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe sink that keeps submitted quote requests in memory.
///
/// Clones share the same backing list, which makes it convenient for tests
/// and dry runs where nothing should leave the process.
#[derive(Default, Clone)]
pub struct InMemoryRequestSink {
    requests: Arc<RwLock<Vec<QuoteRequest>>>,
}

impl InMemoryRequestSink {
    /// Creates a new, empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests received so far, oldest first.
    pub async fn submissions(&self) -> Vec<QuoteRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl QuoteRequestSink for InMemoryRequestSink {
    async fn submit(&self, request: QuoteRequest) -> Result<()> {
        let mut requests = self.requests.write().await;
        requests.push(request);
        Ok(())
    }
}
