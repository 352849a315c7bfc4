use super::quote::QuoteRequest;
use crate::error::Result;
use async_trait::async_trait;

/// Destination for finalized quote requests (e.g. a hosted form endpoint).
#[async_trait]
pub trait QuoteRequestSink: Send + Sync {
    async fn submit(&self, request: QuoteRequest) -> Result<()>;
}

pub type QuoteRequestSinkBox = Box<dyn QuoteRequestSink>;
