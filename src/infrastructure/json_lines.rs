use crate::domain::ports::QuoteRequestSink;
use crate::domain::quote::QuoteRequest;
use crate::error::{QuoteError, Result};
use async_trait::async_trait;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use tokio::sync::Mutex;

/// Appends each quote request as one JSON object per line.
///
/// Used as an outbox: a separate process can forward the lines to the real
/// form endpoint.
pub struct JsonLinesSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl JsonLinesSink<File> {
    /// Opens `path` for appending, creating it if missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

#[async_trait]
impl<W: Write + Send + 'static> QuoteRequestSink for JsonLinesSink<W> {
    async fn submit(&self, request: QuoteRequest) -> Result<()> {
        let line = serde_json::to_string(&request)?;
        let mut writer = self.writer.lock().await;
        writeln!(writer, "{line}")
            .and_then(|_| writer.flush())
            .map_err(|e| QuoteError::SubmissionError(format!("Failed to write request: {e}")))
    }
}
