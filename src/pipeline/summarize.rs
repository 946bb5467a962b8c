use std::sync::Arc;

use crate::app_config::SummaryConfig;
use crate::capabilities::Summarize;
use crate::errors::CapabilityError;

/// Summarizer adapter binding a capability to fixed length bounds.
///
/// One capability call per input; no retry and no internal chunking. Callers
/// pre-chunk anything that exceeds the model window.
#[derive(Debug, Clone)]
pub struct SummaryAdapter {
    /// The summarization capability to use
    capability: Arc<dyn Summarize>,
    /// Minimum summary length in tokens
    min_length: usize,
    /// Maximum summary length in tokens
    max_length: usize,
}

impl SummaryAdapter {
    /// Create a new adapter over an injected capability
    pub fn new(capability: Arc<dyn Summarize>, config: &SummaryConfig) -> Self {
        Self {
            capability,
            min_length: config.min_length,
            max_length: config.max_length,
        }
    }

    /// Summarize a single pre-chunked text
    pub async fn summarize(&self, text: &str) -> Result<String, CapabilityError> {
        self.capability
            .summarize(text, self.min_length, self.max_length)
            .await
    }
}
