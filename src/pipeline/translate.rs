use std::sync::Arc;

use crate::app_config::GenerationConfig;
use crate::capabilities::Translate;
use crate::errors::CapabilityError;

use super::chunker::chunk_text;

/// Translator adapter wrapping a capability with a bounded input window.
///
/// The translation capability has its own length ceiling, so oversized input
/// is re-chunked before translating and the per-chunk results are rejoined
/// with single spaces in chunk order. Generation parameters are fixed
/// configuration, not tunable per call.
#[derive(Debug, Clone)]
pub struct TranslationAdapter {
    /// The translation capability to use
    capability: Arc<dyn Translate>,
    /// Maximum characters per translation call
    max_chunk_length: usize,
    /// Fixed generation parameters passed with every call
    params: GenerationConfig,
}

impl TranslationAdapter {
    /// Create a new adapter over an injected capability
    pub fn new(
        capability: Arc<dyn Translate>,
        max_chunk_length: usize,
        params: GenerationConfig,
    ) -> Self {
        Self {
            capability,
            max_chunk_length,
            params,
        }
    }

    /// Translate a summary into the target language.
    ///
    /// Input at or under the chunk limit issues exactly one capability call.
    /// Longer input is re-chunked; each sub-chunk is an independent call and
    /// the results are joined with single spaces in order.
    pub async fn translate_summary(
        &self,
        summary: &str,
        target_lang: &str,
    ) -> Result<String, CapabilityError> {
        let chunks = if summary.chars().count() > self.max_chunk_length {
            chunk_text(summary, self.max_chunk_length)
        } else {
            vec![summary.to_string()]
        };

        let mut translated_chunks = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            let translated = self.capability
                .translate(chunk, target_lang, &self.params)
                .await?;
            translated_chunks.push(translated);
        }

        Ok(translated_chunks.join(" "))
    }
}
