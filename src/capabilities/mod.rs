/*!
 * Capability interfaces for the summarize-translate pipeline.
 *
 * Summarization and translation are opaque model capabilities consumed over
 * these traits. The concrete implementations are constructed once at startup
 * and passed explicitly into the pipeline, never referenced as globals:
 * - `inference`: client for the model-inference HTTP service
 * - `mock`: deterministic implementations for testing
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::app_config::GenerationConfig;
use crate::errors::CapabilityError;

/// A capability that reduces text to a shorter text
#[async_trait]
pub trait Summarize: Send + Sync + Debug {
    /// Summarize `text` into a single summary bounded by the given token lengths.
    ///
    /// Callers must pre-chunk input that exceeds the underlying model's
    /// window; this call does no chunking of its own.
    async fn summarize(
        &self,
        text: &str,
        min_length: usize,
        max_length: usize,
    ) -> Result<String, CapabilityError>;
}

/// A capability that maps (text, language code) to translated text
#[async_trait]
pub trait Translate: Send + Sync + Debug {
    /// Translate `text` into the target language selected by `target_lang`,
    /// a model language code from the supported table.
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        params: &GenerationConfig,
    ) -> Result<String, CapabilityError>;
}

pub mod inference;
pub mod mock;

pub use inference::InferenceClient;
pub use mock::{MockSummarizer, MockTranslator};
