/*!
 * Parallel chunk dispatch.
 *
 * This module fans the independent chunks of a document out across a bounded
 * worker pool, applies summarize-then-translate to each, and collects one
 * result per chunk with output order matching input order.
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use futures::stream::{self, StreamExt};
use log::{debug, error};
use tokio::sync::Semaphore;

use crate::errors::PipelineError;

use super::summarize::SummaryAdapter;
use super::translate::TranslationAdapter;

/// Dispatcher for processing document chunks in parallel
pub struct ChunkDispatcher {
    /// The summarizer adapter to use
    summarizer: SummaryAdapter,

    /// The translator adapter to use
    translator: TranslationAdapter,

    /// Maximum number of concurrently running chunk tasks
    workers: usize,
}

impl ChunkDispatcher {
    /// Create a new dispatcher with a bounded worker count
    pub fn new(summarizer: SummaryAdapter, translator: TranslationAdapter, workers: usize) -> Self {
        Self {
            summarizer,
            translator,
            workers: workers.max(1),
        }
    }

    /// Summarize then translate a single chunk
    pub async fn summarize_and_translate_chunk(
        &self,
        chunk: &str,
        target_lang: &str,
    ) -> Result<String, PipelineError> {
        let summary = self.summarizer.summarize(chunk).await?;
        let translated = self.translator.translate_summary(&summary, target_lang).await?;
        Ok(translated)
    }

    /// Process all chunks concurrently and collect results in input order.
    ///
    /// Tasks share nothing mutable beyond the progress counter; each reads
    /// its own chunk of the input slice. Failures are captured per task
    /// so one failing chunk does not cancel its siblings, but any captured
    /// failure fails the whole batch - no partial results are returned.
    pub async fn dispatch(
        &self,
        chunks: &[String],
        target_lang: &str,
        progress_callback: impl Fn(usize, usize) + Clone + Send + 'static,
    ) -> Result<Vec<String>, PipelineError> {
        if chunks.is_empty() {
            return Ok(Vec::new());
        }

        // Create a semaphore to limit concurrent chunk tasks
        let semaphore = Arc::new(Semaphore::new(self.workers));

        // Track progress
        let total_chunks = chunks.len();
        let processed_chunks = Arc::new(AtomicUsize::new(0));

        // Process chunks concurrently
        let results = stream::iter(chunks.iter().enumerate())
            .map(|(chunk_index, chunk)| {
                let semaphore = semaphore.clone();
                let processed_chunks = processed_chunks.clone();
                let progress_callback = progress_callback.clone();

                async move {
                    // Acquire a permit from the semaphore
                    let _permit = semaphore.acquire().await.expect("semaphore closed");

                    let start_time = Instant::now();
                    let result = self.summarize_and_translate_chunk(chunk, target_lang).await;

                    // Update progress
                    let current = processed_chunks.fetch_add(1, Ordering::SeqCst) + 1;
                    progress_callback(current, total_chunks);

                    match &result {
                        Ok(_) => debug!(
                            "Chunk {}/{} completed in {:?}",
                            chunk_index + 1,
                            total_chunks,
                            start_time.elapsed()
                        ),
                        Err(e) => debug!(
                            "Chunk {}/{} failed: {}",
                            chunk_index + 1,
                            total_chunks,
                            e
                        ),
                    }

                    (chunk_index, result)
                }
            })
            .buffer_unordered(self.workers)
            .collect::<Vec<_>>()
            .await;

        // Sort results by chunk index to restore the original order
        let mut sorted_results = results;
        sorted_results.sort_by_key(|(idx, _)| *idx);

        let mut translated = Vec::with_capacity(total_chunks);
        let mut errors = Vec::new();

        for (chunk_idx, result) in sorted_results {
            match result {
                Ok(text) => translated.push(text),
                Err(e) => errors.push(format!("chunk {}: {}", chunk_idx + 1, e)),
            }
        }

        // Any captured failure fails the whole batch
        if !errors.is_empty() {
            let details = errors.join("; ");
            error!("Failed to process {} of {} chunks: {}", errors.len(), total_chunks, details);
            return Err(PipelineError::ChunksFailed {
                failed: errors.len(),
                total: total_chunks,
                details,
            });
        }

        Ok(translated)
    }
}
