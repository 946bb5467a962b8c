/*!
 * Summarize-then-translate pipeline.
 *
 * This module contains the per-chunk processing stages and the parallel
 * dispatcher that drives them. It is split into several submodules:
 *
 * - `chunker`: Sentence-aware and fixed-window text chunking
 * - `summarize`: Summarizer adapter with fixed length bounds
 * - `translate`: Translator adapter with re-chunking for oversized input
 * - `dispatch`: Order-preserving parallel dispatch over a bounded worker pool
 */

// Re-export main types for easier usage
pub use self::chunker::{chunk_page_text, chunk_text, split_windows};
pub use self::dispatch::ChunkDispatcher;
pub use self::summarize::SummaryAdapter;
pub use self::translate::TranslationAdapter;

// Submodules
pub mod chunker;
pub mod dispatch;
pub mod summarize;
pub mod translate;
