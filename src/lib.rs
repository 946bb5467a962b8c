/*!
 * # pdfglot - PDF Summarization and Translation
 *
 * A Rust library for summarizing PDF documents and translating the summaries
 * into one of ~50 supported languages using model inference services.
 *
 * ## Features
 *
 * - Extract text from PDF documents page by page
 * - Sentence-aware chunking bounded by a configurable maximum length
 * - Summarize each chunk with fixed length bounds
 * - Translate summaries with fixed generation parameters
 * - Order-preserving parallel dispatch across a bounded worker pool
 * - Scoped temporary handling of uploads, cleaned up on every exit path
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document`: PDF loading and per-page text extraction
 * - `pipeline`: Chunking, summarize/translate adapters and parallel dispatch:
 *   - `pipeline::chunker`: Sentence-aware and fixed-window chunking
 *   - `pipeline::summarize`: Summarizer adapter
 *   - `pipeline::translate`: Translator adapter
 *   - `pipeline::dispatch`: Bounded, order-preserving dispatcher
 * - `capabilities`: Opaque model capability interfaces and clients:
 *   - `capabilities::inference`: Model-inference HTTP service client
 *   - `capabilities::mock`: Deterministic capabilities for testing
 * - `file_utils`: File system operations and scoped upload handling
 * - `app_controller`: Main application controller
 * - `language_utils`: Supported language table and resolution
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod capabilities;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod pipeline;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use document::PdfDocument;
pub use errors::{AppError, CapabilityError, DocumentError, PipelineError};
pub use language_utils::{SUPPORTED_LANGUAGES, resolve_language};
pub use pipeline::{ChunkDispatcher, SummaryAdapter, TranslationAdapter, chunk_text};
