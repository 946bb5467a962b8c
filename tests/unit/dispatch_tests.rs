/*!
 * Tests for parallel chunk dispatch
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pdfglot::app_config::{GenerationConfig, SummaryConfig};
use pdfglot::capabilities::mock::{MockBehavior, MockSummarizer, MockTranslator};
use pdfglot::errors::PipelineError;
use pdfglot::pipeline::{ChunkDispatcher, SummaryAdapter, TranslationAdapter};

fn dispatcher(summarizer: MockSummarizer, translator: MockTranslator, workers: usize) -> ChunkDispatcher {
    let summary_adapter = SummaryAdapter::new(Arc::new(summarizer), &SummaryConfig::default());
    let translation_adapter = TranslationAdapter::new(
        Arc::new(translator),
        1024,
        GenerationConfig::default(),
    );
    ChunkDispatcher::new(summary_adapter, translation_adapter, workers)
}

/// The per-chunk path composes summarize then translate
#[tokio::test]
async fn test_summarize_and_translate_chunk_should_compose_stages() {
    let dispatcher = dispatcher(MockSummarizer::working(), MockTranslator::working(), 1);

    let result = dispatcher
        .summarize_and_translate_chunk("Some chunk of text", "fr_XX")
        .await
        .unwrap();

    assert_eq!(result, "[fr_XX] [SUMMARY 30-150] Some chunk of text");
}

/// Output order matches input order even with concurrent completion
#[tokio::test]
async fn test_dispatch_should_preserve_input_order() {
    let dispatcher = dispatcher(
        MockSummarizer::new(MockBehavior::Slow { delay_ms: 5 }),
        MockTranslator::working(),
        4,
    );

    let chunks: Vec<String> = (0..20).map(|i| format!("chunk number {}", i)).collect();
    let results = dispatcher.dispatch(&chunks, "fr_XX", |_, _| {}).await.unwrap();

    assert_eq!(results.len(), 20);
    for (i, result) in results.iter().enumerate() {
        assert!(
            result.ends_with(&format!("chunk number {}", i)),
            "result {} out of order: {}", i, result
        );
    }
}

#[tokio::test]
async fn test_dispatch_with_no_chunks_should_return_empty() {
    let dispatcher = dispatcher(MockSummarizer::working(), MockTranslator::working(), 4);
    let results = dispatcher.dispatch(&[], "fr_XX", |_, _| {}).await.unwrap();
    assert!(results.is_empty());
}

/// A failing chunk fails the whole batch, but sibling tasks still run and the
/// failure report accounts for every chunk
#[tokio::test]
async fn test_dispatch_with_failing_chunk_should_fail_batch_with_details() {
    let translator = MockTranslator::intermittent(3);
    let dispatcher = dispatcher(MockSummarizer::working(), translator.clone(), 2);

    let chunks: Vec<String> = (0..6).map(|i| format!("chunk {}", i)).collect();
    let result = dispatcher.dispatch(&chunks, "fr_XX", |_, _| {}).await;

    match result {
        Err(PipelineError::ChunksFailed { failed, total, details }) => {
            assert_eq!(total, 6);
            assert_eq!(failed, 2);
            assert!(details.contains("chunk"));
        }
        other => panic!("Expected ChunksFailed, got {:?}", other.map(|v| v.len())),
    }

    // Siblings were not cancelled: every chunk reached the translator
    assert_eq!(translator.call_count(), 6);
}

#[tokio::test]
async fn test_dispatch_should_report_progress_for_every_chunk() {
    let dispatcher = dispatcher(MockSummarizer::working(), MockTranslator::working(), 3);

    let progress_calls = Arc::new(AtomicUsize::new(0));
    let last_total = Arc::new(AtomicUsize::new(0));
    let calls = progress_calls.clone();
    let total_seen = last_total.clone();

    let chunks: Vec<String> = (0..8).map(|i| format!("chunk {}", i)).collect();
    dispatcher
        .dispatch(&chunks, "fr_XX", move |_, total| {
            calls.fetch_add(1, Ordering::SeqCst);
            total_seen.store(total, Ordering::SeqCst);
        })
        .await
        .unwrap();

    assert_eq!(progress_calls.load(Ordering::SeqCst), 8);
    assert_eq!(last_total.load(Ordering::SeqCst), 8);
}

/// Summarization failures are captured the same way as translation failures
#[tokio::test]
async fn test_dispatch_with_failing_summarizer_should_fail_batch() {
    let dispatcher = dispatcher(MockSummarizer::failing(), MockTranslator::working(), 2);

    let chunks = vec!["one".to_string(), "two".to_string()];
    let result = dispatcher.dispatch(&chunks, "fr_XX", |_, _| {}).await;

    assert!(matches!(result, Err(PipelineError::ChunksFailed { failed: 2, total: 2, .. })));
}
