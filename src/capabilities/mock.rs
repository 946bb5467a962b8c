/*!
 * Mock capability implementations for testing.
 *
 * This module provides mock summarizers and translators that simulate
 * different behaviors:
 * - `working()` - Always succeeds with deterministic output
 * - `intermittent(n)` - Fails every nth request
 * - `failing()` - Always fails with an error
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::app_config::GenerationConfig;
use crate::errors::CapabilityError;

use super::{Summarize, Translate};

/// Behavior mode for mock capabilities
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with deterministic output
    Working,
    /// Fails intermittently (every Nth request)
    Intermittent { fail_every: usize },
    /// Always fails with an error
    Failing,
    /// Returns empty output
    Empty,
    /// Simulates slow response (for concurrency testing)
    Slow { delay_ms: u64 },
}

fn simulate(behavior: MockBehavior, count: usize) -> Result<(), CapabilityError> {
    match behavior {
        MockBehavior::Failing => Err(CapabilityError::ApiError {
            status_code: 500,
            message: "Simulated capability failure".to_string(),
        }),
        MockBehavior::Intermittent { fail_every } if count % fail_every == fail_every - 1 => {
            Err(CapabilityError::ApiError {
                status_code: 503,
                message: format!("Simulated intermittent failure (request #{})", count + 1),
            })
        }
        _ => Ok(()),
    }
}

/// Mock summarization capability
#[derive(Debug)]
pub struct MockSummarizer {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter, shared across clones
    request_count: Arc<AtomicUsize>,
}

impl MockSummarizer {
    /// Create a new mock summarizer with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock summarizer that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock summarizer that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create an intermittently failing mock summarizer
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Number of summarize calls made so far
    pub fn call_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockSummarizer {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
        }
    }
}

#[async_trait]
impl Summarize for MockSummarizer {
    async fn summarize(
        &self,
        text: &str,
        min_length: usize,
        max_length: usize,
    ) -> Result<String, CapabilityError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        simulate(self.behavior, count)?;

        if let MockBehavior::Slow { delay_ms } = self.behavior {
            tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
        }

        if self.behavior == MockBehavior::Empty {
            return Ok(String::new());
        }

        Ok(format!("[SUMMARY {}-{}] {}", min_length, max_length, text))
    }
}

/// Mock translation capability
#[derive(Debug)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter, shared across clones
    request_count: Arc<AtomicUsize>,
}

impl MockTranslator {
    /// Create a new mock translator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock translator that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock translator that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create an intermittently failing mock translator
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Number of translate calls made so far
    pub fn call_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockTranslator {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
        }
    }
}

#[async_trait]
impl Translate for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        _params: &GenerationConfig,
    ) -> Result<String, CapabilityError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        simulate(self.behavior, count)?;

        if let MockBehavior::Slow { delay_ms } = self.behavior {
            tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
        }

        if self.behavior == MockBehavior::Empty {
            return Ok(String::new());
        }

        Ok(format!("[{}] {}", target_lang, text))
    }
}
