use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Target language for translation (label, model code or ISO code)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Chunking config
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Summary config
    #[serde(default)]
    pub summary: SummaryConfig,

    /// Generation parameters for the translation capability
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Inference service config
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Worker count for chunk dispatch; defaults to available CPU parallelism
    #[serde(default)]
    pub workers: Option<usize>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Configuration for text chunking
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChunkingConfig {
    /// Maximum chunk length in characters
    #[serde(default = "default_max_chunk_length")]
    pub max_chunk_length: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chunk_length: default_max_chunk_length(),
        }
    }
}

/// Configuration for the summarization capability
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SummaryConfig {
    /// Minimum summary length in tokens
    #[serde(default = "default_summary_min_length")]
    pub min_length: usize,

    /// Maximum summary length in tokens
    #[serde(default = "default_summary_max_length")]
    pub max_length: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            min_length: default_summary_min_length(),
            max_length: default_summary_max_length(),
        }
    }
}

/// Fixed generation parameters for the translation capability.
///
/// These are static configuration, not tunable per call.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Beam count for beam search decoding
    #[serde(default = "default_num_beams")]
    pub num_beams: u32,

    /// Length penalty applied during decoding
    #[serde(default = "default_length_penalty")]
    pub length_penalty: f32,

    /// Whether to stop decoding once all beams are finished
    #[serde(default = "default_true")]
    pub early_stopping: bool,

    /// Maximum generated sequence length
    #[serde(default = "default_generation_max_length")]
    pub max_length: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            num_beams: default_num_beams(),
            length_penalty: default_length_penalty(),
            early_stopping: true,
            max_length: default_generation_max_length(),
        }
    }
}

/// Model inference service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InferenceConfig {
    /// Service endpoint URL
    #[serde(default = "default_inference_endpoint")]
    pub endpoint: String,

    /// Summarization model name
    #[serde(default = "default_summarization_model")]
    pub summarization_model: String,

    /// Translation model name
    #[serde(default = "default_translation_model")]
    pub translation_model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retry count for failed requests
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Backoff base for retries (in milliseconds, doubled on each retry)
    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_inference_endpoint(),
            summarization_model: default_summarization_model(),
            translation_model: default_translation_model(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            backoff_base_ms: default_backoff_base_ms(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_target_language() -> String {
    "French".to_string()
}

fn default_max_chunk_length() -> usize {
    1024
}

fn default_summary_min_length() -> usize {
    30
}

fn default_summary_max_length() -> usize {
    150
}

fn default_num_beams() -> u32 {
    4
}

fn default_length_penalty() -> f32 {
    2.0
}

fn default_generation_max_length() -> usize {
    1024
}

fn default_true() -> bool {
    true
}

fn default_inference_endpoint() -> String {
    "http://localhost:8090".to_string()
}

fn default_summarization_model() -> String {
    "Falconsai/text_summarization".to_string()
}

fn default_translation_model() -> String {
    "facebook/mbart-large-50-one-to-many-mmt".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_max_retries() -> u32 {
    3
}

fn default_backoff_base_ms() -> u64 {
    1000
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate target language against the supported table
        let _code = crate::language_utils::resolve_language(&self.target_language)?;

        if self.chunking.max_chunk_length == 0 {
            return Err(anyhow!("max_chunk_length must be greater than zero"));
        }

        if self.summary.min_length >= self.summary.max_length {
            return Err(anyhow!(
                "Summary min_length ({}) must be below max_length ({})",
                self.summary.min_length,
                self.summary.max_length
            ));
        }

        if self.generation.num_beams == 0 {
            return Err(anyhow!("num_beams must be greater than zero"));
        }

        if self.inference.endpoint.is_empty() {
            return Err(anyhow!("Inference endpoint must not be empty"));
        }

        if self.inference.max_retries > 10 {
            return Err(anyhow!(
                "max_retries ({}) must be at most 10",
                self.inference.max_retries
            ));
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(anyhow!("Worker count must be greater than zero"));
            }
        }

        Ok(())
    }

    /// Effective worker count: the configured override or available parallelism
    pub fn effective_workers(&self) -> usize {
        self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            target_language: default_target_language(),
            chunking: ChunkingConfig::default(),
            summary: SummaryConfig::default(),
            generation: GenerationConfig::default(),
            inference: InferenceConfig::default(),
            workers: None,
            log_level: LogLevel::default(),
        }
    }
}
