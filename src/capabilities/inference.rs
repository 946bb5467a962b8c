use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::app_config::{GenerationConfig, InferenceConfig};
use crate::errors::CapabilityError;

use super::{Summarize, Translate};

/// Client for the model-inference HTTP service.
///
/// The service hosts both the summarization and the translation model and
/// exposes one JSON endpoint per capability. Requests are CPU/GPU bound on
/// the server side and latency-significant; this client treats them as slow
/// function calls with no cancellation support.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    /// Base URL of the inference service
    base_url: String,
    /// HTTP client for making requests
    client: Client,
    /// Summarization model name sent with each request
    summarization_model: String,
    /// Translation model name sent with each request
    translation_model: String,
    /// Maximum number of retry attempts
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
}

/// Summarization request for the inference service
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// Model name to use
    model: String,
    /// Text to summarize
    text: String,
    /// Minimum summary length in tokens
    min_length: usize,
    /// Maximum summary length in tokens
    max_length: usize,
    /// Whether to sample during generation
    do_sample: bool,
}

/// Summarization response from the inference service
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    /// Generated summary
    pub summary_text: String,
}

/// Translation request for the inference service
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    /// Model name to use
    model: String,
    /// Text to translate
    text: String,
    /// Target language code (e.g. "fr_XX")
    target_lang: String,
    /// Beam count for beam search decoding
    num_beams: u32,
    /// Length penalty applied during decoding
    length_penalty: f32,
    /// Whether to stop decoding once all beams are finished
    early_stopping: bool,
    /// Maximum generated sequence length
    max_length: usize,
}

/// Translation response from the inference service
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    /// Generated translation
    pub translation_text: String,
}

impl InferenceClient {
    /// Create a new client from the inference service configuration.
    ///
    /// Uses connection pooling for better performance with concurrent requests.
    pub fn new(config: &InferenceConfig) -> Self {
        let base_url = config.endpoint.trim_end_matches('/').to_string();

        Self {
            base_url,
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                // Keep connections alive across the many per-chunk requests
                .pool_idle_timeout(Duration::from_secs(90))
                .pool_max_idle_per_host(20)
                .tcp_keepalive(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            summarization_model: config.summarization_model.clone(),
            translation_model: config.translation_model.clone(),
            max_retries: config.max_retries,
            backoff_base_ms: config.backoff_base_ms,
        }
    }

    /// Test the connection to the inference service
    pub async fn test_connection(&self) -> Result<(), CapabilityError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url)
            .send()
            .await
            .map_err(|e| CapabilityError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(CapabilityError::ApiError {
                status_code: status.as_u16(),
                message: "Inference service health check failed".to_string(),
            })
        }
    }

    /// POST a JSON request with retry on network and server errors.
    ///
    /// Client errors (4xx) are not retried.
    async fn post_with_retry<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp, CapabilityError>
    where
        Req: Serialize + Sync,
        Resp: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.max_retries {
            let response_result = self.client.post(&url)
                .json(request)
                .send()
                .await;

            match response_result {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response.text().await
                            .map_err(|e| CapabilityError::RequestFailed(
                                format!("Failed to read response body: {}", e)
                            ))?;

                        return serde_json::from_str::<Resp>(&body)
                            .map_err(|e| CapabilityError::ParseError(
                                format!("{} (body starts with: {})", e,
                                    body.chars().take(200).collect::<String>())
                            ));
                    } else if status.is_server_error() {
                        // Server error - can retry
                        let error_text = response.text().await
                            .unwrap_or_else(|_| "Failed to get error response text".to_string());
                        error!("Inference service error ({}): {} - attempt {}/{}",
                            status, error_text, attempt + 1, self.max_retries + 1);
                        last_error = Some(CapabilityError::ApiError {
                            status_code: status.as_u16(),
                            message: error_text,
                        });
                    } else {
                        // Client error - don't retry
                        let error_text = response.text().await
                            .unwrap_or_else(|_| "Failed to get error response text".to_string());
                        error!("Inference service error ({}): {}", status, error_text);
                        return Err(CapabilityError::ApiError {
                            status_code: status.as_u16(),
                            message: error_text,
                        });
                    }
                },
                Err(e) => {
                    // Network error - can retry
                    error!("Inference service network error: {} - attempt {}/{}",
                        e, attempt + 1, self.max_retries + 1);
                    last_error = Some(CapabilityError::ConnectionError(e.to_string()));
                }
            }

            attempt += 1;

            if attempt <= self.max_retries {
                // Exponential backoff, capped at a 2^10 factor
                let backoff_ms = self.backoff_base_ms
                    .saturating_mul(1u64 << (attempt - 1).min(10));
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| CapabilityError::RequestFailed(
            format!("Request to {} failed after {} attempts", url, self.max_retries + 1)
        )))
    }
}

#[async_trait]
impl Summarize for InferenceClient {
    async fn summarize(
        &self,
        text: &str,
        min_length: usize,
        max_length: usize,
    ) -> Result<String, CapabilityError> {
        let request = SummarizeRequest {
            model: self.summarization_model.clone(),
            text: text.to_string(),
            min_length,
            max_length,
            do_sample: false,
        };

        let response: SummarizeResponse = self.post_with_retry("/summarize", &request).await?;
        Ok(response.summary_text)
    }
}

#[async_trait]
impl Translate for InferenceClient {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        params: &GenerationConfig,
    ) -> Result<String, CapabilityError> {
        let request = TranslateRequest {
            model: self.translation_model.clone(),
            text: text.to_string(),
            target_lang: target_lang.to_string(),
            num_beams: params.num_beams,
            length_penalty: params.length_penalty,
            early_stopping: params.early_stopping,
            max_length: params.max_length,
        };

        let response: TranslateResponse = self.post_with_retry("/translate", &request).await?;
        Ok(response.translation_text)
    }
}
