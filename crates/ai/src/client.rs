//! HTTP client for the generative AI service.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::NaiveDate;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::api_types::GenerateContentRequest;
use crate::config::AiConfig;
use crate::error::AiError;
use crate::prompt;

/// Fixed timeout for the text-completion call.
const TEXT_TIMEOUT: Duration = Duration::from_secs(60);

/// Fixed timeout for the vision call; image payloads take longer.
const VISION_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for the text and vision completion endpoints.
///
/// Both operations are single synchronous calls: a failed attempt
/// propagates immediately to the caller, nothing is retried.
pub struct GeminiClient {
    client: Client,
    config: AiConfig,
}

impl GeminiClient {
    /// Creates a new client from an explicit configuration.
    pub fn new(config: AiConfig) -> Result<Self, AiError> {
        if config.api_key.is_empty() {
            return Err(AiError::Configuration(
                "AI service API key is not set".to_string(),
            ));
        }
        if config.text_url.is_empty() || config.vision_url.is_empty() {
            return Err(AiError::Configuration(
                "AI service endpoint URLs are not set".to_string(),
            ));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| AiError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Creates a client from environment variables.
    ///
    /// See [`AiConfig::from_env`] for the variables used.
    pub fn from_env() -> Result<Self, AiError> {
        let config = AiConfig::from_env()?;
        Self::new(config)
    }

    /// Sends a text prompt and returns the raw response body.
    pub async fn generate_text(&self, prompt: &str) -> Result<Value, AiError> {
        let request = GenerateContentRequest::text(prompt);

        debug!("Sending text request ({} prompt chars)", prompt.len());
        self.post(&self.config.text_url, &request, TEXT_TIMEOUT)
            .await
    }

    /// Sends a prescription image for recognition and returns the raw
    /// response body, which must be a JSON object.
    ///
    /// The request asks the service to emit `application/json` directly,
    /// so a non-object body is a malformed response rather than something
    /// to paper over.
    pub async fn recognize_prescription(
        &self,
        image_bytes: &[u8],
        mime_type: &str,
        user_timezone: &str,
        today: NaiveDate,
    ) -> Result<Value, AiError> {
        let prompt_text = prompt::build_recognition_prompt(user_timezone, today);
        let image_base64 = BASE64.encode(image_bytes);
        let request = GenerateContentRequest::vision(prompt_text, mime_type, image_base64);

        info!(
            "Sending vision request ({} image bytes, timezone {})",
            image_bytes.len(),
            user_timezone
        );

        let response = self
            .post(&self.config.vision_url, &request, VISION_TIMEOUT)
            .await?;

        if !response.is_object() {
            error!("Vision response is not a JSON object: {}", response);
            return Err(AiError::MalformedResponse(
                "expected a JSON object from the vision endpoint".to_string(),
            ));
        }

        Ok(response)
    }

    async fn post(
        &self,
        url: &str,
        request: &GenerateContentRequest,
        timeout: Duration,
    ) -> Result<Value, AiError> {
        let response = self
            .client
            .post(url)
            .header("X-Goog-Api-Key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| AiError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("AI service returned {}: {}", status.as_u16(), error_text);
            return Err(AiError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AiError::MalformedResponse(format!("Failed to parse response: {}", e)))?;

        debug!("Received AI service response");
        Ok(body)
    }
}
