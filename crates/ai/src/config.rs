//! Configuration for the AI gateway.
//!
//! Loaded once at startup and passed into [`crate::GeminiClient`] at
//! construction; nothing here is read from the environment after that.

use std::env;

use crate::error::AiError;

/// Default text-completion endpoint.
pub const DEFAULT_TEXT_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Default vision endpoint (same model family, image parts allowed).
pub const DEFAULT_VISION_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key sent in the X-Goog-Api-Key header.
    pub api_key: String,

    /// Text-completion endpoint URL.
    pub text_url: String,

    /// Vision endpoint URL.
    pub vision_url: String,
}

impl AiConfig {
    /// Creates configuration from environment variables.
    ///
    /// Required:
    /// - `GEMINI_API_KEY` - API key for authentication
    ///
    /// Optional:
    /// - `GEMINI_TEXT_URL` - text endpoint override
    /// - `GEMINI_VISION_URL` - vision endpoint override
    pub fn from_env() -> Result<Self, AiError> {
        let api_key = env::var("GEMINI_API_KEY").map_err(|_| {
            AiError::Configuration("GEMINI_API_KEY environment variable must be set".to_string())
        })?;

        let text_url =
            env::var("GEMINI_TEXT_URL").unwrap_or_else(|_| DEFAULT_TEXT_URL.to_string());
        let vision_url =
            env::var("GEMINI_VISION_URL").unwrap_or_else(|_| DEFAULT_VISION_URL.to_string());

        Ok(Self {
            api_key,
            text_url,
            vision_url,
        })
    }
}
