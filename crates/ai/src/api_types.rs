//! Generative content API request types.
//!
//! Responses are handled as raw `serde_json::Value` by [`crate::parser`];
//! only the outbound body is typed.

use serde::Serialize;

/// A generateContent request body.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation contents (a single turn for both of our calls)
    pub contents: Vec<Content>,
    /// Generation options; set for the vision call to force JSON output
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One content turn, made of text and/or inline-data parts.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// A single part: either text or inline binary data, never both.
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

/// Base64-encoded binary payload.
#[derive(Debug, Clone, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Generation options.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    /// MIME type the service must produce, e.g. "application/json"
    pub response_mime_type: String,
}

impl GenerateContentRequest {
    /// A plain text prompt request.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part::text(prompt)],
            }],
            generation_config: None,
        }
    }

    /// A prompt plus image request, with JSON-object output enforced by the
    /// service.
    pub fn vision(prompt: impl Into<String>, mime_type: &str, image_base64: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part::text(prompt), Part::inline_data(mime_type, image_base64)],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
            }),
        }
    }
}
