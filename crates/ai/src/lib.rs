//! # MediTrack AI Gateway
//!
//! Client for the generative AI service used by MediTrack: a text
//! completion call for drug-interaction analysis and a vision call for
//! prescription photo recognition. Prompt construction and defensive
//! response parsing live here so the API layer stays thin.

/// Request wire types for the generative content API
pub mod api_types;
/// HTTP client for the text and vision endpoints
pub mod client;
/// Gateway configuration
pub mod config;
/// Gateway error types
pub mod error;
/// Defensive extraction of structured data from AI responses
pub mod parser;
/// Prompt templates for analysis and recognition
pub mod prompt;

pub use client::GeminiClient;
pub use config::AiConfig;
pub use error::AiError;
