//! Error types for the Vertex AI components.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when building prompts or calling the Vertex AI API.
///
/// Service-side failures (auth, quota, malformed input) are passed through
/// unchanged in [`VertexAiError::ApiError`]; the crate defines no retry or
/// backoff policy of its own.
#[derive(Debug, Error)]
pub enum VertexAiError {
    /// The Vertex AI service answered with a non-success status.
    #[error("Vertex AI request failed with status {status}: {message}")]
    ApiError {
        /// HTTP status code returned by the service
        status: u16,
        /// Error message from the service, unmodified
        message: String,
    },

    /// Error occurred during an API request.
    #[error("API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error occurred while obtaining an access token.
    #[error("Credential error: {0}")]
    AuthError(#[from] gcp_auth::Error),

    /// Error occurred when accessing environment variables.
    #[error("Environment variable not found: {0}")]
    EnvError(#[from] std::env::VarError),

    /// Error occurred when parsing JSON.
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Failed to read a media file.
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    /// A media file has an extension outside the supported set.
    #[error("Unknown {kind} file type: {}", path.display())]
    UnsupportedMediaType {
        /// Whether the file was supplied as an image or a video
        kind: &'static str,
        /// The offending path
        path: PathBuf,
    },

    /// An authorize component was asked to use a key file without a path.
    #[error("no credentials supplied: set from_env or provide a key file path")]
    MissingCredentials,

    /// No client has been stored in the execution context.
    #[error("no Vertex AI client in context: run an authorize component first")]
    MissingClient,

    /// No model handle was supplied and none is stored in the context.
    #[error("no model available: supply one explicitly or run a model loader first")]
    MissingModel,

    /// The service returned a response with no usable content.
    #[error("No valid response from the model")]
    EmptyResponse,
}
