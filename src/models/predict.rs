//! Request and response types for the PaLM-style predict endpoint.
//!
//! Text, code, and chat models are served through `:predict`, which wraps
//! every call in an `instances` array and an optional `parameters` object.

use serde::{Deserialize, Serialize};

/// A request body for the predict endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    /// The prompt instances to run. Text and code calls send exactly one.
    pub instances: Vec<PredictInstance>,
    /// Sampling parameters shared by all instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<PredictParameters>,
}

impl PredictRequest {
    /// Creates a predict request for a text model.
    pub fn text(prompt: impl Into<String>, parameters: PredictParameters) -> Self {
        Self {
            instances: vec![PredictInstance::Text {
                prompt: prompt.into(),
            }],
            parameters: Some(parameters),
        }
    }

    /// Creates a predict request for a code model.
    pub fn code(prefix: impl Into<String>, parameters: PredictParameters) -> Self {
        Self {
            instances: vec![PredictInstance::Code {
                prefix: prefix.into(),
            }],
            parameters: Some(parameters),
        }
    }

    /// Creates a predict request for a chat model.
    pub fn chat(instance: ChatInstance) -> Self {
        Self {
            instances: vec![PredictInstance::Chat(instance)],
            parameters: None,
        }
    }
}

/// A single prompt instance inside a predict request.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PredictInstance {
    /// A plain text prompt.
    Text {
        /// The prompt text.
        prompt: String,
    },
    /// A code prefix to complete.
    Code {
        /// The code to complete from.
        prefix: String,
    },
    /// A chat conversation.
    Chat(ChatInstance),
}

/// The conversation payload sent to a chat model.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChatInstance {
    /// Grounding text prepended to the conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// The conversation so far, oldest message first.
    pub messages: Vec<ChatMessage>,
}

/// One turn of a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who produced the message.
    pub author: Author,
    /// The message text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a user-authored message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            author: Author::User,
            content: content.into(),
        }
    }

    /// Creates a model-authored message.
    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            author: Author::Bot,
            content: content.into(),
        }
    }
}

/// The author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    /// The calling application.
    User,
    /// The model.
    Bot,
}

/// Sampling parameters for a predict call.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictParameters {
    /// The maximum length of the generated output in tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    /// Controls randomness of the output text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Nucleus-sampling probability mass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    /// Number of highest-probability tokens considered at each step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i32>,
}

/// A response body from the predict endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    /// One prediction per request instance.
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

impl PredictResponse {
    /// Returns the generated text of the first prediction, if any.
    pub fn text(&self) -> Option<&str> {
        self.predictions
            .first()
            .and_then(|prediction| prediction.content.as_deref())
    }

    /// Returns the first chat candidate of the first prediction, if any.
    pub fn first_candidate(&self) -> Option<&ChatCandidate> {
        self.predictions
            .first()
            .and_then(|prediction| prediction.candidates.as_ref())
            .and_then(|candidates| candidates.first())
    }
}

/// A single prediction returned by the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Generated text, present for text and code models.
    pub content: Option<String>,
    /// Reply candidates, present for chat models.
    pub candidates: Option<Vec<ChatCandidate>>,
    /// Safety scores attached to the prediction.
    pub safety_attributes: Option<serde_json::Value>,
    /// Source citations attached to the prediction.
    pub citation_metadata: Option<serde_json::Value>,
}

/// A candidate reply from a chat model.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCandidate {
    /// The author reported by the service.
    pub author: Option<String>,
    /// The reply text.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_request_wraps_prompt_in_instances() {
        let request = PredictRequest::text(
            "Tell me a story",
            PredictParameters {
                max_output_tokens: Some(1024),
                temperature: Some(0.25),
                top_p: Some(0.5),
                top_k: Some(40),
            },
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "instances": [{ "prompt": "Tell me a story" }],
                "parameters": {
                    "maxOutputTokens": 1024,
                    "temperature": 0.25,
                    "topP": 0.5,
                    "topK": 40
                }
            })
        );
    }

    #[test]
    fn code_request_omits_unset_parameters() {
        let request = PredictRequest::code(
            "fn main() {",
            PredictParameters {
                max_output_tokens: Some(1024),
                temperature: Some(0.25),
                ..Default::default()
            },
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "instances": [{ "prefix": "fn main() {" }],
                "parameters": { "maxOutputTokens": 1024, "temperature": 0.25 }
            })
        );
    }

    #[test]
    fn chat_request_sends_context_and_messages_without_parameters() {
        let request = PredictRequest::chat(ChatInstance {
            context: Some("You are a pirate".into()),
            messages: vec![ChatMessage::user("Ahoy!")],
        });
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "instances": [{
                    "context": "You are a pirate",
                    "messages": [{ "author": "user", "content": "Ahoy!" }]
                }]
            })
        );
    }

    #[test]
    fn parses_chat_candidates_from_a_prediction() {
        let body = serde_json::json!({
            "predictions": [{
                "candidates": [{ "author": "bot", "content": "Ahoy, matey!" }],
                "safetyAttributes": { "blocked": false }
            }]
        });
        let response: PredictResponse = serde_json::from_value(body).unwrap();
        let candidate = response.first_candidate().unwrap();
        assert_eq!(candidate.content, "Ahoy, matey!");
        assert!(response.text().is_none());
    }

    #[test]
    fn text_returns_first_prediction_content() {
        let body = serde_json::json!({
            "predictions": [{ "content": "Once upon a time" }]
        });
        let response: PredictResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.text(), Some("Once upon a time"));
    }
}
