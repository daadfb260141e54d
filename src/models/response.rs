//! Response types for the generateContent endpoint.

use serde::Deserialize;

use super::{Content, Part};

/// A response from a generateContent call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// The generated candidates from the model.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Metadata about token usage.
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> String {
        let mut text = String::new();
        if let Some(candidate) = self.candidates.first() {
            for part in &candidate.content.parts {
                if let Part::Text { text: part_text } = part {
                    text.push_str(part_text);
                }
            }
        }
        text
    }
}

/// A single generated candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The generated content.
    pub content: Content,
    /// Why the model stopped generating.
    pub finish_reason: Option<FinishReason>,
    /// Safety ratings attached to the candidate.
    pub safety_ratings: Option<Vec<SafetyRating>>,
}

/// The reason a candidate stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
    /// The model reached a natural stopping point.
    Stop,
    /// The output hit the token limit.
    MaxTokens,
    /// The output was flagged by a safety filter.
    Safety,
    /// The output was flagged for reciting source material.
    Recitation,
    /// A reason this client does not model.
    #[serde(other)]
    Other,
}

/// A safety score attached to a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct SafetyRating {
    /// The harm category being scored.
    pub category: String,
    /// The scored likelihood of harm.
    pub probability: String,
}

/// Token accounting for a generateContent call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens consumed by the prompt.
    pub prompt_token_count: Option<i32>,
    /// Tokens produced across all candidates.
    pub candidates_token_count: Option<i32>,
    /// Total tokens for the call.
    pub total_token_count: Option<i32>,
}
