//! Request models for the generateContent endpoint.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::{GenerationConfig, Part};

/// A request to a model's generateContent endpoint.
#[derive(Debug, Clone, Serialize, TypedBuilder)]
#[builder(doc)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// The contents of the request, including the prompt parts.
    pub contents: Vec<Content>,
    /// Optional sampling configuration for this call.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Creates a request with a single user content made of the given parts.
    pub fn from_parts(parts: Vec<Part>) -> Self {
        Self {
            contents: vec![Content {
                role: Some(Role::User),
                parts,
            }],
            generation_config: None,
        }
    }
}

/// A content object grouping parts under a conversation role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// The role this content belongs to, when relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// The parts that make up the content.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// The author of a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Content supplied by the calling user
    User,
    /// Content produced by the model
    Model,
}
