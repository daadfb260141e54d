//! Sampling configuration for generateContent calls.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Sampling controls applied to a single generateContent call.
///
/// Every field is optional on the wire; unset fields fall back to the
/// service-side model defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// The maximum length of the generated output in tokens.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    /// Controls randomness of the output text.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Nucleus-sampling probability mass.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    /// Number of highest-probability tokens considered at each step.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i32>,
}
