//! Multimodal prompt building and generation components.

use std::path::PathBuf;

use async_trait::async_trait;
use typed_builder::TypedBuilder;

use crate::components::Component;
use crate::context::ExecutionContext;
use crate::error::VertexAiError;
use crate::media;
use crate::models::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part, Role,
};

/// The vision-capable model used for every multimodal call.
const VISION_MODEL: &str = "gemini-pro-vision";

/// Output length used when `max_output_tokens` is unset.
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2048;
/// Temperature used when `temperature` is unset.
const DEFAULT_TEMPERATURE: f32 = 0.4;
/// Nucleus-sampling mass used when `top_p` is unset.
const DEFAULT_TOP_P: f32 = 1.0;
/// Candidate-token count used when `top_k` is unset.
const DEFAULT_TOP_K: i32 = 32;

/// Assembles the parts list for a multimodal prompt.
///
/// Parts are appended in a fixed order: the leading prompt text, the
/// image, the video, then the follow-up text. Media files are read from
/// disk and typed by their extension; an unrecognized extension fails
/// the component and leaves `out_parts` unset.
#[derive(Debug, TypedBuilder)]
#[builder(doc)]
pub struct MakeMultimodalPrompt {
    /// Parts from an earlier builder to append to.
    #[builder(default, setter(strip_option))]
    pub parts: Option<Vec<Part>>,
    /// Text placed before the media parts.
    #[builder(default, setter(strip_option, into))]
    pub prompt: Option<String>,
    /// Path to a png or jpeg image.
    #[builder(default, setter(strip_option, into))]
    pub image_path: Option<PathBuf>,
    /// Path to an mpg, mov, mp4, or webm video.
    #[builder(default, setter(strip_option, into))]
    pub video_path: Option<PathBuf>,
    /// Text placed after the media parts.
    #[builder(default, setter(strip_option, into))]
    pub follow_up: Option<String>,
    /// The assembled parts, filled in by `execute`.
    #[builder(default, setter(skip))]
    pub out_parts: Option<Vec<Part>>,
}

#[async_trait]
impl Component for MakeMultimodalPrompt {
    async fn execute(&mut self, _ctx: &mut ExecutionContext) -> Result<(), VertexAiError> {
        let mut parts = self.parts.clone().unwrap_or_default();

        if let Some(prompt) = &self.prompt {
            parts.push(Part::text(prompt.clone()));
        }
        if let Some(path) = &self.image_path {
            parts.push(media::image_part(path).await?);
        }
        if let Some(path) = &self.video_path {
            parts.push(media::video_part(path).await?);
        }
        if let Some(follow_up) = &self.follow_up {
            parts.push(Part::text(follow_up.clone()));
        }

        self.out_parts = Some(parts);
        Ok(())
    }
}

/// Generates content from assembled parts with the vision model.
///
/// The model name is fixed to `gemini-pro-vision`. Unset sampling
/// parameters fall back to 2048 output tokens, temperature 0.4,
/// top-p 1.0, and top-k 32.
#[derive(Debug, TypedBuilder)]
#[builder(doc)]
pub struct MultimodalGenerate {
    /// The prompt parts to send.
    pub parts: Vec<Part>,
    /// The maximum length of the generated output in tokens.
    #[builder(default, setter(strip_option))]
    pub max_output_tokens: Option<u32>,
    /// Controls randomness of the output.
    #[builder(default, setter(strip_option))]
    pub temperature: Option<f32>,
    /// Nucleus-sampling probability mass.
    #[builder(default, setter(strip_option))]
    pub top_p: Option<f32>,
    /// Number of highest-probability tokens considered at each step.
    #[builder(default, setter(strip_option))]
    pub top_k: Option<i32>,
    /// The full response, filled in by `execute`.
    #[builder(default, setter(skip))]
    pub response: Option<GenerateContentResponse>,
    /// The first candidate's text, filled in by `execute`.
    #[builder(default, setter(skip))]
    pub response_text: Option<String>,
}

#[async_trait]
impl Component for MultimodalGenerate {
    async fn execute(&mut self, ctx: &mut ExecutionContext) -> Result<(), VertexAiError> {
        let config = GenerationConfig::builder()
            .max_output_tokens(self.max_output_tokens.unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS))
            .temperature(self.temperature.unwrap_or(DEFAULT_TEMPERATURE))
            .top_p(self.top_p.unwrap_or(DEFAULT_TOP_P))
            .top_k(self.top_k.unwrap_or(DEFAULT_TOP_K))
            .build();
        let request = GenerateContentRequest::builder()
            .contents(vec![Content {
                role: Some(Role::User),
                parts: self.parts.clone(),
            }])
            .generation_config(config)
            .build();

        let response = ctx
            .client()?
            .generate_content(VISION_MODEL, &request)
            .await?;
        if response.candidates.is_empty() {
            return Err(VertexAiError::EmptyResponse);
        }
        self.response_text = Some(response.text());
        self.response = Some(response);
        Ok(())
    }
}
