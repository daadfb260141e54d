//! Text and code generation components.

use async_trait::async_trait;
use typed_builder::TypedBuilder;

use crate::components::Component;
use crate::context::ExecutionContext;
use crate::error::VertexAiError;
use crate::models::{ModelHandle, PredictParameters, PredictRequest};

/// Output length used when `max_tokens` is unset.
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;
/// Temperature used when `temperature` is unset.
const DEFAULT_TEMPERATURE: f32 = 0.2;
/// Nucleus-sampling mass used when `top_p` is unset.
const DEFAULT_TOP_P: f32 = 0.8;
/// Candidate-token count used when `top_k` is unset.
const DEFAULT_TOP_K: i32 = 40;

/// Generates text with a text model.
///
/// The model comes from the `model` input when set, otherwise from the
/// context. Unset sampling parameters fall back to 1024 output tokens,
/// temperature 0.2, top-p 0.8, and top-k 40.
#[derive(Debug, TypedBuilder)]
#[builder(doc)]
pub struct GenerateText {
    /// Model to use instead of the context's current model.
    #[builder(default, setter(strip_option))]
    pub model: Option<ModelHandle>,
    /// The text to generate from.
    #[builder(setter(into))]
    pub prompt: String,
    /// The maximum length of the generated text in tokens.
    #[builder(default, setter(strip_option))]
    pub max_tokens: Option<u32>,
    /// Controls randomness of the output text.
    #[builder(default, setter(strip_option))]
    pub temperature: Option<f32>,
    /// Nucleus-sampling probability mass.
    #[builder(default, setter(strip_option))]
    pub top_p: Option<f32>,
    /// Number of highest-probability tokens considered at each step.
    #[builder(default, setter(strip_option))]
    pub top_k: Option<i32>,
    /// The generated text, filled in by `execute`.
    #[builder(default, setter(skip))]
    pub completion: Option<String>,
}

#[async_trait]
impl Component for GenerateText {
    async fn execute(&mut self, ctx: &mut ExecutionContext) -> Result<(), VertexAiError> {
        let model = match &self.model {
            Some(model) => model.clone(),
            None => ctx.model()?.clone(),
        };
        let parameters = PredictParameters {
            max_output_tokens: Some(self.max_tokens.unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS)),
            temperature: Some(self.temperature.unwrap_or(DEFAULT_TEMPERATURE)),
            top_p: Some(self.top_p.unwrap_or(DEFAULT_TOP_P)),
            top_k: Some(self.top_k.unwrap_or(DEFAULT_TOP_K)),
        };
        let request = PredictRequest::text(self.prompt.clone(), parameters);

        let response = ctx.client()?.predict(&model.name, &request).await?;
        let completion = response.text().ok_or(VertexAiError::EmptyResponse)?;
        self.completion = Some(completion.to_owned());
        Ok(())
    }
}

/// Completes code with a code model.
///
/// Code models accept only an output-token limit and a temperature;
/// unset values fall back to 1024 tokens and temperature 0.2.
#[derive(Debug, TypedBuilder)]
#[builder(doc)]
pub struct GenerateCode {
    /// Model to use instead of the context's current model.
    #[builder(default, setter(strip_option))]
    pub model: Option<ModelHandle>,
    /// The code to complete from.
    #[builder(setter(into))]
    pub prompt: String,
    /// The maximum length of the generated code in tokens.
    #[builder(default, setter(strip_option))]
    pub max_tokens: Option<u32>,
    /// Controls randomness of the output.
    #[builder(default, setter(strip_option))]
    pub temperature: Option<f32>,
    /// The generated code, filled in by `execute`.
    #[builder(default, setter(skip))]
    pub completion: Option<String>,
}

#[async_trait]
impl Component for GenerateCode {
    async fn execute(&mut self, ctx: &mut ExecutionContext) -> Result<(), VertexAiError> {
        let model = match &self.model {
            Some(model) => model.clone(),
            None => ctx.model()?.clone(),
        };
        let parameters = PredictParameters {
            max_output_tokens: Some(self.max_tokens.unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS)),
            temperature: Some(self.temperature.unwrap_or(DEFAULT_TEMPERATURE)),
            ..Default::default()
        };
        let request = PredictRequest::code(self.prompt.clone(), parameters);

        let response = ctx.client()?.predict(&model.name, &request).await?;
        let completion = response.text().ok_or(VertexAiError::EmptyResponse)?;
        self.completion = Some(completion.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::client::{VertexClient, VertexConfig};
    use crate::models::ModelFamily;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn context_for(server: &MockServer) -> ExecutionContext {
        let config =
            VertexConfig::new("test-project", "us-central1").with_base_url(server.uri());
        let client = VertexClient::new(config, Credentials::access_token("test-token"));
        let mut ctx = ExecutionContext::new();
        ctx.set_client(client);
        ctx
    }

    fn completion_response(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "predictions": [{ "content": text }]
        }))
    }

    #[tokio::test]
    async fn unset_text_parameters_fall_back_to_the_documented_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(
                "/v1/projects/test-project/locations/us-central1/publishers/google/models/text-bison:predict",
            ))
            .and(body_partial_json(serde_json::json!({
                "instances": [{ "prompt": "Tell me a story" }],
                "parameters": {
                    "maxOutputTokens": 1024,
                    "temperature": 0.2,
                    "topP": 0.8,
                    "topK": 40
                }
            })))
            .respond_with(completion_response("Once upon a time"))
            .expect(1)
            .mount(&server)
            .await;

        let mut ctx = context_for(&server);
        ctx.set_model(ModelHandle::new("text-bison", ModelFamily::Text));

        let mut component = GenerateText::builder().prompt("Tell me a story").build();
        component.execute(&mut ctx).await.unwrap();
        assert_eq!(component.completion.as_deref(), Some("Once upon a time"));
    }

    #[tokio::test]
    async fn explicit_parameters_override_the_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({
                "parameters": {
                    "maxOutputTokens": 256,
                    "temperature": 0.9,
                    "topP": 0.5,
                    "topK": 10
                }
            })))
            .respond_with(completion_response("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let mut ctx = context_for(&server);
        ctx.set_model(ModelHandle::new("text-bison", ModelFamily::Text));

        let mut component = GenerateText::builder()
            .prompt("hi")
            .max_tokens(256)
            .temperature(0.9)
            .top_p(0.5)
            .top_k(10)
            .build();
        component.execute(&mut ctx).await.unwrap();
    }

    #[tokio::test]
    async fn an_explicit_model_wins_over_the_context_model() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(
                "/v1/projects/test-project/locations/us-central1/publishers/google/models/text-unicorn:predict",
            ))
            .respond_with(completion_response("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let mut ctx = context_for(&server);
        ctx.set_model(ModelHandle::new("text-bison", ModelFamily::Text));

        let mut component = GenerateText::builder()
            .model(ModelHandle::new("text-unicorn", ModelFamily::Text))
            .prompt("hi")
            .build();
        component.execute(&mut ctx).await.unwrap();
    }

    #[tokio::test]
    async fn code_calls_send_only_tokens_and_temperature() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(
                "/v1/projects/test-project/locations/us-central1/publishers/google/models/code-bison:predict",
            ))
            .and(body_partial_json(serde_json::json!({
                "instances": [{ "prefix": "fn main() {" }],
                "parameters": { "maxOutputTokens": 1024, "temperature": 0.2 }
            })))
            .respond_with(completion_response("}"))
            .expect(1)
            .mount(&server)
            .await;

        let mut ctx = context_for(&server);
        ctx.set_model(ModelHandle::new("code-bison", ModelFamily::Code));

        let mut component = GenerateCode::builder().prompt("fn main() {").build();
        component.execute(&mut ctx).await.unwrap();
        assert_eq!(component.completion.as_deref(), Some("}"));

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert!(body["parameters"].get("topP").is_none());
        assert!(body["parameters"].get("topK").is_none());
    }

    #[tokio::test]
    async fn generating_without_any_model_fails() {
        let server = MockServer::start().await;
        let mut ctx = context_for(&server);

        let mut component = GenerateText::builder().prompt("hi").build();
        let error = component.execute(&mut ctx).await.unwrap_err();
        assert!(matches!(error, VertexAiError::MissingModel));
        assert!(component.completion.is_none());
    }

    #[tokio::test]
    async fn empty_predictions_become_a_typed_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "predictions": [] })),
            )
            .mount(&server)
            .await;

        let mut ctx = context_for(&server);
        ctx.set_model(ModelHandle::new("text-bison", ModelFamily::Text));

        let mut component = GenerateText::builder().prompt("hi").build();
        let error = component.execute(&mut ctx).await.unwrap_err();
        assert!(matches!(error, VertexAiError::EmptyResponse));
    }
}
