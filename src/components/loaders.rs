//! Model loader components.

use async_trait::async_trait;
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::client::VertexClient;
use crate::components::Component;
use crate::context::ExecutionContext;
use crate::error::VertexAiError;
use crate::models::{ModelFamily, ModelHandle};

/// Resolves a publisher model by name and tags it with its family.
async fn load(
    client: &VertexClient,
    name: &str,
    family: ModelFamily,
) -> Result<ModelHandle, VertexAiError> {
    let info = client.fetch_publisher_model(name).await?;
    debug!(model = %name, family = %family, version = ?info.version_id, "Loaded publisher model");
    let handle = ModelHandle::new(name, family);
    Ok(match info.version_id {
        Some(version_id) => handle.with_version(version_id),
        None => handle,
    })
}

/// Loads a text generation model, e.g. `text-bison`.
///
/// The resolved handle lands in the `model` output field and becomes the
/// context's current model.
#[derive(Debug, TypedBuilder)]
#[builder(doc)]
pub struct LoadTextModel {
    /// The publisher model name.
    #[builder(setter(into))]
    pub model_name: String,
    /// The loaded model handle, filled in by `execute`.
    #[builder(default, setter(skip))]
    pub model: Option<ModelHandle>,
}

#[async_trait]
impl Component for LoadTextModel {
    async fn execute(&mut self, ctx: &mut ExecutionContext) -> Result<(), VertexAiError> {
        let handle = load(ctx.client()?, &self.model_name, ModelFamily::Text).await?;
        self.model = Some(handle.clone());
        ctx.set_model(handle);
        Ok(())
    }
}

/// Loads a code completion model, e.g. `code-bison`.
#[derive(Debug, TypedBuilder)]
#[builder(doc)]
pub struct LoadCodeModel {
    /// The publisher model name.
    #[builder(setter(into))]
    pub model_name: String,
    /// The loaded model handle, filled in by `execute`.
    #[builder(default, setter(skip))]
    pub model: Option<ModelHandle>,
}

#[async_trait]
impl Component for LoadCodeModel {
    async fn execute(&mut self, ctx: &mut ExecutionContext) -> Result<(), VertexAiError> {
        let handle = load(ctx.client()?, &self.model_name, ModelFamily::Code).await?;
        self.model = Some(handle.clone());
        ctx.set_model(handle);
        Ok(())
    }
}

/// Loads a chat model, e.g. `chat-bison`.
#[derive(Debug, TypedBuilder)]
#[builder(doc)]
pub struct LoadChatModel {
    /// The publisher model name.
    #[builder(setter(into))]
    pub model_name: String,
    /// The loaded model handle, filled in by `execute`.
    #[builder(default, setter(skip))]
    pub model: Option<ModelHandle>,
}

#[async_trait]
impl Component for LoadChatModel {
    async fn execute(&mut self, ctx: &mut ExecutionContext) -> Result<(), VertexAiError> {
        let handle = load(ctx.client()?, &self.model_name, ModelFamily::Chat).await?;
        self.model = Some(handle.clone());
        ctx.set_model(handle);
        Ok(())
    }
}

/// Loads a code chat model, e.g. `codechat-bison`.
#[derive(Debug, TypedBuilder)]
#[builder(doc)]
pub struct LoadCodeChatModel {
    /// The publisher model name.
    #[builder(setter(into))]
    pub model_name: String,
    /// The loaded model handle, filled in by `execute`.
    #[builder(default, setter(skip))]
    pub model: Option<ModelHandle>,
}

#[async_trait]
impl Component for LoadCodeChatModel {
    async fn execute(&mut self, ctx: &mut ExecutionContext) -> Result<(), VertexAiError> {
        let handle = load(ctx.client()?, &self.model_name, ModelFamily::CodeChat).await?;
        self.model = Some(handle.clone());
        ctx.set_model(handle);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::client::VertexConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn context_for(server: &MockServer) -> ExecutionContext {
        let config =
            VertexConfig::new("test-project", "us-central1").with_base_url(server.uri());
        let client = VertexClient::new(config, Credentials::access_token("test-token"));
        let mut ctx = ExecutionContext::new();
        ctx.set_client(client);
        ctx
    }

    #[tokio::test]
    async fn resolves_the_model_and_updates_the_context() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/publishers/google/models/text-bison"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "publishers/google/models/text-bison",
                "versionId": "002",
                "launchStage": "GA"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut ctx = context_for(&server);
        let mut component = LoadTextModel::builder().model_name("text-bison").build();
        component.execute(&mut ctx).await.unwrap();

        let handle = component.model.unwrap();
        assert_eq!(handle.name, "text-bison");
        assert_eq!(handle.family, ModelFamily::Text);
        assert_eq!(handle.version_id.as_deref(), Some("002"));
        assert_eq!(ctx.model().unwrap(), &handle);
    }

    #[tokio::test]
    async fn each_loader_tags_its_family() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "publishers/google/models/whatever"
            })))
            .mount(&server)
            .await;

        let mut ctx = context_for(&server);

        let mut code = LoadCodeModel::builder().model_name("code-bison").build();
        code.execute(&mut ctx).await.unwrap();
        assert_eq!(ctx.model().unwrap().family, ModelFamily::Code);

        let mut chat = LoadChatModel::builder().model_name("chat-bison").build();
        chat.execute(&mut ctx).await.unwrap();
        assert_eq!(ctx.model().unwrap().family, ModelFamily::Chat);

        let mut code_chat = LoadCodeChatModel::builder()
            .model_name("codechat-bison")
            .build();
        code_chat.execute(&mut ctx).await.unwrap();
        assert_eq!(ctx.model().unwrap().family, ModelFamily::CodeChat);
    }

    #[tokio::test]
    async fn loading_before_authorization_fails() {
        let mut ctx = ExecutionContext::new();
        let mut component = LoadTextModel::builder().model_name("text-bison").build();
        let error = component.execute(&mut ctx).await.unwrap_err();
        assert!(matches!(error, VertexAiError::MissingClient));
    }

    #[tokio::test]
    async fn unknown_models_surface_the_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": { "code": 404, "message": "Model not found", "status": "NOT_FOUND" }
            })))
            .mount(&server)
            .await;

        let mut ctx = context_for(&server);
        let mut component = LoadTextModel::builder().model_name("no-such-model").build();
        let error = component.execute(&mut ctx).await.unwrap_err();
        assert!(matches!(
            error,
            VertexAiError::ApiError { status: 404, .. }
        ));
        assert!(component.model.is_none());
    }
}
