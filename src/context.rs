//! Shared state threaded through a component workflow.

use crate::client::VertexClient;
use crate::error::VertexAiError;
use crate::models::ModelHandle;

/// State shared by the components of a single workflow run.
///
/// An authorization component stores the client; loader components store
/// the model they resolved. Downstream components read both back out and
/// fail with a typed error when a required stage has not run.
#[derive(Debug, Default)]
pub struct ExecutionContext {
    client: Option<VertexClient>,
    model: Option<ModelHandle>,
}

impl ExecutionContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the authorized client.
    pub fn set_client(&mut self, client: VertexClient) {
        self.client = Some(client);
    }

    /// Returns the authorized client.
    ///
    /// # Errors
    ///
    /// Returns [`VertexAiError::MissingClient`] if no authorization
    /// component has run.
    pub fn client(&self) -> Result<&VertexClient, VertexAiError> {
        self.client.as_ref().ok_or(VertexAiError::MissingClient)
    }

    /// Stores the most recently loaded model.
    pub fn set_model(&mut self, model: ModelHandle) {
        self.model = Some(model);
    }

    /// Returns the most recently loaded model.
    ///
    /// # Errors
    ///
    /// Returns [`VertexAiError::MissingModel`] if no loader component
    /// has run.
    pub fn model(&self) -> Result<&ModelHandle, VertexAiError> {
        self.model.as_ref().ok_or(VertexAiError::MissingModel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::client::VertexConfig;
    use crate::models::ModelFamily;

    #[test]
    fn empty_context_reports_missing_stages() {
        let ctx = ExecutionContext::new();
        assert!(matches!(
            ctx.client().unwrap_err(),
            VertexAiError::MissingClient
        ));
        assert!(matches!(
            ctx.model().unwrap_err(),
            VertexAiError::MissingModel
        ));
    }

    #[test]
    fn stored_values_are_read_back() {
        let mut ctx = ExecutionContext::new();
        let config = VertexConfig::new("test-project", "us-central1");
        ctx.set_client(VertexClient::new(config, Credentials::access_token("t")));
        ctx.set_model(ModelHandle::new("text-bison", ModelFamily::Text));

        assert_eq!(ctx.client().unwrap().config().project_id, "test-project");
        assert_eq!(ctx.model().unwrap().name, "text-bison");
    }

    #[test]
    fn later_models_replace_earlier_ones() {
        let mut ctx = ExecutionContext::new();
        ctx.set_model(ModelHandle::new("text-bison", ModelFamily::Text));
        ctx.set_model(ModelHandle::new("code-bison", ModelFamily::Code));
        assert_eq!(ctx.model().unwrap().name, "code-bison");
    }
}
