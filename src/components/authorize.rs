//! Authorization component.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::client::{VertexClient, VertexConfig, DEFAULT_LOCATION};
use crate::components::Component;
use crate::context::ExecutionContext;
use crate::error::VertexAiError;

/// Authorizes a workflow against a Google Cloud project.
///
/// Builds a [`VertexClient`] and stores it in the execution context for
/// every later component to use. Credentials come from a service account
/// key file, or from application default credentials when `from_env` is
/// set.
#[derive(Debug, TypedBuilder)]
#[builder(doc)]
pub struct Authorize {
    /// The Google Cloud project billed for the calls.
    #[builder(setter(into))]
    pub project: String,
    /// The region calls are routed to. Defaults to `us-central1`.
    #[builder(default, setter(strip_option, into))]
    pub location: Option<String>,
    /// Path to a service account key file.
    #[builder(default, setter(strip_option, into))]
    pub credentials_path: Option<PathBuf>,
    /// Discover application default credentials instead of reading a
    /// key file.
    #[builder(default)]
    pub from_env: bool,
}

impl Authorize {
    fn config(&self) -> VertexConfig {
        let location = self
            .location
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCATION.into());
        VertexConfig::new(self.project.clone(), location)
    }
}

#[async_trait]
impl Component for Authorize {
    async fn execute(&mut self, ctx: &mut ExecutionContext) -> Result<(), VertexAiError> {
        let config = self.config();
        debug!(project = %config.project_id, location = %config.location, "Authorizing Vertex AI client");

        let client = if self.from_env {
            VertexClient::from_adc(config).await?
        } else {
            let path = self
                .credentials_path
                .as_deref()
                .ok_or(VertexAiError::MissingCredentials)?;
            VertexClient::from_service_account_file(config, path)?
        };

        ctx.set_client(client);
        Ok(())
    }
}
