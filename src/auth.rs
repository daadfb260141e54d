//! Credential handling for Vertex AI calls.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use gcp_auth::{CustomServiceAccount, TokenProvider};

use crate::error::VertexAiError;

/// OAuth scope required by the Vertex AI endpoints.
const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Credentials used to authorize Vertex AI calls.
#[derive(Clone)]
pub enum Credentials {
    /// A token provider backed by a service account or application
    /// default credentials.
    Provider(Arc<dyn TokenProvider>),
    /// A pre-issued OAuth access token.
    AccessToken(String),
}

impl Credentials {
    /// Loads credentials from a service account key file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// service account key.
    pub fn from_service_account_file(path: &Path) -> Result<Self, VertexAiError> {
        let account = CustomServiceAccount::from_file(path)?;
        Ok(Self::Provider(Arc::new(account)))
    }

    /// Discovers application default credentials from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if no credential source can be found.
    pub async fn application_default() -> Result<Self, VertexAiError> {
        let provider = gcp_auth::provider().await?;
        Ok(Self::Provider(provider))
    }

    /// Wraps a pre-issued OAuth access token.
    pub fn access_token(token: impl Into<String>) -> Self {
        Self::AccessToken(token.into())
    }

    /// Produces a bearer token scoped to the Vertex AI API.
    pub(crate) async fn bearer_token(&self) -> Result<String, VertexAiError> {
        match self {
            Self::Provider(provider) => {
                let token = provider.token(&[CLOUD_PLATFORM_SCOPE]).await?;
                Ok(token.as_str().to_string())
            }
            Self::AccessToken(token) => Ok(token.clone()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provider(_) => f.debug_tuple("Provider").field(&"..").finish(),
            Self::AccessToken(_) => f.debug_tuple("AccessToken").field(&"<redacted>").finish(),
        }
    }
}
