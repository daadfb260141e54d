//! Client implementation for the Vertex AI API.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::Credentials;
use crate::error::VertexAiError;
use crate::models::{
    GenerateContentRequest, GenerateContentResponse, PredictRequest, PredictResponse,
    PublisherModel, RequestType,
};

/// Region used when the caller does not pick one.
pub const DEFAULT_LOCATION: &str = "us-central1";
/// API version segment used for every endpoint.
const API_VERSION: &str = "v1";

/// Connection settings for a Vertex AI regional endpoint.
#[derive(Debug, Clone)]
pub struct VertexConfig {
    /// The Google Cloud project billed for the calls.
    pub project_id: String,
    /// The region the calls are routed to.
    pub location: String,
    /// The base URL of the regional endpoint.
    pub base_url: String,
}

impl VertexConfig {
    /// Creates a configuration for a project and location.
    ///
    /// The base URL is derived from the location, e.g.
    /// `https://us-central1-aiplatform.googleapis.com`.
    pub fn new(project_id: impl Into<String>, location: impl Into<String>) -> Self {
        let location = location.into();
        let base_url = format!("https://{}-aiplatform.googleapis.com", location);
        Self {
            project_id: project_id.into(),
            location,
            base_url,
        }
    }

    /// Overrides the base URL, e.g. to point at a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// A client for calling Vertex AI publisher models.
#[derive(Debug, Clone)]
pub struct VertexClient {
    config: VertexConfig,
    credentials: Credentials,
    http: reqwest::Client,
}

impl VertexClient {
    /// Creates a client from a configuration and credentials.
    pub fn new(config: VertexConfig, credentials: Credentials) -> Self {
        Self {
            config,
            credentials,
            http: reqwest::Client::new(),
        }
    }

    /// Creates a client authenticated by a service account key file.
    ///
    /// # Errors
    ///
    /// Returns an error if the key file cannot be loaded.
    pub fn from_service_account_file(
        config: VertexConfig,
        path: &Path,
    ) -> Result<Self, VertexAiError> {
        let credentials = Credentials::from_service_account_file(path)?;
        Ok(Self::new(config, credentials))
    }

    /// Creates a client authenticated by application default credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if no credential source can be found in the
    /// environment.
    pub async fn from_adc(config: VertexConfig) -> Result<Self, VertexAiError> {
        let credentials = Credentials::application_default().await?;
        Ok(Self::new(config, credentials))
    }

    /// Creates a client from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `GOOGLE_CLOUD_PROJECT` - the project billed for the calls
    /// * `GOOGLE_CLOUD_LOCATION` - the region, defaulting to `us-central1`
    ///
    /// # Errors
    ///
    /// Returns an error if `GOOGLE_CLOUD_PROJECT` is not set or no
    /// application default credentials can be found.
    pub async fn from_env() -> Result<Self, VertexAiError> {
        let project_id = std::env::var("GOOGLE_CLOUD_PROJECT")?;
        let location =
            std::env::var("GOOGLE_CLOUD_LOCATION").unwrap_or_else(|_| DEFAULT_LOCATION.into());
        Self::from_adc(VertexConfig::new(project_id, location)).await
    }

    /// Returns the configuration the client was built with.
    pub fn config(&self) -> &VertexConfig {
        &self.config
    }

    fn model_url(&self, model: &str, request_type: RequestType) -> String {
        format!(
            "{}/{}/projects/{}/locations/{}/publishers/google/models/{}:{}",
            self.config.base_url,
            API_VERSION,
            self.config.project_id,
            self.config.location,
            model,
            request_type
        )
    }

    fn publisher_model_url(&self, model: &str) -> String {
        format!(
            "{}/{}/publishers/google/models/{}",
            self.config.base_url, API_VERSION, model
        )
    }

    async fn check_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, VertexAiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(parsed) => parsed.error.message,
                Err(_) => body,
            };
            return Err(VertexAiError::ApiError {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, VertexAiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        debug!(url = %url, "Sending Vertex AI request");
        let token = self.credentials.bearer_token().await?;
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        Ok(Self::check_status(response).await?.json::<T>().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, VertexAiError> {
        debug!(url = %url, "Fetching Vertex AI resource");
        let token = self.credentials.bearer_token().await?;
        let response = self.http.get(url).bearer_auth(token).send().await?;
        Ok(Self::check_status(response).await?.json::<T>().await?)
    }

    /// Fetches the metadata of a publisher model.
    ///
    /// # Arguments
    ///
    /// * `model` - The model name, e.g. "text-bison"
    ///
    /// # Errors
    ///
    /// Returns an error if the model does not exist or the request fails.
    pub async fn fetch_publisher_model(
        &self,
        model: &str,
    ) -> Result<PublisherModel, VertexAiError> {
        let url = self.publisher_model_url(model);
        self.get_json(&url).await
    }

    /// Runs a predict call against a text, code, or chat model.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response cannot
    /// be parsed.
    pub async fn predict(
        &self,
        model: &str,
        request: &PredictRequest,
    ) -> Result<PredictResponse, VertexAiError> {
        let url = self.model_url(model, RequestType::Predict);
        self.post_json(&url, request).await
    }

    /// Runs a generateContent call against a multimodal model.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response cannot
    /// be parsed.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, VertexAiError> {
        let url = self.model_url(model, RequestType::GenerateContent);
        self.post_json(&url, request).await
    }
}

/// The error envelope returned by the service.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorMessage,
}

#[derive(Debug, Deserialize)]
struct ApiErrorMessage {
    message: String,
}
