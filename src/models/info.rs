//! Publisher model metadata.

use serde::Deserialize;

/// Metadata for a publisher model resource.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherModel {
    /// The full resource name of the model.
    pub name: String,
    /// The version the service resolves the model name to.
    pub version_id: Option<String>,
    /// Whether the model weights are open source.
    pub open_source_category: Option<String>,
    /// The release track of the model (e.g. GA, PREVIEW).
    pub launch_stage: Option<String>,
}
