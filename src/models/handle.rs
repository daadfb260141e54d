//! Handles identifying a loaded model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A resolved model, ready to be passed between workflow components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelHandle {
    /// The publisher model name, e.g. `text-bison`.
    pub name: String,
    /// Which family of endpoint the model speaks.
    pub family: ModelFamily,
    /// The version the service resolved the name to, when known.
    pub version_id: Option<String>,
}

impl ModelHandle {
    /// Creates a handle for a model name.
    pub fn new(name: impl Into<String>, family: ModelFamily) -> Self {
        Self {
            name: name.into(),
            family,
            version_id: None,
        }
    }

    /// Attaches the version resolved by the service.
    pub fn with_version(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// The family of a generative model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelFamily {
    /// Free-form text generation.
    Text,
    /// Code completion.
    Code,
    /// Multi-turn text conversation.
    Chat,
    /// Multi-turn conversation about code.
    CodeChat,
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelFamily::Text => "text",
            ModelFamily::Code => "code",
            ModelFamily::Chat => "chat",
            ModelFamily::CodeChat => "code-chat",
        };
        write!(f, "{}", name)
    }
}
