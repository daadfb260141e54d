//! Common part model used in both requests and responses.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// A single prompt fragment: plain text or inline binary media.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// A text part containing a string value
    Text {
        /// The text content of the part
        text: String,
    },
    /// A part carrying binary media inline
    InlineData {
        /// The inline data content of the part
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

impl Part {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Creates an inline-data part from raw bytes, base64-encoding them.
    pub fn inline_data(mime_type: impl Into<String>, data: impl AsRef<[u8]>) -> Self {
        Self::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.into(),
                data: STANDARD.encode(data.as_ref()),
            },
        }
    }
}

/// Inline binary media with its content type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// The MIME type of the inline data
    pub mime_type: String,
    /// Base64-encoded content
    pub data: String,
}
