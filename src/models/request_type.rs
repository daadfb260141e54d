use std::fmt;

/// The verb appended to a model URL.
#[derive(Debug, Copy, Clone)]
pub enum RequestType {
    /// A PaLM-style predict call.
    Predict,
    /// A Gemini-style generateContent call.
    GenerateContent,
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predict => write!(f, "predict"),
            Self::GenerateContent => write!(f, "generateContent"),
        }
    }
}
