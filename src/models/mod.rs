//! Data structures for Vertex AI requests and responses.

mod generation_config;
mod handle;
mod info;
mod part;
mod predict;
mod request;
mod request_type;
mod response;

pub use generation_config::GenerationConfig;
pub use handle::{ModelFamily, ModelHandle};
pub use info::PublisherModel;
pub use part::{InlineData, Part};
pub use predict::{
    Author, ChatCandidate, ChatInstance, ChatMessage, PredictInstance, PredictParameters,
    PredictRequest, PredictResponse, Prediction,
};
pub use request::{Content, GenerateContentRequest, Role};
pub use request_type::RequestType;
pub use response::{
    Candidate, FinishReason, GenerateContentResponse, SafetyRating, UsageMetadata,
};
