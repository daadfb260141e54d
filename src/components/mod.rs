//! Workflow components wrapping the Vertex AI operations.
//!
//! Each component is one step of a visual workflow: inputs are plain
//! fields set when the component is built, shared state travels through
//! the [`ExecutionContext`], and outputs land in the component's own
//! output fields after [`execute`](Component::execute) returns.

use async_trait::async_trait;

use crate::context::ExecutionContext;
use crate::error::VertexAiError;

mod authorize;
mod chat;
mod generate;
mod loaders;
mod multimodal;

pub use authorize::Authorize;
pub use chat::Chat;
pub use generate::{GenerateCode, GenerateText};
pub use loaders::{LoadChatModel, LoadCodeChatModel, LoadCodeModel, LoadTextModel};
pub use multimodal::{MakeMultimodalPrompt, MultimodalGenerate};

/// A single step of a workflow.
#[async_trait]
pub trait Component {
    /// Runs the component against the shared context.
    ///
    /// # Errors
    ///
    /// Returns an error if a required stage has not run before this one
    /// or if the underlying API call fails.
    async fn execute(&mut self, ctx: &mut ExecutionContext) -> Result<(), VertexAiError>;
}
