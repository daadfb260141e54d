//! Conversation component.

use async_trait::async_trait;
use typed_builder::TypedBuilder;

use crate::chat::ChatSession;
use crate::components::Component;
use crate::context::ExecutionContext;
use crate::error::VertexAiError;
use crate::models::ModelHandle;

/// Sends one message in a conversation with a chat model.
///
/// When a session is supplied through the `conversation` input it is
/// continued; otherwise a new session is started from the `model` input
/// or the context's current model. The updated session lands in
/// `out_conversation` so the next invocation can carry it forward. If
/// the call fails, the supplied session is left in `conversation`,
/// unchanged.
#[derive(Debug, TypedBuilder)]
#[builder(doc)]
pub struct Chat {
    /// Model to use instead of the context's current model when
    /// starting a new conversation.
    #[builder(default, setter(strip_option))]
    pub model: Option<ModelHandle>,
    /// An earlier conversation to continue.
    #[builder(default, setter(strip_option))]
    pub conversation: Option<ChatSession>,
    /// Grounding text for a newly started conversation.
    #[builder(default, setter(strip_option, into))]
    pub context: Option<String>,
    /// The message to send.
    #[builder(setter(into))]
    pub user_prompt: String,
    /// The model's reply, filled in by `execute`.
    #[builder(default, setter(skip))]
    pub response: Option<String>,
    /// The session after this turn, filled in by `execute`.
    #[builder(default, setter(skip))]
    pub out_conversation: Option<ChatSession>,
}

#[async_trait]
impl Component for Chat {
    async fn execute(&mut self, ctx: &mut ExecutionContext) -> Result<(), VertexAiError> {
        let mut chat = match self.conversation.take() {
            Some(conversation) => conversation,
            None => {
                let model = match &self.model {
                    Some(model) => model.clone(),
                    None => ctx.model()?.clone(),
                };
                let session = ChatSession::new(ctx.client()?.clone(), model.name);
                match &self.context {
                    Some(context) => session.with_context(context.clone()),
                    None => session,
                }
            }
        };

        match chat.send_message(&self.user_prompt).await {
            Ok(reply) => {
                self.response = Some(reply);
                self.out_conversation = Some(chat);
                Ok(())
            }
            Err(error) => {
                self.conversation = Some(chat);
                Err(error)
            }
        }
    }
}
