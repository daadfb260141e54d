//! Chat session management for Vertex AI conversation models.

use crate::{
    error::VertexAiError,
    models::{ChatInstance, ChatMessage, PredictRequest},
    VertexClient,
};

/// A multi-turn conversation with a chat model.
///
/// The session owns the conversation history. Each call to
/// [`send_message`](ChatSession::send_message) replays the history plus
/// the new message, and the history grows only when the model answers.
#[derive(Debug, Clone)]
pub struct ChatSession {
    /// The authorized client
    client: VertexClient,
    /// The chat model name
    model: String,
    /// Grounding text prepended to every call
    context: Option<String>,
    /// Conversation history
    history: Vec<ChatMessage>,
}

impl ChatSession {
    /// Creates a new chat session.
    ///
    /// # Arguments
    ///
    /// * `client` - The authorized client
    /// * `model` - The chat model name, e.g. "chat-bison"
    pub fn new(client: VertexClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            context: None,
            history: Vec::new(),
        }
    }

    /// Sets the grounding context for the conversation.
    ///
    /// # Arguments
    ///
    /// * `context` - The grounding text, e.g. a persona description
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Sends a message to the chat and gets a response.
    ///
    /// # Arguments
    ///
    /// * `message` - The message text to send
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the model returns
    /// no candidates.
    pub async fn send_message(
        &mut self,
        message: impl Into<String>,
    ) -> Result<String, VertexAiError> {
        let user_message = ChatMessage::user(message);

        // Replay the history plus the new message
        let mut messages = self.history.clone();
        messages.push(user_message.clone());

        let request = PredictRequest::chat(ChatInstance {
            context: self.context.clone(),
            messages,
        });

        let response = self.client.predict(&self.model, &request).await?;

        // Update history only once the model has answered
        if let Some(candidate) = response.first_candidate() {
            let reply = candidate.content.clone();
            self.history.push(user_message);
            self.history.push(ChatMessage::bot(reply.clone()));
            return Ok(reply);
        }

        Err(VertexAiError::EmptyResponse)
    }

    /// Clears the conversation history while keeping the context.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Returns the conversation history.
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Returns the grounding context if set.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Returns the chat model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}
