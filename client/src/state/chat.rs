//! Conversation state for the assistant chat page.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Number of messages kept on screen.
pub const MAX_CHAT_MESSAGES: usize = 10;

/// Reply shown when the backend cannot answer.
pub const FALLBACK_REPLY: &str = "Désolé, je ne peux pas répondre pour le moment.";

/// A single chat bubble. Text is always rendered as plain text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    /// `true` for messages typed by the user, `false` for assistant replies.
    pub sent: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
    pub error: Option<String>,
}

impl ChatState {
    /// Conversation opened with the assistant greeting for `display_name`.
    pub fn greeting(display_name: &str) -> Self {
        Self {
            messages: vec![ChatMessage {
                text: format!("Bonjour {display_name}, comment puis-je t'aider ?"),
                sent: false,
            }],
            ..Self::default()
        }
    }

    /// Append the user's message. Returns the trimmed text to send, or
    /// `None` when the input is blank or a reply is still pending.
    pub fn push_outgoing(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() || self.pending {
            return None;
        }
        self.push(ChatMessage { text: text.to_owned(), sent: true });
        self.pending = true;
        Some(text.to_owned())
    }

    /// Record the backend outcome for the last outgoing message.
    pub fn push_reply(&mut self, reply: Result<String, String>) {
        let text = match reply {
            Ok(text) => {
                self.error = None;
                text
            }
            Err(message) => {
                self.error = Some(format!("Erreur : {message}"));
                FALLBACK_REPLY.to_owned()
            }
        };
        self.push(ChatMessage { text, sent: false });
        self.pending = false;
    }

    /// Hide the inline error; the conversation is untouched.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        if self.messages.len() > MAX_CHAT_MESSAGES {
            let overflow = self.messages.len() - MAX_CHAT_MESSAGES;
            self.messages.drain(..overflow);
        }
    }
}
