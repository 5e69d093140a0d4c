//! ChatSession — an append-only chat log owned by one interaction stream.
//!
//! Messages are never mutated or removed once appended. The typing flag
//! gates bot appends: while a reply is pending, further user input is
//! rejected and exactly one bot message may land. Delayed replies carry the
//! epoch they were scheduled under; a reset bumps the epoch so a completion
//! that fires after teardown is discarded instead of applied.

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::error::ChatError;

use super::message::{ChatMessage, Sender};

/// Greeting seeded as the first bot message of every session.
pub const GREETING: &str = "Hello! I'm your Health Assistant AI. How can I help you today? You can ask me about symptoms, general health advice, or medical information.";

/// Owned chat state. Not persisted; a new session starts from the greeting.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: Uuid,
    messages: Vec<ChatMessage>,
    next_id: u64,
    typing: bool,
    epoch: u64,
}

/// Immutable view of the session for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ChatSnapshot {
    pub session_id: Uuid,
    pub messages: Vec<ChatMessage>,
    pub typing: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            messages: Vec::new(),
            next_id: 1,
            typing: false,
            epoch: 0,
        };
        session.append(Sender::Bot, GREETING);
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// The epoch a delayed reply must present to `push_bot`.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    fn append(&mut self, sender: Sender, text: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage::new(id, sender, text));
        id
    }

    /// Append a user message and raise the typing flag.
    ///
    /// Blank input and input sent while a reply is pending are rejected.
    pub fn push_user(&mut self, text: &str) -> Result<u64, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if self.typing {
            return Err(ChatError::ReplyPending);
        }
        let id = self.append(Sender::User, text);
        self.typing = true;
        debug!(session = %self.id, id, "User message appended");
        Ok(id)
    }

    /// Append the bot reply scheduled under `epoch` and clear typing.
    ///
    /// Returns false (and appends nothing) when `epoch` is stale, i.e. the
    /// session was reset after the reply was scheduled.
    pub fn push_bot(&mut self, epoch: u64, text: &str) -> bool {
        if epoch != self.epoch {
            debug!(
                session = %self.id,
                scheduled = epoch,
                current = self.epoch,
                "Stale bot reply discarded"
            );
            return false;
        }
        let id = self.append(Sender::Bot, text);
        self.typing = false;
        debug!(session = %self.id, id, "Bot reply appended");
        true
    }

    /// Clear the log back to the greeting and invalidate pending replies.
    pub fn reset(&mut self) {
        debug!(session = %self.id, "Chat session reset");
        self.epoch += 1;
        self.messages.clear();
        self.next_id = 1;
        self.typing = false;
        self.append(Sender::Bot, GREETING);
    }

    pub fn snapshot(&self) -> ChatSnapshot {
        ChatSnapshot {
            session_id: self.id,
            messages: self.messages.clone(),
            typing: self.typing,
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        let greeting = &session.messages()[0];
        assert_eq!(greeting.id, 1);
        assert_eq!(greeting.sender, Sender::Bot);
        assert_eq!(greeting.text, GREETING);
        assert!(!session.is_typing());
    }

    #[test]
    fn user_message_raises_typing_and_ids_are_monotonic() {
        let mut session = ChatSession::new();
        let id = session.push_user("I have a cough").unwrap();
        assert_eq!(id, 2);
        assert!(session.is_typing());

        assert!(session.push_bot(session.epoch(), "See a doctor."));
        assert!(!session.is_typing());

        let ids: Vec<u64> = session.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn blank_input_rejected() {
        let mut session = ChatSession::new();
        assert!(matches!(
            session.push_user("   "),
            Err(ChatError::EmptyMessage)
        ));
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_typing());
    }

    #[test]
    fn second_message_while_reply_pending_rejected() {
        let mut session = ChatSession::new();
        session.push_user("first").unwrap();
        assert!(matches!(
            session.push_user("second"),
            Err(ChatError::ReplyPending)
        ));
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn stale_epoch_reply_discarded() {
        let mut session = ChatSession::new();
        session.push_user("hello").unwrap();
        let scheduled_epoch = session.epoch();

        session.reset();

        assert!(!session.push_bot(scheduled_epoch, "too late"));
        // Only the fresh greeting remains, typing stays clear
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_typing());
    }

    #[test]
    fn reset_reseeds_greeting_and_restarts_ids() {
        let mut session = ChatSession::new();
        session.push_user("hello").unwrap();
        assert!(session.push_bot(session.epoch(), "hi"));
        let before = session.epoch();

        session.reset();

        assert_eq!(session.epoch(), before + 1);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].id, 1);
        assert_eq!(session.messages()[0].text, GREETING);
    }

    #[test]
    fn session_id_survives_reset() {
        let mut session = ChatSession::new();
        let id = session.id();
        session.reset();
        assert_eq!(session.id(), id);
    }

    #[test]
    fn snapshot_serializes() {
        let mut session = ChatSession::new();
        session.push_user("I have a fever").unwrap();
        let snapshot = session.snapshot();
        assert!(snapshot.typing);
        assert_eq!(snapshot.messages.len(), 2);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["messages"][1]["sender"], "user");
    }
}
