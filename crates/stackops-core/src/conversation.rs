// Conversation types
//
// A conversation is an ordered, append-only sequence of items. For this
// workflow only one kind of item is ever built locally: a user turn wrapping
// the input text. Everything the agent run produces (model turns, tool calls)
// is appended back as opaque raw items and never interpreted here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One content part of a user turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Plain text input from the user
    InputText { text: String },
}

impl ContentPart {
    /// Create a text content part
    pub fn input_text(text: impl Into<String>) -> Self {
        ContentPart::InputText { text: text.into() }
    }

    /// Get the text payload
    pub fn text(&self) -> &str {
        match self {
            ContentPart::InputText { text } => text,
        }
    }
}

/// A user turn in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserTurn {
    /// Unique item ID
    pub id: Uuid,

    /// Content parts (one or more text payloads)
    pub content: Vec<ContentPart>,

    /// Timestamp when the turn was created
    pub created_at: DateTime<Utc>,
}

impl UserTurn {
    /// Create a user turn with a single text part
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            content: vec![ContentPart::input_text(text)],
            created_at: Utc::now(),
        }
    }

    /// Concatenated text of all content parts
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(ContentPart::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// An item in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConversationItem {
    /// A user turn built locally
    User(UserTurn),

    /// An item produced by the agent run, carried verbatim
    Raw(serde_json::Value),
}

impl ConversationItem {
    /// Create a user item with a single text part
    pub fn user(text: impl Into<String>) -> Self {
        ConversationItem::User(UserTurn::new(text))
    }

    /// Get the user turn if this is a user item
    pub fn as_user(&self) -> Option<&UserTurn> {
        match self {
            ConversationItem::User(turn) => Some(turn),
            ConversationItem::Raw(_) => None,
        }
    }
}

/// Ordered, append-only conversation history
///
/// Owned by a single workflow invocation and discarded at the end of the
/// call. Never shared across invocations.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    items: Vec<ConversationItem>,
}

impl ConversationHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a history seeded with a single user turn
    pub fn seeded_with_user(text: impl Into<String>) -> Self {
        Self {
            items: vec![ConversationItem::user(text)],
        }
    }

    /// Append one item
    pub fn push(&mut self, item: ConversationItem) {
        self.items.push(item);
    }

    /// Append the raw items an agent run produced, in order
    pub fn extend_raw(&mut self, items: impl IntoIterator<Item = serde_json::Value>) {
        self.items
            .extend(items.into_iter().map(ConversationItem::Raw));
    }

    /// All items, in chronological order
    pub fn items(&self) -> &[ConversationItem] {
        &self.items
    }

    /// Count of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the history is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_history_contains_exactly_one_user_turn() {
        let history = ConversationHistory::seeded_with_user("I need help with my email server");
        assert_eq!(history.len(), 1);

        let turn = history.items()[0].as_user().expect("user turn");
        assert_eq!(turn.content.len(), 1);
        assert_eq!(turn.text(), "I need help with my email server");
    }

    #[test]
    fn extend_raw_preserves_order() {
        let mut history = ConversationHistory::seeded_with_user("hello");
        history.extend_raw(vec![
            serde_json::json!({"role": "assistant", "content": "hi"}),
            serde_json::json!({"role": "assistant", "content": "anything else?"}),
        ]);

        assert_eq!(history.len(), 3);
        assert!(history.items()[0].as_user().is_some());
        assert!(history.items()[1].as_user().is_none());
        assert!(history.items()[2].as_user().is_none());
    }

    #[test]
    fn content_part_serializes_as_input_text() {
        let part = ContentPart::input_text("book a consultation");
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "input_text", "text": "book a consultation"})
        );
    }

    #[test]
    fn empty_input_is_allowed() {
        let history = ConversationHistory::seeded_with_user("");
        let turn = history.items()[0].as_user().expect("user turn");
        assert_eq!(turn.text(), "");
    }
}
