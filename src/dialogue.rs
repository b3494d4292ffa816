//! Conversation state for the consultation dialogue.

use serde::{Deserialize, Serialize};
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

/// Per-chat conversation state. Exactly one variant holds at a time, so a
/// chat can never simultaneously await a question and an order step.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum ChatState {
    /// Idle: browsing menus, free text is ignored.
    #[default]
    Start,
    /// The next text message is a Vastu question for the completion service.
    AwaitingQuestion,
    /// The next text message is the customer's name (order flow, step 1).
    AwaitingName,
    /// The next text message is the contact (order flow, step 2).
    AwaitingContact { name: String },
}

/// Type alias for the per-chat dialogue handle.
pub type ChatDialogue = Dialogue<ChatState, InMemStorage<ChatState>>;

/// Validates a name or contact input collected during the order flow.
pub fn validate_order_input(input: &str) -> Result<String, &'static str> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err("empty");
    }

    if trimmed.len() > 255 {
        return Err("too_long");
    }

    Ok(trimmed.to_string())
}
