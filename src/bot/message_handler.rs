//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::debug;

// Import dialogue types
use crate::dialogue::{ChatDialogue, ChatState};

// Import the completion client
use crate::llm::CompletionClient;

// Import dialogue manager functions
use super::dialogue_manager::{handle_contact_input, handle_name_input, handle_question_input};

// Import UI builder functions
use super::ui_builder::{main_menu_keyboard, main_menu_text};

use super::Command;

/// Handle the `/start` command: reset the dialogue and show the main menu.
pub async fn command_handler(
    bot: Bot,
    msg: Message,
    dialogue: ChatDialogue,
    cmd: Command,
) -> Result<()> {
    match cmd {
        Command::Start => {
            dialogue.update(ChatState::Start).await?;

            let (first_name, language_code) = sender_identity(&msg);
            bot.send_message(
                msg.chat.id,
                main_menu_text(&first_name, language_code.as_deref()),
            )
            .reply_markup(main_menu_keyboard(language_code.as_deref()))
            .await?;
        }
    }

    Ok(())
}

/// Route a plain text message according to the chat's dialogue state.
pub async fn message_handler(
    bot: Bot,
    msg: Message,
    dialogue: ChatDialogue,
    client: Arc<CompletionClient>,
) -> Result<()> {
    let text = match msg.text() {
        Some(text) => text.to_string(),
        // Photos, stickers and the like play no role in this bot.
        None => return Ok(()),
    };

    let state = dialogue.get().await?.unwrap_or_default();
    debug!(chat_id = %msg.chat.id, state = ?state, "Routing text message");

    let (_, language_code) = sender_identity(&msg);
    let language_code = language_code.as_deref();

    match state {
        ChatState::AwaitingQuestion => {
            handle_question_input(&bot, &msg, dialogue, client, &text, language_code).await
        }
        ChatState::AwaitingName => {
            handle_name_input(&bot, &msg, dialogue, &text, language_code).await
        }
        ChatState::AwaitingContact { name } => {
            handle_contact_input(&bot, &msg, dialogue, name, &text, language_code).await
        }
        ChatState::Start => {
            // Free text outside any dialogue is deliberately ignored.
            debug!(chat_id = %msg.chat.id, "Ignoring text outside any dialogue");
            Ok(())
        }
    }
}

fn sender_identity(msg: &Message) -> (String, Option<String>) {
    match msg.from.as_ref() {
        Some(user) => (user.first_name.clone(), user.language_code.clone()),
        None => (String::new(), None),
    }
}
