//! Dialogue Manager module for handling dialogue state transitions

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, warn};

// Import localization
use crate::localization::{t_args_lang, t_lang};

// Import dialogue types
use crate::dialogue::{validate_order_input, ChatDialogue, ChatState};

// Import the completion client
use crate::llm::{truncate_error, CompletionClient, CompletionError};

// Import order records
use crate::order::OrderRecord;

// Import UI builder functions
use super::ui_builder::{
    answer_followup_keyboard, answer_text, order_confirmation_keyboard, order_confirmation_text,
};

/// Forward a free-text question to the completion service and render the
/// answer (or a failure message).
///
/// The dialogue is reset before the call is issued, so whatever happens the
/// user can immediately re-select "ask question" and try again.
pub async fn handle_question_input(
    bot: &Bot,
    msg: &Message,
    dialogue: ChatDialogue,
    client: Arc<CompletionClient>,
    question: &str,
    language_code: Option<&str>,
) -> Result<()> {
    dialogue.update(ChatState::Start).await?;

    let wait_message = bot
        .send_message(msg.chat.id, t_lang("searching-answer", language_code))
        .await?;

    match client.ask(question).await {
        Ok(answer) => {
            if let Err(e) = bot.delete_message(msg.chat.id, wait_message.id).await {
                warn!(chat_id = %msg.chat.id, error = %e, "Failed to delete wait message");
            }
            bot.send_message(msg.chat.id, answer_text(&answer, language_code))
                .reply_markup(answer_followup_keyboard(language_code))
                .await?;
        }
        Err(CompletionError::Status(code)) => {
            error!(chat_id = %msg.chat.id, status = code, "Completion service returned failure status");
            bot.edit_message_text(
                msg.chat.id,
                wait_message.id,
                t_lang("error-completion-failed", language_code),
            )
            .await?;
        }
        Err(e) => {
            error!(chat_id = %msg.chat.id, error = %e, "Completion request failed");
            let detail = truncate_error(&e.to_string(), 100);
            bot.edit_message_text(
                msg.chat.id,
                wait_message.id,
                t_args_lang(
                    "error-completion-transport",
                    &[("error", detail.as_str())],
                    language_code,
                ),
            )
            .await?;
        }
    }

    Ok(())
}

/// Handle the customer name during the order flow.
pub async fn handle_name_input(
    bot: &Bot,
    msg: &Message,
    dialogue: ChatDialogue,
    name_input: &str,
    language_code: Option<&str>,
) -> Result<()> {
    match validate_order_input(name_input) {
        Ok(name) => {
            bot.send_message(msg.chat.id, t_lang("order-contact-prompt", language_code))
                .await?;
            dialogue.update(ChatState::AwaitingContact { name }).await?;
        }
        Err("too_long") => {
            bot.send_message(msg.chat.id, t_lang("order-input-too-long", language_code))
                .await?;
            // Keep dialogue active, user can try again
        }
        Err(_) => {
            bot.send_message(msg.chat.id, t_lang("order-input-invalid", language_code))
                .await?;
            // Keep dialogue active, user can try again
        }
    }

    Ok(())
}

/// Handle the contact input, completing the order flow.
pub async fn handle_contact_input(
    bot: &Bot,
    msg: &Message,
    dialogue: ChatDialogue,
    name: String,
    contact_input: &str,
    language_code: Option<&str>,
) -> Result<()> {
    match validate_order_input(contact_input) {
        Ok(contact) => {
            let record = OrderRecord::new(name, contact);
            record.log();

            dialogue.update(ChatState::Start).await?;

            bot.send_message(
                msg.chat.id,
                order_confirmation_text(&record.name, &record.contact, language_code),
            )
            .reply_markup(order_confirmation_keyboard(language_code))
            .await?;
        }
        Err("too_long") => {
            bot.send_message(msg.chat.id, t_lang("order-input-too-long", language_code))
                .await?;
        }
        Err(_) => {
            bot.send_message(msg.chat.id, t_lang("order-input-invalid", language_code))
                .await?;
        }
    }

    Ok(())
}
