//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{debug, error, warn};

// Import localization
use crate::localization::t_lang;

// Import the static catalog
use crate::catalog::find_case;

// Import dialogue types
use crate::dialogue::{ChatDialogue, ChatState};

// Import UI builder functions
use super::ui_builder::{
    case_list_keyboard, case_view_keyboard, case_view_text, format_tariff_list,
    main_menu_keyboard, main_menu_text, tariffs_keyboard,
};

/// Menu selection decoded from the opaque callback-data key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuSelection {
    AskQuestion,
    ShowTariffs,
    ShowCases,
    Case(String),
    OrderConsultation,
    MainMenu,
    Unknown,
}

impl MenuSelection {
    pub fn parse(data: &str) -> Self {
        match data {
            "ask_question" => MenuSelection::AskQuestion,
            "show_tariffs" => MenuSelection::ShowTariffs,
            "show_cases" => MenuSelection::ShowCases,
            "order_consultation" => MenuSelection::OrderConsultation,
            "main_menu" => MenuSelection::MainMenu,
            d if d.starts_with("case_") => {
                MenuSelection::Case(d.strip_prefix("case_").unwrap().to_string())
            }
            _ => MenuSelection::Unknown,
        }
    }
}

/// Handle callback queries from inline keyboards
pub async fn callback_handler(bot: Bot, q: CallbackQuery, dialogue: ChatDialogue) -> Result<()> {
    debug!(user_id = %q.from.id, data = ?q.data, "Received callback query from user");

    let language_code = q.from.language_code.clone();
    let language_code = language_code.as_deref();

    if let Some(msg) = &q.message {
        let chat_id = msg.chat().id;

        match MenuSelection::parse(q.data.as_deref().unwrap_or("")) {
            MenuSelection::AskQuestion => {
                bot.edit_message_text(chat_id, msg.id(), t_lang("ask-question-prompt", language_code))
                    .await?;
                dialogue.update(ChatState::AwaitingQuestion).await?;
            }
            MenuSelection::ShowTariffs => {
                bot.edit_message_text(chat_id, msg.id(), format_tariff_list(language_code))
                    .reply_markup(tariffs_keyboard(language_code))
                    .await?;
            }
            MenuSelection::ShowCases => {
                bot.edit_message_text(chat_id, msg.id(), t_lang("cases-prompt", language_code))
                    .reply_markup(case_list_keyboard(language_code))
                    .await?;
            }
            MenuSelection::Case(key) => match find_case(&key) {
                Some(case) => {
                    bot.edit_message_text(chat_id, msg.id(), case_view_text(case))
                        .reply_markup(case_view_keyboard(language_code))
                        .await?;
                }
                None => {
                    // Stale keyboard or unknown key: fall back to the menu.
                    warn!(user_id = %q.from.id, case_key = %key, "Unknown case key in callback");
                    show_main_menu(&bot, &q, chat_id, msg.id(), language_code).await;
                    dialogue.update(ChatState::Start).await?;
                }
            },
            MenuSelection::OrderConsultation => {
                bot.edit_message_text(chat_id, msg.id(), t_lang("order-name-prompt", language_code))
                    .await?;
                dialogue.update(ChatState::AwaitingName).await?;
            }
            MenuSelection::MainMenu => {
                show_main_menu(&bot, &q, chat_id, msg.id(), language_code).await;
                dialogue.update(ChatState::Start).await?;
            }
            MenuSelection::Unknown => {
                warn!(user_id = %q.from.id, data = ?q.data, "Unrecognized callback data");
                show_main_menu(&bot, &q, chat_id, msg.id(), language_code).await;
                dialogue.update(ChatState::Start).await?;
            }
        }
    }

    // Answer the callback query to remove the loading state
    bot.answer_callback_query(q.id).await?;

    Ok(())
}

/// Replace the originating message with the main menu. Editing can fail when
/// the content is already the menu ("message is not modified"); that is not
/// worth surfacing to the user.
async fn show_main_menu(
    bot: &Bot,
    q: &CallbackQuery,
    chat_id: ChatId,
    message_id: teloxide::types::MessageId,
    language_code: Option<&str>,
) {
    let menu_text = main_menu_text(&q.from.first_name, language_code);
    match bot
        .edit_message_text(chat_id, message_id, menu_text)
        .reply_markup(main_menu_keyboard(language_code))
        .await
    {
        Ok(_) => (),
        Err(e) => error!(user_id = %q.from.id, error = %e, "Failed to render main menu"),
    }
}
