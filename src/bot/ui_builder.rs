//! UI Builder module for creating keyboards and formatting messages
//!
//! Every function here is a pure render over the static catalog and the
//! localization bundles: same inputs, byte-identical output, no state.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

// Import localization
use crate::localization::{t_args_lang, t_lang};

// Import the static catalog
use crate::catalog::{CaseStudy, CASES, TARIFFS};

/// Telegram truncates long button labels; keep them readable instead.
const MAX_BUTTON_CHARS: usize = 32;

fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{prefix}...")
    }
}

/// Greeting text for the main menu, personalized with the user's first name.
pub fn main_menu_text(first_name: &str, language_code: Option<&str>) -> String {
    t_args_lang("welcome", &[("name", first_name)], language_code)
}

/// The fixed four-entry main menu.
pub fn main_menu_keyboard(language_code: Option<&str>) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            t_lang("btn-ask-question", language_code),
            "ask_question",
        )],
        vec![InlineKeyboardButton::callback(
            t_lang("btn-show-tariffs", language_code),
            "show_tariffs",
        )],
        vec![InlineKeyboardButton::callback(
            t_lang("btn-show-cases", language_code),
            "show_cases",
        )],
        vec![InlineKeyboardButton::callback(
            t_lang("btn-order-consultation", language_code),
            "order_consultation",
        )],
    ])
}

/// Format the tariff catalog as one message.
pub fn format_tariff_list(language_code: Option<&str>) -> String {
    let mut result = format!("{}\n\n", t_lang("tariffs-title", language_code));

    for tariff in &TARIFFS {
        result.push_str(&format!(
            "**{}**\n💰 {}\n📝 {}\n\n",
            tariff.name, tariff.price, tariff.description
        ));
    }

    result
}

pub fn tariffs_keyboard(language_code: Option<&str>) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            t_lang("btn-order-short", language_code),
            "order_consultation",
        )],
        vec![InlineKeyboardButton::callback(
            t_lang("btn-main-menu", language_code),
            "main_menu",
        )],
    ])
}

/// One button per case study, labelled from the catalog title.
pub fn case_list_keyboard(language_code: Option<&str>) -> InlineKeyboardMarkup {
    let mut buttons: Vec<Vec<InlineKeyboardButton>> = CASES
        .iter()
        .map(|case| {
            vec![InlineKeyboardButton::callback(
                truncate_label(case.title, MAX_BUTTON_CHARS),
                format!("case_{}", case.key),
            )]
        })
        .collect();

    buttons.push(vec![InlineKeyboardButton::callback(
        t_lang("btn-main-menu", language_code),
        "main_menu",
    )]);

    InlineKeyboardMarkup::new(buttons)
}

pub fn case_view_text(case: &CaseStudy) -> String {
    format!("{}\n{}", case.title, case.body)
}

pub fn case_view_keyboard(language_code: Option<&str>) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            t_lang("btn-order-consultation", language_code),
            "order_consultation",
        )],
        vec![InlineKeyboardButton::callback(
            t_lang("btn-other-cases", language_code),
            "show_cases",
        )],
        vec![InlineKeyboardButton::callback(
            t_lang("btn-main-menu", language_code),
            "main_menu",
        )],
    ])
}

/// Wrap a completion-service answer in the channel's answer template.
pub fn answer_text(answer: &str, language_code: Option<&str>) -> String {
    t_args_lang("answer-wrapper", &[("answer", answer)], language_code)
}

pub fn answer_followup_keyboard(language_code: Option<&str>) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            t_lang("btn-order-consultation", language_code),
            "order_consultation",
        )],
        vec![InlineKeyboardButton::callback(
            t_lang("btn-ask-again", language_code),
            "ask_question",
        )],
        vec![InlineKeyboardButton::callback(
            t_lang("btn-main-menu", language_code),
            "main_menu",
        )],
    ])
}

/// Order confirmation echoing the collected details.
pub fn order_confirmation_text(name: &str, contact: &str, language_code: Option<&str>) -> String {
    t_args_lang(
        "order-confirmation",
        &[("name", name), ("contact", contact)],
        language_code,
    )
}

pub fn order_confirmation_keyboard(language_code: Option<&str>) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            t_lang("btn-ask-more", language_code),
            "ask_question",
        )],
        vec![InlineKeyboardButton::callback(
            t_lang("btn-view-cases", language_code),
            "show_cases",
        )],
        vec![InlineKeyboardButton::callback(
            t_lang("btn-main-menu", language_code),
            "main_menu",
        )],
    ])
}
