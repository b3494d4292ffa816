//! # Vastu Flow Telegram Bot
//!
//! A Telegram bot for the VASTU FLOW consulting channel: menu-driven
//! navigation over a static service catalog, free-text questions answered
//! through the DeepSeek chat-completion API, and a short lead-collection
//! dialogue producing logged order records.

pub mod bot;
pub mod catalog;
pub mod config;
pub mod dialogue;
pub mod llm;
pub mod localization;
pub mod order;
