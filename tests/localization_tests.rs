//! # Localization Tests
//!
//! Unit tests for message retrieval and formatting, covering language
//! fallback and missing-key behavior.

use std::collections::HashMap;
use vastu_flow::localization::LocalizationManager;

fn setup_localization() -> LocalizationManager {
    LocalizationManager::new().expect("Failed to create localization manager")
}

#[test]
fn test_get_message_existing_key() {
    let manager = setup_localization();

    let message = manager.get_message_in_language("btn-main-menu", "ru", None);
    assert!(!message.is_empty());
    assert!(message.contains("Главное меню"));
}

#[test]
fn test_get_message_english_bundle() {
    let manager = setup_localization();

    let message = manager.get_message_in_language("btn-main-menu", "en", None);
    assert!(message.contains("Main menu"));
}

#[test]
fn test_get_message_nonexistent_key() {
    let manager = setup_localization();

    let message = manager.get_message_in_language("nonexistent-key", "ru", None);
    assert!(message.starts_with("Missing translation:"));
}

#[test]
fn test_get_message_unsupported_language_falls_back() {
    let manager = setup_localization();

    // Unsupported codes fall back to the default (Russian) bundle.
    let message = manager.get_message_in_language("btn-main-menu", "fr", None);
    assert!(message.contains("Главное меню"));
}

#[test]
fn test_regional_code_matches_primary_subtag() {
    let manager = setup_localization();

    let message = manager.get_message_in_language("btn-main-menu", "en-US", None);
    assert!(message.contains("Main menu"));
}

#[test]
fn test_get_message_with_args() {
    let manager = setup_localization();

    let mut args = HashMap::new();
    args.insert("name", "Alice");
    args.insert("contact", "+1234567890");

    let message = manager.get_message_in_language("order-confirmation", "ru", Some(&args));
    assert!(message.contains("Alice"));
    assert!(message.contains("+1234567890"));
}
