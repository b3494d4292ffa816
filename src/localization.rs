//! Fluent-backed message text for the bot.
//!
//! All user-visible strings live in `locales/<lang>/main.ftl`. Russian is
//! the channel's primary language; English is kept as a fallback for users
//! whose Telegram client reports another language.

use anyhow::Result;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use std::collections::HashMap;
use std::fs;
use std::sync::{Arc, OnceLock};
use unic_langid::LanguageIdentifier;

const SUPPORTED_LOCALES: [&str; 2] = ["ru", "en"];
const DEFAULT_LOCALE: &str = "ru";

/// Localization manager for the Vastu Flow bot.
pub struct LocalizationManager {
    bundles: HashMap<String, Arc<FluentBundle<FluentResource>>>,
}

impl LocalizationManager {
    /// Create a new localization manager with all supported locales loaded.
    pub fn new() -> Result<Self> {
        let mut bundles = HashMap::new();

        for code in SUPPORTED_LOCALES {
            let locale: LanguageIdentifier = code.parse()?;
            let bundle = Self::create_bundle(&locale)?;
            bundles.insert(code.to_string(), Arc::new(bundle));
        }

        Ok(Self { bundles })
    }

    /// Create a fluent bundle for a specific locale.
    fn create_bundle(locale: &LanguageIdentifier) -> Result<FluentBundle<FluentResource>> {
        let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);

        let resource_path = format!("./locales/{}/main.ftl", locale);
        if let Ok(content) = fs::read_to_string(&resource_path) {
            if let Ok(resource) = FluentResource::try_new(content) {
                let _ = bundle.add_resource(resource);
            }
        }

        Ok(bundle)
    }

    /// Resolve a message in the given language, falling back to the default
    /// locale for unsupported or absent language codes.
    pub fn get_message_in_language(
        &self,
        key: &str,
        language_code: &str,
        args: Option<&HashMap<&str, &str>>,
    ) -> String {
        // "en-US" style codes match on the primary subtag.
        let primary = language_code.split('-').next().unwrap_or(language_code);
        let bundle = self
            .bundles
            .get(primary)
            .or_else(|| self.bundles.get(DEFAULT_LOCALE));

        let bundle = match bundle {
            Some(bundle) => bundle,
            None => return format!("Missing translation: {}", key),
        };

        let msg = match bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {}", key),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {}", key),
        };

        let mut value = String::new();

        if let Some(args) = args {
            let fluent_args =
                FluentArgs::from_iter(args.iter().map(|(k, v)| (*k, FluentValue::from(*v))));
            let _ = bundle.write_pattern(&mut value, pattern, Some(&fluent_args), &mut vec![]);
        } else {
            let _ = bundle.write_pattern(&mut value, pattern, None, &mut vec![]);
        }

        value
    }

    /// Get a localized message in the default locale.
    pub fn get_message(&self, key: &str, args: Option<&HashMap<&str, &str>>) -> String {
        self.get_message_in_language(key, DEFAULT_LOCALE, args)
    }
}

/// Global localization instance, initialized on first use.
static LOCALIZATION_MANAGER: OnceLock<LocalizationManager> = OnceLock::new();

fn manager() -> &'static LocalizationManager {
    LOCALIZATION_MANAGER.get_or_init(|| {
        // Bundle loading tolerates missing resource files, so construction
        // only fails on an invalid locale identifier.
        LocalizationManager::new().unwrap_or_else(|_| LocalizationManager {
            bundles: HashMap::new(),
        })
    })
}

/// Initialize the global localization manager eagerly at startup.
pub fn init_localization() -> Result<()> {
    let _ = manager();
    Ok(())
}

/// Get a localized message for a user's (optional) Telegram language code.
pub fn t_lang(key: &str, language_code: Option<&str>) -> String {
    manager().get_message_in_language(key, language_code.unwrap_or(DEFAULT_LOCALE), None)
}

/// Get a localized message with arguments for a user's language code.
pub fn t_args_lang(key: &str, args: &[(&str, &str)], language_code: Option<&str>) -> String {
    let args_map: HashMap<&str, &str> = args.iter().cloned().collect();
    manager().get_message_in_language(
        key,
        language_code.unwrap_or(DEFAULT_LOCALE),
        Some(&args_map),
    )
}

/// Get a localized message in the default locale.
pub fn t(key: &str) -> String {
    t_lang(key, None)
}
