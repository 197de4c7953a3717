use std::env;

/// Locale used when resolving response messages.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    pub default_locale: String,
}

impl LocaleConfig {
    /// Environment variables:
    /// - DEFAULT_LOCALE: catalog locale (default: "en")
    pub fn from_env() -> Self {
        let default_locale = env::var("DEFAULT_LOCALE")
            .ok()
            .map(|locale| locale.trim().to_lowercase())
            .filter(|locale| !locale.is_empty())
            .unwrap_or_else(|| "en".to_string());

        Self { default_locale }
    }
}
