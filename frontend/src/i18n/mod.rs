use std::collections::HashMap;
use leptos::*;

/// Translation data loaded from JSON files
type Translations = HashMap<String, String>;

const MONTH_KEYS: [&str; 12] = [
    "month.january",
    "month.february",
    "month.march",
    "month.april",
    "month.may",
    "month.june",
    "month.july",
    "month.august",
    "month.september",
    "month.october",
    "month.november",
    "month.december",
];

/// Weekday labels in grid order (weeks start on Monday)
const WEEKDAY_KEYS: [&str; 7] = [
    "weekday.mo",
    "weekday.tu",
    "weekday.we",
    "weekday.th",
    "weekday.fr",
    "weekday.sa",
    "weekday.su",
];

/// I18n context that provides translation functions
#[derive(Clone)]
pub struct I18nContext {
    pub language: RwSignal<String>,
    translations: RwSignal<Translations>,
}

impl I18nContext {
    /// Create a new I18nContext with the specified language
    pub fn new(language: String) -> Self {
        let translations = load_translations(&language);
        Self {
            language: create_rw_signal(language),
            translations: create_rw_signal(translations),
        }
    }

    /// Translate a key to the current language
    /// Returns the key itself if translation is not found
    pub fn t(&self, key: &str) -> String {
        self.translations.with(|translations| lookup(translations, key))
    }

    /// Name of a month, `month0` counting from January = 0
    pub fn month_name(&self, month0: u32) -> String {
        self.translations
            .with(|translations| month_name(translations, month0))
    }

    /// Monday-first weekday column labels
    pub fn weekday_labels(&self) -> Vec<String> {
        self.translations.with(weekday_labels)
    }

    /// "1 guest" / "3 guests"
    pub fn guests_label(&self, count: u32) -> String {
        let key = if count == 1 { "guest" } else { "guests.plural" };
        format!("{} {}", count, self.t(key))
    }

    /// Change the current language
    pub fn set_language(&self, lang: &str) {
        let translations = load_translations(lang);
        self.language.set(lang.to_string());
        self.translations.set(translations);
    }

    /// Get the current language code
    pub fn current_language(&self) -> String {
        self.language.get()
    }
}

fn lookup(translations: &Translations, key: &str) -> String {
    translations
        .get(key)
        .cloned()
        .unwrap_or_else(|| key.to_string())
}

fn month_name(translations: &Translations, month0: u32) -> String {
    MONTH_KEYS
        .get(month0 as usize)
        .map(|key| lookup(translations, key))
        .unwrap_or_default()
}

fn weekday_labels(translations: &Translations) -> Vec<String> {
    WEEKDAY_KEYS
        .iter()
        .map(|key| lookup(translations, key))
        .collect()
}

/// Load translations for a language from embedded JSON
fn load_translations(lang: &str) -> Translations {
    let json = match lang {
        "sr" => include_str!("../translations/sr.json"),
        _ => include_str!("../translations/en.json"),
    };

    serde_json::from_str(json).unwrap_or_default()
}

/// Provide I18n context to the application
pub fn provide_i18n(language: String) {
    let ctx = I18nContext::new(language);
    provide_context(ctx);
}

/// Use the I18n context from within a component
pub fn use_i18n() -> I18nContext {
    expect_context::<I18nContext>()
}

/// Get the list of supported languages
pub fn supported_languages() -> Vec<(&'static str, &'static str)> {
    vec![
        ("en", "English"),
        ("sr", "Srpski"),
    ]
}
