use mathpath_core::model::GameSettings;

use crate::i18n::Language;

/// Launch configuration handed from the binary to the UI. The UI holds the
/// live language and settings in signals seeded from these values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppContext {
    language: Language,
    settings: GameSettings,
}

impl AppContext {
    #[must_use]
    pub fn new(language: Language, settings: GameSettings) -> Self {
        Self { language, settings }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn settings(&self) -> GameSettings {
        self.settings
    }
}

/// Build an `AppContext` from the composition root (`crates/app`).
#[must_use]
pub fn build_app_context(language: Language, settings: GameSettings) -> AppContext {
    AppContext::new(language, settings)
}
