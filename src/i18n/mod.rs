//! Translation registry
//!
//! Maps dotted keys to strings for the active language. The active language
//! is persisted as a bare two-letter code and listeners are told about every
//! change.

mod catalog;

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::persistence::{self, KeyValueStore, LoadError};
use crate::subscribers::{SubscriptionId, Subscribers};

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Tr,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Tr, Language::En];

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
        }
    }

    /// Case-sensitive; `None` for anything unsupported
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "tr" => Some(Language::Tr),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Name shown in the language picker
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Tr => "Türkçe",
            Language::En => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Look up `key` in `lang`'s table, returning the key itself when missing
pub fn translate_in<'a>(lang: Language, key: &'a str) -> &'a str {
    catalog::lookup(lang, key).unwrap_or(key)
}

pub struct Translator {
    language: Language,
    storage: Rc<dyn KeyValueStore>,
    subscribers: Subscribers<Language>,
}

impl Translator {
    /// LocalStorage key holding the bare language code
    pub const STORAGE_KEY: &'static str = "language";

    /// Restore the saved language, defaulting to Turkish
    pub fn load(storage: Rc<dyn KeyValueStore>) -> Self {
        let language = match Self::load_persisted(storage.as_ref()) {
            Ok(Some(language)) => language,
            Ok(None) => {
                log::warn!("Ignoring unsupported stored language, using {}", Language::default());
                Language::default()
            }
            Err(LoadError::Missing(_)) => Language::default(),
            Err(e) => {
                log::warn!("Could not read language: {e}");
                Language::default()
            }
        };
        log::info!("Language: {language}");

        Self::with_language(storage, language)
    }

    /// `Ok(None)` when something is stored but it is not a supported code
    pub fn load_persisted(storage: &dyn KeyValueStore) -> Result<Option<Language>, LoadError> {
        let code = persistence::load_string(storage, Self::STORAGE_KEY)?;
        Ok(Language::from_code(code.trim()))
    }

    pub fn with_language(storage: Rc<dyn KeyValueStore>, language: Language) -> Self {
        Self {
            language,
            storage,
            subscribers: Subscribers::new(),
        }
    }

    pub fn current_language(&self) -> Language {
        self.language
    }

    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        translate_in(self.language, key)
    }

    /// Shorthand for [`translate`](Self::translate)
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.translate(key)
    }

    /// Switch by code. Unsupported codes change nothing and notify no one.
    /// Returns whether the code was accepted.
    pub fn set_language(&mut self, code: &str) -> bool {
        match Language::from_code(code) {
            Some(language) => {
                self.apply(language);
                true
            }
            None => {
                log::debug!("Ignoring unsupported language code {code:?}");
                false
            }
        }
    }

    fn apply(&mut self, language: Language) {
        self.language = language;
        if let Err(e) = self.storage.set_item(Self::STORAGE_KEY, language.code()) {
            log::warn!("Language not saved: {e}");
        }
        log::info!("Language changed to {language}");
        self.subscribers.notify(&language);
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Language) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("language", &self.language)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;
    use std::cell::RefCell;

    #[test]
    fn test_default_language_is_turkish() {
        let translator = Translator::load(Rc::new(MemoryStorage::new()));
        assert_eq!(translator.current_language(), Language::Tr);
        assert_eq!(translator.t("employees"), "Çalışanlar");
    }

    #[test]
    fn test_restores_saved_language() {
        let storage = Rc::new(MemoryStorage::new().with_item("language", "en"));
        let translator = Translator::load(storage);
        assert_eq!(translator.current_language(), Language::En);
        assert_eq!(translator.t("addNew"), "Add New");
    }

    #[test]
    fn test_unsupported_saved_language_falls_back() {
        let storage = Rc::new(MemoryStorage::new().with_item("language", "xx"));
        assert_eq!(Translator::load(storage).current_language(), Language::Tr);
    }

    #[test]
    fn test_unknown_key_returns_key_in_every_language() {
        for lang in Language::ALL {
            assert_eq!(translate_in(lang, "no.such.key"), "no.such.key");
            assert_eq!(translate_in(lang, ""), "");
        }
    }

    #[test]
    fn test_dotted_keys() {
        assert_eq!(translate_in(Language::En, "view.grid"), "Grid");
        assert_eq!(translate_in(Language::Tr, "view.grid"), "Kart");
        assert_eq!(translate_in(Language::En, "view"), "view");
    }

    #[test]
    fn test_set_language_persists_and_notifies() {
        let storage = Rc::new(MemoryStorage::new());
        let mut translator = Translator::load(storage.clone());

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        translator.subscribe(move |lang| sink.borrow_mut().push(*lang));

        assert!(translator.set_language("en"));
        assert_eq!(translator.current_language(), Language::En);
        assert_eq!(storage.get_item("language").unwrap().as_deref(), Some("en"));
        assert_eq!(*seen.borrow(), vec![Language::En]);
    }

    #[test]
    fn test_set_unsupported_language_is_noop() {
        let storage = Rc::new(MemoryStorage::new().with_item("language", "en"));
        let mut translator = Translator::load(storage.clone());

        let hits = Rc::new(RefCell::new(0));
        let h = hits.clone();
        translator.subscribe(move |_| *h.borrow_mut() += 1);

        assert!(!translator.set_language("de"));
        assert!(!translator.set_language("EN"));
        assert_eq!(translator.current_language(), Language::En);
        assert_eq!(storage.get_item("language").unwrap().as_deref(), Some("en"));
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut translator = Translator::load(Rc::new(MemoryStorage::new()));
        let hits = Rc::new(RefCell::new(0));
        let h = hits.clone();
        let id = translator.subscribe(move |_| *h.borrow_mut() += 1);

        translator.set_language("en");
        assert!(translator.unsubscribe(id));
        translator.set_language("tr");
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
            assert_eq!(translate_in(lang, &format!("language.{}", lang.code())), lang.native_name());
        }
    }
}
