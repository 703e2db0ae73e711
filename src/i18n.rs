use std::{collections::HashMap, sync::LazyLock};

use rust_embed::Embed;
use thiserror::Error;

pub type Dictionary = HashMap<String, String>;

/// Translation documents, one flat `key -> string` JSON object per language.
#[derive(Embed)]
#[folder = "locales"]
struct LocaleAssets;

static DICTIONARIES: LazyLock<HashMap<Language, Dictionary>> = LazyLock::new(|| {
    Language::ALL
        .iter()
        .map(|&lang| {
            let dict = load_dictionary(lang).unwrap_or_else(|e| {
                log::error!("{e}; rendering raw keys for '{}'", lang.code());
                Dictionary::new()
            });
            (lang, dict)
        })
        .collect()
});

#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Locale file {0} not found")]
    NotFound(String),
    #[error("Couldn't parse locale file {file}: {source}")]
    Parse {
        file: String,
        source: serde_json::Error,
    },
}

fn load_dictionary(lang: Language) -> Result<Dictionary, LocaleError> {
    let file = lang.file_name();
    let content = LocaleAssets::get(file).ok_or_else(|| LocaleError::NotFound(file.to_string()))?;
    serde_json::from_slice(&content.data).map_err(|source| LocaleError::Parse {
        file: file.to_string(),
        source,
    })
}

pub fn dictionary(lang: Language) -> &'static Dictionary {
    static EMPTY: LazyLock<Dictionary> = LazyLock::new(Dictionary::new);
    DICTIONARIES.get(&lang).unwrap_or(&*EMPTY)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Pt];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "pt" => Some(Self::Pt),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
        }
    }

    /// Label shown in the language picker, in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Pt => "Português",
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            Self::En => "en.json",
            Self::Pt => "pt.json",
        }
    }
}

/// Every string the views translate. The string form is the key used in
/// the locale documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    AboutMe,
    TechnicalSkills01,
    TechnicalSkills02,
    Microservices,
    RestfulApis,
    HighlightKeyProjects,
    Projects,
    Contact,
    AboutMeContent,
    HeroTitle,
    HeroExperience,
    HeroSpecialty,
    GetInTouch,
    NameLabel,
    NamePlaceholder,
    EmailLabel,
    EmailPlaceholder,
    MessageLabel,
    MessagePlaceholder,
    SendMessage,
    SendingMessage,
    FillAllFields,
    SeeDetails,
    Project1Title,
    Project1Description,
    Project2Title,
    Project2Description,
    Project3Title,
    Project3Description,
    Project4Title,
    Project4Description,
    RightsReserved,
    LanguagePicker,
    ToggleTheme,
    ToggleMenu,
    PageNotFound,
}

impl TranslationKey {
    pub const ALL: [TranslationKey; 36] = [
        Self::AboutMe,
        Self::TechnicalSkills01,
        Self::TechnicalSkills02,
        Self::Microservices,
        Self::RestfulApis,
        Self::HighlightKeyProjects,
        Self::Projects,
        Self::Contact,
        Self::AboutMeContent,
        Self::HeroTitle,
        Self::HeroExperience,
        Self::HeroSpecialty,
        Self::GetInTouch,
        Self::NameLabel,
        Self::NamePlaceholder,
        Self::EmailLabel,
        Self::EmailPlaceholder,
        Self::MessageLabel,
        Self::MessagePlaceholder,
        Self::SendMessage,
        Self::SendingMessage,
        Self::FillAllFields,
        Self::SeeDetails,
        Self::Project1Title,
        Self::Project1Description,
        Self::Project2Title,
        Self::Project2Description,
        Self::Project3Title,
        Self::Project3Description,
        Self::Project4Title,
        Self::Project4Description,
        Self::RightsReserved,
        Self::LanguagePicker,
        Self::ToggleTheme,
        Self::ToggleMenu,
        Self::PageNotFound,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AboutMe => "aboutMe",
            Self::TechnicalSkills01 => "technicalSkills01",
            Self::TechnicalSkills02 => "technicalSkills02",
            Self::Microservices => "microservices",
            Self::RestfulApis => "restfulApis",
            Self::HighlightKeyProjects => "highlightKeyProjects",
            Self::Projects => "projects",
            Self::Contact => "contact",
            Self::AboutMeContent => "aboutMeContent",
            Self::HeroTitle => "heroTitle",
            Self::HeroExperience => "heroExperience",
            Self::HeroSpecialty => "heroSpecialty",
            Self::GetInTouch => "getInTouch",
            Self::NameLabel => "nameLabel",
            Self::NamePlaceholder => "namePlaceholder",
            Self::EmailLabel => "emailLabel",
            Self::EmailPlaceholder => "emailPlaceholder",
            Self::MessageLabel => "messageLabel",
            Self::MessagePlaceholder => "messagePlaceholder",
            Self::SendMessage => "sendMessage",
            Self::SendingMessage => "sendingMessage",
            Self::FillAllFields => "fillAllFields",
            Self::SeeDetails => "seeDetails",
            Self::Project1Title => "project1Title",
            Self::Project1Description => "project1Description",
            Self::Project2Title => "project2Title",
            Self::Project2Description => "project2Description",
            Self::Project3Title => "project3Title",
            Self::Project3Description => "project3Description",
            Self::Project4Title => "project4Title",
            Self::Project4Description => "project4Description",
            Self::RightsReserved => "rightsReserved",
            Self::LanguagePicker => "language",
            Self::ToggleTheme => "toggleTheme",
            Self::ToggleMenu => "toggleMenu",
            Self::PageNotFound => "pageNotFound",
        }
    }
}

/// Current-language selector over the static dictionaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocaleStore {
    current: Language,
}

impl LocaleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_language(&self) -> Language {
        self.current
    }

    /// Switches to `code` if it is supported. Unsupported codes leave the
    /// store untouched. Returns whether the language changed.
    pub fn set_language(&mut self, code: &str) -> bool {
        let Some(lang) = Language::from_code(code) else {
            log::debug!("ignoring unsupported language '{code}'");
            return false;
        };
        if lang == self.current {
            return false;
        }
        self.current = lang;
        true
    }

    pub fn translate(&self, key: TranslationKey) -> &'static str {
        self.translate_raw(key.as_str())
    }

    /// Runtime lookup. A missing key renders as the key itself.
    pub fn translate_raw<'a>(&self, key: &'a str) -> &'a str {
        match dictionary(self.current).get(key) {
            Some(s) => s.as_str(),
            None => {
                log::debug!("missing '{key}' for '{}'", self.current.code());
                key
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_english() {
        let store = LocaleStore::new();
        assert_eq!(store.current_language(), Language::En);
        assert_eq!(store.translate(TranslationKey::AboutMe), "About Me");
    }

    #[test]
    fn test_switch_to_portuguese() {
        let mut store = LocaleStore::new();
        assert!(store.set_language("pt"));
        assert_eq!(store.current_language(), Language::Pt);
        assert_eq!(store.translate(TranslationKey::AboutMe), "Sobre Mim");

        // every rendered string now comes from the Portuguese dictionary
        let pt = dictionary(Language::Pt);
        for key in TranslationKey::ALL {
            assert_eq!(store.translate(key), pt[key.as_str()]);
        }
    }

    #[test]
    fn test_unsupported_language_is_noop() {
        let mut store = LocaleStore::new();
        store.set_language("pt");
        let before = TranslationKey::ALL.map(|k| store.translate(k));

        assert!(!store.set_language("xx"));
        assert!(!store.set_language("ru"));
        assert!(!store.set_language(""));
        assert_eq!(store.current_language(), Language::Pt);
        assert_eq!(TranslationKey::ALL.map(|k| store.translate(k)), before);
    }

    #[test]
    fn test_same_language_reports_no_change() {
        let mut store = LocaleStore::new();
        assert!(!store.set_language("en"));
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let store = LocaleStore::new();
        assert_eq!(store.translate_raw("noSuchKey"), "noSuchKey");
        assert_eq!(store.translate_raw("contact"), "Contact");
    }

    #[test]
    fn test_dictionaries_cover_every_key() {
        for lang in Language::ALL {
            let dict = dictionary(lang);
            for key in TranslationKey::ALL {
                assert!(
                    dict.contains_key(key.as_str()),
                    "{} is missing '{}'",
                    lang.code(),
                    key.as_str()
                );
            }
        }
    }

    #[test]
    fn test_dictionaries_share_key_set() {
        let en = dictionary(Language::En);
        let pt = dictionary(Language::Pt);
        assert_eq!(en.len(), pt.len());
        for key in en.keys() {
            assert!(pt.contains_key(key), "pt is missing '{key}'");
        }
    }

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("EN"), None);
    }
}
