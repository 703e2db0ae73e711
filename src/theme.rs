use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};
use thiserror::Error;

/// Local storage entry holding the JSON-encoded dark mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Class placed on the root element while dark mode is on.
pub const DARK_CLASS: &str = "dark";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("Stored preference {0:?} is not a boolean")]
    Corrupt(String),
}

/// Raw string slot the dark mode flag is persisted in.
pub trait PreferenceStorage {
    fn load(&self) -> Option<String>;
    fn store(&mut self, raw: String);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    raw: Option<String>,
}

impl MemoryStorage {
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.raw.clone()
    }

    fn store(&mut self, raw: String) {
        self.raw = Some(raw);
    }
}

/// Browser `localStorage` entry, through leptos-use.
/// An absent entry reads back as the empty string, and so does every entry
/// until hydration has finished.
#[derive(Clone, Copy)]
pub struct BrowserStorage {
    value: Signal<String>,
    set_value: WriteSignal<String>,
}

impl BrowserStorage {
    /// Must be called under a reactive owner (i.e. inside a component).
    pub fn new(key: &'static str) -> Self {
        let (value, set_value, _) = use_local_storage_with_options::<String, FromToStringCodec>(
            key,
            UseStorageOptions::default().delay_during_hydration(true),
        );
        Self { value, set_value }
    }

    /// Tracked read of the raw entry, for effects that follow it.
    pub fn raw(&self) -> String {
        self.value.get()
    }
}

impl PreferenceStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        let raw = self.value.get_untracked();
        if raw.is_empty() {
            None
        } else {
            Some(raw)
        }
    }

    fn store(&mut self, raw: String) {
        self.set_value.set(raw);
    }
}

pub fn decode(raw: &str) -> Result<bool, PreferenceError> {
    serde_json::from_str::<bool>(raw).map_err(|_| PreferenceError::Corrupt(raw.to_string()))
}

pub fn theme_class(dark: bool) -> &'static str {
    if dark {
        DARK_CLASS
    } else {
        ""
    }
}

/// The persisted light/dark preference.
#[derive(Debug, Clone)]
pub struct PreferenceStore<S> {
    storage: S,
    dark: bool,
}

impl<S: PreferenceStorage> PreferenceStore<S> {
    /// Starts light without touching `storage`; [`sync`](Self::sync) picks
    /// up the persisted value later.
    pub fn unsynced(storage: S) -> Self {
        Self {
            storage,
            dark: false,
        }
    }

    pub fn load(storage: S) -> Self {
        let mut store = Self {
            storage,
            dark: false,
        };
        store.dark = store.read();
        store
    }

    /// Persisted value, or light when the entry is absent or corrupt.
    pub fn read(&self) -> bool {
        let Some(raw) = self.storage.load() else {
            return false;
        };
        decode(&raw).unwrap_or_else(|e| {
            log::debug!("{e}; using light theme");
            false
        })
    }

    /// Re-reads the persisted value. Browser storage only delivers it after
    /// hydration, so the view calls this whenever the entry changes.
    pub fn sync(&mut self) -> bool {
        self.dark = self.read();
        self.dark
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        // bool always serializes
        let raw = serde_json::to_string(&self.dark).unwrap_or_default();
        self.storage.store(raw);
        self.dark
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
