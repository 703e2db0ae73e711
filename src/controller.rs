use crate::{
    config::{ConfigError, EmailConfig},
    contact::{ContactDraft, ContactSubmitter, DeliveryError, Field, PendingDelivery, SubmitError},
    i18n::{Language, LocaleStore, TranslationKey},
    scroll::{ScrollObserver, Section, SectionBounds},
    theme::{theme_class, PreferenceStorage, PreferenceStore},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub section: Section,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// All page state, owned in one place. The stores it holds own disjoint
/// pieces, so none of them needs to coordinate with another.
#[derive(Debug, Clone)]
pub struct ViewController<S> {
    locale: LocaleStore,
    theme: PreferenceStore<S>,
    scroll: ScrollObserver,
    contact: ContactSubmitter,
    draft: ContactDraft,
    menu_open: bool,
}

impl<S: PreferenceStorage> ViewController<S> {
    /// The theme starts light, matching the server render. Call
    /// [`sync_theme`](Self::sync_theme) once storage is readable.
    pub fn new(storage: S, email: Result<EmailConfig, ConfigError>) -> Self {
        Self {
            locale: LocaleStore::new(),
            theme: PreferenceStore::unsynced(storage),
            scroll: ScrollObserver::new(),
            contact: ContactSubmitter::new(email),
            draft: ContactDraft::default(),
            menu_open: false,
        }
    }

    pub fn t(&self, key: TranslationKey) -> &'static str {
        self.locale.translate(key)
    }

    pub fn language(&self) -> Language {
        self.locale.current_language()
    }

    pub fn set_language(&mut self, code: &str) -> bool {
        self.locale.set_language(code)
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn toggle_theme(&mut self) -> bool {
        self.theme.toggle()
    }

    pub fn sync_theme(&mut self) -> bool {
        self.theme.sync()
    }

    pub fn theme_class(&self) -> &'static str {
        theme_class(self.theme.is_dark())
    }

    pub fn on_scroll<F>(&mut self, offset: f64, measure: F) -> bool
    where
        F: Fn(Section) -> Option<SectionBounds>,
    {
        self.scroll.observe(offset, measure)
    }

    pub fn active_section(&self) -> Option<Section> {
        self.scroll.active()
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        let active = self.scroll.active();
        Section::ALL
            .into_iter()
            .map(|section| NavItem {
                section,
                label: self.t(section.label()),
                href: section.href(),
                active: active == Some(section),
            })
            .collect()
    }

    pub fn header_class(&self) -> &'static str {
        if self.scroll.is_scrolled() {
            "fixed w-full z-50 bg-[#1A1A2E]/95 text-white shadow-lg backdrop-blur-sm transition-all duration-200"
        } else {
            "fixed w-full z-50 bg-[#1A1A2E] text-white transition-all duration-200"
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn menu_class(&self) -> &'static str {
        if self.menu_open {
            "md:hidden block pt-4"
        } else {
            "md:hidden hidden pt-4"
        }
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
    }

    pub fn is_sending(&self) -> bool {
        self.contact.is_sending()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_sending() {
            self.t(TranslationKey::SendingMessage)
        } else {
            self.t(TranslationKey::SendMessage)
        }
    }

    pub fn begin_submit(&mut self) -> Result<PendingDelivery, SubmitError> {
        self.contact.prepare(&self.draft)
    }

    pub fn finish_submit(
        &mut self,
        pending: &PendingDelivery,
        outcome: Result<(), DeliveryError>,
    ) -> Result<(), SubmitError> {
        self.contact.finish(&mut self.draft, pending, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::MemoryStorage;

    fn controller() -> ViewController<MemoryStorage> {
        ViewController::new(
            MemoryStorage::default(),
            EmailConfig::new(Some("s"), Some("t"), Some("k")),
        )
    }

    #[test]
    fn test_nav_highlights_active_section() {
        let mut c = controller();
        assert!(c.nav_items().iter().all(|i| !i.active));

        c.on_scroll(700.0, |s| match s {
            Section::Projects => Some(SectionBounds::new(10.0, 800.0)),
            _ => None,
        });
        let items = c.nav_items();
        let active: Vec<_> = items.iter().filter(|i| i.active).map(|i| i.section).collect();
        assert_eq!(active, [Section::Projects]);
        assert_eq!(items[2].href, "#projects");
    }

    #[test]
    fn test_nav_labels_follow_language() {
        let mut c = controller();
        let labels: Vec<_> = c.nav_items().iter().map(|i| i.label).collect();
        assert_eq!(labels, ["About Me", "Technical Skills", "Projects", "Contact"]);

        assert!(c.set_language("pt"));
        let labels: Vec<_> = c.nav_items().iter().map(|i| i.label).collect();
        assert_eq!(labels, ["Sobre Mim", "Habilidades", "Projetos", "Contato"]);
        assert_eq!(c.language(), Language::Pt);
    }

    #[test]
    fn test_theme_toggle_updates_class_and_storage() {
        let mut c = controller();
        assert_eq!(c.theme_class(), "");
        assert!(c.toggle_theme());
        assert_eq!(c.theme_class(), "dark");
        assert_eq!(c.theme.storage().raw(), Some("true"));
    }

    #[test]
    fn test_menu_toggle() {
        let mut c = controller();
        assert!(c.menu_class().contains("hidden pt-4"));
        c.toggle_menu();
        assert!(c.is_menu_open());
        assert!(c.menu_class().contains("block"));
        c.close_menu();
        assert!(!c.is_menu_open());
    }

    #[test]
    fn test_submit_round_trip_through_controller() {
        let mut c = controller();
        c.set_field(Field::Name, "Ana".to_string());
        c.set_field(Field::Email, "ana@example.com".to_string());
        c.set_field(Field::Message, "Hi".to_string());

        let pending = c.begin_submit().unwrap();
        assert_eq!(pending.message.name, "Ana");
        assert!(c.is_sending());
        assert_eq!(c.submit_label(), "Sending...");

        c.finish_submit(&pending, Err(DeliveryError::Network("timeout".to_string())))
            .unwrap_err();
        assert_eq!(c.draft(), &ContactDraft::new("Ana", "ana@example.com", "Hi"));

        let pending = c.begin_submit().unwrap();
        c.finish_submit(&pending, Ok(())).unwrap();
        assert_eq!(c.draft(), &ContactDraft::default());
        assert_eq!(c.submit_label(), "Send Message");
    }

    #[test]
    fn test_typing_during_send_survives_success() {
        let mut c = controller();
        c.set_field(Field::Name, "Ana".to_string());
        c.set_field(Field::Email, "ana@example.com".to_string());
        c.set_field(Field::Message, "Hi".to_string());

        let pending = c.begin_submit().unwrap();
        c.set_field(Field::Message, "Hi, and one more thing".to_string());
        c.finish_submit(&pending, Ok(())).unwrap();

        assert_eq!(
            c.draft(),
            &ContactDraft::new("Ana", "ana@example.com", "Hi, and one more thing")
        );
        assert!(!c.is_sending());
    }

    #[test]
    fn test_stored_dark_mode_applies_on_sync() {
        let mut c = ViewController::new(
            MemoryStorage::with_raw("true"),
            EmailConfig::new(Some("s"), Some("t"), Some("k")),
        );
        assert!(!c.is_dark());
        assert_eq!(c.theme_class(), "");

        assert!(c.sync_theme());
        assert!(c.is_dark());
        assert_eq!(c.theme_class(), "dark");
    }

    #[test]
    fn test_header_condenses_when_scrolled() {
        let mut c = controller();
        let top = c.header_class();
        c.on_scroll(400.0, |_| None);
        assert_ne!(c.header_class(), top);
        assert!(c.header_class().contains("shadow-lg"));
    }
}
