use crate::i18n::TranslationKey;

/// Distance from the top of the viewport, in px, of the line that decides
/// which section is active.
pub const ACTIVATION_LINE: f64 = 100.0;

/// Offset past which the fixed header switches to its condensed style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Navigation order, which is also the tie-break order for overlapping
    /// sections.
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(self) -> TranslationKey {
        match self {
            Self::About => TranslationKey::AboutMe,
            Self::Skills => TranslationKey::TechnicalSkills01,
            Self::Projects => TranslationKey::Projects,
            Self::Contact => TranslationKey::Contact,
        }
    }
}

/// Bounding box of a section relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn crosses(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Tracks the scroll offset and the section under the activation line.
///
/// When no section crosses the line (e.g. scrolled back up to the hero) the
/// previously active section is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollObserver {
    offset: f64,
    active: Option<Section>,
}

impl ScrollObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<Section> {
        self.active
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_scrolled(&self) -> bool {
        self.offset > SCROLLED_THRESHOLD
    }

    /// Records `offset` and recomputes the active section from `measure`,
    /// which returns `None` for sections not present in the document.
    /// Returns whether anything observable changed.
    pub fn observe<F>(&mut self, offset: f64, measure: F) -> bool
    where
        F: Fn(Section) -> Option<SectionBounds>,
    {
        let before = *self;
        self.offset = offset;
        if let Some(section) = Section::ALL
            .into_iter()
            .find(|&s| measure(s).is_some_and(|b| b.crosses(ACTIVATION_LINE)))
        {
            self.active = Some(section);
        }
        self.active != before.active || self.is_scrolled() != before.is_scrolled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(positions: &[(Section, f64, f64)]) -> impl Fn(Section) -> Option<SectionBounds> + '_ {
        move |s| {
            positions
                .iter()
                .find(|(p, _, _)| *p == s)
                .map(|&(_, top, bottom)| SectionBounds::new(top, bottom))
        }
    }

    #[test]
    fn test_only_skills_crosses_line() {
        let mut obs = ScrollObserver::new();
        let sections = [
            (Section::About, -900.0, -20.0),
            (Section::Skills, -20.0, 600.0),
            (Section::Projects, 600.0, 1400.0),
            (Section::Contact, 1400.0, 2000.0),
        ];
        assert!(obs.observe(900.0, layout(&sections)));
        assert_eq!(obs.active(), Some(Section::Skills));
    }

    #[test]
    fn test_no_crossing_keeps_previous_section() {
        let mut obs = ScrollObserver::new();
        let sections = [(Section::Projects, 50.0, 700.0)];
        obs.observe(1200.0, layout(&sections));
        assert_eq!(obs.active(), Some(Section::Projects));

        // back above every section
        let sections = [
            (Section::About, 400.0, 900.0),
            (Section::Skills, 900.0, 1500.0),
        ];
        obs.observe(600.0, layout(&sections));
        assert_eq!(obs.active(), Some(Section::Projects));
    }

    #[test]
    fn test_initially_none() {
        let mut obs = ScrollObserver::new();
        assert!(!obs.observe(0.0, |_| Some(SectionBounds::new(500.0, 900.0))));
        assert_eq!(obs.active(), None);
    }

    #[test]
    fn test_first_section_in_order_wins() {
        let mut obs = ScrollObserver::new();
        // overlapping boxes both cross the line
        let sections = [
            (Section::Contact, 0.0, 400.0),
            (Section::Projects, 0.0, 300.0),
        ];
        obs.observe(2000.0, layout(&sections));
        assert_eq!(obs.active(), Some(Section::Projects));
    }

    #[test]
    fn test_line_boundaries_are_inclusive() {
        assert!(SectionBounds::new(100.0, 100.0).crosses(ACTIVATION_LINE));
        assert!(SectionBounds::new(-50.0, 100.0).crosses(ACTIVATION_LINE));
        assert!(!SectionBounds::new(100.5, 400.0).crosses(ACTIVATION_LINE));
        assert!(!SectionBounds::new(-400.0, 99.9).crosses(ACTIVATION_LINE));
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let mut obs = ScrollObserver::new();
        obs.observe(100.0, |_| None);
        assert_eq!(obs.active(), None);
    }

    #[test]
    fn test_reports_scrolled_change() {
        let mut obs = ScrollObserver::new();
        assert!(!obs.is_scrolled());
        assert!(obs.observe(80.0, |_| None));
        assert!(obs.is_scrolled());
        assert!(!obs.observe(120.0, |_| None));
        assert!(obs.observe(0.0, |_| None));
    }

    #[test]
    fn test_section_ids() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["about", "skills", "projects", "contact"]);
        assert_eq!(Section::Skills.href(), "#skills");
    }
}
