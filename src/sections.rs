use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    About,
    Projects,
    Experience,
    Skills,
    Education,
    Honors,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Skills,
        Section::Education,
        Section::Honors,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Education => "Education",
            Self::Honors => "Honors",
            Self::Contact => "Contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::About => "About Me",
            Self::Projects => "Selected Projects",
            Self::Experience => "Experience",
            Self::Skills => "Technical Skills",
            Self::Education => "Education",
            Self::Honors => "Honors & Recognition",
            Self::Contact => "Get In Touch",
        }
    }

    // `#projects`
    pub fn anchor(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Honors => "honors",
            Self::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveView {
    current: Section,
}

impl ActiveView {
    pub fn new(declared: &[Section]) -> Self {
        let current = declared.first().copied().unwrap_or(Section::About);
        Self { current }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.current == section
    }

    pub fn select(&mut self, section: Section) {
        if self.current != section {
            log::debug!("active view {:?} -> {:?}", self.current, section);
        }
        self.current = section;
    }
}

impl Default for ActiveView {
    fn default() -> Self {
        Self::new(&Section::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_declared_section() {
        let view = ActiveView::new(&[Section::Experience, Section::About]);
        assert_eq!(view.current(), Section::Experience);

        let view = ActiveView::default();
        assert_eq!(view.current(), Section::About);

        let view = ActiveView::new(&[]);
        assert_eq!(view.current(), Section::About);
    }

    #[test]
    fn test_select_sets_exactly_that_section() {
        let mut view = ActiveView::default();
        for section in Section::ALL.iter().rev() {
            view.select(*section);
            assert_eq!(view.current(), *section);
            let active = Section::ALL
                .iter()
                .filter(|s| view.is_active(**s))
                .collect::<Vec<_>>();
            assert_eq!(active, vec![section]);
        }

        // reselecting is a no-op
        view.select(Section::About);
        view.select(Section::About);
        assert_eq!(view.current(), Section::About);
    }

    #[test]
    fn test_anchors_are_unique() {
        let mut anchors = Section::ALL.iter().map(|s| s.anchor()).collect::<Vec<_>>();
        anchors.sort();
        anchors.dedup();
        assert_eq!(anchors.len(), Section::ALL.len());
        assert_eq!(Section::Skills.href(), "#skills");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Section::Honors).unwrap();
        assert_eq!(json, "\"honors\"");
        let view: ActiveView = serde_json::from_str(r#"{"current":"contact"}"#).unwrap();
        assert_eq!(view.current(), Section::Contact);
    }
}
