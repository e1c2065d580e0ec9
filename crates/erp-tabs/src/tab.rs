//! Tab data structure
//!
//! A tab is one open workspace entry. Its identity is distinct from the
//! section it shows, so the same section may appear in several tabs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::section::Section;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier, never reused
    pub id: String,
    /// Section this tab displays
    pub section: Section,
    /// Display title
    pub title: String,
    /// When the tab was opened
    pub opened_at: DateTime<Utc>,
}

impl Tab {
    pub(crate) fn new(section: Section) -> Self {
        Self::with_title(section, section.label())
    }

    pub(crate) fn with_title(section: Section, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            section,
            title: title.into(),
            opened_at: Utc::now(),
        }
    }

    /// Title with a fallback to the section label
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            self.section.label()
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tab_uses_section_label() {
        let tab = Tab::new(Section::Clients);
        assert_eq!(tab.section, Section::Clients);
        assert_eq!(tab.title, "Clients");
        assert!(!tab.id.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Tab::new(Section::Dashboard);
        let b = Tab::new(Section::Dashboard);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_blank_title_falls_back() {
        let tab = Tab::with_title(Section::Sales, "  ");
        assert_eq!(tab.display_title(), "Sales Log");

        let tab = Tab::with_title(Section::Sales, "Q3 sales");
        assert_eq!(tab.display_title(), "Q3 sales");
    }
}
