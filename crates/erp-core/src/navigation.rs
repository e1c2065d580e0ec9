//! Navigation surface and tab strip view models

use serde::Serialize;

use erp_tabs::{Section, TabManager};

use crate::presentation::SectionStyle;

/// One button in the top navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub section: Section,
    pub label: &'static str,
    pub style: SectionStyle,
    /// Highlighted when the active tab shows this section
    pub is_active: bool,
}

impl NavItem {
    pub fn new(section: Section, is_active: bool) -> Self {
        Self {
            section,
            label: section.label(),
            style: SectionStyle::of(section),
            is_active,
        }
    }
}

/// One chip in the tab strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabChip {
    pub id: String,
    pub title: String,
    pub section: Section,
    pub style: SectionStyle,
    pub is_active: bool,
}

pub fn nav_items(manager: &TabManager) -> Vec<NavItem> {
    Section::ALL
        .iter()
        .map(|section| NavItem::new(*section, manager.is_section_active(*section)))
        .collect()
}

/// The "close all" control is only shown while tabs are open
pub fn show_close_all(manager: &TabManager) -> bool {
    !manager.is_empty()
}

pub fn tab_strip(manager: &TabManager) -> Vec<TabChip> {
    let active_id = manager.active_id();
    manager
        .tabs()
        .iter()
        .map(|tab| TabChip {
            id: tab.id.clone(),
            title: tab.display_title().to_string(),
            section: tab.section,
            style: SectionStyle::of(tab.section),
            is_active: active_id == Some(tab.id.as_str()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use erp_tabs::OpenPolicy;

    #[test]
    fn test_nav_items_follow_active_section() {
        let mut manager = TabManager::default();
        let items = nav_items(&manager);
        assert_eq!(items.len(), 8);
        assert!(items.iter().all(|i| !i.is_active));

        manager.open(Section::Employees);
        let active: Vec<Section> = nav_items(&manager)
            .into_iter()
            .filter(|i| i.is_active)
            .map(|i| i.section)
            .collect();
        assert_eq!(active, vec![Section::Employees]);
    }

    #[test]
    fn test_tab_strip_marks_single_active_chip() {
        let mut manager = TabManager::new(OpenPolicy::MultiInstance);
        let first = manager.open(Section::Sales);
        manager.open(Section::Sales);
        manager.set_active(&first.id);

        let chips = tab_strip(&manager);
        assert_eq!(chips.len(), 2);
        assert!(chips[0].is_active);
        assert!(!chips[1].is_active);
        assert_eq!(chips[0].title, "Sales Log");
    }

    #[test]
    fn test_close_all_visibility() {
        let mut manager = TabManager::default();
        assert!(!show_close_all(&manager));
        manager.open(Section::Settings);
        assert!(show_close_all(&manager));
        manager.close_all();
        assert!(!show_close_all(&manager));
    }
}
