//! Content area
//!
//! Shows the placeholder page of the active tab's section, or a welcome
//! screen with quick-launch shortcuts when nothing is open.

use serde::Serialize;

use erp_tabs::{Section, TabManager};

use crate::config::Config;
use crate::navigation::NavItem;
use crate::presentation::SectionStyle;

const UNDER_DEVELOPMENT: &str = "Under development. This page will be built later.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderPage {
    pub tab_id: String,
    pub section: Section,
    pub heading: String,
    pub message: &'static str,
    pub style: SectionStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Content {
    Welcome {
        title: String,
        prompt: &'static str,
        quick_launch: Vec<NavItem>,
    },
    Page(PlaceholderPage),
}

pub fn content_for(manager: &TabManager, config: &Config) -> Content {
    match manager.active_tab() {
        Some(tab) => Content::Page(PlaceholderPage {
            tab_id: tab.id.clone(),
            section: tab.section,
            heading: heading_for(tab.section, tab.display_title()),
            message: UNDER_DEVELOPMENT,
            style: SectionStyle::of(tab.section),
        }),
        None => Content::Welcome {
            title: config.app_name.clone(),
            prompt: "Choose a section above to get started",
            quick_launch: config
                .quick_launch
                .iter()
                .map(|section| NavItem::new(*section, false))
                .collect(),
        },
    }
}

fn heading_for(section: Section, title: &str) -> String {
    let glyph = SectionStyle::of(section).glyph;
    format!("{glyph} {title}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_when_empty() {
        let manager = TabManager::default();
        let config = Config::default();

        match content_for(&manager, &config) {
            Content::Welcome {
                title,
                quick_launch,
                ..
            } => {
                assert_eq!(title, "Open ERP");
                let sections: Vec<Section> = quick_launch.iter().map(|i| i.section).collect();
                assert_eq!(
                    sections,
                    vec![
                        Section::Dashboard,
                        Section::Products,
                        Section::Clients,
                        Section::Sales
                    ]
                );
            }
            other => panic!("expected welcome screen, got {other:?}"),
        }
    }

    #[test]
    fn test_page_follows_active_tab() {
        let mut manager = TabManager::default();
        manager.open(Section::Dashboard);
        let products = manager.open(Section::Products);

        match content_for(&manager, &Config::default()) {
            Content::Page(page) => {
                assert_eq!(page.tab_id, products.id);
                assert_eq!(page.section, Section::Products);
                assert!(page.heading.ends_with("Products"));
                assert_eq!(page.message, UNDER_DEVELOPMENT);
            }
            other => panic!("expected placeholder page, got {other:?}"),
        }
    }
}
