//! Section presentation metadata
//!
//! Icon names follow the Material icon set; accents are `#RRGGBB`.

use serde::Serialize;

use erp_tabs::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionStyle {
    pub icon: &'static str,
    pub accent: &'static str,
    pub glyph: &'static str,
}

impl SectionStyle {
    pub fn of(section: Section) -> Self {
        let (icon, accent, glyph) = match section {
            Section::Dashboard => ("dashboard", "#3B82F6", "📊"),
            Section::Products => ("inventory_2", "#EC4899", "📦"),
            Section::Clients => ("groups", "#10B981", "🧍"),
            Section::Suppliers => ("local_shipping", "#F59E0B", "🚚"),
            Section::Employees => ("badge", "#8B5CF6", "💼"),
            Section::Sales => ("receipt", "#14B8A6", "💰"),
            Section::Inventory => ("warehouse", "#EF4444", "📋"),
            Section::Settings => ("settings", "#6B7280", "⚙"),
        };

        Self {
            icon,
            accent,
            glyph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_section_has_a_distinct_accent() {
        let accents: HashSet<&str> = Section::ALL
            .iter()
            .map(|s| SectionStyle::of(*s).accent)
            .collect();
        assert_eq!(accents.len(), Section::ALL.len());
    }
}
