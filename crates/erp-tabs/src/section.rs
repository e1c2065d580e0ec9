//! Business sections
//!
//! A section is a tag, not a stateful entity. Icons and colors belong to the
//! presentation layer; only identity and the default tab label live here.

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Dashboard,
    Products,
    Clients,
    Suppliers,
    Employees,
    Sales,
    Inventory,
    Settings,
}

impl Section {
    /// All sections, in navigation order
    pub const ALL: [Section; 8] = [
        Section::Dashboard,
        Section::Products,
        Section::Clients,
        Section::Suppliers,
        Section::Employees,
        Section::Sales,
        Section::Inventory,
        Section::Settings,
    ];

    /// Default title for a tab showing this section
    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Products => "Products",
            Section::Clients => "Clients",
            Section::Suppliers => "Suppliers",
            Section::Employees => "Employees",
            Section::Sales => "Sales Log",
            Section::Inventory => "Inventory",
            Section::Settings => "Settings",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Products => "products",
            Section::Clients => "clients",
            Section::Suppliers => "suppliers",
            Section::Employees => "employees",
            Section::Sales => "sales",
            Section::Inventory => "inventory",
            Section::Settings => "settings",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Section {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dashboard" => Ok(Section::Dashboard),
            "products" => Ok(Section::Products),
            "clients" => Ok(Section::Clients),
            "suppliers" => Ok(Section::Suppliers),
            "employees" => Ok(Section::Employees),
            "sales" => Ok(Section::Sales),
            "inventory" => Ok(Section::Inventory),
            "settings" => Ok(Section::Settings),
            _ => Err(TabError::UnknownSection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_section() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Inventory".parse::<Section>().unwrap(), Section::Inventory);
        assert_eq!(" SALES ".parse::<Section>().unwrap(), Section::Sales);
    }

    #[test]
    fn test_unknown_section_rejected() {
        let err = "payroll".parse::<Section>().unwrap_err();
        assert_eq!(err, TabError::UnknownSection("payroll".to_string()));
    }

    #[test]
    fn test_serde_uses_lowercase_tag() {
        let json = serde_json::to_string(&Section::Suppliers).unwrap();
        assert_eq!(json, "\"suppliers\"");
    }
}
