//! Open policy
//!
//! Decides whether opening a section that already has a tab creates a second
//! tab or re-activates the existing one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenPolicy {
    /// Every open creates a new tab, even for a section that is already open
    MultiInstance,
    /// At most one tab per section; re-opening activates the existing tab
    #[default]
    SingletonPerSection,
}

impl OpenPolicy {
    pub fn is_singleton(&self) -> bool {
        matches!(self, OpenPolicy::SingletonPerSection)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OpenPolicy::MultiInstance => "multi_instance",
            OpenPolicy::SingletonPerSection => "singleton_per_section",
        }
    }
}

impl From<bool> for OpenPolicy {
    /// `true` selects singleton-per-section
    fn from(singleton: bool) -> Self {
        if singleton {
            OpenPolicy::SingletonPerSection
        } else {
            OpenPolicy::MultiInstance
        }
    }
}

impl std::fmt::Display for OpenPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_singleton() {
        assert_eq!(OpenPolicy::default(), OpenPolicy::SingletonPerSection);
        assert!(OpenPolicy::default().is_singleton());
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(OpenPolicy::from(true), OpenPolicy::SingletonPerSection);
        assert_eq!(OpenPolicy::from(false), OpenPolicy::MultiInstance);
    }

    #[test]
    fn test_serde_names() {
        let policy: OpenPolicy = serde_json::from_str("\"multi_instance\"").unwrap();
        assert_eq!(policy, OpenPolicy::MultiInstance);
    }
}
