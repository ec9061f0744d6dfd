//! UI state - presentation enums separate from catalog data

/// Tab selection in the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Destinations,
    Services,
    Videos,
    Contact,
}

impl Tab {
    pub fn all() -> Vec<Tab> {
        vec![Tab::Destinations, Tab::Services, Tab::Videos, Tab::Contact]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Destinations => "Destinations",
            Tab::Services => "Services",
            Tab::Videos => "Videos",
            Tab::Contact => "Contact",
        }
    }

    /// Identifier used in the config file
    pub fn key(&self) -> &'static str {
        match self {
            Tab::Destinations => "destinations",
            Tab::Services => "services",
            Tab::Videos => "videos",
            Tab::Contact => "contact",
        }
    }

    pub fn from_key(key: &str) -> Option<Tab> {
        Tab::all()
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(key))
    }
}

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_key() {
        assert_eq!(Tab::from_key("videos"), Some(Tab::Videos));
        assert_eq!(Tab::from_key("Contact"), Some(Tab::Contact));
        assert_eq!(Tab::from_key("blog"), None);
    }
}
