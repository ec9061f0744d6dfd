//! Content catalog - the static records behind the detail dialogs
//!
//! Three read-only lookup tables (destinations, services, contact methods)
//! keyed by identifier strings. The catalog is built once at startup and
//! passed by reference; nothing mutates it afterwards.

use std::fmt;

/// A labeled line inside a detail section ("Game Drives: Morning and ...").
/// The label may be empty for plain paragraph text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailEntry {
    pub label: String,
    pub text: String,
}

impl DetailEntry {
    pub fn new(label: &str, text: &str) -> Self {
        Self {
            label: label.to_string(),
            text: text.to_string(),
        }
    }

    /// Paragraph entry without a leading label
    pub fn text(text: &str) -> Self {
        Self::new("", text)
    }
}

/// A headed group of entries inside a detail dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub heading: String,
    pub entries: Vec<DetailEntry>,
}

impl DetailSection {
    pub fn new(heading: &str, entries: Vec<DetailEntry>) -> Self {
        Self {
            heading: heading.to_string(),
            entries,
        }
    }
}

/// Resolved content for the detail dialog's fixed slots
///
/// Every record kind renders through this one shape: a title slot, a
/// subtitle slot, and a list of headed sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailContent {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<DetailSection>,
}

/// Which lookup table a detail request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Destination,
    Service,
    ContactMethod,
}

impl ContentKind {
    /// Display name used for dialog titles and log lines
    pub fn name(&self) -> &'static str {
        match self {
            ContentKind::Destination => "Destination",
            ContentKind::Service => "Service",
            ContentKind::ContactMethod => "Contact",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Record Types
// ─────────────────────────────────────────────────────────────────────────────

/// A safari destination record
#[derive(Debug, Clone)]
pub struct Destination {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub location: String,
    pub activities: Vec<DetailEntry>,
    pub wildlife: Vec<DetailEntry>,
    pub best_time: String,
    pub tips: Vec<DetailEntry>,
}

/// A tour service record
#[derive(Debug, Clone)]
pub struct Service {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub overview: String,
    pub features: Vec<DetailEntry>,
}

/// A way to reach the agency (phone, email, office, hours)
#[derive(Debug, Clone)]
pub struct ContactMethod {
    pub key: String,
    pub title: String,
    pub sections: Vec<DetailSection>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────────────────

/// The immutable content catalog
///
/// Lookups return `None` for unknown keys; callers decide how to surface
/// that (the modal controller logs and aborts the open).
pub struct Catalog {
    destinations: Vec<Destination>,
    services: Vec<Service>,
    contact_methods: Vec<ContactMethod>,
}

impl Catalog {
    pub fn new(
        destinations: Vec<Destination>,
        services: Vec<Service>,
        contact_methods: Vec<ContactMethod>,
    ) -> Self {
        Self {
            destinations,
            services,
            contact_methods,
        }
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn contact_methods(&self) -> &[ContactMethod] {
        &self.contact_methods
    }

    pub fn destination(&self, key: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.key == key)
    }

    pub fn service(&self, key: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.key == key)
    }

    pub fn contact_method(&self, key: &str) -> Option<&ContactMethod> {
        self.contact_methods.iter().find(|c| c.key == key)
    }

    /// Resolve a key in the given table into dialog content
    ///
    /// This is the single lookup path behind all three modal kinds.
    pub fn detail(&self, kind: ContentKind, key: &str) -> Option<DetailContent> {
        match kind {
            ContentKind::Destination => self.destination(key).map(Destination::to_detail),
            ContentKind::Service => self.service(key).map(Service::to_detail),
            ContentKind::ContactMethod => self.contact_method(key).map(ContactMethod::to_detail),
        }
    }
}

impl Destination {
    fn to_detail(&self) -> DetailContent {
        DetailContent {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            sections: vec![
                DetailSection::new("Location", vec![DetailEntry::text(&self.location)]),
                DetailSection::new("Top Activities", self.activities.clone()),
                DetailSection::new("Wildlife Highlights", self.wildlife.clone()),
                DetailSection::new(
                    "Best Time to Visit",
                    vec![DetailEntry::text(&self.best_time)],
                ),
                DetailSection::new("Travel Tips", self.tips.clone()),
            ],
        }
    }
}

impl Service {
    fn to_detail(&self) -> DetailContent {
        DetailContent {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            sections: vec![
                DetailSection::new("Overview", vec![DetailEntry::text(&self.overview)]),
                DetailSection::new("What's Included", self.features.clone()),
            ],
        }
    }
}

impl ContactMethod {
    fn to_detail(&self) -> DetailContent {
        DetailContent {
            title: self.title.clone(),
            subtitle: String::new(),
            sections: self.sections.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_lookup() {
        let catalog = Catalog::seed();
        let mara = catalog.destination("maasai-mara").unwrap();
        assert_eq!(mara.title, "Maasai Mara National Reserve");
        assert!(catalog.destination("unknown-key").is_none());
    }

    #[test]
    fn test_detail_resolves_every_slot() {
        let catalog = Catalog::seed();
        let detail = catalog.detail(ContentKind::Destination, "amboseli").unwrap();
        assert_eq!(detail.title, "Amboseli National Park");
        assert!(!detail.subtitle.is_empty());

        let headings: Vec<&str> = detail.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(
            headings,
            vec![
                "Location",
                "Top Activities",
                "Wildlife Highlights",
                "Best Time to Visit",
                "Travel Tips"
            ]
        );
        for section in &detail.sections {
            assert!(!section.entries.is_empty());
        }
    }

    #[test]
    fn test_detail_unknown_key_is_none() {
        let catalog = Catalog::seed();
        assert!(catalog.detail(ContentKind::Destination, "unknown-key").is_none());
        assert!(catalog.detail(ContentKind::Service, "").is_none());
        assert!(catalog.detail(ContentKind::ContactMethod, "fax").is_none());
    }

    #[test]
    fn test_service_detail_sections() {
        let catalog = Catalog::seed();
        let detail = catalog.detail(ContentKind::Service, "itinerary").unwrap();
        assert_eq!(detail.title, "Itinerary Planning");
        assert_eq!(detail.sections.len(), 2);
        assert_eq!(detail.sections[0].heading, "Overview");
        assert_eq!(detail.sections[1].entries.len(), 4);
    }

    #[test]
    fn test_contact_method_detail() {
        let catalog = Catalog::seed();
        let detail = catalog
            .detail(ContentKind::ContactMethod, "phone")
            .unwrap();
        assert_eq!(detail.title, "Call Us");
        assert!(detail.subtitle.is_empty());
        assert!(!detail.sections.is_empty());
    }

    #[test]
    fn test_all_seeded_keys_resolve() {
        let catalog = Catalog::seed();
        for d in catalog.destinations() {
            assert!(catalog.detail(ContentKind::Destination, &d.key).is_some());
        }
        for s in catalog.services() {
            assert!(catalog.detail(ContentKind::Service, &s.key).is_some());
        }
        for c in catalog.contact_methods() {
            assert!(catalog.detail(ContentKind::ContactMethod, &c.key).is_some());
        }
    }
}
