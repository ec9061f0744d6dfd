//! Seed data for the content catalog
//!
//! The catalog content for Watembezi Adventure: six destinations, six
//! services, and four contact methods. Built in memory once at startup.

use super::catalog::{
    Catalog, ContactMethod, Destination, DetailEntry, DetailSection, Service,
};

impl Catalog {
    /// Build the full catalog
    pub fn seed() -> Catalog {
        Catalog::new(destinations(), services(), contact_methods())
    }
}

fn entry(label: &str, text: &str) -> DetailEntry {
    DetailEntry::new(label, text)
}

fn destinations() -> Vec<Destination> {
    vec![
        Destination {
            key: "maasai-mara".to_string(),
            title: "Maasai Mara National Reserve".to_string(),
            subtitle: "The Crown Jewel of Kenya's Safari Circuit".to_string(),
            location: "Located in southwestern Kenya bordering Tanzania's Serengeti."
                .to_string(),
            activities: vec![
                entry(
                    "Game Drives",
                    "Morning and evening drives to spot the Big Five",
                ),
                entry(
                    "Great Migration",
                    "Witness millions of wildebeest crossing the Mara River",
                ),
                entry("Hot Air Balloon", "Sunrise balloon safaris over the plains"),
            ],
            wildlife: vec![
                entry(
                    "African Lion",
                    "One of the largest lion populations in Africa",
                ),
                entry("Cheetah", "Open grasslands ideal for hunting"),
                entry("Wildebeest", "Millions during migration season"),
            ],
            best_time: "July to October (Great Migration)".to_string(),
            tips: vec![
                entry(
                    "Binoculars Essential",
                    "Bring quality binoculars for distant wildlife spotting",
                ),
                entry("Migration Timing", "Book early for river crossing season"),
                entry("Layered Clothing", "Mornings are cold, afternoons hot"),
            ],
        },
        Destination {
            key: "amboseli".to_string(),
            title: "Amboseli National Park".to_string(),
            subtitle: "Land of the Elephants and Mount Kilimanjaro Views".to_string(),
            location: "Located 240 km south of Nairobi near the Tanzania border.".to_string(),
            activities: vec![
                entry(
                    "Elephant Encounters",
                    "Up close viewing of over 500 large bull elephants",
                ),
                entry(
                    "Kilimanjaro Views",
                    "Stunning views of Africa's highest mountain",
                ),
                entry("Photography Safari", "Photographer's dream location"),
            ],
            wildlife: vec![
                entry("African Elephant", "Large herds with exceptional bulls"),
                entry("Lion", "Regular sightings of prides"),
                entry("Birds", "Over 400 bird species"),
            ],
            best_time: "December to March".to_string(),
            tips: vec![
                entry(
                    "Kilimanjaro Timing",
                    "Morning hours offer best mountain visibility",
                ),
                entry("Bring Water", "It's hot and dry"),
                entry("Photography Lens", "Bring telephoto lens for distant shots"),
            ],
        },
        Destination {
            key: "tsavo-east".to_string(),
            title: "Tsavo East National Park".to_string(),
            subtitle: "Kenya's Largest Park - Raw African Wilderness".to_string(),
            location: "Located 330 km southeast of Nairobi. Covers 13,747 square kilometers."
                .to_string(),
            activities: vec![
                entry("Ruaha Valley Drive", "Explore scenic Galana River valley"),
                entry("Predator Tracking", "Lions, leopards, and cheetahs"),
                entry("Wilderness Exploration", "Vast unspoiled wilderness"),
            ],
            wildlife: vec![
                entry(
                    "African Elephant",
                    "Large herds often covered in red dust",
                ),
                entry("Lion", "High concentration of lions"),
                entry("Leopard", "Excellent leopard sighting opportunities"),
            ],
            best_time: "June to October".to_string(),
            tips: vec![
                entry("Remote Experience", "One of Kenya's least crowded parks"),
                entry("Weather Ready", "Bring rain gear"),
                entry("Red Dust", "Protect cameras and equipment"),
            ],
        },
        Destination {
            key: "lake-nakuru".to_string(),
            title: "Lake Nakuru National Park".to_string(),
            subtitle: "The Pink Flamingo Paradise".to_string(),
            location: "Located 160 km north of Nairobi. Easily accessible by road.".to_string(),
            activities: vec![
                entry("Flamingo Viewing", "Witness millions of pink flamingos"),
                entry("Photography", "Unique bird photography opportunities"),
                entry("Bird Watching", "Over 400 bird species"),
            ],
            wildlife: vec![
                entry("Flamingo", "Millions during wet season"),
                entry("Lion", "Small but healthy population"),
                entry("Waterfowl", "Pelicans and various herons"),
            ],
            best_time: "November to March".to_string(),
            tips: vec![
                entry("Flamingo Season", "Visit Nov-Mar for largest populations"),
                entry("Binoculars Needed", "Essential for bird watching"),
                entry("Quick Trip", "Perfect for 1-2 day trips from Nairobi"),
            ],
        },
        Destination {
            key: "hells-gate".to_string(),
            title: "Hell's Gate National Park".to_string(),
            subtitle: "Adventure Park with Geothermal Wonders".to_string(),
            location: "Located 120 km northwest of Nairobi near Lake Naivasha.".to_string(),
            activities: vec![
                entry("Walking Safari", "Hike among wildlife on foot"),
                entry("Geothermal Spa", "Natural hot springs"),
                entry("Rock Climbing", "Challenging climbing routes"),
            ],
            wildlife: vec![
                entry("Lion", "Habituated lions for walking safari"),
                entry("Giraffe", "Reticulated giraffes"),
                entry("Birds of Prey", "Eagles and hawks"),
            ],
            best_time: "October to March".to_string(),
            tips: vec![
                entry("Early Start", "Begin walks early morning"),
                entry("Physical Fitness", "Moderate fitness level required"),
                entry("Proper Footwear", "Sturdy hiking boots essential"),
            ],
        },
        Destination {
            key: "samburu".to_string(),
            title: "Samburu National Reserve".to_string(),
            subtitle: "Northern Frontier - Unique Semi-Arid Landscape".to_string(),
            location: "Located 350 km north of Nairobi in the remote north.".to_string(),
            activities: vec![
                entry("Unique Wildlife", "Samburu giraffe, gerenuk species"),
                entry("Safari Drives", "Explore rugged terrain"),
                entry("Samburu Culture", "Visit local communities"),
            ],
            wildlife: vec![
                entry("Samburu Giraffe", "Unique species found only here"),
                entry("Gerenuk", "Tall, slender antelope"),
                entry("Elephant", "Desert elephants"),
            ],
            best_time: "October to March".to_string(),
            tips: vec![
                entry("Remote Adventure", "One of Kenya's most remote parks"),
                entry("Unique Species", "Endemic species unique to region"),
                entry("Limited Facilities", "Book accommodation well in advance"),
            ],
        },
    ]
}

fn services() -> Vec<Service> {
    vec![
        Service {
            key: "itinerary".to_string(),
            title: "Itinerary Planning".to_string(),
            subtitle: "Customized Safari Experiences".to_string(),
            overview: "Our expert consultants create personalized itineraries matched to \
                       your interests, budget, and timeframe."
                .to_string(),
            features: vec![
                entry(
                    "Personalized Design",
                    "Custom itineraries tailored to your interests",
                ),
                entry("Season Optimization", "Best times for wildlife viewing"),
                entry(
                    "Activity Customization",
                    "Game drives, walks, photography, and more",
                ),
                entry("Flexible Scheduling", "Adjust pace and activities as desired"),
            ],
        },
        Service {
            key: "accommodation".to_string(),
            title: "Accommodation Booking".to_string(),
            subtitle: "Luxury Lodges & Safari Camps".to_string(),
            overview: "We partner with Kenya's finest lodges across all price points for \
                       comfort and safety."
                .to_string(),
            features: vec![
                entry("Luxury Partnerships", "Access to Kenya's best lodges"),
                entry("Budget Options", "Quality accommodation at all price points"),
                entry(
                    "Mid-Range Selection",
                    "Comfortable stays with excellent service",
                ),
                entry("Guaranteed Booking", "Secure reservations in advance"),
            ],
        },
        Service {
            key: "transportation".to_string(),
            title: "Transportation Services".to_string(),
            subtitle: "Safe & Comfortable Safari Vehicles".to_string(),
            overview: "Professional drivers and well-maintained 4x4s for all terrain safari \
                       experiences."
                .to_string(),
            features: vec![
                entry("Professional Drivers", "Experienced safari drivers"),
                entry(
                    "Well-Maintained Vehicles",
                    "Modern 4x4s suited for terrain",
                ),
                entry(
                    "Modern Amenities",
                    "Comfortable seating and climate control",
                ),
                entry(
                    "Expert Routing",
                    "Knowledge of best game viewing locations",
                ),
            ],
        },
        Service {
            key: "photography".to_string(),
            title: "Photography Safari Tours".to_string(),
            subtitle: "Capture Africa's Wildlife Beauty".to_string(),
            overview: "Specialized photography tours with guides trained in positioning for \
                       optimal shots."
                .to_string(),
            features: vec![
                entry(
                    "Expert Photography Guides",
                    "Guides trained in wildlife photography",
                ),
                entry("Prime Viewing Locations", "Best spots for unique shots"),
                entry(
                    "Extended Game Drives",
                    "Longer drives for more opportunities",
                ),
                entry(
                    "Photography Workshops",
                    "Learn from experienced photographers",
                ),
            ],
        },
        Service {
            key: "guides".to_string(),
            title: "Expert Naturalist Guides".to_string(),
            subtitle: "Knowledge, Passion & Expertise".to_string(),
            overview: "Highly trained guides with in-depth knowledge of wildlife, plants, \
                       and culture."
                .to_string(),
            features: vec![
                entry("Certified Naturalists", "Professionally trained guides"),
                entry("Wildlife Expertise", "Deep knowledge of animal behavior"),
                entry("Cultural Knowledge", "Understanding of local traditions"),
                entry("Multi-lingual", "Guides speaking multiple languages"),
            ],
        },
        Service {
            key: "visa".to_string(),
            title: "Visa & Travel Assistance".to_string(),
            subtitle: "Hassle-Free Travel Planning".to_string(),
            overview: "Assistance with visas, insurance, vaccinations, and complete pre-trip \
                       advice."
                .to_string(),
            features: vec![
                entry("Visa Support", "Guidance through visa applications"),
                entry(
                    "Insurance Guidance",
                    "Travel insurance recommendations",
                ),
                entry("Health Requirements", "Vaccination information"),
                entry("Pre-Trip Consultation", "Complete preparation advice"),
            ],
        },
    ]
}

fn contact_methods() -> Vec<ContactMethod> {
    vec![
        ContactMethod {
            key: "phone".to_string(),
            title: "Call Us".to_string(),
            sections: vec![
                DetailSection::new(
                    "Direct Phone Lines",
                    vec![
                        entry("Main", "+254 (0) 123 456 789"),
                        entry("Bookings", "+254 (0) 987 654 321"),
                    ],
                ),
                DetailSection::new(
                    "Best Times",
                    vec![DetailEntry::text(
                        "Mon-Fri: 8AM-6PM EAT | Sat: 9AM-2PM EAT",
                    )],
                ),
            ],
        },
        ContactMethod {
            key: "email".to_string(),
            title: "Email Us".to_string(),
            sections: vec![
                DetailSection::new(
                    "Email Addresses",
                    vec![
                        entry("General", "info@watembezi-adventure.com"),
                        entry("Bookings", "bookings@watembezi-adventure.com"),
                    ],
                ),
                DetailSection::new(
                    "Response Time",
                    vec![DetailEntry::text("We respond within 24 hours")],
                ),
            ],
        },
        ContactMethod {
            key: "visit".to_string(),
            title: "Visit Our Office".to_string(),
            sections: vec![
                DetailSection::new(
                    "Office Location",
                    vec![
                        DetailEntry::text("Watembezi Adventure Ltd"),
                        DetailEntry::text("Nairobi, Kenya"),
                    ],
                ),
                DetailSection::new(
                    "Why Visit?",
                    vec![DetailEntry::text(
                        "Discuss plans face-to-face and book immediately",
                    )],
                ),
            ],
        },
        ContactMethod {
            key: "hours".to_string(),
            title: "Business Hours".to_string(),
            sections: vec![
                DetailSection::new(
                    "Regular Hours",
                    vec![
                        entry("Mon-Fri", "8AM-6PM"),
                        entry("Sat", "9AM-2PM"),
                    ],
                ),
                DetailSection::new(
                    "24/7 Emergency",
                    vec![DetailEntry::text(
                        "Assistance available for booked clients",
                    )],
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.destinations().len(), 6);
        assert_eq!(catalog.services().len(), 6);
        assert_eq!(catalog.contact_methods().len(), 4);
    }

    #[test]
    fn test_seed_keys_are_unique() {
        let catalog = Catalog::seed();
        let mut keys: Vec<&str> = catalog
            .destinations()
            .iter()
            .map(|d| d.key.as_str())
            .collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), catalog.destinations().len());
    }
}
