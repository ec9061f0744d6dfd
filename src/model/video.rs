//! Video gallery model - items, categories, and the filter predicate

/// Category tag carried by every gallery video
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Wildlife,
    Culture,
    Landscape,
    Adventure,
}

impl Category {
    pub fn all() -> Vec<Category> {
        vec![
            Category::Wildlife,
            Category::Culture,
            Category::Landscape,
            Category::Adventure,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Wildlife => "Wildlife",
            Category::Culture => "Culture",
            Category::Landscape => "Landscape",
            Category::Adventure => "Adventure",
        }
    }

    /// Identifier key as carried by the trigger surface ("wildlife", ...)
    pub fn key(&self) -> &'static str {
        match self {
            Category::Wildlife => "wildlife",
            Category::Culture => "culture",
            Category::Landscape => "landscape",
            Category::Adventure => "adventure",
        }
    }
}

/// The active gallery filter, held as explicit state rather than derived
/// from whichever control happens to be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Every selectable filter, in display order ("All" first)
    pub fn all_filters() -> Vec<CategoryFilter> {
        let mut filters = vec![CategoryFilter::All];
        filters.extend(Category::all().into_iter().map(CategoryFilter::Only));
        filters
    }

    /// The filter predicate: `All` matches everything, otherwise equality
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.name(),
        }
    }

    /// Parse a filter key ("all", "wildlife", ...) as used in config
    pub fn from_key(key: &str) -> Option<CategoryFilter> {
        if key.eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        Category::all()
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key))
            .map(CategoryFilter::Only)
    }
}

/// A gallery item; exists for the app's lifetime, only its visibility changes
#[derive(Debug, Clone)]
pub struct Video {
    pub title: String,
    pub category: Category,
    pub duration: String,
}

impl Video {
    pub fn new(title: &str, category: Category, duration: &str) -> Self {
        Self {
            title: title.to_string(),
            category,
            duration: duration.to_string(),
        }
    }
}

/// Indices of the videos visible under the given filter
pub fn visible_indices(videos: &[Video], filter: CategoryFilter) -> Vec<usize> {
    videos
        .iter()
        .enumerate()
        .filter(|(_, v)| filter.matches(v.category))
        .map(|(i, _)| i)
        .collect()
}

/// The gallery's video list
pub fn gallery() -> Vec<Video> {
    vec![
        Video::new("The Great Migration at Maasai Mara", Category::Wildlife, "12:40"),
        Video::new("Elephants of Amboseli", Category::Wildlife, "8:15"),
        Video::new("Maasai Village Life", Category::Culture, "10:02"),
        Video::new("Flamingos over Lake Nakuru", Category::Wildlife, "6:48"),
        Video::new("Sundowner at the Rift Valley", Category::Landscape, "4:30"),
        Video::new("Samburu Traditions and Song", Category::Culture, "9:21"),
        Video::new("Walking Hell's Gate Gorge", Category::Adventure, "11:05"),
        Video::new("Kilimanjaro from the Plains", Category::Landscape, "5:12"),
        Video::new("Climbing Fischer's Tower", Category::Adventure, "7:33"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filter_shows_everything() {
        let videos = gallery();
        let visible = visible_indices(&videos, CategoryFilter::All);
        assert_eq!(visible.len(), videos.len());
    }

    #[test]
    fn test_category_filter_partitions_items() {
        let videos = vec![
            Video::new("a", Category::Wildlife, "1:00"),
            Video::new("b", Category::Culture, "1:00"),
            Video::new("c", Category::Wildlife, "1:00"),
        ];
        let visible = visible_indices(&videos, CategoryFilter::Only(Category::Wildlife));
        assert_eq!(visible, vec![0, 2]);

        let hidden: Vec<usize> = (0..videos.len()).filter(|i| !visible.contains(i)).collect();
        assert_eq!(hidden, vec![1]);
    }

    #[test]
    fn test_filter_on_empty_list_is_noop() {
        let videos: Vec<Video> = Vec::new();
        assert!(visible_indices(&videos, CategoryFilter::Only(Category::Culture)).is_empty());
    }

    #[test]
    fn test_filter_from_key() {
        assert_eq!(CategoryFilter::from_key("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_key("wildlife"),
            Some(CategoryFilter::Only(Category::Wildlife))
        );
        assert_eq!(
            CategoryFilter::from_key("Landscape"),
            Some(CategoryFilter::Only(Category::Landscape))
        );
        assert_eq!(CategoryFilter::from_key("vlog"), None);
    }

    #[test]
    fn test_all_filters_order() {
        let filters = CategoryFilter::all_filters();
        assert_eq!(filters[0], CategoryFilter::All);
        assert_eq!(filters.len(), 5);
    }
}
