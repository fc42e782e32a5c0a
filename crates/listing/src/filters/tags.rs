//! Filter to keep mentors carrying any of the selected tags.

use crate::traits::Filter;
use catalog::IndexedMentor;

/// Keeps mentors with at least one selected tag (OR within the selection).
///
/// Tags compare exactly, the way they appear in the catalog.
pub struct TagsFilter {
    tags: Vec<String>,
}

impl TagsFilter {
    pub fn new(tags: &[String]) -> Self {
        Self {
            tags: tags.to_vec(),
        }
    }
}

impl Filter for TagsFilter {
    fn name(&self) -> &str {
        "TagsFilter"
    }

    fn matches(&self, entry: &IndexedMentor<'_>) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|tag| entry.mentor.has_tag(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{build_catalog, kept_ids, mentor};

    fn tagged(id: u32, tags: &[&str]) -> catalog::MentorListItem {
        let mut m = mentor(id, "Tagged");
        m.tags = tags.iter().map(|t| t.to_string()).collect();
        m
    }

    #[test]
    fn test_single_tag() {
        let catalog = build_catalog(vec![
            tagged(1, &["Backend", "Go"]),
            tagged(2, &["Frontend"]),
            tagged(3, &["Backend"]),
            tagged(4, &[]),
        ]);

        let filter = TagsFilter::new(&["Backend".to_string()]);
        assert_eq!(kept_ids(&filter, &catalog), vec![1, 3]);
    }

    #[test]
    fn test_multiple_tags_are_or() {
        let catalog = build_catalog(vec![
            tagged(1, &["Backend"]),
            tagged(2, &["Frontend"]),
            tagged(3, &["Design"]),
        ]);

        let filter = TagsFilter::new(&["Frontend".to_string(), "Backend".to_string()]);
        assert_eq!(kept_ids(&filter, &catalog), vec![1, 2]);
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let catalog = build_catalog(vec![tagged(1, &["Backend"])]);
        let filter = TagsFilter::new(&["backend".to_string()]);
        assert!(kept_ids(&filter, &catalog).is_empty());
    }
}
