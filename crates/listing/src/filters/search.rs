//! Free-text search over the mentor's name, job, competencies and
//! description.

use crate::traits::Filter;
use catalog::IndexedMentor;

/// Keeps mentors whose searchable text contains the query.
///
/// ## Algorithm
/// The query is trimmed and lowercased once here. Each mentor's fields were
/// lowercased at catalog load time, so a match is a plain substring check.
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }

    /// An empty query keeps everything
    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }
}

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn matches(&self, entry: &IndexedMentor<'_>) -> bool {
        self.needle.is_empty() || entry.profile.contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{build_catalog, kept_ids, mentor};

    #[test]
    fn test_search_is_case_insensitive() {
        let mut anna = mentor(1, "Anna Ivanova");
        anna.competencies = "PostgreSQL, Kafka".to_string();
        let mut boris = mentor(2, "Boris");
        boris.description = "Помогаю с архитектурой".to_string();
        let catalog = build_catalog(vec![anna, boris, mentor(3, "Clara")]);

        assert_eq!(kept_ids(&SearchFilter::new("ANNA"), &catalog), vec![1]);
        assert_eq!(kept_ids(&SearchFilter::new("kafka"), &catalog), vec![1]);
        assert_eq!(kept_ids(&SearchFilter::new("АРХИТЕКТУР"), &catalog), vec![2]);
        // Every fixture shares the job title
        assert_eq!(kept_ids(&SearchFilter::new("engineer"), &catalog), vec![1, 2, 3]);
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        let catalog = build_catalog(vec![mentor(1, "Anna"), mentor(2, "Boris")]);
        let filter = SearchFilter::new("   ");

        assert!(!filter.is_active());
        assert_eq!(kept_ids(&filter, &catalog), vec![1, 2]);
    }

    #[test]
    fn test_workplace_is_not_searched() {
        let catalog = build_catalog(vec![mentor(1, "Anna")]);
        assert!(kept_ids(&SearchFilter::new("acme"), &catalog).is_empty());
    }
}
