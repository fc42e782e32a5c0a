//! Filter on the mentor's experience bucket.

use crate::error::{ListingError, Result};
use crate::traits::Filter;
use catalog::{Experience, IndexedMentor};
use std::collections::BTreeSet;

/// Keeps mentors whose bucket is one of the selected buckets.
pub struct ExperienceFilter {
    buckets: BTreeSet<Experience>,
}

impl ExperienceFilter {
    pub fn new(buckets: &BTreeSet<Experience>) -> Self {
        Self {
            buckets: buckets.clone(),
        }
    }
}

impl Filter for ExperienceFilter {
    fn name(&self) -> &str {
        "ExperienceFilter"
    }

    fn matches(&self, entry: &IndexedMentor<'_>) -> bool {
        self.buckets.is_empty() || self.buckets.contains(&entry.mentor.experience)
    }
}

/// Parse user-typed experience codes such as `["2-5", "10+"]`
pub fn parse_experience_selection<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Experience>> {
    codes
        .iter()
        .map(|code| {
            let code = code.as_ref();
            Experience::from_code(code)
                .ok_or_else(|| ListingError::UnknownExperience(code.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{build_catalog, kept_ids, mentor};

    fn with_experience(id: u32, experience: Experience) -> catalog::MentorListItem {
        let mut m = mentor(id, "Exp");
        m.experience = experience;
        m
    }

    #[test]
    fn test_experience_filter() {
        let catalog = build_catalog(vec![
            with_experience(1, Experience::UpToTwo),
            with_experience(2, Experience::FiveToTen),
            with_experience(3, Experience::TenPlus),
            with_experience(4, Experience::FiveToTen),
        ]);

        let selected = BTreeSet::from([Experience::FiveToTen, Experience::TenPlus]);
        let filter = ExperienceFilter::new(&selected);

        assert_eq!(kept_ids(&filter, &catalog), vec![2, 3, 4]);
    }

    #[test]
    fn test_parse_experience_selection() {
        assert_eq!(
            parse_experience_selection(&["2-5", " 10+"]).unwrap(),
            vec![Experience::TwoToFive, Experience::TenPlus]
        );
        assert_eq!(
            parse_experience_selection(&["5-10", "senior"]),
            Err(ListingError::UnknownExperience("senior".to_string()))
        );
    }
}
