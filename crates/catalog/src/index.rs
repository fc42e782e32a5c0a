//! Catalog building and indexing logic.
//!
//! Builds a `Catalog` from parsed records:
//! - validate identifiers (unique ids and slugs)
//! - build lookup indices (by id, by slug)
//! - precompute one `SearchProfile` per mentor
//!
//! Profiles are computed with rayon. `par_iter().collect()` keeps input
//! order, so `profiles[i]` always lines up with `mentors[i]`.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

impl Catalog {
    /// Load a catalog file and build all indices
    ///
    /// This is the main entry point for loading data.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading mentor catalog from {}", path.display());
        let start = Instant::now();

        let mentors = parser::parse_mentors(path)?;
        let catalog = Self::from_mentors(mentors)?;

        info!(
            "Loaded {} mentors ({} visible) in {:?}",
            catalog.len(),
            catalog.visible_count(),
            start.elapsed()
        );
        Ok(catalog)
    }

    /// Build a catalog from records already in memory.
    ///
    /// Display order is the order of `mentors`.
    pub fn from_mentors(mentors: Vec<MentorListItem>) -> Result<Self> {
        let mut catalog = Catalog {
            mentors,
            ..Catalog::default()
        };
        catalog.build_indices()?;
        catalog.compute_profiles();
        Ok(catalog)
    }

    /// Keep only mentors flagged visible, preserving order
    ///
    /// Profiles are carried over. Lookups are rebuilt from the kept records,
    /// whose ids and slugs were already validated as unique.
    pub fn into_visible(self) -> Self {
        let (mentors, profiles): (Vec<_>, Vec<_>) = self
            .mentors
            .into_iter()
            .zip(self.profiles)
            .filter(|(mentor, _)| mentor.is_visible)
            .unzip();

        let by_id = mentors
            .iter()
            .enumerate()
            .map(|(position, mentor)| (mentor.id, position))
            .collect();
        let by_slug = mentors
            .iter()
            .enumerate()
            .map(|(position, mentor)| (mentor.slug.clone(), position))
            .collect();

        Catalog {
            mentors,
            profiles,
            by_id,
            by_slug,
        }
    }

    /// Number of mentors flagged visible
    pub fn visible_count(&self) -> usize {
        self.mentors.iter().filter(|m| m.is_visible).count()
    }

    /// Every tag with the number of mentors carrying it.
    ///
    /// Sorted by count (highest first), then by tag.
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for mentor in &self.mentors {
            for tag in &mentor.tags {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }

        let mut counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }

    /// Fill `by_id` and `by_slug`, rejecting duplicates and empty slugs
    fn build_indices(&mut self) -> Result<()> {
        self.by_id.clear();
        self.by_slug.clear();

        for (position, mentor) in self.mentors.iter().enumerate() {
            if mentor.slug.trim().is_empty() {
                return Err(CatalogError::ValidationError(format!(
                    "mentor {} has an empty slug",
                    mentor.id
                )));
            }

            if let Some(&first) = self.by_id.get(&mentor.id) {
                return Err(CatalogError::DuplicateId {
                    id: mentor.id,
                    first: self.mentors[first].slug.clone(),
                    second: mentor.slug.clone(),
                });
            }
            self.by_id.insert(mentor.id, position);

            if self.by_slug.insert(mentor.slug.clone(), position).is_some() {
                return Err(CatalogError::ValidationError(format!(
                    "duplicate slug '{}'",
                    mentor.slug
                )));
            }
        }
        Ok(())
    }

    /// Compute search profiles for all mentors in parallel
    fn compute_profiles(&mut self) {
        self.profiles = self
            .mentors
            .par_iter()
            .map(|mentor| {
                let price = parser::parse_price(&mentor.price);
                if price.is_none() && !mentor.price.trim().is_empty() {
                    debug!(
                        "Mentor {} has no numeric price ('{}'); price filters will skip it",
                        mentor.slug, mentor.price
                    );
                }
                SearchProfile::build(mentor, price)
            })
            .collect();
    }
}
