//! Filter on price buckets.
//!
//! The mentor list offers a fixed set of "up to" price labels. Picking one
//! keeps mentors whose parsed price is at or below the label's ceiling.

use crate::error::{ListingError, Result};
use crate::traits::Filter;
use catalog::IndexedMentor;
use std::fmt;

/// A selectable price ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PriceBucket {
    Free,
    UpTo1000,
    UpTo2000,
    UpTo3000,
    UpTo5000,
    UpTo10000,
}

impl PriceBucket {
    /// Every bucket, cheapest first
    pub const ALL: [PriceBucket; 6] = [
        PriceBucket::Free,
        PriceBucket::UpTo1000,
        PriceBucket::UpTo2000,
        PriceBucket::UpTo3000,
        PriceBucket::UpTo5000,
        PriceBucket::UpTo10000,
    ];

    /// The label shown in the filter panel
    pub fn label(self) -> &'static str {
        match self {
            PriceBucket::Free => "Бесплатно",
            PriceBucket::UpTo1000 => "До 1 000 руб.",
            PriceBucket::UpTo2000 => "До 2 000 руб.",
            PriceBucket::UpTo3000 => "До 3 000 руб.",
            PriceBucket::UpTo5000 => "До 5 000 руб.",
            PriceBucket::UpTo10000 => "До 10 000 руб.",
        }
    }

    /// Highest price (inclusive) the bucket admits
    pub fn ceiling(self) -> u32 {
        match self {
            PriceBucket::Free => 0,
            PriceBucket::UpTo1000 => 1_000,
            PriceBucket::UpTo2000 => 2_000,
            PriceBucket::UpTo3000 => 3_000,
            PriceBucket::UpTo5000 => 5_000,
            PriceBucket::UpTo10000 => 10_000,
        }
    }

    /// Find a bucket by label.
    ///
    /// Case, surrounding whitespace, a trailing dot and whitespace inside
    /// the label are ignored: "до 5000 руб" finds "До 5 000 руб.".
    pub fn from_label(label: &str) -> Option<PriceBucket> {
        let wanted = normalize_label(label);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|bucket| normalize_label(bucket.label()) == wanted)
    }
}

impl fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn normalize_label(label: &str) -> String {
    label
        .trim()
        .trim_end_matches('.')
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parse a user-typed price label.
///
/// An empty label clears the selection (`Ok(None)`).
pub fn parse_price_selection(label: &str) -> Result<Option<PriceBucket>> {
    if label.trim().is_empty() {
        return Ok(None);
    }
    PriceBucket::from_label(label)
        .map(Some)
        .ok_or_else(|| ListingError::UnknownPriceBucket(label.to_string()))
}

/// Keeps mentors priced at or below the bucket's ceiling.
///
/// ## Algorithm
/// Uses the price parsed at catalog load time. Mentors without a numeric
/// price ("По договоренности") never match.
pub struct PriceFilter {
    bucket: PriceBucket,
}

impl PriceFilter {
    pub fn new(bucket: PriceBucket) -> Self {
        Self { bucket }
    }
}

impl Filter for PriceFilter {
    fn name(&self) -> &str {
        "PriceFilter"
    }

    fn matches(&self, entry: &IndexedMentor<'_>) -> bool {
        entry
            .profile
            .price
            .is_some_and(|price| price <= self.bucket.ceiling())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{build_catalog, kept_ids, mentor};

    fn priced(id: u32, price: &str) -> catalog::MentorListItem {
        let mut m = mentor(id, "Priced");
        m.price = price.to_string();
        m
    }

    #[test]
    fn test_price_filter() {
        let catalog = build_catalog(vec![
            priced(1, "Бесплатно"),
            priced(2, "3 000 руб"),
            priced(3, "5 000 руб"),
            priced(4, "7500 руб/час"),
            priced(5, "По договоренности"),
        ]);

        assert_eq!(kept_ids(&PriceFilter::new(PriceBucket::UpTo5000), &catalog), vec![1, 2, 3]);
        assert_eq!(kept_ids(&PriceFilter::new(PriceBucket::Free), &catalog), vec![1]);
        assert_eq!(
            kept_ids(&PriceFilter::new(PriceBucket::UpTo10000), &catalog),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_from_label() {
        assert_eq!(PriceBucket::from_label("До 5 000 руб."), Some(PriceBucket::UpTo5000));
        assert_eq!(PriceBucket::from_label("до 5000 руб"), Some(PriceBucket::UpTo5000));
        assert_eq!(PriceBucket::from_label(" бесплатно "), Some(PriceBucket::Free));
        assert_eq!(PriceBucket::from_label("До 4 000 руб."), None);
        assert_eq!(PriceBucket::from_label(""), None);
    }

    #[test]
    fn test_every_label_resolves_to_itself() {
        for bucket in PriceBucket::ALL {
            assert_eq!(PriceBucket::from_label(bucket.label()), Some(bucket));
        }
    }

    #[test]
    fn test_parse_price_selection() {
        assert_eq!(parse_price_selection("  "), Ok(None));
        assert_eq!(
            parse_price_selection("До 2 000 руб."),
            Ok(Some(PriceBucket::UpTo2000))
        );
        assert_eq!(
            parse_price_selection("cheap"),
            Err(ListingError::UnknownPriceBucket("cheap".to_string()))
        );
    }
}
