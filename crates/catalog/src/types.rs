//! Core domain types for the mentor catalog.
//!
//! A `MentorListItem` is the read-only summary the public mentor list works
//! with. The catalog hands out shared references only; nothing downstream
//! mutates a record.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a mentor record
pub type MentorId = u32;

// =============================================================================
// Mentor Types
// =============================================================================

/// One entry of the public mentor list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorListItem {
    pub id: MentorId,
    pub slug: String,
    pub name: String,
    /// Job title
    pub job: String,
    pub workplace: String,
    pub description: String,
    pub about: String,
    pub competencies: String,
    pub experience: Experience,
    /// Price as the mentor wrote it, e.g. "5 000 руб" or "По договоренности"
    pub price: String,
    pub tags: Vec<String>,
    /// Number of mentees with an active session
    pub mentee_count: u32,
    pub is_visible: bool,
    /// Recently joined mentor
    pub is_new: bool,
    pub calendar_type: CalendarType,
}

impl MentorListItem {
    /// Check whether the mentor carries a tag (exact, case-sensitive match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// The free-text fields a search query runs against, in display order.
    pub fn searchable_fields(&self) -> [&str; 4] {
        [&self.name, &self.job, &self.competencies, &self.description]
    }
}

/// Years of professional experience, bucketed the way mentors pick it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Experience {
    #[serde(rename = "0-2")]
    UpToTwo,
    #[serde(rename = "2-5")]
    TwoToFive,
    #[serde(rename = "5-10")]
    FiveToTen,
    #[serde(rename = "10+")]
    TenPlus,
}

impl Experience {
    /// Every bucket, from least to most experienced
    pub const ALL: [Experience; 4] = [
        Experience::UpToTwo,
        Experience::TwoToFive,
        Experience::FiveToTen,
        Experience::TenPlus,
    ];

    /// The wire code, e.g. "5-10"
    pub fn code(self) -> &'static str {
        match self {
            Experience::UpToTwo => "0-2",
            Experience::TwoToFive => "2-5",
            Experience::FiveToTen => "5-10",
            Experience::TenPlus => "10+",
        }
    }

    /// Look up a bucket by its wire code. Surrounding whitespace is ignored.
    pub fn from_code(code: &str) -> Option<Experience> {
        let code = code.trim();
        Self::ALL.into_iter().find(|e| e.code() == code)
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Which booking calendar the mentor linked, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarType {
    Calendly,
    Koalendar,
    Calendlab,
    Url,
    #[default]
    None,
}

impl CalendarType {
    pub fn from_name(name: &str) -> Option<CalendarType> {
        match name.trim().to_lowercase().as_str() {
            "calendly" => Some(CalendarType::Calendly),
            "koalendar" => Some(CalendarType::Koalendar),
            "calendlab" => Some(CalendarType::Calendlab),
            "url" => Some(CalendarType::Url),
            "none" | "" => Some(CalendarType::None),
            _ => None,
        }
    }
}

// =============================================================================
// Search Profile
// =============================================================================

/// Values derived once per mentor at load time so filtering never
/// re-lowercases text or re-parses prices.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchProfile {
    /// Lowercased searchable fields, same order as
    /// `MentorListItem::searchable_fields`
    pub fields: Vec<String>,
    /// Numeric price, `None` when the price text has no amount
    pub price: Option<u32>,
}

impl SearchProfile {
    pub fn build(mentor: &MentorListItem, price: Option<u32>) -> Self {
        Self {
            fields: mentor
                .searchable_fields()
                .iter()
                .map(|f| f.to_lowercase())
                .collect(),
            price,
        }
    }

    /// Substring match against any field. `needle` must already be lowercase.
    pub fn contains(&self, needle: &str) -> bool {
        self.fields.iter().any(|f| f.contains(needle))
    }
}

/// A mentor together with its precomputed search profile.
///
/// This is what filters see. `position` is the record's index in the
/// catalog, which is also its display order.
#[derive(Debug, Clone, Copy)]
pub struct IndexedMentor<'a> {
    pub position: usize,
    pub mentor: &'a MentorListItem,
    pub profile: &'a SearchProfile,
}

// =============================================================================
// Catalog - The In-Memory Mentor List
// =============================================================================

/// All mentor records in display order, plus lookup indices.
///
/// Built once (see `index.rs`) and then only read. Filters borrow it, so any
/// number of list views can share one catalog.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) mentors: Vec<MentorListItem>,
    /// `profiles[i]` belongs to `mentors[i]`
    pub(crate) profiles: Vec<SearchProfile>,
    pub(crate) by_id: HashMap<MentorId, usize>,
    pub(crate) by_slug: HashMap<String, usize>,
}

impl Catalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.mentors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mentors.is_empty()
    }

    /// All records in display order
    pub fn mentors(&self) -> &[MentorListItem] {
        &self.mentors
    }

    /// The record at a display position together with its profile
    pub fn entry(&self, position: usize) -> Option<IndexedMentor<'_>> {
        let mentor = self.mentors.get(position)?;
        let profile = self.profiles.get(position)?;
        Some(IndexedMentor {
            position,
            mentor,
            profile,
        })
    }

    /// Iterate over every record with its profile, in display order
    pub fn entries(&self) -> impl Iterator<Item = IndexedMentor<'_>> + '_ {
        self.mentors
            .iter()
            .zip(self.profiles.iter())
            .enumerate()
            .map(|(position, (mentor, profile))| IndexedMentor {
                position,
                mentor,
                profile,
            })
    }

    pub fn get_by_id(&self, id: MentorId) -> Option<&MentorListItem> {
        self.by_id.get(&id).and_then(|&i| self.mentors.get(i))
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<&MentorListItem> {
        self.by_slug.get(slug).and_then(|&i| self.mentors.get(i))
    }
}
