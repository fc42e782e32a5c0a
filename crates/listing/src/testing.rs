//! Fixtures shared by the unit tests in this crate.

use catalog::{CalendarType, Catalog, Experience, MentorId, MentorListItem};

/// A visible, established mentor with one "Backend" tag and a 2 000 price
pub(crate) fn mentor(id: MentorId, name: &str) -> MentorListItem {
    MentorListItem {
        id,
        slug: format!("{}-{}", name.to_lowercase().replace(' ', "-"), id),
        name: name.to_string(),
        job: "Software Engineer".to_string(),
        workplace: "Acme".to_string(),
        description: String::new(),
        about: String::new(),
        competencies: String::new(),
        experience: Experience::TwoToFive,
        price: "2 000 руб".to_string(),
        tags: vec!["Backend".to_string()],
        mentee_count: 1,
        is_visible: true,
        is_new: false,
        calendar_type: CalendarType::None,
    }
}

pub(crate) fn build_catalog(mentors: Vec<MentorListItem>) -> Catalog {
    Catalog::from_mentors(mentors).unwrap()
}

/// Ids of the entries a filter keeps, in order
pub(crate) fn kept_ids(filter: &dyn crate::Filter, catalog: &Catalog) -> Vec<MentorId> {
    filter
        .apply(catalog.entries().collect())
        .iter()
        .map(|e| e.mentor.id)
        .collect()
}
