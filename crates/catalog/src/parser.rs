//! Parser for mentor catalog files.
//!
//! A catalog file is JSON in one of two shapes:
//! - a bare array of mentor records: `[{...}, {...}]`
//! - an object wrapping the array: `{"mentors": [{...}, {...}]}`
//!
//! Records use the front end's camelCase field names. Text fields, lists,
//! flags and counts that are missing fall back to empty/false/zero; `id`,
//! `slug` and `experience` are required.

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Price texts that mean "free of charge", compared lowercase
const FREE_PRICES: [&str; 2] = ["бесплатно", "free"];

/// Record shape as it appears in the file, before field-level parsing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMentor {
    id: MentorId,
    slug: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    job: String,
    #[serde(default)]
    workplace: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    about: String,
    #[serde(default)]
    competencies: String,
    experience: String,
    #[serde(default)]
    price: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    mentee_count: u32,
    #[serde(default)]
    is_visible: bool,
    #[serde(default)]
    is_new: bool,
    #[serde(default)]
    calendar_type: Option<String>,
}

/// Read and parse a catalog file
pub fn parse_mentors(path: &Path) -> Result<Vec<MentorListItem>> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_mentors_str(&content, &file)
}

/// Parse catalog JSON already held in memory.
///
/// `file` only labels error messages.
pub fn parse_mentors_str(content: &str, file: &str) -> Result<Vec<MentorListItem>> {
    let document: Value = serde_json::from_str(content).map_err(|e| CatalogError::ParseError {
        file: file.to_string(),
        line: e.line(),
        column: e.column(),
        reason: e.to_string(),
    })?;

    let records = match document {
        Value::Array(records) => records,
        Value::Object(mut object) => match object.remove("mentors") {
            Some(Value::Array(records)) => records,
            _ => {
                return Err(CatalogError::ValidationError(format!(
                    "{}: expected a top-level array or a \"mentors\" array",
                    file
                )));
            }
        },
        _ => {
            return Err(CatalogError::ValidationError(format!(
                "{}: expected a top-level array or a \"mentors\" array",
                file
            )));
        }
    };

    let mut mentors = Vec::with_capacity(records.len());
    for (idx, record) in records.into_iter().enumerate() {
        let raw = RawMentor::deserialize(record).map_err(|e| CatalogError::InvalidValue {
            field: format!("{}: mentors[{}]", file, idx),
            value: e.to_string(),
        })?;
        mentors.push(convert_record(raw, idx)?);
    }
    Ok(mentors)
}

/// Turn a raw record into a `MentorListItem`, parsing coded fields
fn convert_record(raw: RawMentor, idx: usize) -> Result<MentorListItem> {
    let experience = parse_experience(&raw.experience).map_err(|_| CatalogError::InvalidValue {
        field: format!("mentors[{}].experience", idx),
        value: raw.experience.clone(),
    })?;

    let calendar_type = match raw.calendar_type.as_deref() {
        None => CalendarType::None,
        Some(name) => CalendarType::from_name(name).unwrap_or_else(|| {
            warn!(
                "Unknown calendar type '{}' for mentor {}, treating as none",
                name, raw.slug
            );
            CalendarType::None
        }),
    };

    Ok(MentorListItem {
        id: raw.id,
        slug: raw.slug,
        name: raw.name,
        job: raw.job,
        workplace: raw.workplace,
        description: raw.description,
        about: raw.about,
        competencies: raw.competencies,
        experience,
        price: raw.price,
        tags: raw.tags,
        mentee_count: raw.mentee_count,
        is_visible: raw.is_visible,
        is_new: raw.is_new,
        calendar_type,
    })
}

/// Parse an experience bucket code
///
/// Example: "5-10" -> Ok(Experience::FiveToTen)
pub fn parse_experience(s: &str) -> Result<Experience> {
    Experience::from_code(s).ok_or_else(|| CatalogError::InvalidValue {
        field: "experience".to_string(),
        value: s.to_string(),
    })
}

/// Extract a numeric amount from free price text
///
/// Examples: "5 000 руб" -> Some(5000)
///           "1500.00 руб" -> Some(1500)
///           "от 3000 руб/час" -> Some(3000)
///           "Бесплатно" -> Some(0)
///           "По договоренности" -> None
///
/// Only the first number counts. A separator (space, no-break space, dot,
/// comma) continues it only when a group of exactly three digits follows,
/// so decimal parts and trailing numbers are not glued on.
pub fn parse_price(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if FREE_PRICES.contains(&trimmed.to_lowercase().as_str()) {
        return Some(0);
    }

    let start = trimmed.find(|c: char| c.is_ascii_digit())?;
    let chars: Vec<char> = trimmed[start..].chars().collect();
    let mut digits = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if !(is_group_separator(c) && starts_with_digit_group(&chars[i + 1..])) {
            break;
        }
    }
    digits.parse().ok()
}

fn is_group_separator(c: char) -> bool {
    matches!(c, ' ' | '\u{a0}' | '\u{202f}' | '\u{2009}' | '.' | ',')
}

/// True when `rest` opens with exactly three digits
fn starts_with_digit_group(rest: &[char]) -> bool {
    rest.len() >= 3
        && rest[..3].iter().all(char::is_ascii_digit)
        && !rest.get(3).is_some_and(char::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "id": 7,
        "slug": "anna-7",
        "name": "Anna",
        "job": "Backend Engineer",
        "experience": "5-10",
        "price": "3 000 руб",
        "tags": ["Backend", "Go"],
        "menteeCount": 2,
        "isVisible": true,
        "calendarType": "calendly"
    }"#;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("5 000 руб"), Some(5000));
        assert_eq!(parse_price("5\u{a0}000 руб."), Some(5000));
        assert_eq!(parse_price("от 3000 руб/час"), Some(3000));
        assert_eq!(parse_price("1000-2000 руб"), Some(1000));
        assert_eq!(parse_price("Бесплатно"), Some(0));
        assert_eq!(parse_price("  free "), Some(0));
        assert_eq!(parse_price("По договоренности"), None);
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn test_parse_price_stops_at_decimals_and_second_number() {
        assert_eq!(parse_price("1500.00 руб"), Some(1500));
        assert_eq!(parse_price("2 500,50 руб"), Some(2500));
        assert_eq!(parse_price("1000 2 часа"), Some(1000));
        assert_eq!(parse_price("1.500 руб"), Some(1500));
        assert_eq!(parse_price("1 000 000 руб"), Some(1_000_000));
        assert_eq!(parse_price("3000 1500 руб"), Some(3000));
    }

    #[test]
    fn test_parse_price_overflow_is_none() {
        assert_eq!(parse_price("99999999999 руб"), None);
    }

    #[test]
    fn test_parse_experience() {
        assert_eq!(parse_experience("10+").unwrap(), Experience::TenPlus);
        assert_eq!(parse_experience(" 0-2 ").unwrap(), Experience::UpToTwo);
        assert!(matches!(
            parse_experience("3-7"),
            Err(CatalogError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_bare_array() {
        let json = format!("[{}]", RECORD);
        let mentors = parse_mentors_str(&json, "mentors.json").unwrap();

        assert_eq!(mentors.len(), 1);
        let anna = &mentors[0];
        assert_eq!(anna.id, 7);
        assert_eq!(anna.experience, Experience::FiveToTen);
        assert_eq!(anna.tags, vec!["Backend", "Go"]);
        assert_eq!(anna.mentee_count, 2);
        assert_eq!(anna.calendar_type, CalendarType::Calendly);
        // Missing fields fall back to defaults
        assert_eq!(anna.about, "");
        assert!(!anna.is_new);
    }

    #[test]
    fn test_serialized_record_loads_back() {
        let mentors = parse_mentors_str(&format!("[{}]", RECORD), "mentors.json").unwrap();
        let json = serde_json::to_string(&mentors).unwrap();

        assert!(json.contains("\"menteeCount\":2"));
        assert!(json.contains("\"experience\":\"5-10\""));
        assert_eq!(parse_mentors_str(&json, "export.json").unwrap(), mentors);
    }

    #[test]
    fn test_parse_wrapped_object() {
        let json = format!(r#"{{"mentors": [{}]}}"#, RECORD);
        let mentors = parse_mentors_str(&json, "mentors.json").unwrap();
        assert_eq!(mentors.len(), 1);
    }

    #[test]
    fn test_unknown_calendar_type_is_none() {
        let json = RECORD.replace("calendly", "outlook");
        let mentors = parse_mentors_str(&format!("[{}]", json), "mentors.json").unwrap();
        assert_eq!(mentors[0].calendar_type, CalendarType::None);
    }

    #[test]
    fn test_syntax_error_has_position() {
        let err = parse_mentors_str("[{\"id\": 1,", "broken.json").unwrap_err();
        match err {
            CatalogError::ParseError { file, line, .. } => {
                assert_eq!(file, "broken.json");
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_experience_rejected() {
        let json = RECORD.replace("5-10", "a lot");
        let err = parse_mentors_str(&format!("[{}]", json), "mentors.json").unwrap_err();
        assert!(err.to_string().contains("mentors[0].experience"));
    }

    #[test]
    fn test_missing_slug_rejected() {
        let err = parse_mentors_str(r#"[{"id": 1, "experience": "0-2"}]"#, "m.json").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { .. }));
    }

    #[test]
    fn test_wrong_top_level_shape() {
        let err = parse_mentors_str(r#"{"items": []}"#, "m.json").unwrap_err();
        assert!(matches!(err, CatalogError::ValidationError(_)));
    }
}
