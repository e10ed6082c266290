//! The strict résumé schema: the one fixed-shape record handed to
//! persistence and rendering collaborators.
//!
//! Key sets are part of the contract. `validate_strict_schema` checks exact
//! key-set equality at every nesting level; a record that fails it must be
//! discarded, never repaired.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    /// Joined free text, deliberately a single string rather than a list.
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredCv {
    pub personal: Personal,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

impl StructuredCv {
    /// True when no extractor found anything at all.
    pub fn is_empty(&self) -> bool {
        self.personal == Personal::default()
            && self.summary.is_empty()
            && self.skills.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
    }
}

const ROOT_KEYS: &[&str] = &["personal", "summary", "skills", "experience", "education"];
const PERSONAL_KEYS: &[&str] = &["firstName", "lastName", "email", "phone", "city", "linkedin"];
const EXPERIENCE_KEYS: &[&str] =
    &["company", "title", "start_date", "end_date", "location", "highlights"];
const EDUCATION_KEYS: &[&str] =
    &["school", "degree", "field", "start_date", "end_date", "details"];

/// Checks a JSON value against the strict schema: exact key sets at every
/// nesting level and the right container type for every field.
pub fn validate_strict_schema(value: &Value) -> bool {
    let Some(root) = value.as_object() else {
        return false;
    };
    if !keys_match(root, ROOT_KEYS) {
        return false;
    }

    let Some(personal) = root.get("personal").and_then(Value::as_object) else {
        return false;
    };
    if !keys_match(personal, PERSONAL_KEYS) || !PERSONAL_KEYS.iter().all(|k| personal[*k].is_string())
    {
        return false;
    }

    if !root["summary"].is_string() || !is_string_array(&root["skills"]) {
        return false;
    }

    let Some(experience) = root.get("experience").and_then(Value::as_array) else {
        return false;
    };
    for entry in experience {
        let Some(obj) = entry.as_object() else {
            return false;
        };
        if !keys_match(obj, EXPERIENCE_KEYS) {
            return false;
        }
        let strings_ok = ["company", "title", "start_date", "end_date", "location"]
            .iter()
            .all(|k| obj[*k].is_string());
        if !strings_ok || !is_string_array(&obj["highlights"]) {
            return false;
        }
    }

    let Some(education) = root.get("education").and_then(Value::as_array) else {
        return false;
    };
    for entry in education {
        let Some(obj) = entry.as_object() else {
            return false;
        };
        if !keys_match(obj, EDUCATION_KEYS) || !EDUCATION_KEYS.iter().all(|k| obj[*k].is_string()) {
            return false;
        }
    }

    true
}

fn keys_match(obj: &serde_json::Map<String, Value>, expected: &[&str]) -> bool {
    obj.len() == expected.len() && expected.iter().all(|k| obj.contains_key(*k))
}

fn is_string_array(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|arr| arr.iter().all(Value::is_string))
}
