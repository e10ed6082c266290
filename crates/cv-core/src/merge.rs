//! Schema Normalizer — merges the heuristic result with an optional
//! external (language-model) result into one strict-shape record.
//!
//! External fields win field-by-field; anything absent, empty, or malformed
//! on the external side falls back to the heuristic value. Source field
//! names are tolerated in many spellings (French and English) through one
//! alias table per target field, resolved only here so the strict schema
//! stays the single source of truth downstream.

use serde_json::{Map, Value};

use crate::extract::personal::{find_email, find_linkedin, find_phone};
use crate::schema::{EducationEntry, ExperienceEntry, Personal, StructuredCv};
use crate::text::fold;

// Alias entries are compared after `alias_key` folding (lowercase, no
// diacritics, separators removed), so "first_name", "firstName" and
// "Prénom" all resolve through the entries below.
const PERSONAL_ALIASES: &[&str] = &[
    "personal",
    "personnel",
    "infospersonnelles",
    "informationspersonnelles",
    "contact",
    "coordonnees",
    "identite",
];
const FIRST_NAME_ALIASES: &[&str] = &["firstname", "prenom", "givenname"];
const LAST_NAME_ALIASES: &[&str] = &["lastname", "nom", "surname", "familyname", "nomdefamille"];
const EMAIL_ALIASES: &[&str] = &["email", "mail", "courriel", "emailaddress", "adressemail"];
const PHONE_ALIASES: &[&str] = &["phone", "telephone", "tel", "phonenumber", "mobile", "portable"];
const CITY_ALIASES: &[&str] = &["city", "ville", "location", "localisation", "address", "adresse"];
const LINKEDIN_ALIASES: &[&str] = &["linkedin", "linkedinurl", "linkedinprofile", "profillinkedin"];
const SUMMARY_ALIASES: &[&str] = &[
    "summary",
    "profil",
    "profile",
    "resume",
    "apropos",
    "objectif",
    "objective",
    "presentation",
];
const SKILLS_ALIASES: &[&str] =
    &["skills", "competences", "technicalskills", "competencestechniques", "technologies"];
const EXPERIENCE_ALIASES: &[&str] = &[
    "experience",
    "experiences",
    "workexperience",
    "experienceprofessionnelle",
    "experiencesprofessionnelles",
    "parcoursprofessionnel",
    "emplois",
    "jobs",
    "positions",
];
const EDUCATION_ALIASES: &[&str] = &[
    "education",
    "formation",
    "formations",
    "etudes",
    "studies",
    "diplomes",
    "cursus",
    "scolarite",
];
const COMPANY_ALIASES: &[&str] =
    &["company", "entreprise", "societe", "employer", "employeur", "organisation", "organization"];
const TITLE_ALIASES: &[&str] =
    &["title", "poste", "titre", "role", "position", "jobtitle", "intitule", "fonction"];
const START_DATE_ALIASES: &[&str] = &["startdate", "start", "debut", "datedebut", "from", "depuis"];
const END_DATE_ALIASES: &[&str] = &["enddate", "end", "fin", "datefin", "to", "jusqua"];
const ENTRY_LOCATION_ALIASES: &[&str] = &["location", "lieu", "ville", "city", "localisation"];
const HIGHLIGHTS_ALIASES: &[&str] = &[
    "highlights",
    "missions",
    "taches",
    "achievements",
    "realisations",
    "accomplissements",
    "responsibilities",
    "responsabilites",
    "bullets",
];
const SCHOOL_ALIASES: &[&str] =
    &["school", "ecole", "etablissement", "university", "universite", "institution", "institut"];
const DEGREE_ALIASES: &[&str] = &["degree", "diplome", "titre", "qualification"];
const FIELD_ALIASES: &[&str] =
    &["field", "domaine", "specialite", "filiere", "major", "fieldofstudy", "discipline"];
const DETAILS_ALIASES: &[&str] = &["details", "description", "notes", "mention", "precisions"];

/// Merges the heuristic record with an optional external one.
/// Always returns a strict-shape record; never fails.
pub fn merge(heuristic: StructuredCv, external: Option<Value>) -> StructuredCv {
    let ext = external.as_ref().and_then(Value::as_object);

    // Personal fields may arrive nested under a "personal"-like key or flat
    // at the root; the nested object wins when both carry a value.
    let nested = ext.and_then(|o| resolve(o, PERSONAL_ALIASES)).and_then(Value::as_object);
    let personal_string = |aliases: &[&str], fallback: String| {
        nested
            .and_then(|o| resolve_string(o, aliases))
            .or_else(|| ext.and_then(|o| resolve_string(o, aliases)))
            .unwrap_or(fallback)
    };

    let personal = Personal {
        first_name: personal_string(FIRST_NAME_ALIASES, heuristic.personal.first_name),
        last_name: personal_string(LAST_NAME_ALIASES, heuristic.personal.last_name),
        email: personal_string(EMAIL_ALIASES, heuristic.personal.email),
        phone: personal_string(PHONE_ALIASES, heuristic.personal.phone),
        city: personal_string(CITY_ALIASES, heuristic.personal.city),
        linkedin: personal_string(LINKEDIN_ALIASES, heuristic.personal.linkedin),
    };

    let summary = ext
        .and_then(|o| resolve_string(o, SUMMARY_ALIASES))
        .unwrap_or(heuristic.summary);

    let skills = ext
        .and_then(|o| resolve(o, SKILLS_ALIASES))
        .map(string_list)
        .filter(|l| !l.is_empty())
        .unwrap_or(heuristic.skills);

    let experience = ext
        .and_then(|o| resolve(o, EXPERIENCE_ALIASES))
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(experience_entry).collect::<Vec<_>>())
        .filter(|l| !l.is_empty())
        .unwrap_or(heuristic.experience);

    let education = ext
        .and_then(|o| resolve(o, EDUCATION_ALIASES))
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(education_entry).collect::<Vec<_>>())
        .filter(|l| !l.is_empty())
        .unwrap_or(heuristic.education);

    let mut cv = StructuredCv {
        personal,
        summary,
        skills,
        experience,
        education,
    };

    cv.personal.first_name = capitalize_name(&cv.personal.first_name);
    cv.personal.last_name = capitalize_name(&cv.personal.last_name);
    refill_contacts(&mut cv);
    cv
}

/// Re-runs the global regex extractors over the merged text when contact
/// fields are still empty; a regex hit beats an absent structured field.
fn refill_contacts(cv: &mut StructuredCv) {
    if !cv.personal.email.is_empty()
        && !cv.personal.phone.is_empty()
        && !cv.personal.linkedin.is_empty()
    {
        return;
    }

    let mut haystack = String::new();
    haystack.push_str(&cv.summary);
    for skill in &cv.skills {
        haystack.push('\n');
        haystack.push_str(skill);
    }
    for entry in &cv.experience {
        haystack.push('\n');
        haystack.push_str(&entry.title);
    }
    for entry in &cv.education {
        haystack.push('\n');
        haystack.push_str(&entry.school);
    }

    if cv.personal.email.is_empty() {
        cv.personal.email = find_email(&haystack);
    }
    if cv.personal.phone.is_empty() {
        cv.personal.phone = find_phone(&haystack);
    }
    if cv.personal.linkedin.is_empty() {
        cv.personal.linkedin = find_linkedin(&haystack);
    }
}

fn experience_entry(value: &Value) -> Option<ExperienceEntry> {
    let obj = value.as_object()?;
    let entry = ExperienceEntry {
        company: resolve_string(obj, COMPANY_ALIASES).unwrap_or_default(),
        title: resolve_string(obj, TITLE_ALIASES).unwrap_or_default(),
        start_date: resolve_string(obj, START_DATE_ALIASES).unwrap_or_default(),
        end_date: resolve_string(obj, END_DATE_ALIASES).unwrap_or_default(),
        location: resolve_string(obj, ENTRY_LOCATION_ALIASES).unwrap_or_default(),
        highlights: resolve(obj, HIGHLIGHTS_ALIASES).map(string_list).unwrap_or_default(),
    };
    (entry != ExperienceEntry::default()).then_some(entry)
}

fn education_entry(value: &Value) -> Option<EducationEntry> {
    let obj = value.as_object()?;
    let entry = EducationEntry {
        school: resolve_string(obj, SCHOOL_ALIASES).unwrap_or_default(),
        degree: resolve_string(obj, DEGREE_ALIASES).unwrap_or_default(),
        field: resolve_string(obj, FIELD_ALIASES).unwrap_or_default(),
        start_date: resolve_string(obj, START_DATE_ALIASES).unwrap_or_default(),
        end_date: resolve_string(obj, END_DATE_ALIASES).unwrap_or_default(),
        details: resolve_string(obj, DETAILS_ALIASES).unwrap_or_default(),
    };
    (entry != EducationEntry::default()).then_some(entry)
}

/// Looks a field up under any accepted spelling of its name.
fn resolve<'a>(obj: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    obj.iter()
        .find(|(k, _)| aliases.contains(&alias_key(k).as_str()))
        .map(|(_, v)| v)
}

fn resolve_string(obj: &Map<String, Value>, aliases: &[&str]) -> Option<String> {
    resolve(obj, aliases)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Canonical form of a source field name: folded, separators removed.
fn alias_key(key: &str) -> String {
    fold(key).chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Accepts a JSON array of strings, or a comma-separated string.
fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// "DOE" → "Doe", "jean-pierre" → "Jean-Pierre".
fn capitalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            word.split('-')
                .map(|piece| {
                    let mut chars = piece.chars();
                    match chars.next() {
                        Some(c) => {
                            c.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                        }
                        None => String::new(),
                    }
                })
                .collect::<Vec<_>>()
                .join("-")
        })
        .collect::<Vec<_>>()
        .join(" ")
}
