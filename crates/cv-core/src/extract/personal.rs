//! Global personal-field extractors: regex scans over the whole cleaned
//! text, independent of section bucketing.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::Personal;
use crate::text::{contains_word, fold, title_case_words, EMAIL_RE, YEAR_RE};
use crate::vocab::KNOWN_CITIES;

/// City heuristics only look this far down the document.
const CITY_SCAN_LINES: usize = 15;
/// First-line name heuristic limits.
const NAME_MAX_CHARS: usize = 60;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d\s().\-/]{5,}\d").unwrap());

static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:[a-z]{2,3}\.)?linkedin\.com/[A-Za-z0-9_/\-%.~]+").unwrap()
});

static CITY_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:ville|city|adresse|location)\s*:\s*(.+)$").unwrap());

static LINKEDIN_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^linkedin\s*:\s*(\S+)").unwrap());

/// Extracts all personal fields from the cleaned text. Casing of the name
/// is normalized later, at the merge boundary.
pub fn extract_personal(lines: &[String]) -> Personal {
    let full_text = lines.join("\n");
    let email = find_email(&full_text);
    let (first_name, last_name) = find_name(lines, &email);

    Personal {
        first_name,
        last_name,
        email,
        phone: find_phone(&full_text),
        city: find_city(lines),
        linkedin: find_linkedin(&full_text),
    }
}

pub(crate) fn find_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Permissive phone matcher: at least 7 digits with free separators, but
/// never a year range ("2019 - 2022" is a date, not a phone).
pub(crate) fn find_phone(text: &str) -> String {
    for m in PHONE_RE.find_iter(text) {
        let candidate = m.as_str();
        let digits = candidate.chars().filter(char::is_ascii_digit).count();
        if digits >= 7 && !YEAR_RE.is_match(candidate) {
            return candidate.trim().to_string();
        }
    }
    String::new()
}

pub(crate) fn find_linkedin(text: &str) -> String {
    if let Some(m) = LINKEDIN_RE.find(text) {
        return m.as_str().trim_end_matches(['.', ',', ';']).to_string();
    }
    for line in text.lines() {
        if let Some(caps) = LINKEDIN_LABEL_RE.captures(line.trim()) {
            return caps[1].to_string();
        }
    }
    String::new()
}

/// City detection, in priority order: emoji location marker, known-city
/// vocabulary, labeled line, then a short separator-joined line without
/// digits. Only the top of the document is scanned.
fn find_city(lines: &[String]) -> String {
    let head = &lines[..lines.len().min(CITY_SCAN_LINES)];

    for line in head {
        if let Some(rest) = line.split(['\u{1F4CD}', '\u{1F3E0}']).nth(1) {
            let city = rest.split([',', '|', '-']).next().unwrap_or("").trim();
            if !city.is_empty() {
                return city.to_string();
            }
        }
    }

    for line in head {
        let folded = fold(line);
        for city in KNOWN_CITIES {
            if contains_word(&folded, city) {
                return title_case_words(city);
            }
        }
    }

    for line in head {
        if let Some(caps) = CITY_LABEL_RE.captures(line) {
            let city = caps[1].split([',', '|']).next().unwrap_or("").trim();
            if !city.is_empty() {
                return city.to_string();
            }
        }
    }

    for line in head {
        if line.chars().count() <= 40
            && !line.chars().any(|c| c.is_ascii_digit())
            && line.contains([',', '|', '-'])
        {
            let candidate = line
                .split([',', '|', '-'])
                .map(str::trim)
                .filter(|seg| {
                    !seg.is_empty()
                        && !seg.contains('@')
                        && seg.split_whitespace().count() <= 3
                        && seg.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
                })
                .next_back();
            if let Some(city) = candidate {
                return city.to_string();
            }
        }
    }

    String::new()
}

/// Name heuristic: the first line when it looks like a bare name, else the
/// alphabetic runs of the email local-part.
fn find_name(lines: &[String], email: &str) -> (String, String) {
    if let Some(first_line) = lines.first() {
        let tokens: Vec<&str> = first_line.split_whitespace().collect();
        let tokens_ok = (2..=4).contains(&tokens.len())
            && tokens.iter().all(|t| {
                t.chars().all(|c| c.is_alphabetic() || c == '-' || c == '\'')
            });
        if tokens_ok
            && first_line.chars().count() <= NAME_MAX_CHARS
            && !first_line.contains('@')
            && !first_line.chars().any(|c| c.is_ascii_digit())
        {
            return (tokens[0].to_string(), tokens[1..].join(" "));
        }
    }

    let local = email.split('@').next().unwrap_or("");
    let runs: Vec<&str> = local
        .split(|c: char| !c.is_alphabetic())
        .filter(|r| !r.is_empty())
        .collect();
    match runs.len() {
        0 => (String::new(), String::new()),
        1 => (runs[0].to_string(), String::new()),
        _ => (runs[0].to_string(), runs[1..].join(" ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_email() {
        assert_eq!(find_email("contact: jane.doe@example.com svp"), "jane.doe@example.com");
        assert_eq!(find_email("nothing here"), "");
    }

    #[test]
    fn test_phone_french_mobile() {
        assert_eq!(find_phone("Tel 06 12 34 56 78"), "06 12 34 56 78");
        assert_eq!(find_phone("+33 6 12 34 56 78"), "+33 6 12 34 56 78");
    }

    #[test]
    fn test_phone_rejects_year_ranges() {
        assert_eq!(find_phone("Engineer | Acme | 2019 - 2022"), "");
        assert_eq!(find_phone("123456"), ""); // only 6 digits
    }

    #[test]
    fn test_linkedin_url() {
        assert_eq!(
            find_linkedin("see https://www.linkedin.com/in/jane-doe for more"),
            "https://www.linkedin.com/in/jane-doe"
        );
        assert_eq!(find_linkedin("linkedin.com/in/janedoe"), "linkedin.com/in/janedoe");
    }

    #[test]
    fn test_linkedin_labeled_line() {
        assert_eq!(find_linkedin("LinkedIn : jane-doe-123"), "jane-doe-123");
    }

    #[test]
    fn test_city_from_emoji_marker() {
        assert_eq!(find_city(&lines(&["📍 Lyon, France"])), "Lyon");
    }

    #[test]
    fn test_city_from_vocabulary() {
        assert_eq!(find_city(&lines(&["jane.doe@example.com | Paris"])), "Paris");
        assert_eq!(find_city(&lines(&["Based in new york since 2019"])), "New York");
    }

    #[test]
    fn test_city_from_label() {
        assert_eq!(find_city(&lines(&["Ville : Annecy"])), "Annecy");
    }

    #[test]
    fn test_city_from_short_joined_line() {
        assert_eq!(find_city(&lines(&["Jane Doe | Poitiers"])), "Poitiers");
    }

    #[test]
    fn test_city_only_in_first_fifteen_lines() {
        let mut all = vec!["line".to_string(); 15];
        all.push("Ville : Annecy".to_string());
        assert_eq!(find_city(&all), "");
    }

    #[test]
    fn test_name_from_first_line() {
        let (first, last) = find_name(&lines(&["Jane Doe", "whatever"]), "");
        assert_eq!(first, "Jane");
        assert_eq!(last, "Doe");
    }

    #[test]
    fn test_name_three_tokens() {
        let (first, last) = find_name(&lines(&["Jean-Pierre De Rossi"]), "");
        assert_eq!(first, "Jean-Pierre");
        assert_eq!(last, "De Rossi");
    }

    #[test]
    fn test_name_falls_back_to_email_local_part() {
        let (first, last) = find_name(
            &lines(&["CURRICULUM VITAE 2024"]),
            "jane.doe@example.com",
        );
        assert_eq!(first, "jane");
        assert_eq!(last, "doe");
    }

    #[test]
    fn test_name_empty_when_nothing_usable() {
        let (first, last) = find_name(&[], "");
        assert_eq!(first, "");
        assert_eq!(last, "");
    }

    #[test]
    fn test_extract_personal_composes() {
        let p = extract_personal(&lines(&[
            "Jane Doe",
            "jane.doe@example.com | 06 12 34 56 78 | Paris",
            "linkedin.com/in/janedoe",
        ]));
        assert_eq!(p.first_name, "Jane");
        assert_eq!(p.last_name, "Doe");
        assert_eq!(p.email, "jane.doe@example.com");
        assert_eq!(p.phone, "06 12 34 56 78");
        assert_eq!(p.city, "Paris");
        assert_eq!(p.linkedin, "linkedin.com/in/janedoe");
    }
}
