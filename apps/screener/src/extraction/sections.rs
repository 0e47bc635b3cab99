//! Keyword-driven line extraction: education, experience, experience years,
//! certifications.

use once_cell::sync::Lazy;
use regex::Regex;

const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "b.sc",
    "m.sc",
    "phd",
    "university",
    "college",
    "high school",
];

const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "worked",
    "internship",
    "employed",
    "project",
];

// "5 years", "5+ years", "5 Year"
static EXPERIENCE_YEARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d+)\s*\+?\s*years?\b").unwrap());

// Capitalized phrases ending in Certificate/Certification/Certified,
// optionally followed by more capitalized words ("AWS Certified Solutions
// Architect", "Scrum Master Certification").
static CERTIFICATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:[A-Z][\w+#]*[ \t]+){0,5}(?:Certificate|Certification|Certified)\b(?:[ \t]+[A-Z][\w+#]*)*",
    )
    .unwrap()
});

/// Every trimmed line containing an education keyword, in document order.
pub fn extract_education(text: &str) -> Vec<String> {
    lines_matching(text, EDUCATION_KEYWORDS)
}

/// Every trimmed line containing an experience keyword, in document order.
pub fn extract_experience(text: &str) -> Vec<String> {
    lines_matching(text, EXPERIENCE_KEYWORDS)
}

fn lines_matching(text: &str, keywords: &[&str]) -> Vec<String> {
    text.lines()
        .filter(|line| {
            let lower = line.to_lowercase();
            keywords.iter().any(|kw| lower.contains(kw))
        })
        .map(|line| line.trim().to_string())
        .collect()
}

/// First integer preceding "year"/"years" (optional trailing "+"); 0 when
/// the text never states one.
pub fn extract_experience_years(text: &str) -> u32 {
    EXPERIENCE_YEARS
        .captures_iter(text)
        .find_map(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Certification phrases in document order; duplicates preserved (callers
/// deduplicate when building a record).
pub fn extract_certifications(text: &str) -> Vec<String> {
    CERTIFICATION
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .collect()
}
