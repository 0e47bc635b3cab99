//! Job description parser: free-text JD -> structured requirement record.
//!
//! Reuses the same pattern extractors as the resume side (shared skill
//! vocabulary, "N years" pattern, certification pattern) so both halves of
//! the pipeline speak the same surface forms.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extraction::skills::SkillVocabulary;
use crate::extraction::{dedup_case_insensitive, sections};

/// Structured representation of a job description's hiring criteria.
/// Created once per parse, immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementRecord {
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// All education levels whose patterns matched anywhere in the text
    /// (not just the highest), in bachelor/master/phd order.
    #[serde(default)]
    pub min_education: Vec<String>,
    #[serde(default)]
    pub min_experience_years: u32,
    #[serde(default)]
    pub required_certifications: Vec<String>,
}

// Several surface forms per level; a level is required if any form appears.
static EDUCATION_LEVELS: Lazy<Vec<(&'static str, Vec<Regex>)>> = Lazy::new(|| {
    vec![
        (
            "bachelor",
            compile(&[
                r"(?i)\bbachelor(?:'s|s)?\b",
                r"(?i)\bb\.?\s?(?:sc|tech)\b",
                r"(?i)\bundergraduate\s+degree\b",
            ]),
        ),
        (
            "master",
            compile(&[
                r"(?i)\bmaster(?:'s|s)?\b",
                r"(?i)\bm\.?\s?(?:sc|tech|ba)\b",
                r"(?i)\bpostgraduate\s+degree\b",
            ]),
        ),
        (
            "phd",
            compile(&[r"(?i)\bph\.?\s?d\.?\b", r"(?i)\bdoctor(?:ate|al)\b"]),
        ),
    ]
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

/// Parses a raw job description into a [`RequirementRecord`].
pub fn parse_job_description(text: &str, vocabulary: &SkillVocabulary) -> RequirementRecord {
    let required_skills = vocabulary.match_against(text);
    let min_education = matching_education_levels(text);
    let min_experience_years = sections::extract_experience_years(text);
    let required_certifications = dedup_case_insensitive(sections::extract_certifications(text));

    debug!(
        skills = required_skills.len(),
        education = ?min_education,
        min_experience_years,
        certifications = required_certifications.len(),
        "parsed job description"
    );

    RequirementRecord {
        required_skills,
        min_education,
        min_experience_years,
        required_certifications,
    }
}

fn matching_education_levels(text: &str) -> Vec<String> {
    EDUCATION_LEVELS
        .iter()
        .filter(|(_, patterns)| patterns.iter().any(|p| p.is_match(text)))
        .map(|(level, _)| level.to_string())
        .collect()
}
