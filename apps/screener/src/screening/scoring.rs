//! Weighted candidate/requirement scoring.
//!
//! Pure functions from `(candidate, requirement, weights)` to a score in
//! `[0, 100]`. Every category contributes `match_ratio * weight` to the
//! numerator and its full weight to the denominator, including categories
//! with an empty requirement (scored as 0% met, not excluded) — that is a
//! deliberate, tested policy choice.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::candidate::CandidateRecord;
use crate::screening::jd_parser::RequirementRecord;
use crate::screening::round2;

/// Per-category weights. Rescaled so the four values sum to 100 before
/// scoring; an all-zero (or negative) configuration falls back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_education_weight")]
    pub education: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_certifications_weight")]
    pub certifications: f64,
}

fn default_skills_weight() -> f64 {
    50.0
}
fn default_education_weight() -> f64 {
    20.0
}
fn default_experience_weight() -> f64 {
    20.0
}
fn default_certifications_weight() -> f64 {
    10.0
}

impl Default for WeightConfig {
    fn default() -> Self {
        WeightConfig {
            skills: default_skills_weight(),
            education: default_education_weight(),
            experience: default_experience_weight(),
            certifications: default_certifications_weight(),
        }
    }
}

impl WeightConfig {
    pub fn sum(&self) -> f64 {
        self.skills + self.education + self.experience + self.certifications
    }

    /// Rescales the weights proportionally so they sum to 100. Negative
    /// weights are clamped to zero first; a zero total is invalid and
    /// falls back to the defaults.
    pub fn normalized(&self) -> WeightConfig {
        let clamped = WeightConfig {
            skills: self.skills.max(0.0),
            education: self.education.max(0.0),
            experience: self.experience.max(0.0),
            certifications: self.certifications.max(0.0),
        };
        let total = clamped.sum();
        if total <= 0.0 {
            debug!("degenerate weight config, using defaults");
            return WeightConfig::default();
        }
        let scale = 100.0 / total;
        WeightConfig {
            skills: clamped.skills * scale,
            education: clamped.education * scale,
            experience: clamped.experience * scale,
            certifications: clamped.certifications * scale,
        }
    }
}

/// A single candidate's score against one requirement record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub filename: String,
    /// In `[0, 100]`, rounded to 2 decimals.
    pub score: f64,
}

/// Scores a candidate against a requirement record. `None` weights means
/// the default `{skills: 50, education: 20, experience: 20,
/// certifications: 10}` configuration. Deterministic for identical inputs.
pub fn score_candidate(
    candidate: &CandidateRecord,
    requirement: &RequirementRecord,
    weights: Option<WeightConfig>,
) -> f64 {
    let weights = weights.unwrap_or_default().normalized();

    let mut numerator = 0.0;
    let mut denominator = 0.0;

    let skills_ratio = overlap_ratio(&candidate.skills, &requirement.required_skills);
    debug!(ratio = skills_ratio, weight = weights.skills, "skills");
    numerator += skills_ratio * weights.skills;
    denominator += weights.skills;

    let education_ratio = education_ratio(candidate, requirement);
    debug!(ratio = education_ratio, weight = weights.education, "education");
    numerator += education_ratio * weights.education;
    denominator += weights.education;

    let experience_ratio = experience_ratio(
        candidate.experience_years,
        requirement.min_experience_years,
    );
    debug!(ratio = experience_ratio, weight = weights.experience, "experience");
    numerator += experience_ratio * weights.experience;
    denominator += weights.experience;

    let certifications_ratio = overlap_ratio(
        &candidate.certifications,
        &requirement.required_certifications,
    );
    debug!(
        ratio = certifications_ratio,
        weight = weights.certifications,
        "certifications"
    );
    numerator += certifications_ratio * weights.certifications;
    denominator += weights.certifications;

    if denominator == 0.0 {
        return 0.0;
    }
    round2((numerator / denominator) * 100.0)
}

/// Scores an ordered batch of parsed candidates; output order matches input.
pub fn score_batch(
    candidates: &[(String, CandidateRecord)],
    requirement: &RequirementRecord,
    weights: Option<WeightConfig>,
) -> Vec<ScoreResult> {
    candidates
        .iter()
        .map(|(filename, record)| ScoreResult {
            filename: filename.clone(),
            score: score_candidate(record, requirement, weights),
        })
        .collect()
}

/// Fraction of the required set present in the candidate set, compared by
/// lower-cased key. Empty requirement -> 0 (the category weight is still
/// counted by the caller).
fn overlap_ratio(candidate: &[String], required: &[String]) -> f64 {
    let required_set: HashSet<String> = required.iter().map(|s| s.to_lowercase()).collect();
    if required_set.is_empty() {
        return 0.0;
    }
    let candidate_set: HashSet<String> = candidate.iter().map(|s| s.to_lowercase()).collect();
    let matched = required_set.intersection(&candidate_set).count();
    matched as f64 / required_set.len() as f64
}

/// 1 if any required education level appears as a substring of the
/// candidate's joined education text, else 0. Full weight or nothing,
/// never partial.
fn education_ratio(candidate: &CandidateRecord, requirement: &RequirementRecord) -> f64 {
    let education = candidate.education_text().to_lowercase();
    let matched = requirement
        .min_education
        .iter()
        .any(|level| education.contains(&level.to_lowercase()));
    if matched {
        1.0
    } else {
        0.0
    }
}

/// Full credit at or above the requirement, linear partial credit below
/// it. A zero-year requirement earns nothing (the weight still counts).
fn experience_ratio(candidate_years: u32, min_years: u32) -> f64 {
    if min_years == 0 {
        0.0
    } else if candidate_years >= min_years {
        1.0
    } else {
        f64::from(candidate_years) / f64::from(min_years)
    }
}
