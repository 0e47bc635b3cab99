//! Skill vocabulary and phrase matching.
//!
//! The vocabulary is loaded once at process start and injected by reference
//! into extraction and job-description parsing; it is never mutated.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::errors::EngineError;

/// Immutable list of skill phrases, deduplicated by lower-cased key with
/// the first-seen casing kept for display.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    // (lower-cased key, display casing)
    entries: Vec<(String, String)>,
}

impl SkillVocabulary {
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for phrase in phrases {
            let display = phrase.into().trim().to_string();
            if display.is_empty() {
                continue;
            }
            let key = display.to_lowercase();
            if seen.insert(key.clone()) {
                entries.push((key, display));
            }
        }
        SkillVocabulary { entries }
    }

    /// Loads the vocabulary from a CSV resource. The first column whose
    /// header contains "skill" (case-insensitive) is used, else column 0;
    /// blank cells are skipped.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        let headers = reader.headers()?.clone();
        let column = headers
            .iter()
            .position(|h| h.to_lowercase().contains("skill"))
            .unwrap_or(0);

        let mut phrases = Vec::new();
        for record in reader.records() {
            let record = record?;
            if let Some(field) = record.get(column) {
                phrases.push(field.to_string());
            }
        }

        let vocabulary = Self::from_phrases(phrases);
        info!(
            path = %path.as_ref().display(),
            skills = vocabulary.len(),
            "loaded skill vocabulary"
        );
        Ok(vocabulary)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, display)| display.as_str())
    }

    /// Case-insensitive phrase match of the vocabulary against `text`.
    /// Returns display casings, sorted case-insensitively.
    pub fn match_against(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let mut found: Vec<String> = self
            .entries
            .iter()
            .filter(|(key, _)| lower.contains(key.as_str()))
            .map(|(_, display)| display.clone())
            .collect();
        found.sort_by_key(|s| s.to_lowercase());
        found
    }
}
