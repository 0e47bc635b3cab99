// Extraction pipeline: document text -> field extractors -> CandidateRecord.
// Each field extractor is independent and pure; the normalizer runs all of
// them once over the same text and assembles the record.

pub mod contact;
pub mod name;
pub mod sections;
pub mod skills;
pub mod text;

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::EngineError;
use crate::extraction::skills::SkillVocabulary;
use crate::models::candidate::{BatchEntry, CandidateRecord};

/// Assembles a [`CandidateRecord`] from already-extracted text. Pure
/// aggregation: each extractor runs once, no cross-field validation.
pub fn parse_resume_text(text: &str, vocabulary: &SkillVocabulary) -> CandidateRecord {
    let email = contact::extract_email(text);
    let phone = contact::extract_phone(text);
    let name = name::extract_name(text, email.as_deref(), phone.as_deref());
    let skills = vocabulary.match_against(text);
    let education = sections::extract_education(text);
    let experience = sections::extract_experience(text);
    let experience_years = sections::extract_experience_years(text);
    let certifications = dedup_case_insensitive(sections::extract_certifications(text));

    debug!(
        has_name = name.is_some(),
        skills = skills.len(),
        education_lines = education.len(),
        experience_lines = experience.len(),
        experience_years,
        certifications = certifications.len(),
        "assembled candidate record"
    );

    CandidateRecord {
        name,
        email,
        phone,
        skills,
        education,
        experience,
        experience_years,
        certifications,
    }
}

/// Parses a single resume document from disk.
pub fn parse_resume(
    path: impl AsRef<Path>,
    vocabulary: &SkillVocabulary,
) -> Result<CandidateRecord, EngineError> {
    let text = text::extract_text(path)?;
    Ok(parse_resume_text(&text, vocabulary))
}

/// Parses a single in-memory resume document.
pub fn parse_resume_bytes(
    bytes: &[u8],
    vocabulary: &SkillVocabulary,
) -> Result<CandidateRecord, EngineError> {
    let text = text::extract_text_from_bytes(bytes)?;
    Ok(parse_resume_text(&text, vocabulary))
}

/// Parses a batch of `(filename, bytes)` documents. Each document is
/// processed independently: a failure is captured in that document's entry
/// and never aborts siblings. Input order is preserved.
pub fn parse_resume_batch(
    documents: &[(String, Vec<u8>)],
    vocabulary: &SkillVocabulary,
) -> Vec<BatchEntry> {
    parse_resume_batch_with(documents, vocabulary, |bytes| {
        text::extract_text_from_bytes(bytes)
    })
}

// Text extraction is a seam here so batch error handling can be exercised
// without binary PDF fixtures.
fn parse_resume_batch_with<F>(
    documents: &[(String, Vec<u8>)],
    vocabulary: &SkillVocabulary,
    extract: F,
) -> Vec<BatchEntry>
where
    F: Fn(&[u8]) -> Result<String, EngineError>,
{
    documents
        .iter()
        .map(|(filename, bytes)| match extract(bytes) {
            Ok(text) => BatchEntry::parsed(filename, parse_resume_text(&text, vocabulary)),
            Err(err) => {
                warn!(filename = filename.as_str(), error = %err, "document failed to parse");
                BatchEntry::failed(filename, err.to_string())
            }
        })
        .collect()
}

/// Order-preserving dedup by lower-cased key.
pub(crate) fn dedup_case_insensitive(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "JANE DOE\n\
        Software Engineer\n\
        Contact: jane.doe@example.com | +1 415-555-0132\n\
        Bachelor of Science in Computer Science, MIT\n\
        Worked at Acme Corp for 3 years building data pipelines\n\
        Skills: Python, SQL, Machine Learning\n\
        AWS Certified Solutions Architect\n";

    fn vocabulary() -> SkillVocabulary {
        SkillVocabulary::from_phrases(["Python", "Java", "SQL", "Machine Learning"])
    }

    #[test]
    fn test_full_record_assembly() {
        let record = parse_resume_text(SAMPLE, &vocabulary());
        assert_eq!(record.name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.email.as_deref(), Some("jane.doe@example.com"));
        assert!(record.phone.is_some());
        assert_eq!(
            record.skills,
            vec![
                "Machine Learning".to_string(),
                "Python".to_string(),
                "SQL".to_string()
            ]
        );
        assert_eq!(record.education.len(), 1);
        assert_eq!(record.experience_years, 3);
        assert_eq!(
            record.certifications,
            vec!["AWS Certified Solutions Architect".to_string()]
        );
    }

    #[test]
    fn test_absent_fields_are_none_not_empty() {
        let record = parse_resume_text("nothing useful in this text", &vocabulary());
        assert_eq!(record.name, None);
        assert_eq!(record.email, None);
        assert!(record.skills.is_empty());
        assert!(record.education.is_empty());
        assert_eq!(record.experience_years, 0);
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let vocab = vocabulary();
        let first = parse_resume_text(SAMPLE, &vocab);
        let second = parse_resume_text(SAMPLE, &vocab);
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_certifications_deduped() {
        let text = "AWS Certified Solutions Architect\naws certified solutions architect\n";
        let record = parse_resume_text(text, &vocabulary());
        assert_eq!(record.certifications.len(), 1);
    }

    #[test]
    fn test_batch_preserves_order_and_captures_failures() {
        let documents = vec![
            ("first.pdf".to_string(), b"first".to_vec()),
            ("second.pdf".to_string(), b"fail".to_vec()),
            ("third.pdf".to_string(), b"third".to_vec()),
        ];
        let entries = parse_resume_batch_with(&documents, &vocabulary(), |bytes| {
            if bytes == b"fail" {
                Err(EngineError::DocumentRead("corrupt document".to_string()))
            } else {
                Ok(SAMPLE.to_string())
            }
        });

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].filename, "first.pdf");
        assert!(entries[0].record().is_some());
        assert_eq!(entries[1].filename, "second.pdf");
        assert!(entries[1].error().unwrap().contains("corrupt document"));
        assert_eq!(entries[2].filename, "third.pdf");
        assert!(entries[2].record().is_some());
    }

    #[test]
    fn test_batch_of_unreadable_bytes_reports_every_item() {
        let documents = vec![("junk.pdf".to_string(), b"not a pdf".to_vec())];
        let entries = parse_resume_batch(&documents, &vocabulary());
        assert_eq!(entries.len(), 1);
        assert!(entries[0].error().is_some());
    }

    #[test]
    fn test_dedup_case_insensitive_keeps_first() {
        let deduped = dedup_case_insensitive(vec![
            "Python".to_string(),
            "PYTHON".to_string(),
            "Java".to_string(),
        ]);
        assert_eq!(deduped, vec!["Python".to_string(), "Java".to_string()]);
    }
}
