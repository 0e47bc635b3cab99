use serde::{Deserialize, Serialize};

/// Canonical candidate record assembled from one parsed resume.
///
/// Created once per document, immutable after creation, held only for the
/// duration of a request. Optional fields are `None` when nothing matched,
/// never an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Deduplicated by lower-cased key (first-seen casing kept), sorted
    /// case-insensitively.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Raw resume lines that matched an education keyword, in document order.
    #[serde(default)]
    pub education: Vec<String>,
    /// Raw resume lines that matched an experience keyword, in document order.
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub experience_years: u32,
    /// Deduplicated by lower-cased key, in document order.
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl CandidateRecord {
    /// Education lines joined with `" | "`, the form education matching
    /// runs against.
    pub fn education_text(&self) -> String {
        self.education.join(" | ")
    }

    pub fn experience_text(&self) -> String {
        self.experience.join(" | ")
    }
}

/// One entry in an ordered batch result: the document's identifier plus
/// either its parsed record or the error that stopped it. Serializes to the
/// `{"filename": ..., "parsed_data": ...}` / `{"filename": ..., "error": ...}`
/// shapes the upload collaborator returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub filename: String,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchOutcome {
    Parsed { parsed_data: CandidateRecord },
    Failed { error: String },
}

impl BatchEntry {
    pub fn parsed(filename: impl Into<String>, record: CandidateRecord) -> Self {
        BatchEntry {
            filename: filename.into(),
            outcome: BatchOutcome::Parsed {
                parsed_data: record,
            },
        }
    }

    pub fn failed(filename: impl Into<String>, error: impl Into<String>) -> Self {
        BatchEntry {
            filename: filename.into(),
            outcome: BatchOutcome::Failed {
                error: error.into(),
            },
        }
    }

    pub fn record(&self) -> Option<&CandidateRecord> {
        match &self.outcome {
            BatchOutcome::Parsed { parsed_data } => Some(parsed_data),
            BatchOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            BatchOutcome::Parsed { .. } => None,
            BatchOutcome::Failed { error } => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> CandidateRecord {
        CandidateRecord {
            name: Some("Jane Doe".to_string()),
            email: Some("jane.doe@example.com".to_string()),
            phone: None,
            skills: vec!["Python".to_string(), "SQL".to_string()],
            education: vec!["Bachelor of Science, MIT".to_string()],
            experience: vec!["3 years experience at Acme".to_string()],
            experience_years: 3,
            certifications: vec![],
        }
    }

    #[test]
    fn test_education_text_joins_with_pipe() {
        let mut record = sample_record();
        record.education.push("Master of Science".to_string());
        assert_eq!(
            record.education_text(),
            "Bachelor of Science, MIT | Master of Science"
        );
    }

    #[test]
    fn test_parsed_entry_serializes_with_parsed_data_key() {
        let entry = BatchEntry::parsed("resume.pdf", sample_record());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["filename"], "resume.pdf");
        assert_eq!(json["parsed_data"]["name"], "Jane Doe");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failed_entry_serializes_with_error_key() {
        let entry = BatchEntry::failed("broken.pdf", "failed to read document");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["filename"], "broken.pdf");
        assert_eq!(json["error"], "failed to read document");
        assert!(json.get("parsed_data").is_none());
    }

    #[test]
    fn test_record_accessor() {
        let ok = BatchEntry::parsed("a.pdf", sample_record());
        let bad = BatchEntry::failed("b.pdf", "boom");
        assert!(ok.record().is_some());
        assert!(ok.error().is_none());
        assert!(bad.record().is_none());
        assert_eq!(bad.error(), Some("boom"));
    }

    #[test]
    fn test_record_deserializes_with_missing_collections() {
        let json = r#"{"name": null, "email": "a@b.c", "phone": null}"#;
        let record: CandidateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.email.as_deref(), Some("a@b.c"));
        assert!(record.skills.is_empty());
        assert_eq!(record.experience_years, 0);
    }
}
