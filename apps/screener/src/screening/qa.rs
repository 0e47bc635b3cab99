//! Keyword-routed question answering over a parsed candidate record.
//!
//! The question is matched against a fixed list of topic keywords in a
//! fixed priority order; the first hit wins. No NLP, no fuzzy matching.

use tracing::debug;

use crate::models::candidate::CandidateRecord;

/// Answers a free-text question about a candidate. Always returns an
/// answer string; unrecognized questions get a fallback reply.
pub fn answer_question(record: &CandidateRecord, question: &str) -> String {
    let question = question.to_lowercase();
    debug!(question = question.as_str(), "answering candidate question");

    if question.contains("skill") {
        if record.skills.is_empty() {
            "No specific skills found in the resume.".to_string()
        } else {
            format!("The candidate has skills in {}.", record.skills.join(", "))
        }
    } else if question.contains("email") {
        match &record.email {
            Some(email) => format!("Email: {email}"),
            None => "Not available.".to_string(),
        }
    } else if question.contains("phone") {
        match &record.phone {
            Some(phone) => format!("Phone: {phone}"),
            None => "Not available.".to_string(),
        }
    } else if question.contains("name") {
        match &record.name {
            Some(name) => format!("Candidate name: {name}"),
            None => "Not available.".to_string(),
        }
    } else if question.contains("education") {
        if record.education.is_empty() {
            "No education details found.".to_string()
        } else {
            format!("Education details: {}", record.education_text())
        }
    } else if question.contains("experience") {
        if record.experience.is_empty() {
            "No experience details found.".to_string()
        } else {
            format!("Experience details: {}", record.experience_text())
        }
    } else if question.contains("javascript") {
        let knows = record
            .skills
            .iter()
            .any(|s| s.eq_ignore_ascii_case("javascript"));
        if knows {
            "Yes, the candidate knows JavaScript.".to_string()
        } else {
            "No, JavaScript was not found among the candidate's skills.".to_string()
        }
    } else {
        "Sorry, I couldn't find the information you requested.".to_string()
    }
}
