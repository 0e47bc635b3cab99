//! Email and phone extraction.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.\-]+@[\w.\-]+").unwrap());

// Deliberately loose: 7-15 digits with optional separators and country/area
// grouping. Over-matches years and ID sequences; that precision/recall
// trade-off is part of the contract.
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\+?\d{1,4}[\s\-]?)?(\(?\d{3}\)?[\s\-]?)?[\d\s\-]{7,15}\b").unwrap()
});

/// First `local@domain` token in the text, if any.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// First loose phone-shaped substring in the text, if any.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_extracted_from_contact_line() {
        assert_eq!(
            extract_email("Contact: jane.doe@example.com"),
            Some("jane.doe@example.com".to_string())
        );
    }

    #[test]
    fn test_first_email_wins() {
        let text = "a@one.com later b@two.com";
        assert_eq!(extract_email(text), Some("a@one.com".to_string()));
    }

    #[test]
    fn test_no_email_returns_none() {
        assert_eq!(extract_email("no contact details here"), None);
    }

    #[test]
    fn test_phone_with_separators() {
        let phone = extract_phone("Phone: +1 415-555-0132").unwrap();
        assert!(phone.contains("415"));
    }

    #[test]
    fn test_phone_plain_digits() {
        assert!(extract_phone("call 5550132987").is_some());
    }

    #[test]
    fn test_no_phone_returns_none() {
        assert_eq!(extract_phone("email only"), None);
    }

    #[test]
    fn test_phone_is_permissive_about_plain_numbers() {
        // Known trade-off: long numeric sequences match even when they are
        // not phone numbers.
        assert!(extract_phone("employee id 123456789").is_some());
    }
}
