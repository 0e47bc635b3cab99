//! Candidate name extraction.
//!
//! An ordered chain of independent heuristics over the document header,
//! tried in sequence with early exit on the first candidate that passes the
//! plausibility predicate. Higher-fidelity signals come first; the last two
//! stages fall back to whatever text precedes the detected email or phone.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// The header is the leading portion of the document where names live.
const HEADER_CHARS: usize = 1000;
/// Line-based stages only look this far down.
const HEADER_LINES: usize = 5;

/// Words that look like names but are document boilerplate.
const BOILERPLATE: &[&str] = &["resume", "curriculum vitae"];

// 2-3 all-uppercase tokens on one line, e.g. "JANE DOE".
static UPPER_SEQ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]{2,}(?:[ \t]+[A-Z]{2,}){1,2}").unwrap());

// 2-3 capitalized words on one line, e.g. "Jane Doe".
static TITLE_SEQ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){1,2}").unwrap());

// Stage 4 variant of TITLE_SEQ that may span line breaks.
static TITLE_SEQ_GLOBAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,2}").unwrap());

static TITLE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){1,2}$").unwrap());

static UPPER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2,}(?:[ \t]+[A-Z]{2,}){1,2}$").unwrap());

// A single name-shaped token for the generic run scan.
static NAME_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z'\-]+$").unwrap());

struct NameContext<'a> {
    text: &'a str,
    header: &'a str,
    email: Option<&'a str>,
    phone: Option<&'a str>,
}

type NameStage = fn(&NameContext) -> Option<String>;

const STAGES: &[(&str, NameStage)] = &[
    ("entity", recognize_person_entity),
    ("title_line", title_cased_line),
    ("upper_line", upper_cased_line),
    ("global", global_title_sequence),
    ("before_email", before_email),
    ("before_phone", before_phone),
];

/// Extracts the candidate's name from resume text.
///
/// `email` and `phone` are the already-detected contact fields; they feed
/// the last two fallback stages.
pub fn extract_name(text: &str, email: Option<&str>, phone: Option<&str>) -> Option<String> {
    let ctx = NameContext {
        text,
        header: header_of(text),
        email,
        phone,
    };
    for (stage, extract) in STAGES {
        if let Some(name) = extract(&ctx) {
            debug!(stage, name = name.as_str(), "name heuristic matched");
            return Some(name);
        }
    }
    None
}

/// First ~1000 characters, cut on a char boundary.
fn header_of(text: &str) -> &str {
    match text.char_indices().nth(HEADER_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// 1-3 whitespace tokens and not a boilerplate word.
fn is_plausible(candidate: &str) -> bool {
    let tokens = candidate.split_whitespace().count();
    if !(1..=3).contains(&tokens) {
        return false;
    }
    let lower = candidate.trim().to_lowercase();
    !BOILERPLATE.contains(&lower.as_str())
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stage 1: person-entity recognizer. Heuristic pattern rules (uppercase
/// sequences, then capitalized sequences) run ahead of a generic scan for
/// runs of name-shaped tokens.
fn recognize_person_entity(ctx: &NameContext) -> Option<String> {
    for m in UPPER_SEQ.find_iter(ctx.header) {
        let candidate = title_case(m.as_str());
        if is_plausible(&candidate) {
            return Some(candidate);
        }
    }
    for m in TITLE_SEQ.find_iter(ctx.header) {
        if is_plausible(m.as_str()) {
            return Some(m.as_str().to_string());
        }
    }
    for line in ctx.header.lines() {
        let mut run: Vec<&str> = Vec::new();
        for raw in line.split_whitespace() {
            let token = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
            if NAME_TOKEN.is_match(token) {
                run.push(token);
            } else if let Some(name) = flush_run(&mut run) {
                return Some(name);
            }
        }
        if let Some(name) = flush_run(&mut run) {
            return Some(name);
        }
    }
    None
}

fn flush_run(run: &mut Vec<&str>) -> Option<String> {
    let candidate = if (2..=3).contains(&run.len()) {
        Some(run.join(" "))
    } else {
        None
    };
    run.clear();
    candidate.filter(|c| is_plausible(c))
}

/// Stage 2: a line of 2-3 capitalized words within the first 5 lines.
fn title_cased_line(ctx: &NameContext) -> Option<String> {
    ctx.text
        .lines()
        .take(HEADER_LINES)
        .map(str::trim)
        .find(|line| TITLE_LINE.is_match(line) && is_plausible(line))
        .map(str::to_string)
}

/// Stage 3: a line of 2-3 all-uppercase tokens within the first 5 lines,
/// title-cased on return.
fn upper_cased_line(ctx: &NameContext) -> Option<String> {
    ctx.text
        .lines()
        .take(HEADER_LINES)
        .map(str::trim)
        .filter(|line| UPPER_LINE.is_match(line))
        .map(title_case)
        .find(|candidate| is_plausible(candidate))
}

/// Stage 4: any 2-3 capitalized word sequence anywhere in the header, line
/// breaks allowed.
fn global_title_sequence(ctx: &NameContext) -> Option<String> {
    TITLE_SEQ_GLOBAL
        .find_iter(ctx.header)
        .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
        .find(|candidate| is_plausible(candidate))
}

/// Stage 5: the text immediately preceding the detected email address.
fn before_email(ctx: &NameContext) -> Option<String> {
    preceding_line(ctx.text, ctx.email?)
}

/// Stage 6: the text immediately preceding the detected phone number.
fn before_phone(ctx: &NameContext) -> Option<String> {
    preceding_line(ctx.text, ctx.phone?)
}

fn preceding_line(text: &str, needle: &str) -> Option<String> {
    let idx = text.find(needle)?;
    let prefix = text[..idx]
        .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '-' | '|' | ','));
    let candidate = prefix.lines().last()?.trim();
    (!candidate.is_empty() && is_plausible(candidate)).then(|| candidate.to_string())
}
