// src/parser/resume.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// --- Constants ---
const MAX_NAME_LEN: usize = 60;
const MAX_NAME_WORDS: usize = 5;
const MAX_HEADLINE_LEN: usize = 80;
const MAX_SENTENCE_LEN: usize = 300;
const MAX_SKILLS: usize = 15;
const MAX_SUMMARY_SENTENCES: usize = 4;

/// The code-hosting domain we recognize profile links for.
const PROFILE_HOST: &str = "github.com";

/// Action/impact vocabulary used to score summary sentences. Substring
/// containment, not word-boundary matching: "engineered" scores via "engineer".
const SUMMARY_KEYWORDS: &[&str] = &[
    "experience",
    "developed",
    "engineer",
    "project",
    "designed",
    "built",
    "led",
    "collaborated",
    "improved",
    "delivered",
    "managed",
    "optimized",
    "implemented",
    "created",
    "modernized",
    "launched",
];

// --- Regex Patterns (Lazy Static) ---
static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n{3,}").expect("Failed to compile BLANK_RUN_RE")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}")
        .expect("Failed to compile EMAIL_RE")
});

// Optional +CC (1-3 digits), optional parenthesized or bare area code, then a
// 3-digit and a 4-digit group with space/hyphen separators.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+\d{1,3}[\s\-]?)?(?:\(\d{3}\)|\d{3})?[\s\-]?\d{3}[\s\-]?\d{4}")
        .expect("Failed to compile PHONE_RE")
});

static PROFILE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)https?://(?:www\.)?github\.com/[^\s)]+")
        .expect("Failed to compile PROFILE_RE")
});

// One pass over the whole body: a recognized section label with an optional
// colon, then a non-greedy capture up to the first blank line, the first
// stop-section keyword, or the end of text. The stop keywords intentionally
// match mid-line; see the skills tests for the resulting boundary behavior.
static SKILLS_SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)\b(?:technical\s+skills|skills|toolbox|technologies)\s*:?\s*(.*?)(?:\n[ \t]*\n|\bexperience\b|\bprojects\b|\beducation\b|\z)",
    )
    .expect("Failed to compile SKILLS_SECTION_RE")
});

static SKILL_SPLIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[,\n•\-\*]").expect("Failed to compile SKILL_SPLIT_RE")
});

// A sentence boundary is terminal punctuation immediately followed by
// whitespace; the punctuation stays with the sentence it ends.
static SENTENCE_BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?]\s+").expect("Failed to compile SENTENCE_BOUNDARY_RE")
});

static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Failed to compile WHITESPACE_RUN_RE")
});

// --- Data Structures ---

/// Everything the heuristic engine derives from one resume text.
/// A plain value: produced fresh per call, never stored or mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: Option<String>,
    pub headline: Option<String>,
    pub profile_url: Option<String>,
    pub profile_username: Option<String>,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub skills: Vec<String>,
    pub summary: Vec<String>,
    /// Normalized full text, retained for downstream display.
    pub raw_text: String,
}

/// Parses raw resume text into a [`ParsedResume`].
///
/// Total over any string input, including the empty string: missing
/// information comes back as `None`/empty, never as an error. The pipeline is
/// fixed: normalize, derive name and headline from the header lines, pattern
/// match contacts and the profile link, locate a labeled skills section, then
/// score and rank sentences for the summary.
pub fn parse_resume_text(text: &str) -> ParsedResume {
    let normalized = normalize_text(text);
    let lines: Vec<&str> = normalized.split('\n').collect();

    let name = extract_name(&lines);
    let headline = name
        .as_deref()
        .and_then(|name| extract_headline(&lines, name));

    let emails = extract_emails(&normalized);
    let phones = extract_phones(&normalized);
    let (profile_url, profile_username) = extract_profile_link(&normalized);

    let skills = extract_skills(&normalized);
    let summary = synthesize_summary(&normalized);

    ParsedResume {
        name,
        headline,
        profile_url,
        profile_username,
        emails,
        phones,
        skills,
        summary,
        raw_text: normalized,
    }
}

// --- Stage 1: Text Normalizer ---

/// Canonicalizes line endings to LF, collapses runs of 3+ newlines to exactly
/// two, and trims the ends. Idempotent.
pub fn normalize_text(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
    let collapsed = BLANK_RUN_RE.replace_all(&unified, "\n\n");
    collapsed.trim().to_string()
}

// --- Stage 2: Identity Extractor ---

// Resume headers conventionally open with the candidate's name as a short,
// undecorated line: no digits, few words, nothing like "Curriculum Vitae".
fn extract_name(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .map(|line| line.trim())
        .find(|line| {
            !line.is_empty()
                && line.chars().count() <= MAX_NAME_LEN
                && !line.chars().any(|c| c.is_ascii_digit())
                && !line.to_lowercase().contains("curriculum vitae")
                && line.split_whitespace().count() <= MAX_NAME_WORDS
        })
        .map(|line| line.to_string())
}

// Models the "Name\nTitle" header pattern: the headline is the line directly
// below the first line that equals the name.
fn extract_headline(lines: &[&str], name: &str) -> Option<String> {
    let lowered_name = name.to_lowercase();
    let name_idx = lines
        .iter()
        .position(|line| line.trim().to_lowercase() == lowered_name)?;
    let next = lines.get(name_idx + 1)?.trim();
    if next.chars().count() <= MAX_HEADLINE_LEN {
        Some(next.to_string())
    } else {
        None
    }
}

// --- Stage 3: Contact Extractor ---

fn extract_emails(text: &str) -> Vec<String> {
    let mut emails: Vec<String> = Vec::new();
    for m in EMAIL_RE.find_iter(text) {
        let lowered = m.as_str().to_lowercase();
        if !emails.contains(&lowered) {
            emails.push(lowered);
        }
    }
    emails
}

fn extract_phones(text: &str) -> Vec<String> {
    let mut phones: Vec<String> = Vec::new();
    for m in PHONE_RE.find_iter(text) {
        let normalized = WHITESPACE_RUN_RE
            .replace_all(m.as_str().trim(), " ")
            .to_string();
        // Anything under 10 digits is likely a date range or a bare local
        // number, not a reachable phone number.
        let digit_count = normalized.chars().filter(|c| c.is_ascii_digit()).count();
        if digit_count >= 10 && !phones.contains(&normalized) {
            phones.push(normalized);
        }
    }
    phones
}

/// Finds the first hosting-platform link and derives a username from its first
/// path segment. With a username in hand the URL is rebuilt canonically;
/// otherwise the raw (punctuation-stripped) match is kept verbatim.
fn extract_profile_link(text: &str) -> (Option<String>, Option<String>) {
    let raw_match = match PROFILE_RE.find(text) {
        Some(m) => m.as_str(),
        None => return (None, None),
    };
    let stripped = raw_match
        .trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ')') || c.is_whitespace());

    let username = stripped
        .to_lowercase()
        .find(PROFILE_HOST)
        .map(|host_idx| host_idx + PROFILE_HOST.len())
        .and_then(|path_idx| {
            let path = stripped[path_idx..].trim_start_matches('/');
            let segment: String = path
                .chars()
                .take_while(|c| *c != '/' && !c.is_whitespace())
                .collect();
            if segment.is_empty() {
                None
            } else {
                Some(segment)
            }
        });

    match username {
        Some(username) => {
            let url = format!("https://{}/{}", PROFILE_HOST, username);
            (Some(url), Some(username))
        }
        None => (Some(stripped.to_string()), None),
    }
}

// --- Stage 4: Skills Extractor ---

fn extract_skills(text: &str) -> Vec<String> {
    let captured = match SKILLS_SECTION_RE.captures(text) {
        Some(caps) => caps.get(1).map(|m| m.as_str()).unwrap_or(""),
        None => return Vec::new(),
    };

    // Duplicates from the source are preserved deliberately; only trivial
    // one-character fragments (stray bullet remnants) are dropped.
    SKILL_SPLIT_RE
        .split(captured)
        .map(|token| token.trim())
        .filter(|token| token.chars().count() > 1)
        .take(MAX_SKILLS)
        .map(|token| token.to_string())
        .collect()
}

// --- Stage 5: Summary Synthesizer ---

/// Splits body text into sentences, scores each by a keyword/length/number
/// heuristic, and keeps the top few as the candidate's "highlights".
fn synthesize_summary(text: &str) -> Vec<String> {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(String, u32)> = sentences
        .into_iter()
        .map(|sentence| {
            let score = score_sentence(&sentence);
            (sentence, score)
        })
        .collect();

    // Stable sort: ties keep their tokenization order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(MAX_SUMMARY_SENTENCES)
        .map(|(sentence, _)| sentence)
        .collect()
}

fn split_sentences(text: &str) -> Vec<String> {
    let flat = text.replace('\n', " ");

    let mut sentences: Vec<String> = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY_RE.find_iter(&flat) {
        // The terminal punctuation is a single ASCII byte; keep it with the
        // sentence it closes.
        let end = boundary.start() + 1;
        push_sentence(&mut sentences, &flat[start..end]);
        start = boundary.end();
    }
    push_sentence(&mut sentences, &flat[start..]);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    // Over-long "sentences" are usually tables or run-on blocks with no real
    // sentence breaks; they make useless highlights.
    if trimmed.is_empty() || trimmed.chars().count() > MAX_SENTENCE_LEN {
        return;
    }
    if sentences.iter().any(|s| s == trimmed) {
        return;
    }
    sentences.push(trimmed.to_string());
}

fn score_sentence(sentence: &str) -> u32 {
    let lowered = sentence.to_lowercase();
    let mut score: u32 = 0;

    for keyword in SUMMARY_KEYWORDS {
        score += 2 * lowered.matches(keyword).count() as u32;
    }

    // Length bonus rewards substantive sentences but caps out quickly.
    score += (sentence.chars().count() as u32 / 10).min(10);

    if sentence.contains(&['•', '-', '–'][..]) {
        score += 1;
    }
    if sentence.contains('%') || sentence.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }

    score
}
