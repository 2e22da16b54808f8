use std::sync::LazyLock;

use regex::Regex;

/// CAP summaries separate clauses with a literal three-dot ellipsis.
const SEGMENT_SEPARATOR: &str = "...";

/// Ordered hazard patterns applied to each summary segment. Each pattern
/// matches a keyword, optionally preceded by a connector ("and" plus
/// whitespace, a comma, or a period) and a free-text clause captured
/// separately from the keyword.
static HAZARD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![Regex::new(r"(?:(?:and\s+|,|\.)(?P<clause>[a-zA-Z0-9 ]+))?(?P<keyword>(?i:hail))")
        .unwrap()]
});

/// One pattern hit inside a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatch {
    pub keyword: String,
    pub clause: Option<String>,
}

impl PhraseMatch {
    /// The reported phrase: optional clause, then keyword, trimmed.
    pub fn phrase(&self) -> String {
        let clause = self.clause.as_deref().unwrap_or("");
        format!("{clause}{}", self.keyword).trim().to_string()
    }
}

/// Scans alert summaries for hazard keyword phrases.
pub struct TermExtractor;

impl TermExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract hazard phrases from a summary, preserving segment and
    /// pattern order. At most one phrase per segment per pattern. An
    /// empty result means nothing matched; it is not an error.
    pub fn extract(&self, summary: &str) -> Vec<String> {
        let mut terms = Vec::new();
        for segment in summary.split(SEGMENT_SEPARATOR) {
            for pattern in HAZARD_PATTERNS.iter() {
                if let Some(found) = match_segment(pattern, segment) {
                    terms.push(found.phrase());
                }
            }
        }
        terms
    }
}

impl Default for TermExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn match_segment(pattern: &Regex, segment: &str) -> Option<PhraseMatch> {
    let caps = pattern.captures(segment)?;
    Some(PhraseMatch {
        keyword: caps.name("keyword")?.as_str().to_string(),
        clause: caps.name("clause").map(|m| m.as_str().to_string()),
    })
}
