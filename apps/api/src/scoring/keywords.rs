//! Keyword Extractor: derives the ATS keyword and phrase inventory from a job description.
//!
//! Pure text scan, no NLP: single words come from `\b[a-z]{3,}\b`, phrases from
//! greedy 2–3 word windows. Both are kept only when they recur in the JD.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]{3,}\b").expect("word pattern is valid"));

/// Greedy run of two or three words. Trailing whitespace stays part of the match,
/// and scanning resumes where the previous window ended.
static PHRASE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:\w+\b\s*){2,3}").expect("phrase pattern is valid"));

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "and", "for", "with", "this", "that", "have", "has", "had", "you", "your", "will",
        "would", "should", "they", "their", "them",
    ]
    .into_iter()
    .collect()
});

/// A retained keyword or phrase with its occurrence count in the JD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub frequency: u32,
}

/// Keywords and phrases extracted from one job description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    pub keywords: Vec<TermCount>,
    pub phrases: Vec<TermCount>,
}

impl KeywordSet {
    /// Keywords first, then phrases, each in first-occurrence order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.keywords
            .iter()
            .chain(self.phrases.iter())
            .map(|t| t.term.as_str())
    }

    pub fn len(&self) -> usize {
        self.keywords.len() + self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extracts recurring keywords and phrases from a job description.
pub fn extract_keywords(job_description: &str) -> KeywordSet {
    let text = job_description.to_lowercase();

    let keywords = count_in_order(WORD_PATTERN.find_iter(&text).map(|m| m.as_str()))
        .into_iter()
        .filter(|t| t.term.len() > 2 && t.frequency > 1 && !STOP_WORDS.contains(t.term.as_str()))
        .collect();

    let phrases = count_in_order(PHRASE_PATTERN.find_iter(&text).map(|m| m.as_str()))
        .into_iter()
        .filter(|t| t.frequency > 1 && t.term.split_whitespace().count() > 1)
        .collect();

    KeywordSet { keywords, phrases }
}

/// Frequency count that remembers the order in which terms were first seen.
fn count_in_order<'a>(terms: impl Iterator<Item = &'a str>) -> Vec<TermCount> {
    let mut counts: Vec<TermCount> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for term in terms {
        match index.get(term) {
            Some(&i) => counts[i].frequency += 1,
            None => {
                index.insert(term, counts.len());
                counts.push(TermCount {
                    term: term.to_string(),
                    frequency: 1,
                });
            }
        }
    }

    counts
}
