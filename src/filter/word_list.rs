use std::collections::HashSet;

/// Predicate deciding whether a chat message may be relayed
pub trait ContentFilter: Send + Sync {
    fn is_profane(&self, text: &str) -> bool;
}

const DEFAULT_BLOCKED_WORDS: &[&str] = &[
    "arse", "ass", "asshole", "bastard", "bitch", "bollocks", "bullshit", "crap", "cunt", "damn",
    "dick", "dickhead", "fuck", "fucker", "fucking", "motherfucker", "piss", "prick", "shit",
    "shitty", "slut", "twat", "wanker", "whore",
];

/// Whole-word, case-insensitive block list
#[derive(Debug, Clone)]
pub struct WordListFilter {
    words: HashSet<String>,
}

impl Default for WordListFilter {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCKED_WORDS.iter().copied())
    }
}

impl WordListFilter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Default list extended with extra words
    pub fn with_extra_words<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::default();
        filter.words.extend(
            extra
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        filter
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl ContentFilter for WordListFilter {
    fn is_profane(&self, text: &str) -> bool {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .any(|word| self.words.contains(&word.to_lowercase()))
    }
}
