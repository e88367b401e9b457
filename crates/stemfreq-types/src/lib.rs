//! Shared types for building stem frequency tables.
//!
//! The pieces here are deliberately free of any tokenizer or stemmer: the
//! fixed [`STOPWORDS`] list and its [`StopwordSet`], the boundary cleanup
//! applied to every token ([`trim_token`]), and the row shape written to the
//! report ([`FrequencyRow`], ordered by [`RowOrder`]).
//!
//! ```rust
//! use stemfreq_types::{StopwordSet, trim_token};
//!
//! let stopwords = StopwordSet::default();
//! assert!(stopwords.contains("THE"));
//! assert!(!stopwords.contains("ABOUT"));
//! assert_eq!(trim_token("'tis-"), "tis");
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// Uppercased stems (and punctuation tokens) that never reach the report.
///
/// The empty string is included so tokens that trim away to nothing are
/// discarded like any other stopword.
pub const STOPWORDS: &[&str] = &[
    "A", "ALL", "AM", "AN", "AND", "ARE", "AS", "AT", "BE", "BEEN", "BOTH", "BUT", "BY", "CAN",
    "COULD", "CUZ", "DID", "DO", "DOES", "DOWN", "EACH", "FOR", "FROM", "HAD", "HAS", "HAVE",
    "HE", "HER", "HERE", "HIS", "I", "IF", "IN", "IS", "IT", "ITS", "LIKE", "MAY", "ME", "MIGHT",
    "MUST", "MY", "NO", "NOR", "NOT", "OF", "ON", "ONE", "OR", "OUR", "OUT", "ROUND", "SHALL",
    "SHE", "SHOULD", "SINCE", "SO", "SOME", "SUCH", "THAN", "THAT", "THE", "THEIR", "THEM",
    "THESE", "THEY", "THIS", "THOSE", "THROUGH", "TILL", "TO", "TOO", "UP", "US", "WAS", "WE",
    "WERE", "WHAT", "WHEN", "WHO", "WHOM", "WHOSE", "WHY", "WILL", "WITH", "WOULD", "YEAH",
    "YOU", "YOUR", "?", "!", ".", ",", "-", "\"", "'", ":", "", "(", ")", "&", "``", "[", "]",
];

/// Immutable membership set over uppercased stems.
#[derive(Clone, Debug)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a set from arbitrary words; entries are uppercased on the way in.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_uppercase())
                .collect(),
        }
    }

    /// Membership test against an already uppercased stem.
    pub fn contains(&self, stem: &str) -> bool {
        self.words.contains(stem)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::from_words(STOPWORDS.iter().copied())
    }
}

/// Strip leading and trailing apostrophes and hyphens; interior ones stay.
pub fn trim_token(token: &str) -> &str {
    token.trim_matches(|c| c == '\'' || c == '-')
}

/// One line of the report: the winning surface form and its stem's total.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct FrequencyRow {
    pub word: String,
    pub count: usize,
}

impl FrequencyRow {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Order in which report rows are emitted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum RowOrder {
    /// Stems in the order they were first counted.
    #[default]
    FirstSeen,
    /// Highest count first; equal counts by word.
    Count,
    /// Lexicographic by word.
    Word,
}

impl RowOrder {
    /// Parse `first-seen`, `count` or `word` (case-insensitive).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "first-seen" => Some(RowOrder::FirstSeen),
            "count" => Some(RowOrder::Count),
            "word" => Some(RowOrder::Word),
            _ => None,
        }
    }

    /// Reorder rows in place. `FirstSeen` leaves them untouched.
    pub fn apply(self, rows: &mut [FrequencyRow]) {
        match self {
            RowOrder::FirstSeen => {}
            RowOrder::Count => {
                rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)))
            }
            RowOrder::Word => rows.sort_by(|a, b| a.word.cmp(&b.word)),
        }
    }
}

impl fmt::Display for RowOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RowOrder::FirstSeen => "first-seen",
            RowOrder::Count => "count",
            RowOrder::Word => "word",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopword_list_is_complete() {
        let set = StopwordSet::default();
        assert_eq!(set.len(), STOPWORDS.len());
        for word in ["A", "YOUR", "ROUND", "CUZ", "``", "&", "\"", ""] {
            assert!(set.contains(word), "missing {word:?}");
        }
        assert!(!set.contains("ABOUT"));
        assert!(!set.contains("the"));
    }

    #[test]
    fn custom_sets_are_uppercased() {
        let set = StopwordSet::from_words(["talk", "Ünter"]);
        assert!(set.contains("TALK"));
        assert!(set.contains("ÜNTER"));
        assert!(!set.contains("talk"));
    }

    #[test]
    fn trims_only_the_boundaries() {
        assert_eq!(trim_token("'s"), "s");
        assert_eq!(trim_token("--"), "");
        assert_eq!(trim_token("-"), "");
        assert_eq!(trim_token("'well-known'"), "well-known");
        assert_eq!(trim_token("rock'n'roll"), "rock'n'roll");
        assert_eq!(trim_token("n't"), "n't");
    }

    #[test]
    fn orders_rows() {
        let mut rows = vec![
            FrequencyRow::new("beta", 2),
            FrequencyRow::new("alpha", 1),
            FrequencyRow::new("Gamma", 2),
        ];
        RowOrder::Count.apply(&mut rows);
        let words: Vec<_> = rows.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, ["Gamma", "beta", "alpha"]);

        RowOrder::Word.apply(&mut rows);
        let words: Vec<_> = rows.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, ["Gamma", "alpha", "beta"]);
    }

    #[test]
    fn parses_row_order() {
        assert_eq!(RowOrder::parse("Count"), Some(RowOrder::Count));
        assert_eq!(RowOrder::parse("first-seen"), Some(RowOrder::FirstSeen));
        assert_eq!(RowOrder::parse(" word "), Some(RowOrder::Word));
        assert_eq!(RowOrder::parse("random"), None);
        assert_eq!(RowOrder::parse("first_seen"), None);
        assert_eq!(RowOrder::parse("firstseen"), None);
        assert_eq!(RowOrder::default().to_string(), "first-seen");
    }
}
