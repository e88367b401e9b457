use std::collections::HashMap;

use stemfreq_nlp::Stemmer;
use stemfreq_types::{FrequencyRow, RowOrder, StopwordSet, trim_token};
use tracing::debug;

/// Per-stem counts of every observed surface form, plus per-stem totals.
///
/// Stems and forms keep the order they were first seen in, so picking the
/// most frequent form breaks ties toward the earliest spelling and the
/// resulting rows are reproducible.
#[derive(Debug, Clone, Default)]
pub struct StemFrequencies {
    slots: HashMap<String, usize>,
    stems: Vec<StemCounts>,
    total: usize,
    skipped: usize,
}

#[derive(Debug, Clone)]
struct StemCounts {
    stem: String,
    total: usize,
    forms: Vec<(String, usize)>,
}

/// What happened to a single token.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Observation {
    Counted { stem: String },
    Stopword,
}

impl StemFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens<I, T, S>(tokens: I, stemmer: &S, stopwords: &StopwordSet) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
        S: Stemmer + ?Sized,
    {
        let mut freqs = Self::new();
        for token in tokens {
            freqs.observe(token.as_ref(), stemmer, stopwords);
        }
        debug!(
            "counted {} tokens under {} stems, skipped {}",
            freqs.total,
            freqs.stems.len(),
            freqs.skipped
        );
        freqs
    }

    /// Trim, stem and uppercase one token, then count it unless the stem is a stopword.
    pub fn observe<S>(&mut self, token: &str, stemmer: &S, stopwords: &StopwordSet) -> Observation
    where
        S: Stemmer + ?Sized,
    {
        let surface = trim_token(token);
        let stem = if surface.is_empty() {
            String::new()
        } else {
            stemmer.stem(surface).to_uppercase()
        };
        if stopwords.contains(&stem) {
            self.skipped += 1;
            return Observation::Stopword;
        }
        self.record(surface, &stem);
        Observation::Counted { stem }
    }

    fn record(&mut self, surface: &str, stem: &str) {
        let slot = match self.slots.get(stem) {
            Some(&slot) => slot,
            None => {
                let slot = self.stems.len();
                self.slots.insert(stem.to_string(), slot);
                self.stems.push(StemCounts {
                    stem: stem.to_string(),
                    total: 0,
                    forms: Vec::new(),
                });
                slot
            }
        };

        let counts = &mut self.stems[slot];
        counts.total += 1;
        if let Some(form) = counts.forms.iter_mut().find(|form| form.0 == surface) {
            form.1 += 1;
        } else {
            counts.forms.push((surface.to_string(), 1));
        }
        self.total += 1;
    }

    /// Number of distinct stems counted so far.
    pub fn stem_count(&self) -> usize {
        self.stems.len()
    }

    /// Tokens counted across all stems.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Tokens discarded as stopwords.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn stem_total(&self, stem: &str) -> Option<usize> {
        self.slots.get(stem).map(|&slot| self.stems[slot].total)
    }

    /// Surface forms seen for `stem` with their counts, in first-seen order.
    pub fn surface_forms(&self, stem: &str) -> &[(String, usize)] {
        self.slots
            .get(stem)
            .map(|&slot| self.stems[slot].forms.as_slice())
            .unwrap_or(&[])
    }

    /// Stems in first-seen order.
    pub fn stems(&self) -> impl Iterator<Item = &str> {
        self.stems.iter().map(|counts| counts.stem.as_str())
    }

    /// One row per stem: its most frequent surface form and the stem total.
    pub fn rows(&self, order: RowOrder) -> Vec<FrequencyRow> {
        let mut rows: Vec<FrequencyRow> = self
            .stems
            .iter()
            .filter_map(|counts| {
                counts
                    .winner()
                    .map(|word| FrequencyRow::new(word, counts.total))
            })
            .collect();
        order.apply(&mut rows);
        rows
    }
}

impl StemCounts {
    fn winner(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for form in &self.forms {
            // Strictly greater keeps the earliest form on ties.
            if best.is_none_or(|b| form.1 > b.1) {
                best = Some(form);
            }
        }
        best.map(|(word, _)| word.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lowercases and drops a trailing `s`, `ed` or `ing`.
    fn fake_stem(word: &str) -> String {
        let lower = word.to_lowercase();
        for suffix in ["ing", "ed", "s"] {
            if let Some(stem) = lower.strip_suffix(suffix)
                && !stem.is_empty()
            {
                return stem.to_string();
            }
        }
        lower
    }

    fn count(tokens: &[&str]) -> StemFrequencies {
        StemFrequencies::from_tokens(tokens, &fake_stem, &StopwordSet::default())
    }

    #[test]
    fn groups_forms_under_uppercased_stems() {
        let freqs = count(&["Talking", "and", "Talks", "about", "talking", "."]);
        assert_eq!(freqs.stem_count(), 2);
        assert_eq!(freqs.stem_total("TALK"), Some(3));
        assert_eq!(freqs.stem_total("ABOUT"), Some(1));
        assert_eq!(freqs.skipped(), 2);
        assert_eq!(
            freqs.surface_forms("TALK"),
            &[
                ("Talking".to_string(), 1),
                ("Talks".to_string(), 1),
                ("talking".to_string(), 1)
            ]
        );
        assert_eq!(
            freqs.rows(RowOrder::FirstSeen),
            vec![FrequencyRow::new("Talking", 3), FrequencyRow::new("about", 1)]
        );
    }

    #[test]
    fn most_frequent_form_wins() {
        let freqs = count(&["walked", "Walks", "walks", "walking", "walks"]);
        assert_eq!(
            freqs.rows(RowOrder::FirstSeen),
            vec![FrequencyRow::new("walks", 5)]
        );
    }

    #[test]
    fn ties_go_to_the_first_form_seen() {
        let freqs = count(&["Syntax", "syntax", "SYNTAX", "syntax", "Syntax"]);
        assert_eq!(
            freqs.rows(RowOrder::FirstSeen),
            vec![FrequencyRow::new("Syntax", 5)]
        );
    }

    #[test]
    fn stem_totals_match_form_counts() {
        let freqs = count(&[
            "sounds", "sound", "'sound'", "Sounding", "tone", "tones", "the", "sounded", "-",
        ]);
        let mut sum = 0;
        for stem in freqs.stems() {
            let forms: usize = freqs.surface_forms(stem).iter().map(|(_, n)| n).sum();
            assert_eq!(freqs.stem_total(stem), Some(forms));
            sum += forms;
        }
        assert_eq!(sum, freqs.total());
        assert_eq!(freqs.total() + freqs.skipped(), 9);
        let row_sum: usize = freqs.rows(RowOrder::Count).iter().map(|r| r.count).sum();
        assert_eq!(row_sum, freqs.total());
    }

    #[test]
    fn strips_boundary_quotes_and_hyphens() {
        let mut freqs = StemFrequencies::new();
        let stopwords = StopwordSet::default();
        assert_eq!(
            freqs.observe("'tis", &fake_stem, &stopwords),
            Observation::Counted { stem: "TI".into() }
        );
        assert_eq!(freqs.surface_forms("TI"), &[("tis".to_string(), 1)]);
        assert_eq!(freqs.observe("-", &fake_stem, &stopwords), Observation::Stopword);
        assert_eq!(freqs.observe("''", &fake_stem, &stopwords), Observation::Stopword);
        assert_eq!(freqs.observe("--'", &fake_stem, &stopwords), Observation::Stopword);
        assert_eq!(freqs.total(), 1);
        assert_eq!(freqs.skipped(), 3);
    }

    #[test]
    fn stopwords_are_matched_on_the_stem() {
        let freqs = count(&["THE", "The", "the", "Is", "of", "(", "``", "''", "&"]);
        assert_eq!(freqs.stem_count(), 0);
        assert!(freqs.rows(RowOrder::FirstSeen).is_empty());

        let custom = StopwordSet::from_words(["talk"]);
        let freqs = StemFrequencies::from_tokens(["talks", "the"], &fake_stem, &custom);
        assert_eq!(freqs.stems().collect::<Vec<_>>(), ["THE"]);
    }

    #[test]
    fn unknown_stems_have_no_forms() {
        let freqs = StemFrequencies::new();
        assert_eq!(freqs.stem_total("TALK"), None);
        assert!(freqs.surface_forms("TALK").is_empty());
    }
}
