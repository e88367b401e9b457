use std::borrow::Cow;

use rust_stemmers::{Algorithm, Stemmer as RawStemmer};

use crate::Stemmer;

/// Snowball English (Porter2) stemmer.
///
/// The Snowball algorithms only handle lowercase input, so words carrying
/// any uppercase character are lowercased before stemming. The returned stem
/// is always lowercase.
pub struct SnowballStemmer {
    inner: RawStemmer,
}

impl SnowballStemmer {
    pub fn english() -> Self {
        Self {
            inner: RawStemmer::create(Algorithm::English),
        }
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if word.chars().any(char::is_uppercase) {
            let lowered = word.to_lowercase();
            Cow::Owned(self.inner.stem(&lowered).into_owned())
        } else {
            self.inner.stem(word)
        }
    }
}
