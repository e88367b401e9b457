//! Word splitting and stemming behind two narrow traits.
//!
//! The frequency pipeline only needs `text -> tokens` and `word -> stem`, so
//! both collaborators are expressed as traits ([`Tokenizer`], [`Stemmer`]) and
//! the concrete implementations stay swappable:
//!
//! - [`TreebankTokenizer`] splits on Unicode word boundaries and then follows
//!   Penn Treebank conventions (clitics split off, quotes rewritten, hyphenated
//!   compounds kept whole).
//! - [`SnowballStemmer`] runs the Snowball English (Porter2) algorithm.
//!
//! # Example
//! ```rust
//! use stemfreq_nlp::{SnowballStemmer, Stemmer, Tokenizer, TreebankTokenizer};
//!
//! let tokens = TreebankTokenizer.tokenize("Talking about talks.");
//! assert_eq!(tokens, ["Talking", "about", "talks", "."]);
//!
//! let stemmer = SnowballStemmer::english();
//! assert_eq!(stemmer.stem("Talking"), "talk");
//! ```

use std::borrow::Cow;

mod stemmer;
mod tokenizer;

pub use stemmer::SnowballStemmer;
pub use tokenizer::{TreebankTokenizer, WhitespaceTokenizer};

/// Splits natural-language text into word-level units, preserving casing.
pub trait Tokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Cow<'a, str>>;
}

/// Reduces a single word to its root form. Must be deterministic.
pub trait Stemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

/// Plain functions and closures work as stemmers, which keeps tests cheap.
impl<F> Stemmer for F
where
    F: Fn(&str) -> String,
{
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        Cow::Owned(self(word))
    }
}
