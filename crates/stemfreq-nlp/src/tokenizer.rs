use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

use crate::Tokenizer;

const OPEN_QUOTE: &str = "``";
const CLOSE_QUOTE: &str = "''";
const OPENING_BRACKETS: &[&str] = &["(", "[", "{", "<"];
const CLITICS: &[&str] = &["s", "m", "d", "re", "ve", "ll"];
const COMPOUND_JOINERS: &[&str] = &["-", "/"];

/// Unicode word boundaries adjusted toward Penn Treebank conventions.
///
/// - whitespace is dropped, every punctuation mark becomes its own token;
/// - `"` turns into ```` `` ```` when it opens a quotation and `''` when it
///   closes one (curly quotes map the same way);
/// - `well-known` and `and/or` stay one token even though UAX #29 breaks
///   at the hyphen or slash;
/// - clitics are split from their host: `don't` -> `do` `n't`,
///   `John's` -> `John` `'s`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TreebankTokenizer;

impl Tokenizer for TreebankTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Cow<'a, str>> {
        let segments: Vec<(usize, &'a str)> = text.split_word_bound_indices().collect();
        let mut tokens: Vec<Cow<'a, str>> = Vec::with_capacity(segments.len());
        let mut opening = true;
        let mut i = 0;

        while i < segments.len() {
            let (start, segment) = segments[i];
            i += 1;

            if segment.chars().all(char::is_whitespace) {
                opening = true;
                continue;
            }

            if is_word(segment) {
                let mut end = start + segment.len();
                while i + 1 < segments.len()
                    && COMPOUND_JOINERS.contains(&segments[i].1)
                    && is_word(segments[i + 1].1)
                {
                    let (next_start, next) = segments[i + 1];
                    end = next_start + next.len();
                    i += 2;
                }
                push_with_clitics(&mut tokens, &text[start..end]);
                opening = false;
                continue;
            }

            let token = match segment {
                "\"" if opening => OPEN_QUOTE,
                "\"" => CLOSE_QUOTE,
                "\u{201C}" => OPEN_QUOTE,
                "\u{201D}" => CLOSE_QUOTE,
                other => other,
            };
            tokens.push(Cow::Borrowed(token));
            opening = OPENING_BRACKETS.contains(&segment);
        }

        tokens
    }
}

/// Splits on whitespace only; punctuation stays attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Cow<'a, str>> {
        text.split_whitespace().map(Cow::Borrowed).collect()
    }
}

fn is_word(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

fn push_with_clitics<'a>(tokens: &mut Vec<Cow<'a, str>>, word: &'a str) {
    match clitic_split(word) {
        Some(at) => {
            tokens.push(Cow::Borrowed(&word[..at]));
            tokens.push(Cow::Borrowed(&word[at..]));
        }
        None => tokens.push(Cow::Borrowed(word)),
    }
}

/// Byte offset where a trailing clitic starts, if the word carries one.
fn clitic_split(word: &str) -> Option<usize> {
    let apos = word.rfind(is_apostrophe)?;
    let apos_len = word[apos..].chars().next()?.len_utf8();
    let host = &word[..apos];
    let suffix = &word[apos + apos_len..];

    if suffix.eq_ignore_ascii_case("t") && (host.ends_with('n') || host.ends_with('N')) {
        // `n't` belongs to the clitic, not the host.
        let at = apos - 1;
        return (at > 0).then_some(at);
    }
    if apos > 0 && CLITICS.iter().any(|c| suffix.eq_ignore_ascii_case(c)) {
        return Some(apos);
    }
    None
}
