use std::path::PathBuf;
use std::time::Instant;

use stemfreq_nlp::{SnowballStemmer, Stemmer, Tokenizer, TreebankTokenizer};
use stemfreq_types::{RowOrder, StopwordSet};
use tracing::{info, warn};

use crate::error::PipelineError;
use crate::frequency::StemFrequencies;
use crate::loader::load_text;
use crate::report::write_report;

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub order: RowOrder,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            order: RowOrder::default(),
        }
    }

    pub fn with_order(mut self, order: RowOrder) -> Self {
        self.order = order;
        self
    }
}

/// Counts gathered over one run.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct RunSummary {
    /// Tokens produced by the tokenizer.
    pub tokens: usize,
    /// Tokens that made it into the table.
    pub counted: usize,
    /// Tokens dropped as stopwords.
    pub skipped: usize,
    /// Rows written, one per stem.
    pub rows: usize,
}

/// Load, tokenize, count and report using the Treebank tokenizer and Snowball English.
pub fn run(config: &RunConfig) -> Result<RunSummary, PipelineError> {
    run_with(config, &TreebankTokenizer, &SnowballStemmer::english())
}

pub fn run_with<T, S>(
    config: &RunConfig,
    tokenizer: &T,
    stemmer: &S,
) -> Result<RunSummary, PipelineError>
where
    T: Tokenizer + ?Sized,
    S: Stemmer + ?Sized,
{
    let stopwords = StopwordSet::default();

    let start = Instant::now();
    let text = load_text(&config.input)?;
    info!(
        "loaded {} bytes from {} in {} ms",
        text.len(),
        config.input.display(),
        start.elapsed().as_millis()
    );

    let start = Instant::now();
    let tokens = tokenizer.tokenize(&text);
    let freqs = StemFrequencies::from_tokens(&tokens, stemmer, &stopwords);
    info!(
        "counted {} of {} tokens under {} stems in {} ms",
        freqs.total(),
        tokens.len(),
        freqs.stem_count(),
        start.elapsed().as_millis()
    );
    if freqs.stem_count() == 0 {
        warn!(
            "no countable words in {}; the report will only have a header",
            config.input.display()
        );
    }

    let start = Instant::now();
    let rows = freqs.rows(config.order);
    write_report(&config.output, &rows)?;
    info!(
        "wrote {} rows ({} order) to {} in {} ms",
        rows.len(),
        config.order,
        config.output.display(),
        start.elapsed().as_millis()
    );

    Ok(RunSummary {
        tokens: tokens.len(),
        counted: freqs.total(),
        skipped: freqs.skipped(),
        rows: rows.len(),
    })
}
