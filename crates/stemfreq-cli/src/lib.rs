pub mod error;
pub mod frequency;
pub mod loader;
pub mod pipeline;
pub mod report;

pub use error::PipelineError;
pub use frequency::{Observation, StemFrequencies};
pub use loader::load_text;
pub use pipeline::{RunConfig, RunSummary, run, run_with};
pub use report::{write_report, write_table};
