use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stemfreq_cli::{RunConfig, run};
use stemfreq_types::RowOrder;

#[derive(Parser, Debug)]
#[command(name = "stemfreq", version)]
#[command(about = "Count word stems in a corpus of titles and report each stem's most frequent spelling")]
struct Cli {
    /// UTF-8 text file; titles separated by newlines or any whitespace.
    input_path: PathBuf,
    /// Where to write the `word,count` table. Replaced only on success.
    output_path: PathBuf,
    /// Row order of the table: first-seen, count or word.
    #[arg(long, env = "STEMFREQ_ORDER", default_value = "first-seen", value_parser = parse_order)]
    order: RowOrder,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = RunConfig::new(cli.input_path, cli.output_path).with_order(cli.order);
    info!("reading titles from {}", config.input.display());

    let start = Instant::now();
    let summary = run(&config).with_context(|| {
        format!(
            "building stem frequencies from {} into {}",
            config.input.display(),
            config.output.display()
        )
    })?;
    info!(
        "done in {} ms: {} rows, {} tokens counted, {} skipped",
        start.elapsed().as_millis(),
        summary.rows,
        summary.counted,
        summary.skipped
    );
    Ok(())
}

fn parse_order(raw: &str) -> Result<RowOrder, String> {
    RowOrder::parse(raw)
        .ok_or_else(|| format!("unknown order `{raw}` (expected first-seen, count or word)"))
}

/// Logs go to stderr; `RUST_LOG` directives (per target too) override the `info` default.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}
