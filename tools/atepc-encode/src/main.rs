//! ATEPC Feature Encoding Tool
//!
//! Resolves a tagged corpus from a dataset domain and split, runs the
//! full preparation pipeline, and writes the encoded feature records as
//! JSON lines.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use kanjou::{Domain, EncoderConfig, FeatureEncoder, Split, WordpieceTokenizer, load_examples};

/// CLI arguments
#[derive(Parser)]
#[command(name = "atepc-encode")]
#[command(about = "Encode ATEPC corpora into model-ready feature records")]
#[command(version)]
struct Cli {
    /// Directory containing the .atepc corpus files
    #[arg(short = 'D', long, env = "ATEPC_DATA_DIR")]
    data_dir: PathBuf,

    /// Dataset domain (laptop, restaurant, twitter, car, phone, camera,
    /// notebook, mixed)
    #[arg(short, long)]
    domain: String,

    /// Corpus split (train, test, valid)
    #[arg(short, long, default_value = "train")]
    split: String,

    /// Path to a Hugging Face tokenizer.json
    #[arg(short, long)]
    tokenizer: PathBuf,

    /// Fixed length of every feature array
    #[arg(short, long, default_value_t = 128)]
    max_seq_length: usize,

    /// Output JSONL path (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let domain: Domain = cli.domain.parse()?;
    let split: Split = cli.split.parse()?;

    let examples = load_examples(&cli.data_dir, domain, split)
        .with_context(|| format!("loading {} {} corpus", domain, split))?;
    info!(count = examples.len(), %domain, %split, "loaded examples");

    let tokenizer = WordpieceTokenizer::from_file(&cli.tokenizer)
        .with_context(|| format!("loading tokenizer from {}", cli.tokenizer.display()))?;
    let encoder = FeatureEncoder::new(
        tokenizer,
        EncoderConfig::new().with_max_seq_length(cli.max_seq_length),
    );

    let features = encoder.encode_batch(&examples)?;

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    for record in &features {
        serde_json::to_writer(&mut writer, record)?;
        writeln!(writer)?;
    }
    writer.flush()?;

    info!(count = features.len(), "wrote feature records");
    Ok(())
}
