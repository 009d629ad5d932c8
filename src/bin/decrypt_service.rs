// One-shot JSON service: reads `{"text": "<ciphertext><flag>"}` from stdin,
// writes the analysis response to stdout, exits 1 on failure.
use anyhow::{Context, Result};
use clap::Parser;
use cryptanalysis_core::ranking::{FrequencyRanker, Ranker, RankerFactory};
use cryptanalysis_core::request::handle_request;
use cryptanalysis_core::{AnalysisConfig, CryptanalysisEngine};
use env_logger::Env;
use log::{info, LevelFilter};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "decrypt_service",
    version,
    about = "Answers one JSON analysis request from stdin"
)]
struct Args {
    /// Add the most readable candidate to the response as "chosen"
    #[arg(long)]
    rank: bool,
    /// JSON file with analysis settings
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    debug: bool,
}

fn frequency_ranker(include_rare_letter: bool) -> Box<dyn Ranker> {
    Box::new(FrequencyRanker::new(include_rare_letter))
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format_timestamp(None);
    if args.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();

    let config = match &args.config {
        Some(path) => AnalysisConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    let engine = CryptanalysisEngine::with_config(config)?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read request from stdin")?;
    info!("request: {} bytes", input.len());

    // The rare-letter flag travels with each request, so the ranker is built per request.
    let factory: &RankerFactory<'_> = &frequency_ranker;
    let ranker = if args.rank { Some(factory) } else { None };
    let response = handle_request(&engine, ranker, &input);

    writeln!(io::stdout(), "{}", response.to_json()).context("failed to write response")?;
    Ok(if response.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
