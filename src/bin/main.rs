use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cryptanalysis_core::core::fixed_substitution::mirror_text;
use cryptanalysis_core::core::polyalphabetic::{self, PolyalphabeticKey};
use cryptanalysis_core::core::rotation::rotate_text;
use cryptanalysis_core::persistence::{save_report, ReportFormat};
use cryptanalysis_core::ranking::{FrequencyRanker, Ranker};
use cryptanalysis_core::{
    AnalysisConfig, Candidate, CandidateSet, CryptanalysisEngine, Direction,
    Method,
};
use crossterm::style::{style, Color, Stylize};
use env_logger::Env;
use log::{debug, LevelFilter};
use std::io::{self, stdin, stdout, BufRead, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cryptanalyze",
    version,
    about = "Classical cipher cryptanalysis: Vigenere, Atbash and Caesar candidates"
)]
struct Cli {
    #[arg(long, global = true)]
    debug: bool,
    /// JSON file with analysis settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Exclude the rare Cyrillic letter Ё from the alphabets
    #[arg(long, global = true)]
    no_rare_letter: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every candidate plaintext for a ciphertext (stdin when TEXT is omitted)
    Analyze {
        text: Option<String>,
        /// Pick the most natural-looking candidate by letter frequencies
        #[arg(long)]
        rank: bool,
        /// Reject the ranked choice above this chi-squared-per-letter score
        #[arg(long, requires = "rank")]
        max_score: Option<f64>,
        /// Print the candidate set as JSON
        #[arg(long)]
        json: bool,
        /// Save the candidate set to a report file
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "json")]
        format: FormatArg,
    },
    /// Encrypt with a known key or shift
    Encrypt(CipherArgs),
    /// Decrypt with a known key or shift
    Decrypt(CipherArgs),
    /// Read ciphertexts line by line and browse the candidates
    Interactive,
}

#[derive(clap::Args)]
struct CipherArgs {
    #[arg(long, value_enum)]
    cipher: CipherArg,
    /// Vigenere key
    #[arg(long)]
    key: Option<String>,
    /// Caesar shift
    #[arg(long)]
    shift: Option<usize>,
    text: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CipherArg {
    Vigenere,
    Atbash,
    Caesar,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Json,
    Bincode,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ReportFormat::Json,
            FormatArg::Bincode => ReportFormat::Bincode,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = match &cli.config {
        Some(path) => AnalysisConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    let include_rare_letter = config.include_rare_letter && !cli.no_rare_letter;
    let engine = CryptanalysisEngine::with_config(config)?;

    match cli.command {
        Commands::Analyze {
            text,
            rank,
            max_score,
            json,
            output,
            format,
        } => {
            let ciphertext = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            let candidates = engine.analyze(&ciphertext, include_rare_letter)?;
            if let Some(path) = &output {
                save_report(&candidates, path, format.into())
                    .with_context(|| format!("failed to write report {}", path.display()))?;
                debug!("report written to {}", path.display());
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&candidates)?);
            } else {
                print_candidates(&candidates);
            }
            if rank {
                let mut ranker = FrequencyRanker::new(include_rare_letter);
                if let Some(limit) = max_score {
                    ranker = ranker.with_max_score(limit);
                }
                print_choice(ranker.choose(&candidates).as_ref());
            }
        }
        Commands::Encrypt(args) => {
            println!("{}", apply_cipher(&args, Direction::Forward, include_rare_letter)?);
        }
        Commands::Decrypt(args) => {
            println!("{}", apply_cipher(&args, Direction::Backward, include_rare_letter)?);
        }
        Commands::Interactive => interactive(&engine, include_rare_letter)?,
    }
    Ok(())
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default));
    builder.format_timestamp(None);
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    stdin()
        .read_to_string(&mut input)
        .context("failed to read ciphertext from stdin")?;
    Ok(input.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn apply_cipher(args: &CipherArgs, direction: Direction, include_rare_letter: bool) -> Result<String> {
    match args.cipher {
        CipherArg::Vigenere => {
            let Some(key) = &args.key else {
                bail!("--key is required for the Vigenere cipher");
            };
            let profiles = polyalphabetic::mixed_script_profiles(include_rare_letter);
            let key = PolyalphabeticKey::parse_in(key, &profiles)?;
            Ok(match direction {
                Direction::Forward => polyalphabetic::encrypt_mixed(&args.text, &key, include_rare_letter),
                Direction::Backward => polyalphabetic::decrypt_mixed(&args.text, &key, include_rare_letter),
            })
        }
        CipherArg::Atbash => Ok(mirror_text(&args.text, include_rare_letter)),
        CipherArg::Caesar => {
            let Some(shift) = args.shift else {
                bail!("--shift is required for the Caesar cipher");
            };
            Ok(rotate_text(&args.text, shift, direction, include_rare_letter))
        }
    }
}

fn method_color(method: Method) -> Color {
    match method {
        Method::Polyalphabetic => Color::Green,
        Method::FixedSubstitution => Color::Cyan,
        Method::Rotation => Color::Yellow,
    }
}

fn print_candidates(candidates: &CandidateSet) {
    for (i, candidate) in candidates.iter().enumerate() {
        let label = style(format!(":{}", i + 1)).with(method_color(candidate.method));
        println!("  {} {}", label, candidate);
    }
}

fn print_choice(choice: Option<&Candidate>) {
    match choice {
        Some(candidate) => println!("\n{} {}", style("Most readable:").bold(), candidate),
        None => println!("\n{}", style("No readable candidate found.").bold()),
    }
}

fn interactive(engine: &CryptanalysisEngine, include_rare_letter: bool) -> io::Result<()> {
    let ranker = FrequencyRanker::new(include_rare_letter);
    let mut last: Option<CandidateSet> = None;

    println!("Classical cryptanalysis. Paste a ciphertext, ':N' shows candidate N, 'exit' quits.");
    println!("---------------------------------------------------------------");

    let stdin = stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\n> ");
        stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        match line.trim() {
            "exit" => break,
            "" => continue,
            s if s.starts_with(':') && s.len() > 1 => {
                let chosen = s[1..]
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| last.as_ref().and_then(|set| set.get(i)));
                match chosen {
                    Some(candidate) => println!("{}", candidate),
                    None => println!("No such candidate."),
                }
            }
            ciphertext => match engine.analyze(ciphertext, include_rare_letter) {
                Ok(candidates) => {
                    print_candidates(&candidates);
                    print_choice(ranker.choose(&candidates).as_ref());
                    last = Some(candidates);
                }
                Err(e) => eprintln!("{} {}", style("[ERROR]").red(), e),
            },
        }
    }
    Ok(())
}
