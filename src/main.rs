//! Command-line entry point — Spanish Text Analyser.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Parse CLI arguments.
//! 3. Load [`AppConfig`] from disk (returns default on first run) and apply
//!    CLI overrides.
//! 4. Read the text to analyse (argument or stdin).
//! 5. Build validator + analyzer + pipeline and run the submission.
//! 6. Print the result table; write the CSV artifact when requested.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rand::seq::SliceRandom;

use spanish_text_analyser::{
    config::{AppConfig, AppPaths, PromptStyle, ValidationPolicy},
    llm::ApiAnalyzer,
    output::{render_table, write_csv_file},
    pipeline::AnalysisRequestPipeline,
    validate::InputValidator,
};

// ---------------------------------------------------------------------------
// Loading lines
// ---------------------------------------------------------------------------

/// Shown on stderr while the request is in flight.
const LOADING_LINES: &[&str] = &[
    "Loading… because irregular verbs need therapy.",
    "Wait… we’re still arguing with el agua, which is feminine but insists it’s not.",
    "One second… trying to explain why burro doesn’t mean butter.",
    "Processing… just like you’re processing that esposa can mean ‘wife’ or ‘handcuffs.’",
    "Wait a moment… we’re deciding if the subjunctive is really necessary. (Spoiler: it is.)",
    "Loading… translating ¡Caramba! because honestly, even we’re not sure what it means.",
    "Please wait… looking for someone who truly understands por and para.",
    "Hold on… debating whether ll sounds like ‘y,’ ‘j,’ or nothing today.",
];

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Validation policy as exposed on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// No pre-dispatch validation.
    Off,
    /// Accept only Spanish-alphabet characters and whitespace.
    Charset,
    /// Check every word against a Spanish word-list file.
    Wordlist,
}

impl From<PolicyArg> for ValidationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Off => ValidationPolicy::Off,
            PolicyArg::Charset => ValidationPolicy::Charset,
            PolicyArg::Wordlist => ValidationPolicy::WordList,
        }
    }
}

/// Analyse Spanish text word by word: IPA transcription, English and Thai
/// translations, and part of speech — via an OpenAI-compatible chat API.
#[derive(Debug, Parser)]
#[command(name = "spanish-text-analyser", version)]
struct Cli {
    /// Spanish text to analyse; read from stdin when omitted.
    text: Option<String>,

    /// API key for the chat-completions endpoint.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model identifier (default from settings.toml: gpt-4o-mini).
    #[arg(long)]
    model: Option<String>,

    /// Also ask for the dictionary (base) form of every word.
    #[arg(long)]
    base_form: bool,

    /// Input validation policy to apply before dispatch.
    #[arg(long, value_enum)]
    validate: Option<PolicyArg>,

    /// Spanish word-list file, one word per line (implies --validate wordlist).
    #[arg(long)]
    wordlist: Option<PathBuf>,

    /// Write the result as CSV to this path.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the result as CSV using the configured default file name
    /// (spanish_text_analysis.csv).
    #[arg(long, conflicts_with = "output")]
    csv: bool,
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. CLI
    let cli = Cli::parse();

    // 3. Configuration + CLI overrides
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    if cli.api_key.is_some() {
        config.api.api_key = cli.api_key;
    }
    if let Some(model) = cli.model {
        config.api.model = model;
    }
    if cli.base_form {
        config.api.prompt_style = PromptStyle::BaseForm;
    }
    if let Some(policy) = cli.validate {
        config.validation.policy = policy.into();
    }
    if cli.wordlist.is_some() {
        config.validation.wordlist_file = cli.wordlist;
        config.validation.policy = ValidationPolicy::WordList;
    }

    // 4. Input text
    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read text from stdin")?;
            buf
        }
    };

    // 5. Pipeline
    let paths = AppPaths::new();
    let validator = InputValidator::from_config(&config.validation, &paths)?;
    let analyzer = Arc::new(ApiAnalyzer::from_config(&config.api));
    let pipeline = AnalysisRequestPipeline::new(config.api.clone(), validator, analyzer);

    if let Some(line) = LOADING_LINES.choose(&mut rand::thread_rng()) {
        eprintln!("{line}");
    }

    let result = pipeline.run(&text).await?;
    log::info!("analysed {} words", result.len());

    // 6. Output
    println!("{}", render_table(&result));

    let csv_target = cli
        .output
        .or_else(|| cli.csv.then(|| PathBuf::from(&config.export.file_name)));
    if let Some(path) = csv_target {
        write_csv_file(&result, &path, config.export.with_bom)?;
        log::info!("CSV written to {}", path.display());
    }

    Ok(())
}
