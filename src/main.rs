//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `phish_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading email input from a file or stdin
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::io::Read;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

use phish_check::config::{DEFAULT_MODEL_DIR, FETCH_TIMEOUT_SECS};
use phish_check::initialization::{init_client, init_logger_with};
use phish_check::{
    check_email, check_url, classify_vector, Artifacts, Config, FeatureVector, HttpFetcher,
    LogFormat, LogLevel, Signal, UrlVerdict,
};

#[derive(Debug, Parser)]
#[command(
    name = "phish_check",
    version,
    about = "Classify URLs and email messages as phishing or legitimate"
)]
struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,

    /// Directory holding the model artifact files
    #[arg(long, default_value = DEFAULT_MODEL_DIR)]
    model_dir: PathBuf,

    /// Fetch timeout in seconds for page content retrieval
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long)]
    user_agent: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract features from a URL and classify it
    Url {
        /// The URL to check
        url: String,
    },
    /// Classify 30 manually chosen signal values
    Features {
        /// Comma-separated signal values, each -1, 0 or 1
        #[arg(allow_hyphen_values = true)]
        values: String,
    },
    /// Classify an email message body
    Email {
        /// File containing the message, or "-" for stdin
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(cli).await {
        Ok(()) => Ok(()),
        Err(err) => {
            eprintln!("{} {err:#}", "Error:".red());
            process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config {
        model_dir: cli.model_dir,
        log_level: cli.log_level,
        log_format: cli.log_format,
        timeout_seconds: cli.timeout_seconds,
        ..Default::default()
    };
    if let Some(user_agent) = cli.user_agent {
        config.user_agent = user_agent;
    }

    // Artifact loading is the one fatal failure path: without the trained
    // model, scaler and vectorizer no prediction can be produced.
    let artifacts = Artifacts::load(&config.model_dir).with_context(|| {
        format!("Failed to load model artifacts from {}", config.model_dir.display())
    })?;

    match cli.command {
        Command::Url { url } => {
            let client = init_client(&config).context("Failed to initialize HTTP client")?;
            let fetcher = HttpFetcher::new(client);
            let report = check_url(&artifacts, &psl::List, &fetcher, &url).await;

            println!("Raw prediction output: {}", report.label);
            match report.verdict {
                UrlVerdict::Phishing => {
                    println!("{}", "🚨 This website is Phishing!".red().bold());
                    if !report.reasons.is_empty() {
                        println!("\nSuspicious characteristics:");
                        for reason in &report.reasons {
                            println!("  - {reason}");
                        }
                    }
                }
                UrlVerdict::Legitimate => {
                    println!("{}", "✅ This website is Legitimate.".green().bold());
                }
            }
        }
        Command::Features { values } => {
            let signals = parse_signals(&values)?;
            let vector = FeatureVector::try_from_signals(&signals)?;
            let (label, verdict) = classify_vector(&artifacts, &vector);

            println!("Raw prediction output: {label}");
            match verdict {
                UrlVerdict::Phishing => println!("{}", "🚨 This website is Phishing!".red().bold()),
                UrlVerdict::Legitimate => {
                    println!("{}", "✅ This website is Legitimate.".green().bold())
                }
            }
        }
        Command::Email { input } => {
            let text = read_email_input(&input)?;
            let report = check_email(&artifacts, &text)?;

            println!("Raw prediction output: {}", report.label);
            match report.verdict {
                phish_check::EmailVerdict::Spam => {
                    println!("{}", "🚨 This email is likely Spam/Phishing!".red().bold())
                }
                phish_check::EmailVerdict::Legitimate => {
                    println!("{}", "✅ This email appears to be Legitimate.".green().bold())
                }
            }
        }
    }

    Ok(())
}

fn parse_signals(values: &str) -> Result<Vec<Signal>> {
    values
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<Signal>()
                .with_context(|| format!("'{}' is not a signal value", v.trim()))
        })
        .collect()
}

fn read_email_input(input: &PathBuf) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read email message from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read email message from {}", input.display()))
    }
}
