// CNPJ Engine - command line
// Thin wrapper over the library: reads arguments, writes results to stdout.
// Logs go to stderr (RUST_LOG, or -v for debug).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cnpj_engine::{
    branch_code, classify, detect_type, format, generate_batch, generate_for_root, normalize,
    ChecksumMode, CnpjValidator, EngineConfig, IdentifierType,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cnpj")]
#[command(about = "Validate, format, classify and generate Brazilian CNPJ identifiers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strict checksum and rejection of foreign characters in raw input
    #[arg(long, global = true)]
    strict: bool,

    /// Reject identifiers made of a single repeated character
    #[arg(long = "reject-repeated", global = true)]
    reject_repeated: bool,

    /// Engine configuration as an inline JSON object
    #[arg(long, global = true)]
    config: Option<String>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check one or more values; exits with 1 if any is invalid
    Validate {
        #[arg(required = true)]
        values: Vec<String>,

        /// Print reports and batch summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply the AA.AAA.AAA/AAAA-DD mask
    Format {
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Strip masks and punctuation
    Normalize {
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Print numeric, alphanumeric or "unknown" for each value
    Detect {
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Generate random valid identifiers
    Generate {
        /// numeric or alphanumeric (defaults to the configured type)
        #[arg(short = 't', long = "type")]
        kind: Option<IdentifierType>,

        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Print with the mask applied
        #[arg(short, long)]
        masked: bool,
    },

    /// Compute the two check digits for a 12-character base
    CheckDigits {
        base: String,

        #[arg(short = 't', long = "type")]
        kind: Option<IdentifierType>,
    },

    /// Headquarters and numbered branches for an 8-character company root
    Branches {
        root: String,

        /// Number of branches, 1 to 9999
        #[arg(short = 'n', long, default_value = "1", value_parser = clap::value_parser!(u16).range(1..=9999))]
        count: u16,

        #[arg(short, long)]
        masked: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = build_config(&cli)?;
    tracing::debug!(?config, "engine configuration");

    match cli.command {
        Commands::Validate { values, json } => run_validate(&config, &values, json),
        Commands::Format { values } => {
            for value in &values {
                println!("{}", format(&normalize(value.as_str())));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Normalize { values } => {
            for value in &values {
                println!("{}", normalize(value.as_str()));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Detect { values } => {
            for value in &values {
                let name = detect_type(value.as_str()).map_or("unknown", |k| k.name());
                println!("{}\t{}", value, name);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Generate { kind, count, seed, masked } => {
            run_generate(kind.unwrap_or(config.default_type), count, seed, masked)
        }
        Commands::CheckDigits { base, kind } => run_check_digits(&config, &base, kind),
        Commands::Branches { root, count, masked } => run_branches(&root, count, masked),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(json) => EngineConfig::from_json(json).context("Failed to parse --config")?,
        None => EngineConfig::default(),
    };

    if cli.strict {
        config = config
            .with_checksum_mode(ChecksumMode::Strict)
            .with_reject_foreign_characters(true);
    }
    if cli.reject_repeated {
        config = config.with_reject_repeated_digits(true);
    }

    Ok(config)
}

fn run_validate(config: &EngineConfig, values: &[String], json: bool) -> Result<ExitCode> {
    let validator = CnpjValidator::new(config.clone());
    let reports = validator.validate_batch(values);
    let summary = validator.batch_summary(&reports);

    if json {
        let output = serde_json::json!({ "reports": &reports, "summary": &summary });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize reports")?
        );
    } else {
        for report in &reports {
            println!("{}", report.summary());
        }
    }

    if summary.invalid_count > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_generate(kind: IdentifierType, count: usize, seed: Option<u64>, masked: bool) -> Result<ExitCode> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for cnpj in generate_batch(kind, count, &mut rng) {
        if masked {
            println!("{}", format(&cnpj));
        } else {
            println!("{}", cnpj);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_check_digits(config: &EngineConfig, base: &str, kind: Option<IdentifierType>) -> Result<ExitCode> {
    let base = normalize(base);
    let kind = kind.unwrap_or_else(|| infer_type(&base));

    let digits = config
        .checksum_engine()
        .check_digits(&base, kind)
        .with_context(|| format!("Cannot compute check digits for '{}'", base))?;

    println!("{}", digits);
    Ok(ExitCode::SUCCESS)
}

fn run_branches(root: &str, count: u16, masked: bool) -> Result<ExitCode> {
    let root = normalize(root);
    let kind = infer_type(&root);

    for number in 1..=count {
        let branch = branch_code(number)?;
        let cnpj = generate_for_root(&root, &branch, kind)
            .with_context(|| format!("Invalid company root '{}'", root))?;

        if masked {
            println!("{}", format(&cnpj));
        } else {
            println!("{}", cnpj);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Numeric when every character is a digit, alphanumeric otherwise
fn infer_type(partial: &str) -> IdentifierType {
    // pad to full length so the classifier's ordering rules apply
    let padded = format!("{:0<14}", partial);
    classify(&padded).unwrap_or(IdentifierType::Alphanumeric)
}
